//! # Reporting Module / 报告模块
//!
//! Console output for a matrix run: per-leg reports and the closing summary.
//!
//! 矩阵运行的控制台输出：每个测试项的报告和最终摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{print_classification, print_summary};
