//! # Core Module / 核心模块
//!
//! This module contains the core functionality: the stress matrix, the
//! environment overlay, the output classifier and the driver that ties them
//! together.
//!
//! 此模块包含核心功能：压力矩阵、环境变量覆盖层、输出分类器以及将它们串联起来的驱动程序。

pub mod classify;
pub mod config;
pub mod execution;
pub mod models;
pub mod overlay;
pub mod planner;

// Re-exports
pub use classify::classify_output;
pub use config::StressMatrix;
pub use execution::invoke_test;
