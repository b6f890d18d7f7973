//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the runner:
//! subprocess execution with output capture, and i18n support.
//!
//! 此模块为运行器提供基础设施服务：
//! 带输出捕获的子进程执行和国际化支持。

pub mod command;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
