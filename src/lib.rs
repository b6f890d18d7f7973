//! # JIT Stress Runner Library / JIT 压力测试运行器库
//!
//! Runs a test executable once for every JIT stress configuration in a
//! matrix, and classifies each run as passed or failed from what it prints.
//!
//! 针对矩阵中的每个 JIT 压力配置运行一次测试可执行文件，
//! 并根据其输出将每次运行分类为通过或失败。
//!
//! ## Modules / 模块
//!
//! - `core` - Stress matrix, environment overlay, output classifier and driver
//! - `infra` - Subprocess capture and i18n support
//! - `reporting` - Console reporting
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 压力矩阵、环境变量覆盖层、输出分类器和驱动程序
//! - `infra` - 子进程输出捕获和国际化支持
//! - `reporting` - 控制台报告
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::models;
pub use core::config;
pub use core::execution;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
