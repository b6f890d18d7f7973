//! # Console Reporting Module / 控制台报告模块
//!
//! Everything the runner prints goes through here, to standard output.
//! Banners and statuses are coloured and localized; lines that belong to the
//! child's output contract (echoed lines, `Passed test:` lines, separators,
//! raw stderr) are printed exactly as classified.
//!
//! 运行器打印的所有内容都通过此处输出到标准输出。
//! 横幅和状态带有颜色并已本地化；属于子进程输出约定的行
//! （回显行、`Passed test:` 行、分隔线、原始 stderr）按分类结果原样打印。

use colored::*;
use std::ffi::OsString;

use crate::core::classify::{Classification, ReportLine};
use crate::core::config::VariableSet;
use crate::core::models::{LegOutcome, LegResult, Verdict};
use crate::infra::t;

const BLOCK_SEPARATOR: &str = "..........................................";
const LEG_RULE: &str = "-------------------";
const MODE_RULE: &str = "===================";
const FAILED_HEADING: &str = "Test failed:";
const ERRORS_HEADING: &str = "Errors:";

/// Formats a `Passed test:` report line, e.g. `Passed test: case1 : 2`.
pub fn format_passed_test(text: &str, scenarios: usize) -> String {
    format!("{text} : {scenarios}")
}

/// Renders the command line with shell quoting where needed.
pub fn format_command_line(command: &[OsString]) -> String {
    let parts: Vec<String> = command
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    shlex::try_join(parts.iter().map(String::as_str)).unwrap_or_else(|_| parts.join(" "))
}

/// Renders the exit column of a summary row: `exit N`, `signal` when the
/// child was killed, or `-` when it never started.
pub fn format_exit_code(outcome: &LegOutcome) -> String {
    match outcome {
        LegOutcome::Completed {
            exit_code: Some(code),
            ..
        } => format!("exit {code}"),
        LegOutcome::Completed {
            exit_code: None, ..
        } => "signal".to_string(),
        LegOutcome::LaunchError(_) => "-".to_string(),
    }
}

pub fn print_start(command: &[OsString]) {
    println!(
        "{}",
        t!("run.starting_test", command = format_command_line(command)).bold()
    );
}

pub fn print_mode_banner(mode: &str) {
    println!(
        "{}",
        format!("{MODE_RULE}{}{MODE_RULE}", t!("run.running_mode", mode = mode)).cyan()
    );
}

pub fn print_leg_header(variables: &VariableSet) {
    println!("{LEG_RULE} {variables} {LEG_RULE}");
}

/// Prints a classification report line by line. The headings and report
/// lines are not localized.
///
/// 逐行打印分类报告。标题和报告行不做本地化。
pub fn print_classification(classification: &Classification) {
    if classification.verdict == Verdict::Failed {
        println!("{}", FAILED_HEADING.red());
    }

    for line in &classification.lines {
        match line {
            ReportLine::Separator => println!("{BLOCK_SEPARATOR}"),
            ReportLine::Echo(text) => println!("{text}"),
            ReportLine::PassedTest { text, scenarios } => {
                println!("{}", format_passed_test(text, *scenarios))
            }
        }
    }
}

/// Prints the child's stderr verbatim under an `Errors:` heading.
pub fn print_errors(stderr: &str) {
    println!("{}", ERRORS_HEADING.yellow());
    println!("{stderr}");
}

pub fn print_invocation_error(message: &str) {
    println!("{} {}", t!("run.invocation_error").red(), message);
}

/// Prints a formatted summary of every leg once the matrix is done.
///
/// A passing leg prints no verdict of its own while it runs; its row here is
/// the one verdict line it gets. Failed legs get both the `Test failed:`
/// heading and a row.
///
/// 矩阵运行结束后打印每个测试项的格式化摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Stress Summary ---
///   - Passed           | jitstress                  | {JitStress=1}                  | exit 0   |     1.23s
///   - Failed           | jitstressregs              | {JitStressRegs=0x10}           | exit 134 |     0.45s
/// ```
pub fn print_summary(results: &[LegResult]) {
    println!("\n{}", t!("summary_banner").bold());

    for result in results {
        let status_str = result.outcome.get_status_str();
        let status_colored = match &result.outcome {
            LegOutcome::Completed {
                verdict: Verdict::Passed,
                ..
            } => status_str.green(),
            LegOutcome::Completed {
                verdict: Verdict::Failed,
                ..
            } => status_str.red(),
            LegOutcome::LaunchError(_) => status_str.yellow(),
        };

        println!(
            "  - {:<16} | {:<26} | {:<30} | {:<8} | {:>10}",
            status_colored,
            result.mode,
            result.variables.to_string(),
            format_exit_code(&result.outcome),
            format!("{:.2?}", result.duration)
        );
    }

    let passed = results.iter().filter(|r| r.outcome.is_passed()).count();
    let failed = results.iter().filter(|r| r.outcome.is_failed()).count();
    let errors = results.iter().filter(|r| r.outcome.is_launch_error()).count();

    let totals = t!(
        "summary_totals",
        total = results.len(),
        passed = passed,
        failed = failed,
        errors = errors
    );
    if failed == 0 && errors == 0 {
        println!("\n{}", totals.green().bold());
    } else {
        println!("\n{}", totals.red().bold());
    }
}
