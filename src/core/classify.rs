//! # Output Classifier / 输出分类器
//!
//! Classifies the captured standard output of one test run by scanning it line
//! by line for the markers the test executable prints. The result is a pure
//! value; printing it is left to [`crate::reporting::console`].
//!
//! 通过逐行扫描测试可执行文件打印的标记来对单次测试运行捕获的标准输出进行分类。
//! 结果是一个纯值；打印由 [`crate::reporting::console`] 负责。
//!
//! ## Rules / 规则
//!
//! - Any case-insensitive `fail` anywhere marks the whole run failed. Lines with
//!   `failed:` open a failure block, a blank line closes it. Lines inside a
//!   block, lines containing `System.Exception`, and lines starting with `at `
//!   (after trimming) are echoed.
//! - Otherwise the run passed. `Beginning scenario:` bumps a counter and each
//!   `Passed test:` line is reported with the counter, which then resets.

use crate::core::models::Verdict;

const FAIL_MARKER: &str = "fail";
const FAILURE_BLOCK_MARKER: &str = "failed:";
const EXCEPTION_MARKER: &str = "System.Exception";
const STACK_FRAME_PREFIX: &str = "at ";
const SCENARIO_MARKER: &str = "Beginning scenario:";
const PASSED_MARKER: &str = "Passed test:";

/// One line of the classification report, in output order.
/// 分类报告中的一行，按输出顺序排列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// A failure block opened or closed.
    /// 失败块打开或关闭。
    Separator,
    /// A line of the child's output echoed verbatim.
    /// 原样回显的子进程输出行。
    Echo(String),
    /// A passed test, with the number of scenarios begun since the previous one.
    /// 一个通过的测试，以及自上一个通过测试以来开始的场景数。
    PassedTest { text: String, scenarios: usize },
}

/// The verdict for a run plus the lines to report for it.
/// 一次运行的结论以及需要报告的行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub lines: Vec<ReportLine>,
}

impl Classification {
    /// The `Passed test:` entries only, for callers that don't need the rest.
    pub fn passed_tests(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::PassedTest { text, scenarios } => Some((text.as_str(), *scenarios)),
            _ => None,
        })
    }

    /// The echoed lines only, in order.
    pub fn echoed(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Echo(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Classifies captured standard output.
///
/// 对捕获的标准输出进行分类。
pub fn classify_output(stdout: &str) -> Classification {
    if stdout.to_lowercase().contains(FAIL_MARKER) {
        Classification {
            verdict: Verdict::Failed,
            lines: scan_failures(stdout),
        }
    } else {
        Classification {
            verdict: Verdict::Passed,
            lines: scan_passes(stdout),
        }
    }
}

fn scan_failures(stdout: &str) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    let mut in_block = false;

    for line in stdout.lines() {
        let trimmed = line.trim();

        if line.contains(FAILURE_BLOCK_MARKER) {
            lines.push(ReportLine::Separator);
            in_block = true;
        }
        if trimmed.is_empty() && in_block {
            in_block = false;
            lines.push(ReportLine::Separator);
        }

        if in_block || line.contains(EXCEPTION_MARKER) || trimmed.starts_with(STACK_FRAME_PREFIX)
        {
            lines.push(ReportLine::Echo(line.to_string()));
        }
    }

    lines
}

fn scan_passes(stdout: &str) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    let mut scenarios = 0;

    for line in stdout.lines() {
        if line.contains(SCENARIO_MARKER) {
            scenarios += 1;
        }
        if let Some(start) = line.find(PASSED_MARKER) {
            lines.push(ReportLine::PassedTest {
                text: line[start..].to_string(),
                scenarios,
            });
            scenarios = 0;
        }
    }

    lines
}
