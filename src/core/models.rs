//! # Data Models Module / 数据模型模块
//!
//! Result types for a single invocation and for a leg of the matrix.
//!
//! 单次调用和矩阵中单个测试项的结果类型。

use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;

use crate::core::config::VariableSet;
use crate::infra::t;

/// The captured output of one subprocess run. Lives only for one classification pass.
/// 单次子进程运行捕获的输出。仅在一次分类过程中存在。
#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// Whether the captured output reported any failure.
/// 捕获的输出是否报告了任何失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

/// What happened to a single leg.
/// 单个测试项的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegOutcome {
    /// The child ran and its output was classified.
    /// 子进程已运行，其输出已被分类。
    Completed {
        verdict: Verdict,
        /// The child's exit code, if it exited normally.
        /// 子进程的退出码（如果正常退出）。
        exit_code: Option<i32>,
    },
    /// The child could not be started; the message says why.
    /// 子进程无法启动；消息说明原因。
    LaunchError(String),
}

impl LegOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            LegOutcome::Completed {
                verdict: Verdict::Passed,
                ..
            }
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(
            self,
            LegOutcome::Completed {
                verdict: Verdict::Failed,
                ..
            }
        )
    }

    pub fn is_launch_error(&self) -> bool {
        matches!(self, LegOutcome::LaunchError(_))
    }

    /// Gets the status of the leg as a localized string for display.
    /// 以本地化字符串形式获取测试项的状态以供显示。
    pub fn get_status_str(&self) -> String {
        match self {
            LegOutcome::Completed {
                verdict: Verdict::Passed,
                ..
            } => t!("report.status_passed").to_string(),
            LegOutcome::Completed {
                verdict: Verdict::Failed,
                ..
            } => t!("report.status_failed").to_string(),
            LegOutcome::LaunchError(_) => t!("report.status_launch_error").to_string(),
        }
    }
}

/// A leg's outcome together with where it came from in the matrix.
/// 测试项的结果及其在矩阵中的来源。
#[derive(Debug, Clone)]
pub struct LegResult {
    pub mode: String,
    pub variables: VariableSet,
    pub outcome: LegOutcome,
    pub duration: Duration,
}

impl fmt::Display for LegResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mode, self.variables)
    }
}
