//! # Execution Planner Module / 执行计划模块
//!
//! Decides which modes of the matrix a run covers.
//!
//! 决定一次运行涵盖矩阵中的哪些模式。

use anyhow::{bail, Result};

use crate::core::config::{StressMatrix, StressMode};
use crate::infra::t;

/// The modes to run, in table order.
/// 要运行的模式，按配置表顺序排列。
#[derive(Debug)]
pub struct ExecutionPlan<'a> {
    /// Modes selected for this run.
    /// 本次运行选中的模式。
    pub modes: Vec<&'a StressMode>,
    /// Number of modes left out by the `--mode` filter.
    /// 被 `--mode` 过滤掉的模式数量。
    pub skipped_modes: usize,
}

impl ExecutionPlan<'_> {
    pub fn leg_count(&self) -> usize {
        self.modes.iter().map(|m| m.legs.len()).sum()
    }
}

/// Creates an execution plan for the given matrix.
///
/// An empty `selected` list means every mode runs. Otherwise only the named
/// modes run, still in the order the matrix lists them; naming a mode the
/// matrix does not have is an error.
///
/// 为给定矩阵创建执行计划。
/// 空的 `selected` 列表表示运行所有模式。否则只运行指定的模式，
/// 仍按矩阵中列出的顺序；指定矩阵中不存在的模式会报错。
pub fn plan_execution<'a>(matrix: &'a StressMatrix, selected: &[String]) -> Result<ExecutionPlan<'a>> {
    if let Some(unknown) = selected
        .iter()
        .find(|name| !matrix.modes.iter().any(|m| &m.name == *name))
    {
        let available = matrix
            .modes
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        bail!(t!("unknown_mode", name = unknown, available = available));
    }

    let (modes, skipped): (Vec<_>, Vec<_>) = matrix
        .modes
        .iter()
        .partition(|mode| selected.is_empty() || selected.contains(&mode.name));

    Ok(ExecutionPlan {
        modes,
        skipped_modes: skipped.len(),
    })
}
