//! # Test Execution Module / 测试执行模块
//!
//! Runs the target command once per leg with that leg's environment overlay,
//! classifies what it printed, and reports the result.
//!
//! 每个测试项使用其环境变量覆盖层运行一次目标命令，
//! 对其输出进行分类并报告结果。

use std::ffi::OsString;
use std::time::Instant;

use crate::{
    core::{
        classify::classify_output,
        config::VariableSet,
        models::{LegOutcome, LegResult},
        overlay::EnvOverlay,
        planner::ExecutionPlan,
    },
    infra::{command::spawn_and_capture, t},
    reporting::console,
};

/// Runs `command` once under the overlay built from `variables` and prints the
/// classification report.
///
/// A command that cannot be started is reported and turned into
/// [`LegOutcome::LaunchError`]; it never aborts the caller.
///
/// # Arguments
/// * `variables` - The unprefixed variable set for this leg
/// * `command` - Program followed by its arguments; must not be empty
/// * `env_prefix` - Namespace prepended to every variable name
///
/// # Returns
/// The outcome of the leg, for the final summary
pub async fn invoke_test(
    variables: &VariableSet,
    command: &[OsString],
    env_prefix: &str,
) -> LegOutcome {
    console::print_leg_header(variables);

    let Some((program, args)) = command.split_first() else {
        let message = t!("run.empty_command").to_string();
        console::print_invocation_error(&message);
        return LegOutcome::LaunchError(message);
    };

    let overlay = EnvOverlay::build(variables, env_prefix);

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).envs(overlay.iter());

    let result = match spawn_and_capture(cmd).await {
        Ok(result) => result,
        Err(e) => {
            let message = format!("{}: {e}", program.to_string_lossy());
            console::print_invocation_error(&message);
            return LegOutcome::LaunchError(message);
        }
    };

    let classification = classify_output(&result.stdout);
    console::print_classification(&classification);

    if !result.stderr.is_empty() {
        console::print_errors(&result.stderr);
    }

    LegOutcome::Completed {
        verdict: classification.verdict,
        exit_code: result.status.code(),
    }
}

/// Walks the plan in order, invoking every leg of every mode sequentially.
///
/// 按顺序遍历计划，依次调用每个模式的每个测试项。
pub async fn run_matrix(
    plan: &ExecutionPlan<'_>,
    command: &[OsString],
    env_prefix: &str,
) -> Vec<LegResult> {
    let mut results = Vec::with_capacity(plan.leg_count());

    for mode in &plan.modes {
        console::print_mode_banner(&mode.name);

        for variables in &mode.legs {
            let start = Instant::now();
            let outcome = invoke_test(variables, command, env_prefix).await;
            results.push(LegResult {
                mode: mode.name.clone(),
                variables: variables.clone(),
                outcome,
                duration: start.elapsed(),
            });
        }
    }

    results
}
