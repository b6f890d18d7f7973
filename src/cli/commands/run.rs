//! # Run Command Module / 运行命令模块
//!
//! Loads the matrix, plans which modes run, drives every leg and prints the
//! summary.
//!
//! 加载矩阵，规划要运行的模式，驱动每个测试项并打印摘要。

use anyhow::Result;
use colored::*;

use crate::{
    cli::RunArgs,
    core::{config::StressMatrix, execution::run_matrix, planner},
    infra::t,
    reporting::console,
};

/// Executes a full matrix run.
///
/// Configuration problems surface as errors before the first leg starts.
/// Once the matrix is running nothing is fatal: failing legs and launch
/// errors are reported and the run carries on.
///
/// # Returns
/// `Ok(())` after every selected leg ran, whatever their verdicts
pub async fn execute(args: RunArgs) -> Result<()> {
    let loaded;
    let matrix = match &args.config {
        Some(path) => {
            loaded = StressMatrix::load(path)?;
            if args.lang.is_none() {
                rust_i18n::set_locale(&loaded.language);
            }
            println!(
                "{}",
                t!("loading_matrix", path = path.display()).cyan()
            );
            &loaded
        }
        None => StressMatrix::builtin(),
    };

    let plan = planner::plan_execution(matrix, &args.modes)?;

    if plan.skipped_modes > 0 {
        println!(
            "{}",
            t!(
                "filtered_modes",
                skipped = plan.skipped_modes,
                count = plan.modes.len()
            )
            .cyan()
        );
    }

    console::print_start(&args.command);

    let results = run_matrix(&plan, &args.command, &matrix.env_prefix).await;

    console::print_summary(&results);
    Ok(())
}
