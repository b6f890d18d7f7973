//! # Console Reporting Unit Tests / 控制台报告单元测试

use jitstress_runner::models::{LegOutcome, Verdict};
use jitstress_runner::reporting::console::{format_exit_code, format_passed_test};

#[test]
fn test_exit_column_for_completed_leg() {
    let outcome = LegOutcome::Completed {
        verdict: Verdict::Failed,
        exit_code: Some(134),
    };
    assert_eq!(format_exit_code(&outcome), "exit 134");
}

#[test]
fn test_exit_column_for_killed_child() {
    let outcome = LegOutcome::Completed {
        verdict: Verdict::Passed,
        exit_code: None,
    };
    assert_eq!(format_exit_code(&outcome), "signal");
}

#[test]
fn test_exit_column_for_launch_error() {
    let outcome = LegOutcome::LaunchError("missing".to_string());
    assert_eq!(format_exit_code(&outcome), "-");
}

#[test]
fn test_passed_test_line_format() {
    assert_eq!(format_passed_test("Passed test: case1", 2), "Passed test: case1 : 2");
}
