//! # Overlay Unit Tests / 覆盖层单元测试

use jitstress_runner::config::{StressMatrix, VariableSet, DEFAULT_ENV_PREFIX};
use jitstress_runner::core::overlay::{EnvOverlay, TIERING_OVERRIDES};

#[test]
fn test_empty_set_gets_tiering_default() {
    let overlay = EnvOverlay::build(&VariableSet::new(), "DOTNET_");
    assert_eq!(overlay.len(), 1);
    assert_eq!(overlay.get("DOTNET_TieredCompilation"), Some("0"));
}

#[test]
fn test_explicit_tiering_is_kept() {
    let set = VariableSet::new()
        .with("JitStress", "2")
        .with("TieredCompilation", "1");
    let overlay = EnvOverlay::build(&set, "DOTNET_");

    assert_eq!(overlay.len(), 2);
    assert_eq!(overlay.get("DOTNET_TieredCompilation"), Some("1"));
    assert_eq!(overlay.get("DOTNET_JitStress"), Some("2"));
}

#[test]
fn test_min_opts_suppresses_tiering_default() {
    let set = VariableSet::new().with("JitMinOpts", "1");
    let overlay = EnvOverlay::build(&set, "DOTNET_");

    assert_eq!(overlay.len(), 1);
    assert_eq!(overlay.get("DOTNET_JitMinOpts"), Some("1"));
    assert_eq!(overlay.get("DOTNET_TieredCompilation"), None);
}

#[test]
fn test_values_are_copied_verbatim() {
    let set = VariableSet::new().with("JitStressRegs", "0x2000");
    let overlay = EnvOverlay::build(&set, "DOTNET_");
    assert_eq!(overlay.get("DOTNET_JitStressRegs"), Some("0x2000"));
}

#[test]
fn test_custom_prefix_applies_to_default_too() {
    let overlay = EnvOverlay::build(&VariableSet::new().with("GCStress", "3"), "MYRT_");
    let names: Vec<_> = overlay.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["MYRT_GCStress", "MYRT_TieredCompilation"]);
}

/// Every built-in leg maps one-to-one onto prefixed names with values intact,
/// plus the tiering default exactly when no override is present.
#[test]
fn test_builtin_matrix_overlays() {
    let matrix = StressMatrix::builtin();

    for mode in &matrix.modes {
        for set in &mode.legs {
            let overlay = EnvOverlay::build(set, DEFAULT_ENV_PREFIX);
            let overridden = TIERING_OVERRIDES.iter().any(|name| set.contains(name));

            for (name, value) in set.iter() {
                assert_eq!(overlay.get(&format!("DOTNET_{name}")), Some(value));
            }

            if overridden {
                assert_eq!(overlay.len(), set.len(), "{} {}", mode.name, set);
            } else {
                assert_eq!(overlay.len(), set.len() + 1, "{} {}", mode.name, set);
                assert_eq!(overlay.get("DOTNET_TieredCompilation"), Some("0"));
            }
        }
    }
}
