//! # Stress Matrix Configuration / 压力矩阵配置
//!
//! The configuration table: named stress modes, each an ordered list of
//! variable sets. A built-in table covers the standard JIT stress legs; a TOML
//! file with the same shape can replace it.
//!
//! 配置表：命名的压力模式，每个模式包含一个有序的变量集列表。
//! 内置表涵盖标准的 JIT 压力测试项；结构相同的 TOML 文件可以替换它。

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::infra::t;

/// Namespace prepended to every variable name before it reaches the child process.
/// 在变量名传递给子进程之前添加的命名空间前缀。
pub const DEFAULT_ENV_PREFIX: &str = "DOTNET_";

/// One concrete combination of environment overrides, keyed by unprefixed name.
/// 一组具体的环境变量覆盖，以未加前缀的名称为键。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VariableSet(BTreeMap<String, String>);

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one assignment, returning the set for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, "}}")
    }
}

/// A named group of related stress configurations, e.g. `jitstress`.
/// 一组相关的压力配置，例如 `jitstress`。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StressMode {
    /// The mode name shown in the run banner.
    /// 在运行横幅中显示的模式名称。
    pub name: String,
    /// The variable sets to exercise, in run order.
    /// 要执行的变量集，按运行顺序排列。
    #[serde(default)]
    pub legs: Vec<VariableSet>,
}

impl StressMode {
    pub fn new(name: impl Into<String>, legs: Vec<VariableSet>) -> Self {
        Self {
            name: name.into(),
            legs,
        }
    }
}

/// The whole configuration table plus the settings that shape a run.
/// 完整的配置表以及影响运行的设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StressMatrix {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Prefix applied to every variable name to form the child's environment.
    /// 应用于每个变量名以构成子进程环境的前缀。
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,

    /// Every mode, in the order it runs.
    /// 所有模式，按运行顺序排列。
    pub modes: Vec<StressMode>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_env_prefix() -> String {
    DEFAULT_ENV_PREFIX.to_string()
}

fn leg(assignments: &[(&str, &str)]) -> VariableSet {
    assignments.iter().copied().collect()
}

/// The JIT stress register bitmasks exercised by the register-stress modes.
const STRESS_REGS_MASKS: [&str; 9] = [
    "1", "2", "3", "4", "8", "0x10", "0x80", "0x1000", "0x2000",
];

static BUILTIN_MATRIX: Lazy<StressMatrix> = Lazy::new(|| StressMatrix {
    language: default_language(),
    env_prefix: default_env_prefix(),
    modes: vec![
        StressMode::new("default", vec![leg(&[])]),
        StressMode::new(
            "jitstress",
            vec![
                leg(&[("JitMinOpts", "1")]),
                leg(&[("JitStress", "1")]),
                leg(&[("JitStress", "2")]),
                leg(&[("JitStress", "1"), ("TieredCompilation", "1")]),
                leg(&[("JitStress", "2"), ("TieredCompilation", "1")]),
                leg(&[("TailcallStress", "1")]),
                leg(&[("ReadyToRun", "0")]),
            ],
        ),
        StressMode::new(
            "jitstressregs",
            STRESS_REGS_MASKS
                .into_iter()
                .map(|mask| leg(&[("JitStressRegs", mask)]))
                .collect(),
        ),
        StressMode::new(
            "jitstress2-jitstressregs",
            STRESS_REGS_MASKS
                .into_iter()
                .map(|mask| leg(&[("JitStress", "2"), ("JitStressRegs", mask)]))
                .collect(),
        ),
    ],
});

impl StressMatrix {
    /// The built-in table of JIT stress configurations.
    /// 内置的 JIT 压力配置表。
    pub fn builtin() -> &'static StressMatrix {
        &BUILTIN_MATRIX
    }

    /// Loads and validates a matrix from a TOML file.
    ///
    /// 从 TOML 文件加载并验证矩阵。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config_read_failed_path", path = path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| t!("config_parse_failed", path = path.display()))
    }

    /// Parses and validates a matrix from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let matrix: StressMatrix = toml::from_str(content)?;
        matrix.validate()?;
        Ok(matrix)
    }

    /// Checks the invariants the driver relies on: unique, non-empty mode names
    /// and variable names that can be exported to a process environment.
    pub fn validate(&self) -> Result<()> {
        check_env_fragment(&self.env_prefix, "env_prefix")?;

        let mut seen = HashSet::new();
        for mode in &self.modes {
            if mode.name.trim().is_empty() {
                bail!(t!("config_empty_mode_name"));
            }
            if !seen.insert(mode.name.as_str()) {
                bail!(t!("config_duplicate_mode", name = &mode.name));
            }
            for set in &mode.legs {
                for (name, value) in set.iter() {
                    if name.is_empty() {
                        bail!(t!("config_empty_variable", mode = &mode.name));
                    }
                    check_env_fragment(name, name)?;
                    if value.contains('\0') {
                        bail!(t!("config_invalid_value", name = name));
                    }
                }
            }
        }
        Ok(())
    }

    /// Total number of legs across every mode.
    pub fn leg_count(&self) -> usize {
        self.modes.iter().map(|m| m.legs.len()).sum()
    }
}

fn check_env_fragment(fragment: &str, label: &str) -> Result<()> {
    if fragment.contains('=') || fragment.contains('\0') {
        bail!(t!("config_invalid_name", name = label));
    }
    Ok(())
}
