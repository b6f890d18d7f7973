//! # Environment Overlay / 环境变量覆盖层
//!
//! Turns a [`VariableSet`] into the exact environment variables handed to one
//! test invocation.
//!
//! 将 [`VariableSet`] 转换为传递给单次测试调用的确切环境变量。

use std::collections::BTreeMap;

use crate::core::config::VariableSet;

/// Variables that take over control of tiered compilation. If a set names
/// either one, the tiering default is left out.
/// 控制分层编译的变量。如果变量集包含其中任意一个，则不添加分层默认值。
pub const TIERING_OVERRIDES: [&str; 2] = ["JitMinOpts", "TieredCompilation"];

/// The implicit default added when no tiering override is present.
/// 当没有分层覆盖时添加的隐式默认值。
pub const TIERING_DEFAULT: (&str, &str) = ("TieredCompilation", "0");

/// Prefixed environment variables for a single invocation.
/// 单次调用的带前缀环境变量。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    vars: BTreeMap<String, String>,
}

impl EnvOverlay {
    /// Prefixes every name in `set`, copies values verbatim, and adds the
    /// tiering default unless the set overrides tiering itself.
    ///
    /// 为 `set` 中的每个名称添加前缀，原样复制值，
    /// 并在变量集自身未覆盖分层设置时添加分层默认值。
    pub fn build(set: &VariableSet, prefix: &str) -> Self {
        let mut vars = BTreeMap::new();
        let mut disable_tiering = true;

        for (name, value) in set.iter() {
            if TIERING_OVERRIDES.contains(&name) {
                disable_tiering = false;
            }
            vars.insert(format!("{prefix}{name}"), value.to_string());
        }

        if disable_tiering {
            let (name, value) = TIERING_DEFAULT;
            vars.insert(format!("{prefix}{name}"), value.to_string());
        }

        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
