use serde::Serialize;

use crate::host::CpuInfo;

/// A value read from a scope namespace by name.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(untagged)]
pub enum ScopeValue {
    Bool(bool),
    Count(u64),
    Text(String),
    Cpus(Vec<CpuInfo>),
    /// A hidden input whose source variable was not set.
    Unset,
}

impl From<bool> for ScopeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ScopeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<&str>> for ScopeValue {
    fn from(value: Option<&str>) -> Self {
        value.map(|text| Self::Text(text.to_string())).unwrap_or(Self::Unset)
    }
}
