use std::{error::Error, fmt};

/// Returned when a scope property is unknown, or known but without a value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NotDefinedError {
    pub property: String,
    pub env: String,
    pub app_name: Option<String>,
}

impl fmt::Display for NotDefinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scope namespace for '{}' is not defined! (env: {}, app name: {})",
            self.property,
            self.env,
            self.app_name.as_deref().unwrap_or("<unset>")
        )
    }
}

impl Error for NotDefinedError {}
