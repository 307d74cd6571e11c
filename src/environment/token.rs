use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::policy::ClassificationPolicy;

/// The environment variable consulted when no CLI token is given.
pub const DEFAULT_ENV_VAR: &str = "NODE_ENV";

pub const PRODUCTION: &str = "production";
pub const DEVELOPMENT: &str = "development";

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\p{Pd}{2})?([\p{Ll}\p{Nd}\p{Pd}\p{Pc}]+)")
        .expect("Failed to compile environment token regex.")
});

static PRODUCTION_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?:prd|prod|production|live|public)$")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile production token regex.")
});

static PRODUCTION_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"prd|prod|production|live|public")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile production word regex.")
});

static STAGING_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"stg|stage|staging")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile staging word regex.")
});

static DEVELOPMENT_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"dev|development")
        .case_insensitive(true)
        .build()
        .expect("Failed to compile development word regex.")
});

/// Picks the raw environment input.
///
/// A non-empty CLI token wins over the environment variable. When neither is
/// present the raw input is the empty string.
pub fn select_raw_input(cli_token: Option<&str>, env_value: Option<&str>) -> String {
    cli_token
        .filter(|token| !token.is_empty())
        .or(env_value.filter(|value| !value.is_empty()))
        .unwrap_or("")
        .to_string()
}

/// A normalized environment name such as "production" or "development".
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EnvironmentToken {
    raw_value: String,
    policy: ClassificationPolicy,
}

impl EnvironmentToken {
    /// Parses raw environment input under the given policy.
    ///
    /// Ex.
    /// ```rs
    /// let token = EnvironmentToken::parse("  --PROD ", ClassificationPolicy::Strict);
    /// assert_eq!(token.as_str(), "production")
    /// ```
    pub fn parse(raw: &str, policy: ClassificationPolicy) -> Self {
        let lowered = raw.trim().to_lowercase();
        let parsed = TOKEN_REGEX.captures(&lowered)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .unwrap_or(DEVELOPMENT);
        let raw_value = match policy {
            ClassificationPolicy::Strict if PRODUCTION_TOKEN_REGEX.is_match(parsed) => PRODUCTION,
            ClassificationPolicy::Strict => DEVELOPMENT,
            ClassificationPolicy::Pattern => parsed,
        };
        Self { raw_value: raw_value.to_string(), policy }
    }

    pub fn as_str(&self) -> &str {
        &self.raw_value
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }
}

impl EnvironmentToken {
    pub fn is_production(&self) -> bool {
        match self.policy {
            ClassificationPolicy::Strict => self.raw_value == PRODUCTION,
            ClassificationPolicy::Pattern => PRODUCTION_WORD_REGEX.is_match(&self.raw_value),
        }
    }

    pub fn is_staging(&self) -> bool {
        match self.policy {
            ClassificationPolicy::Strict => !self.is_production(),
            ClassificationPolicy::Pattern => STAGING_WORD_REGEX.is_match(&self.raw_value),
        }
    }

    pub fn is_development(&self) -> bool {
        match self.policy {
            ClassificationPolicy::Strict => !self.is_production(),
            ClassificationPolicy::Pattern => DEVELOPMENT_WORD_REGEX.is_match(&self.raw_value),
        }
    }

    /// "prod" only when the token is exactly "production", "dev" otherwise.
    pub fn short_name(&self) -> &'static str {
        if self.raw_value == PRODUCTION { "prod" } else { "dev" }
    }
}
