use strum_macros::{AsRefStr, Display, EnumString};

/// How the environment token is turned into the `prod`, `stg` and `dev` flags.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClassificationPolicy {
    /// The token collapses to either "production" or "development", and
    /// `dev`/`stg` are the negation of `prod`.
    #[default]
    Strict,
    /// The token is kept as parsed, and `prod`, `stg` and `dev` are
    /// independent substring matches against it.
    Pattern,
}

#[cfg(test)]
mod policy_tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(ClassificationPolicy::from_str("STRICT"), Ok(ClassificationPolicy::Strict));
        assert_eq!(ClassificationPolicy::from_str("Pattern"), Ok(ClassificationPolicy::Pattern));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(ClassificationPolicy::from_str("loose").is_err())
    }

    #[test]
    fn test_display_is_snake_case() {
        assert_eq!(ClassificationPolicy::Pattern.to_string(), "pattern")
    }
}
