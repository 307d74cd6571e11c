use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The public, derived properties of a scope namespace.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ScopeKey {
    Pid,
    Apn,
    Cpu,
    Core,
    Namespace,
    Realm,
    Env,
    EnvShort,
    Prod,
    Dev,
    Stg,
    Localhost,
    Manager,
    Worker,
    Tester,
    Any,
}

/// The hidden raw inputs of a scope namespace.
///
/// These never appear in `ScopeNamespace::keys` or snapshots, but can still
/// be read by name.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKey {
    NodeEnv,
    AppName,
    AppGroup,
}

#[cfg(test)]
mod scope_key_tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_scope_keys_are_snake_case() {
        assert_eq!(ScopeKey::from_str("env_short"), Ok(ScopeKey::EnvShort));
        assert_eq!(ScopeKey::Localhost.to_string(), "localhost")
    }

    #[test]
    fn test_scope_keys_are_case_sensitive() {
        assert!(ScopeKey::from_str("Prod").is_err())
    }

    #[test]
    fn test_hidden_and_visible_keys_do_not_overlap() {
        for key in ConfigKey::iter() {
            assert!(ScopeKey::from_str(key.as_ref()).is_err(), "key: {}", key)
        }
    }
}
