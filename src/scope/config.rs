use std::{collections::HashMap, str::FromStr};

use log::{debug, warn};

use crate::{
    environment::{
        policy::ClassificationPolicy,
        token::{select_raw_input, EnvironmentToken, DEFAULT_ENV_VAR},
    },
    identity::AppIdentity,
};

/// Selects the classification policy (`strict` or `pattern`).
pub const POLICY_VAR: &str = "SCOPE_POLICY";

/// Names the variable holding the environment name, `NODE_ENV` when unset.
pub const ENV_VAR_OVERRIDE_VAR: &str = "SCOPE_ENV_VAR";

/// The raw inputs behind a scope namespace.
///
/// This is the hidden half of the namespace: it holds what was read at
/// startup, while `ScopeNamespace` derives everything else from it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ScopeConfig {
    node_env: EnvironmentToken,
    identity: AppIdentity,
}

impl ScopeConfig {
    pub fn new(node_env: EnvironmentToken, identity: AppIdentity) -> Self {
        Self { node_env, identity }
    }

    /// Resolves the configuration from CLI arguments (program name excluded)
    /// and environment variables.
    pub fn resolve<A, V>(args: A, vars: V) -> Self
    where
        A: IntoIterator<Item = String>,
        V: IntoIterator<Item = (String, String)>,
    {
        let vars = vars.into_iter().collect::<HashMap<String, String>>();
        let policy = policy_from_vars(&vars);
        let env_var = vars.get(ENV_VAR_OVERRIDE_VAR)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ENV_VAR);
        let cli_token = args.into_iter().next();
        let raw = select_raw_input(
            cli_token.as_deref(),
            vars.get(env_var).map(String::as_str)
        );
        let node_env = EnvironmentToken::parse(&raw, policy);
        debug!("Resolved environment {:?} from {:?} using the {} policy.", node_env.as_str(), raw, policy);
        Self { node_env, identity: AppIdentity::from_vars(&vars) }
    }
}

impl ScopeConfig {
    pub fn node_env(&self) -> &EnvironmentToken {
        &self.node_env
    }

    pub fn app_name(&self) -> Option<&str> {
        self.identity.name()
    }

    pub fn app_group(&self) -> Option<&str> {
        self.identity.group()
    }
}

fn policy_from_vars(vars: &HashMap<String, String>) -> ClassificationPolicy {
    match vars.get(POLICY_VAR).filter(|value| !value.trim().is_empty()) {
        None => ClassificationPolicy::default(),
        Some(value) => ClassificationPolicy::from_str(value.trim()).unwrap_or_else(|_| {
            warn!("Invalid {} {:?}, using the strict policy.", POLICY_VAR, value);
            ClassificationPolicy::default()
        }),
    }
}

#[cfg(test)]
mod scope_config_tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_resolve_uses_cli_token_over_env_var() {
        let config = ScopeConfig::resolve(
            vec![String::from("--prod")],
            vars(&[("NODE_ENV", "staging")])
        );
        assert_eq!(config.node_env().as_str(), "production")
    }

    #[test]
    fn test_resolve_uses_env_var_without_cli_token() {
        let config = ScopeConfig::resolve(Vec::new(), vars(&[("NODE_ENV", "live")]));
        assert_eq!(config.node_env().as_str(), "production")
    }

    #[test]
    fn test_resolve_ignores_args_past_the_first() {
        let config = ScopeConfig::resolve(
            vec![String::from("dev"), String::from("prod")],
            Vec::new()
        );
        assert_eq!(config.node_env().as_str(), "development")
    }

    #[test]
    fn test_resolve_honors_env_var_override() {
        let config = ScopeConfig::resolve(
            Vec::new(),
            vars(&[("SCOPE_ENV_VAR", "APP_ENV"), ("APP_ENV", "prod"), ("NODE_ENV", "dev")])
        );
        assert_eq!(config.node_env().as_str(), "production")
    }

    #[test]
    fn test_resolve_reads_policy() {
        let config = ScopeConfig::resolve(
            Vec::new(),
            vars(&[("SCOPE_POLICY", "pattern"), ("NODE_ENV", "staging")])
        );
        assert_eq!(config.node_env().policy(), ClassificationPolicy::Pattern);
        assert_eq!(config.node_env().as_str(), "staging")
    }

    #[test]
    fn test_resolve_falls_back_to_strict_on_unknown_policy() {
        let config = ScopeConfig::resolve(Vec::new(), vars(&[("SCOPE_POLICY", "fuzzy")]));
        assert_eq!(config.node_env().policy(), ClassificationPolicy::Strict)
    }

    #[test]
    fn test_resolve_treats_empty_policy_as_unset() {
        let config = ScopeConfig::resolve(
            Vec::new(),
            vars(&[("SCOPE_POLICY", "  "), ("NODE_ENV", "prod")])
        );
        assert_eq!(config.node_env().policy(), ClassificationPolicy::Strict);
        assert_eq!(policy_from_vars(&HashMap::from([(String::from("SCOPE_POLICY"), String::new())])), ClassificationPolicy::Strict)
    }

    #[test]
    fn test_resolve_reads_identity() {
        let config = ScopeConfig::resolve(
            Vec::new(),
            vars(&[("name", "worker-1"), ("namespace", "billing")])
        );
        assert_eq!(config.app_name(), Some("worker-1"));
        assert_eq!(config.app_group(), Some("billing"))
    }
}
