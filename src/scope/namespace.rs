use std::{collections::BTreeMap, str::FromStr};

use strum::IntoEnumIterator;

use crate::{
    host::{CpuInfo, HostProbe, SystemHostProbe},
    role::AppRole,
};

use super::{
    config::ScopeConfig,
    error::NotDefinedError,
    key::{ConfigKey, ScopeKey},
    value::ScopeValue,
};

/// A read-only view of the current process's environment, role and host.
///
/// Every property is derived on access from the hidden `ScopeConfig` and from
/// live host queries. Properties can be read through the typed accessors, or
/// by name through `get`, which fails with a `NotDefinedError` instead of
/// handing back a missing value.
#[derive(Debug, Clone)]
pub struct ScopeNamespace<H: HostProbe = SystemHostProbe> {
    config: ScopeConfig,
    host: H,
}

impl ScopeNamespace<SystemHostProbe> {
    /// Builds the namespace for this process.
    ///
    /// `args` are the command line arguments without the program name, and
    /// `vars` the process environment.
    ///
    /// Ex.
    /// ```rs
    /// let scope = ScopeNamespace::initialize(env::args().skip(1), env::vars());
    /// if scope.prod() && scope.manager() {
    ///     schedule_cron_jobs();
    /// }
    /// ```
    pub fn initialize<A, V>(args: A, vars: V) -> Self
    where
        A: IntoIterator<Item = String>,
        V: IntoIterator<Item = (String, String)>,
    {
        Self::with_host(ScopeConfig::resolve(args, vars), SystemHostProbe)
    }
}

impl<H: HostProbe> ScopeNamespace<H> {
    pub fn with_host(config: ScopeConfig, host: H) -> Self {
        Self { config, host }
    }
}

impl<H: HostProbe> ScopeNamespace<H> {
    pub fn pid(&self) -> u32 {
        self.host.pid()
    }

    pub fn apn(&self) -> Result<&str, NotDefinedError> {
        self.config.app_name().ok_or_else(|| self.not_defined(ScopeKey::Apn.as_ref()))
    }

    pub fn cpu(&self) -> Vec<CpuInfo> {
        self.host.cpus()
    }

    pub fn core(&self) -> usize {
        self.cpu().len()
    }

    pub fn namespace(&self) -> Result<&str, NotDefinedError> {
        self.config.app_group().ok_or_else(|| self.not_defined(ScopeKey::Namespace.as_ref()))
    }

    pub fn realm(&self) -> Result<&str, NotDefinedError> {
        self.config.app_group().ok_or_else(|| self.not_defined(ScopeKey::Realm.as_ref()))
    }

    pub fn env(&self) -> &str {
        self.config.node_env().as_str()
    }

    pub fn env_short(&self) -> &'static str {
        self.config.node_env().short_name()
    }

    pub fn prod(&self) -> bool {
        self.config.node_env().is_production()
    }

    pub fn dev(&self) -> bool {
        self.config.node_env().is_development()
    }

    pub fn stg(&self) -> bool {
        self.config.node_env().is_staging()
    }

    /// True when the hostname contains "local". An unreadable hostname counts
    /// as not local.
    pub fn localhost(&self) -> bool {
        self.host.hostname()
            .map(|hostname| hostname.contains("local"))
            .unwrap_or(false)
    }

    pub fn manager(&self) -> bool {
        AppRole::Manager.matches(self.config.app_name())
    }

    pub fn worker(&self) -> bool {
        AppRole::Worker.matches(self.config.app_name())
    }

    pub fn tester(&self) -> bool {
        AppRole::Tester.matches(self.config.app_name())
    }

    pub fn any(&self) -> bool {
        true
    }
}

impl<H: HostProbe> ScopeNamespace<H> {
    /// Reads a property by name.
    ///
    /// Hidden inputs (`node_env`, `app_name`, `app_group`) are always
    /// returned, as `ScopeValue::Unset` when missing. Visible properties are
    /// returned only when they hold a value. Anything else is an error.
    pub fn get(&self, name: &str) -> Result<ScopeValue, NotDefinedError> {
        if let Ok(key) = ConfigKey::from_str(name) {
            return Ok(self.config_value(key));
        }
        ScopeKey::from_str(name)
            .ok()
            .and_then(|key| self.value(key))
            .ok_or_else(|| self.not_defined(name))
    }

    /// The value of a visible property, or None if it is not defined.
    pub fn value(&self, key: ScopeKey) -> Option<ScopeValue> {
        let value = match key {
            ScopeKey::Pid => ScopeValue::Count(u64::from(self.pid())),
            ScopeKey::Apn => self.apn().ok()?.into(),
            ScopeKey::Cpu => ScopeValue::Cpus(self.cpu()),
            ScopeKey::Core => ScopeValue::Count(self.core() as u64),
            ScopeKey::Namespace => self.namespace().ok()?.into(),
            ScopeKey::Realm => self.realm().ok()?.into(),
            ScopeKey::Env => self.env().into(),
            ScopeKey::EnvShort => self.env_short().into(),
            ScopeKey::Prod => self.prod().into(),
            ScopeKey::Dev => self.dev().into(),
            ScopeKey::Stg => self.stg().into(),
            ScopeKey::Localhost => self.localhost().into(),
            ScopeKey::Manager => self.manager().into(),
            ScopeKey::Worker => self.worker().into(),
            ScopeKey::Tester => self.tester().into(),
            ScopeKey::Any => self.any().into(),
        };
        Some(value)
    }

    /// The names of all visible properties.
    pub fn keys(&self) -> impl Iterator<Item = ScopeKey> {
        ScopeKey::iter()
    }

    /// Every visible property that currently holds a value, by name.
    pub fn snapshot(&self) -> BTreeMap<String, ScopeValue> {
        self.keys()
            .filter_map(|key| self.value(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    fn config_value(&self, key: ConfigKey) -> ScopeValue {
        match key {
            ConfigKey::NodeEnv => self.config.node_env().as_str().into(),
            ConfigKey::AppName => self.config.app_name().into(),
            ConfigKey::AppGroup => self.config.app_group().into(),
        }
    }

    fn not_defined(&self, property: &str) -> NotDefinedError {
        NotDefinedError {
            property: property.to_string(),
            env: self.env().to_string(),
            app_name: self.config.app_name().map(str::to_string),
        }
    }
}
