use std::collections::HashMap;

/// The variable a process manager sets to the application instance name.
pub const APP_NAME_VAR: &str = "name";

/// The variable a process manager sets to the application group.
pub const APP_GROUP_VAR: &str = "namespace";

/// The (name, group) pair identifying the running application instance.
///
/// Both values come from an external process manager and are taken as-is.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct AppIdentity {
    name: Option<String>,
    group: Option<String>,
}

impl AppIdentity {
    /// Reads the identity pair out of a set of environment variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        Self {
            name: vars.get(APP_NAME_VAR).cloned(),
            group: vars.get(APP_GROUP_VAR).cloned(),
        }
    }
}

impl AppIdentity {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}
