use std::{error::Error, fmt};

use log::info;
use once_cell::sync::OnceCell;

use super::namespace::ScopeNamespace;

static SCOPE: OnceCell<ScopeNamespace> = OnceCell::new();

#[derive(Debug, PartialEq, Eq)]
pub struct AlreadyInstalledError;

impl fmt::Display for AlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A scope namespace has already been installed for this process.")
    }
}

impl Error for AlreadyInstalledError {}

/// Installs the process-wide scope namespace.
///
/// This should happen once, at startup, before anything calls `current`.
pub fn install(scope: ScopeNamespace) -> Result<&'static ScopeNamespace, AlreadyInstalledError> {
    SCOPE.set(scope).map_err(|_| AlreadyInstalledError)?;
    let scope = current().ok_or(AlreadyInstalledError)?;
    info!("Installed scope namespace for the {} environment.", scope.env());
    Ok(scope)
}

/// The process-wide scope namespace, if one was installed.
pub fn current() -> Option<&'static ScopeNamespace> {
    SCOPE.get()
}
