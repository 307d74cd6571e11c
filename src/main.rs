use std::env;

use anyhow::Result;
use dotenv::dotenv;
use log::info;
use scope_namespace::{scope::global, utils::log::bootstrap_logging, ScopeNamespace};

fn main() -> Result<()> {
    dotenv().ok();
    bootstrap_logging();
    let scope = global::install(ScopeNamespace::initialize(env::args().skip(1), utf8_vars()))?;
    info!("Running as {} ({}).", scope.apn().unwrap_or("unnamed"), scope.env_short());
    println!("{}", serde_json::to_string_pretty(&scope.snapshot())?);
    Ok(())
}

/// The process environment, skipping variables that are not valid UTF-8.
fn utf8_vars() -> impl Iterator<Item = (String, String)> {
    env::vars_os().filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}
