use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static MANAGER_REGEX: Lazy<Regex> = Lazy::new(|| role_regex("master|primary|manager|lead|main"));
static WORKER_REGEX: Lazy<Regex> = Lazy::new(|| role_regex("slave|secondary|worker|replica|swarm"));
static TESTER_REGEX: Lazy<Regex> = Lazy::new(|| role_regex("local|localhost|test|demo|debug"));

fn role_regex(words: &str) -> Regex {
    RegexBuilder::new(words)
        .case_insensitive(true)
        .build()
        .expect("Failed to compile role regex.")
}

/// The part an application instance plays, derived from its name.
///
/// A name may match several roles at once ("main-test" is both a manager and
/// a tester). An unset name matches none.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppRole {
    Manager,
    Worker,
    Tester,
}

impl AppRole {
    pub fn matches(&self, app_name: Option<&str>) -> bool {
        let Some(app_name) = app_name else { return false };
        match self {
            Self::Manager => MANAGER_REGEX.is_match(app_name),
            Self::Worker => WORKER_REGEX.is_match(app_name),
            Self::Tester => TESTER_REGEX.is_match(app_name),
        }
    }
}
