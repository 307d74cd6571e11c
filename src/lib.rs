pub mod environment;
pub mod host;
pub mod identity;
pub mod role;
pub mod scope;
pub mod utils;

pub use scope::{
    error::NotDefinedError,
    namespace::ScopeNamespace,
    value::ScopeValue,
};
