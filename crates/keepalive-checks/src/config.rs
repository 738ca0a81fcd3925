//! Configuration lookup

/// Source of named configuration values
///
/// A value counts as present only when it is set and non-empty. Implementors
/// perform a pure lookup: no caching, no defaults, no coercion.
pub trait ConfigSource {
    /// Returns the value for `name`, or `None` if unset or empty
    fn get(&self, name: &str) -> Option<String>;
}

/// [`ConfigSource`] backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
