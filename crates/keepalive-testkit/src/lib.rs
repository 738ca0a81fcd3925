//! Test utilities for keepalive
//!
//! Process-environment isolation for tests that redirect endpoint base URLs.
//! This crate deliberately depends on nothing, so any workspace member can
//! pull it in as a dev-dependency.

use std::sync::Mutex;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with the given environment variables set (or removed for `None`)
///
/// Acquires [`ENV_LOCK`] so env-mutating tests cannot interleave, applies the
/// overrides, runs the closure, and restores the original values.
///
/// # Examples
///
/// ```no_run
/// use keepalive_testkit::with_env_vars;
///
/// fn test_with_override() {
///     with_env_vars(&[("PARSE_BASE_URL", Some("http://127.0.0.1:8080"))], || {
///         // code under test sees the override
///     });
/// }
/// ```
pub fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| {
        // Recover from poisoned mutex: we only serialize access, the
        // environment itself stays valid after a panic
        poisoned.into_inner()
    });

    // Save original values for restoration
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(name, _)| ((*name).to_string(), std::env::var(name).ok()))
        .collect();

    // SAFETY: We hold ENV_LOCK, so no other test is modifying the process
    // environment concurrently.
    unsafe {
        for (name, value) in vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    let result = f();

    // SAFETY: We still hold ENV_LOCK.
    unsafe {
        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(&name, value),
                None => std::env::remove_var(&name),
            }
        }
    }

    result
}
