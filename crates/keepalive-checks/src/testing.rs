//! Test doubles shared across the workspace's test suites
//!
//! These live in the library proper so that both this crate's unit tests and
//! dependent crates' tests can use the same doubles. They have no runtime
//! cost outside of tests and no dependencies beyond std.

use crate::config::ConfigSource;
use crate::notify::{Notifier, NotifyError};
use std::collections::HashMap;
use std::sync::Mutex;

/// [`ConfigSource`] backed by a fixed map
///
/// Mirrors the process-environment contract: empty values count as absent.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    pub fn new<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

/// [`Notifier`] double that records every message instead of delivering it
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, in dispatch order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
