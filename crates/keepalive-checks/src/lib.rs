//! Keep-alive checks against Back4App and Koyeb
//!
//! Each check reads its secrets from a [`ConfigSource`], issues exactly one
//! HTTP request, and classifies the result into a reportable outcome. The
//! library never terminates the process; a missing secret comes back as
//! [`CheckReport::Misconfigured`] and the caller decides what to do with it.

pub mod config;
pub mod endpoints;
pub mod http;
pub mod login;
pub mod notify;
pub mod outcome;
pub mod status;
pub mod testing;

pub use config::{ConfigSource, ProcessEnv};
pub use notify::{Notifier, NotifyError, TelegramNotifier};
pub use outcome::{CheckError, CheckReport, Outcome};
