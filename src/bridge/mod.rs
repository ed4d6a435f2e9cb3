//! # Web Bridge Boundary
//!
//! What the web layer sees: one [`PluginResult`] per top-level call, plus
//! keep-alive results pushed to callback identifiers through a [`ResultSink`]
//! whenever the user touches the chrome.

pub mod assets;
pub mod host;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::ChromeError;

pub use host::{HostHandle, HostOptions, spawn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    InvalidAction,
    JsonException,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginResult {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When true the web side keeps its callback registered for more results.
    pub keep_callback: bool,
}

impl PluginResult {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: None,
            keep_callback: false,
        }
    }

    /// Success that leaves the listener registered for further events.
    pub fn keep_alive() -> Self {
        Self {
            keep_callback: true,
            ..Self::ok()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<&ChromeError> for PluginResult {
    fn from(e: &ChromeError) -> Self {
        let status = match e {
            ChromeError::ConfigParse(_) => Status::JsonException,
            ChromeError::UnknownAction(_) => Status::InvalidAction,
            ChromeError::InvalidNavigationType(_) => Status::Error,
        };
        Self {
            status,
            message: Some(e.to_string()),
            keep_callback: false,
        }
    }
}

impl From<Result<(), ChromeError>> for PluginResult {
    fn from(result: Result<(), ChromeError>) -> Self {
        match result {
            Ok(()) => PluginResult::ok(),
            Err(e) => PluginResult::from(&e),
        }
    }
}

impl fmt::Display for PluginResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.status)?;
        if self.keep_callback {
            write!(f, " (keep)")?;
        }
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

/// Delivers results to callback identifiers on the web side.
pub trait ResultSink: Send + Sync {
    fn emit_result(&self, callback_id: &str, result: PluginResult);
}

/// A plugin reachable from the web layer by action name.
#[async_trait]
pub trait PluginBridge: Send + Sync {
    /// Returns the name the web layer addresses this plugin by.
    fn name(&self) -> &str;

    /// Runs a top-level action and returns its single result.
    async fn execute(&self, action: &str, args: Value) -> PluginResult;
}
