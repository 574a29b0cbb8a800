//! Error types for the MCP server
//!
//! This module provides structured error types for device access through adb.

use thiserror::Error;

/// Errors that can occur while talking to an Android device
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The adb program could not be started
    #[error("Failed to run adb: {0}")]
    Spawn(#[source] std::io::Error),

    /// adb ran but reported a failure
    #[error("adb {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The requested serial is not attached
    #[error("device '{serial}' not found")]
    DeviceNotFound { serial: String },

    /// No serial given and no device attached
    #[error("Can't find any android device/emulator")]
    NoDevice,

    /// uiautomator output did not contain a hierarchy
    #[error("uiautomator returned no hierarchy: {0}")]
    InvalidDump(String),
}

impl DeviceError {
    /// Create a CommandFailed error
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a DeviceNotFound error
    pub fn device_not_found(serial: impl Into<String>) -> Self {
        Self::DeviceNotFound {
            serial: serial.into(),
        }
    }
}
