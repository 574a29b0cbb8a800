//! adb client for talking to Android devices

use crate::constants::DUMP_TARGET;
use crate::errors::DeviceError;
use crate::utils::{extract_hierarchy_xml, parse_device_list, parse_getprop, parse_package_list};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::process::Command;

/// Device selected by the last successful `connect`, shared by all tools
pub type DeviceSession = Arc<RwLock<Option<AdbDevice>>>;

/// Clone the current device out of the session, if any
pub fn current_device(session: &DeviceSession) -> Option<AdbDevice> {
    session.read().ok().and_then(|guard| (*guard).clone())
}

/// Make `device` the current one, false when the session lock is poisoned
pub fn store_device(session: &DeviceSession, device: AdbDevice) -> bool {
    match session.write() {
        Ok(mut current) => {
            *current = Some(device);
            true
        }
        Err(_) => {
            tracing::warn!(serial = %device.serial, "Failed to acquire device session lock");
            false
        }
    }
}

/// Basic facts about a connected device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub serial: String,
    pub sdk: Option<u32>,
    pub brand: String,
    pub model: String,
    pub arch: String,
    pub version: String,
}

impl DeviceInfo {
    fn from_props(serial: &str, props: &std::collections::HashMap<String, String>) -> Self {
        let prop = |key: &str| props.get(key).cloned().unwrap_or_default();
        Self {
            serial: serial.to_string(),
            sdk: props
                .get("ro.build.version.sdk")
                .and_then(|v| v.trim().parse().ok()),
            brand: prop("ro.product.brand"),
            model: prop("ro.product.model"),
            arch: prop("ro.product.cpu.abi"),
            version: prop("ro.build.version.release"),
        }
    }
}

/// A single Android device reached through the adb program
#[derive(Debug, Clone)]
pub struct AdbDevice {
    adb: PathBuf,
    serial: String,
}

impl AdbDevice {
    /// Select a device by serial, or the first ready device when `serial` is empty.
    ///
    /// Serials of the form `host:port` that are not yet attached are passed to
    /// `adb connect` first.
    pub async fn connect(adb: impl Into<PathBuf>, serial: &str) -> Result<Self, DeviceError> {
        let adb = adb.into();
        let serial = serial.trim();
        let mut devices = parse_device_list(&run_adb(&adb, &["devices"]).await?);

        if serial.is_empty() {
            let serial = devices.into_iter().next().ok_or(DeviceError::NoDevice)?;
            tracing::info!(%serial, "Selected first attached device");
            return Ok(Self { adb, serial });
        }

        if !devices.iter().any(|d| d == serial) && serial.contains(':') {
            tracing::debug!(%serial, "Connecting to network device");
            run_adb(&adb, &["connect", serial]).await?;
            devices = parse_device_list(&run_adb(&adb, &["devices"]).await?);
        }

        if devices.iter().any(|d| d == serial) {
            Ok(Self {
                adb,
                serial: serial.to_string(),
            })
        } else {
            Err(DeviceError::device_not_found(serial))
        }
    }

    /// Serial of this device
    pub fn serial(&self) -> &str {
        &self.serial
    }

    async fn exec(&self, subcommand: &str, args: &[&str]) -> Result<String, DeviceError> {
        let mut full = vec!["-s", self.serial.as_str(), subcommand];
        full.extend_from_slice(args);
        run_adb(&self.adb, &full).await
    }

    /// Read device properties
    pub async fn device_info(&self) -> Result<DeviceInfo, DeviceError> {
        let output = self.exec("shell", &["getprop"]).await?;
        Ok(DeviceInfo::from_props(&self.serial, &parse_getprop(&output)))
    }

    /// Dump the current view hierarchy as XML
    pub async fn dump_hierarchy(&self, compressed: bool) -> Result<String, DeviceError> {
        let mut args = vec!["uiautomator", "dump"];
        if compressed {
            args.push("--compressed");
        }
        args.push(DUMP_TARGET);

        let output = self.exec("exec-out", &args).await?;
        extract_hierarchy_xml(&output)
            .map(str::to_string)
            .ok_or_else(|| DeviceError::InvalidDump(output.trim().to_string()))
    }

    /// Pull down the notification shade
    pub async fn open_notification(&self) -> Result<(), DeviceError> {
        self.exec("shell", &["cmd", "statusbar", "expand-notifications"])
            .await
            .map(drop)
    }

    /// Pull down the quick settings panel
    pub async fn open_quick_settings(&self) -> Result<(), DeviceError> {
        self.exec("shell", &["cmd", "statusbar", "expand-settings"])
            .await
            .map(drop)
    }

    /// Installed package names, optionally narrowed by a substring
    pub async fn app_list(&self, filter: Option<&str>) -> Result<Vec<String>, DeviceError> {
        let mut args = vec!["pm", "list", "packages"];
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            args.push(filter);
        }
        let output = self.exec("shell", &args).await?;
        Ok(parse_package_list(&output))
    }
}

async fn run_adb(adb: &Path, args: &[&str]) -> Result<String, DeviceError> {
    tracing::debug!(adb = %adb.display(), ?args, "Running adb");
    let output = Command::new(adb)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(DeviceError::Spawn)?;

    if !output.status.success() {
        return Err(DeviceError::command_failed(
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
