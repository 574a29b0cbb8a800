//! Constants used throughout the MCP server

/// Default adb program, resolved through PATH
pub const DEFAULT_ADB_PROGRAM: &str = "adb";

/// Environment variable selecting the device serial at startup
pub const SERIAL_ENV: &str = "DROID_MCP_SERIAL";

/// Environment variable overriding the adb program
pub const ADB_ENV: &str = "DROID_MCP_ADB";

/// Target file for `uiautomator dump` so the XML is streamed to stdout
pub const DUMP_TARGET: &str = "/dev/tty";

/// Status line uiautomator prints right after the dumped document
pub const DUMP_TRAILER: &str = "UI hierchary dumped to";

/// State reported by adb for a usable device
pub const DEVICE_READY_STATE: &str = "device";
