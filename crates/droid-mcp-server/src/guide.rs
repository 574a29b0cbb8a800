//! Setup guide for droid-mcp
//!
//! This module contains the guide text displayed by `droid-mcp-server guide`.

/// Print the setup guide to stdout
pub fn print_guide() {
    let version = env!("CARGO_PKG_VERSION");
    print!(
        r#"
================================================================================
                       droid-mcp-server Setup Guide
                              Version {version}
================================================================================

This guide explains how to set up droid-mcp for Android UI automation with MCP
clients.

--------------------------------------------------------------------------------
STEP 1: Prepare the device
--------------------------------------------------------------------------------

1. Enable Developer options and USB debugging on the device (or start an
   emulator).
2. Install the Android platform tools so that `adb` is available.
3. Check that the device is listed as `device`:

    adb devices

--------------------------------------------------------------------------------
STEP 2: Configure your MCP client
--------------------------------------------------------------------------------

Create or edit `.mcp.json` in your project root:

    {{
      "mcpServers": {{
        "droid-mcp": {{
          "command": "droid-mcp-server",
          "args": [],
          "env": {{
            "DROID_MCP_SERIAL": "emulator-5554"
          }}
        }}
      }}
    }}

For cargo-based development, use:

    {{
      "mcpServers": {{
        "droid-mcp": {{
          "command": "cargo",
          "args": ["run", "-p", "droid-mcp-server"]
        }}
      }}
    }}

--------------------------------------------------------------------------------
STEP 3: Inspect the screen
--------------------------------------------------------------------------------

1. Call `connect` (skip if DROID_MCP_SERIAL is set)
2. Call `get_hierarchy` with a `view_class_name` filter such as "Button"
3. Add `text`, `resource_id` or `hint` only when you know they exist; if the
   combined filter matches nothing, the class name alone is used, and if that
   also matches nothing every node is returned

--------------------------------------------------------------------------------
ENVIRONMENT VARIABLES
--------------------------------------------------------------------------------

  DROID_MCP_SERIAL     Device serial to connect to at startup (--serial)
  DROID_MCP_ADB        adb program to run, default "adb" (--adb)
  RUST_LOG             Log level (e.g., "info", "debug")

--------------------------------------------------------------------------------
AVAILABLE MCP TOOLS
--------------------------------------------------------------------------------

Device:
  - connect              Select a device by serial and return its info
  - open_notifications   Pull down the notification shade
  - open_quick_settings  Pull down the quick settings panel
  - app_list             List installed packages

UI Hierarchy:
  - get_dump             Raw uiautomator XML
  - get_hierarchy        Parsed and filtered nodes of the current screen
  - load_hierarchy_file  Parsed and filtered nodes of a saved XML dump

================================================================================
"#
    );
}
