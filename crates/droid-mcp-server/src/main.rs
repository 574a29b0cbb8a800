//! MCP server for Android UI automation
//!
//! This server exposes an Android device, reached through adb, as MCP tools.

mod adb_client;
mod constants;
mod errors;
mod guide;
mod requests;
mod tools;
mod utils;

use adb_client::{AdbDevice, DeviceSession, store_device};
use anyhow::Result;
use clap::{Parser, Subcommand};
use constants::{ADB_ENV, DEFAULT_ADB_PROGRAM, SERIAL_ENV};
use droid_mcp_hierarchy::NodesFilter;
use requests::{
    AppListRequest, ConnectRequest, GetDumpRequest, GetHierarchyRequest, LoadHierarchyFileRequest,
};
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// MCP server for Android UI automation
#[derive(Parser)]
#[command(name = "droid-mcp-server", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Device serial to connect to at startup
    #[arg(long, env = SERIAL_ENV)]
    serial: Option<String>,

    /// adb program to run
    #[arg(long, env = ADB_ENV, default_value = DEFAULT_ADB_PROGRAM)]
    adb: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the setup guide
    Guide,
}

/// droid-mcp server handler
#[derive(Clone)]
struct DroidMcpServer {
    tool_router: ToolRouter<Self>,
    adb: PathBuf,
    session: DeviceSession,
}

impl DroidMcpServer {
    fn new(adb: PathBuf, session: DeviceSession) -> Self {
        let tool_router = Self::tool_router();
        Self {
            tool_router,
            adb,
            session,
        }
    }
}

#[tool_router]
impl DroidMcpServer {
    #[tool(description = "Ping the droid-mcp server to verify it's running")]
    async fn ping(&self) -> String {
        tools::basic::ping()
    }

    #[tool(
        description = "Connect to an Android device by serial (empty string picks the first attached device). Returns device info."
    )]
    async fn connect(&self, Parameters(req): Parameters<ConnectRequest>) -> String {
        tools::device::connect(&self.adb, &self.session, &req.serial).await
    }

    #[tool(description = "Open the notification shade on the connected device")]
    async fn open_notifications(&self) -> String {
        tools::device::open_notifications(&self.session).await
    }

    #[tool(description = "Open the quick settings panel on the connected device")]
    async fn open_quick_settings(&self) -> String {
        tools::device::open_quick_settings(&self.session).await
    }

    #[tool(description = "Get the raw UI hierarchy XML of the current screen")]
    async fn get_dump(&self, Parameters(req): Parameters<GetDumpRequest>) -> String {
        tools::hierarchy::get_dump(&self.session, req.compressed.unwrap_or(false)).await
    }

    #[tool(
        description = "Get the UI elements of the current screen as structured nodes. Optional filters narrow the result; if nothing matches, the filter is relaxed to the class name only, then dropped entirely."
    )]
    async fn get_hierarchy(&self, Parameters(req): Parameters<GetHierarchyRequest>) -> String {
        let filter = NodesFilter::from(req.filter);
        tools::hierarchy::get_hierarchy(&self.session, req.compressed.unwrap_or(false), &filter)
            .await
    }

    #[tool(
        description = "Parse a UI hierarchy XML file saved earlier into structured nodes, with the same filters as get_hierarchy"
    )]
    async fn load_hierarchy_file(
        &self,
        Parameters(req): Parameters<LoadHierarchyFileRequest>,
    ) -> String {
        let filter = NodesFilter::from(req.filter);
        tools::hierarchy::load_hierarchy_file(&req.path, &filter)
    }

    #[tool(description = "List installed app package names, optionally filtered by substring")]
    async fn app_list(&self, Parameters(req): Parameters<AppListRequest>) -> String {
        tools::apps::app_list(&self.session, req.filter.as_deref()).await
    }
}

#[tool_handler]
impl ServerHandler for DroidMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "droid-mcp server provides tools for UI automation of Android devices. \
                 Call 'connect' first, then use 'get_hierarchy' with a view_class_name \
                 filter to find elements on screen."
                    .into(),
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Guide) = cli.command {
        guide::print_guide();
        return Ok(());
    }

    // Initialize logging to stderr (stdout is used for MCP communication)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting droid-mcp server...");

    let session = DeviceSession::default();
    if let Some(serial) = cli.serial.as_deref() {
        match AdbDevice::connect(&cli.adb, serial).await {
            Ok(device) => {
                tracing::info!(serial = device.serial(), "Connected to device at startup");
                store_device(&session, device);
            }
            Err(e) => tracing::warn!("Startup connect to '{}' failed: {}", serial, e),
        }
    }

    let server = DroidMcpServer::new(cli.adb, session);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server started, waiting for connections...");
    service.waiting().await?;

    Ok(())
}
