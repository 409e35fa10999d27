// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! reinstallhub - list Macs missing the Workspace ONE Hub and reinstall it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hub_credentials::KeyringStore;
use tracing_subscriber::EnvFilter;
use wso_client::WsoClient;

mod commands;
mod config;
mod output;

use commands::ConfigCommand;
use config::{Settings, SettingsOverrides, resolve_settings};

#[derive(Parser)]
#[command(
    name = "reinstallhub",
    version,
    about = "Reinstall the Workspace ONE Hub on Macs that lost it",
    long_about = "List managed Macs tagged as missing the Workspace ONE Intelligent Hub \
                  and trigger a remote reinstallation through the UEM REST API"
)]
struct Cli {
    /// UEM tenant URL override
    #[arg(short = 'U', long, global = true, env = "REINSTALLHUB_URL")]
    url: Option<String>,

    /// Hub internal app ID override
    #[arg(long, global = true, env = "REINSTALLHUB_APP_ID")]
    app_id: Option<String>,

    /// Missing-Hub tag ID override
    #[arg(long, global = true, env = "REINSTALLHUB_TAG_ID")]
    tag_id: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store tenant settings and API credentials
    ///
    /// Credentials go to the OS keychain. On Linux this is the kernel
    /// session keyring, which is emptied at logout; set
    /// REINSTALLHUB_USERNAME, REINSTALLHUB_PASSWORD and REINSTALLHUB_API_KEY
    /// for a persistent setup.
    Configure(commands::configure::ConfigureArgs),

    /// Inspect the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// List Macs carrying the missing-Hub tag
    #[command(visible_alias = "ls", alias = "list")]
    Devices,

    /// Reinstall the Hub on selected Macs
    Reinstall(commands::reinstall::ReinstallArgs),

    /// Forget stored settings and credentials
    Reset(commands::reset::ResetArgs),
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            url: self.url.clone(),
            app_id: self.app_id.clone(),
            tag_id: self.tag_id.clone(),
        }
    }

    /// Build an authenticated client from settings and stored credentials
    fn connect(&self) -> Result<(WsoClient, Settings)> {
        let settings = resolve_settings(&self.overrides())?;

        let store = KeyringStore::default();
        let credentials = hub_credentials::resolve(&store)
            .context("Failed to read API credentials")?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No API credentials stored. Run 'reinstallhub configure' or set \
                     REINSTALLHUB_USERNAME, REINSTALLHUB_PASSWORD and REINSTALLHUB_API_KEY"
                )
            })?;

        let client = WsoClient::new(&settings.url, &credentials)?;
        Ok((client, settings))
    }
}

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("reinstallhub=debug,wso_client=debug,hub_credentials=debug")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Configure(args) => commands::configure::run(
            args.clone(),
            &cli.overrides(),
            &KeyringStore::default(),
            &config::paths::config_file(),
        ),
        Commands::Config { command } => command.run(
            &cli.overrides(),
            &KeyringStore::default(),
            &config::paths::config_file(),
            cli.json,
        ),
        Commands::Devices => {
            let (client, settings) = cli.connect()?;
            commands::devices::run(&client, &settings.tag_id, cli.json).await
        }
        Commands::Reinstall(args) => {
            let (client, settings) = cli.connect()?;
            commands::reinstall::run(args.clone(), &client, &settings, cli.json).await
        }
        Commands::Reset(args) => commands::reset::run(
            args.clone(),
            &KeyringStore::default(),
            &config::paths::config_file(),
        ),
    }
}
