// Doxyde - A modern, AI-native CMS built with Rust
// Copyright (C) 2025 Doxyde Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use doxyde_quote::models::Alignment;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "doxyde-quote")]
#[command(about = "Drive the Doxyde quote block from the command line")]
struct Cli {
    /// Configuration file (defaults to ./doxyde-quote.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a saved record and print it as the block would save it
    Normalize {
        /// Record JSON file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Print the plain text form of a record
    Export { file: Option<PathBuf> },

    /// Create a record from plain text
    Import {
        /// Quote text
        text: String,
    },

    /// Print the HTML surface of a record
    Render {
        file: Option<PathBuf>,
        /// Render without editable regions
        #[arg(long)]
        read_only: bool,
    },

    /// Print the settings menu entries as JSON
    Settings { file: Option<PathBuf> },

    /// Change the alignment of a record and print the saved result
    Align {
        /// left or center
        alignment: Alignment,
        file: Option<PathBuf>,
    },

    /// Strip disallowed markup from a record
    Sanitize { file: Option<PathBuf> },

    /// Print the tool descriptor declared to the editor host
    Describe,

    /// Convert content between block types
    Convert {
        /// Source block type
        #[arg(long, default_value = "quote")]
        from: String,
        /// Target block type
        #[arg(long, default_value = "text")]
        to: String,
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout carries the command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doxyde_quote=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Normalize { file } => commands::normalize(&config, &read_input(file.as_deref())?)?,
        Commands::Export { file } => commands::export(&config, &read_input(file.as_deref())?)?,
        Commands::Import { text } => commands::import(&config, &text)?,
        Commands::Render { file, read_only } => {
            commands::render(&config, &read_input(file.as_deref())?, read_only)?
        }
        Commands::Settings { file } => commands::settings(&config, &read_input(file.as_deref())?)?,
        Commands::Align { alignment, file } => {
            commands::align(&config, &read_input(file.as_deref())?, alignment)?
        }
        Commands::Sanitize { file } => commands::sanitize(&config, &read_input(file.as_deref())?)?,
        Commands::Describe => commands::describe()?,
        Commands::Convert { from, to, file } => {
            commands::convert(&config, &read_input(file.as_deref())?, &from, &to)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
