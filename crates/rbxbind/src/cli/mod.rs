mod generate;
mod init;

pub use generate::GenerateCommand;
pub use init::InitCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// rbxbind - typed C# bindings from the Roblox API dump
#[derive(Parser)]
#[command(name = "rbxbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate C# declarations from an API dump.
    Generate(GenerateCommand),

    /// Write a default rbxbind.toml in the current directory.
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(),
            Commands::Init(cmd) => cmd.execute(),
        }
    }
}
