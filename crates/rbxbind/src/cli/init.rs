use anyhow::Result;
use clap::Parser;
use console::style;
use std::fs;
use std::path::Path;

use rbxbind_core::BindConfig;

/// Write a default configuration file.
#[derive(Parser)]
pub struct InitCommand {
    /// Configuration file path.
    #[arg(short, long, default_value = "rbxbind.toml")]
    pub path: String,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self) -> Result<()> {
        write_default_config(Path::new(&self.path), self.force)?;
        println!("{} Created {}", style("✓").green(), style(&self.path).cyan());
        Ok(())
    }
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let content = format!(
        "# rbxbind configuration\n# All settings are optional; these are the defaults.\n\n{}",
        BindConfig::default().to_toml()?
    );
    fs::write(path, content)?;
    Ok(())
}
