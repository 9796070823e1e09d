use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use rbxbind_codegen::{Bindings, CSharpGenerator, DeclShape};
use rbxbind_core::BindConfig;

/// Generate C# declarations from an API dump.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Configuration file path.
    #[arg(short, long, default_value = "rbxbind.toml")]
    pub config: String,

    /// API dump path (overrides config).
    #[arg(short, long)]
    pub dump: Option<String>,

    /// Documentation path (overrides config).
    #[arg(long)]
    pub docs: Option<String>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip the elevated (plugin) tier.
    #[arg(long)]
    pub no_elevated: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<()> {
        let log_level = if self.verbose { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
            .init();

        let config = self.load_config()?;

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));

        pb.set_message("Generating declarations...");
        let (bindings, written) = run(&config)?;
        pb.finish_and_clear();

        print_summary(&bindings, &written, &config.output.dir);
        Ok(())
    }

    /// Load the config file if present and apply command-line overrides.
    fn load_config(&self) -> Result<BindConfig> {
        let mut config = if Path::new(&self.config).exists() {
            info!("Loading configuration from {}", self.config);
            BindConfig::from_file(&self.config)?
        } else {
            info!("No {} found, using defaults", self.config);
            BindConfig::default()
        };

        if let Some(dump) = &self.dump {
            config.input.dump = dump.clone();
        }
        if let Some(docs) = &self.docs {
            config.input.docs = Some(docs.clone());
        }
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if self.no_elevated {
            config.generator.elevated = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Load inputs, generate, and write artifacts.
fn run(config: &BindConfig) -> Result<(Bindings, Vec<PathBuf>)> {
    let dump_path = Path::new(&config.input.dump);
    if !dump_path.exists() {
        anyhow::bail!(
            "API dump not found: {}\nSet [input].dump in rbxbind.toml or pass --dump.",
            config.input.dump
        );
    }
    let dump = fs::read_to_string(dump_path)
        .with_context(|| format!("Failed to read API dump {}", config.input.dump))?;

    let docs = match &config.input.docs {
        Some(path) if Path::new(path).exists() => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read documentation {}", path))?,
        ),
        Some(path) => {
            warn!("Documentation file {} not found, using fallback text", path);
            None
        }
        None => None,
    };

    let bindings = Bindings::from_json(&dump, docs.as_deref(), &config.generator)?;

    let generator = CSharpGenerator::new(&config.output.dir, &config.generator);
    let written = generator.generate(&bindings, &config.output)?;

    Ok((bindings, written))
}

fn print_summary(bindings: &Bindings, written: &[PathBuf], output_dir: &str) {
    println!();
    println!(
        "  {} Generated {} classes and {} stubs",
        style("✓").green(),
        style(bindings.base.count(DeclShape::Full)).cyan(),
        style(bindings.base.count(DeclShape::Stub)).cyan()
    );
    if let Some(elevated) = &bindings.elevated {
        println!(
            "  {} Generated {} plugin extensions and {} plugin-only classes",
            style("✓").green(),
            style(elevated.count(DeclShape::Extension)).cyan(),
            style(elevated.count(DeclShape::PluginOnly)).cyan()
        );
    }
    println!(
        "  {} Generated {} enums",
        style("✓").green(),
        style(bindings.enums.enums.len()).cyan()
    );
    println!(
        "  {} API dump version {}",
        style("ℹ").blue(),
        style(bindings.version).cyan()
    );
    println!(
        "  {} Output: {} ({} files)",
        style("📁").dim(),
        style(output_dir).cyan(),
        written.len()
    );
    println!();
}
