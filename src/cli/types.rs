use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "pressmark")]
#[command(about = "Turns a directory of Markdown pages into static HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub options: SiteOptions,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Directory and configuration overrides shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SiteOptions {
    /// Configuration file (defaults to ./_config.yml, ./_config.yaml or ./_config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Markdown source directory (defaults to ./pages)
    #[arg(long, value_name = "DIR", global = true)]
    pub pages: Option<PathBuf>,

    /// Output directory (defaults to ./public)
    #[arg(long, value_name = "DIR", global = true)]
    pub public: Option<PathBuf>,

    /// Template directory (defaults to ./templates)
    #[arg(long, value_name = "DIR", global = true)]
    pub templates: Option<PathBuf>,

    /// Keep directory listing order instead of sorting pages by file name
    #[arg(long, global = true, default_value_t = false)]
    pub unsorted: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the site (the default when no command is given)
    #[command(alias = "b")]
    Build,

    /// Remove generated HTML files from the output directory without building
    Clean,
}
