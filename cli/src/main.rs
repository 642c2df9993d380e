use anyhow::Result;
use clap::{Parser, Subcommand};
use skilldock_core::config::Config;
use skilldock_core::skills::SkillStore;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "skilldock")]
#[command(about = "skilldock - install and manage skill bundles", long_about = None)]
struct Cli {
    /// Root directory searched for local skills (overrides the configured
    /// local root).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show local and installed skills.
    List,
    /// Install every skill found under the local root.
    #[command(visible_alias = "install")]
    Sync,
    /// Install one skill from a local path or a git URL.
    Add {
        /// Relative skill path, or a repository URL.
        source: String,
        /// Name to install the skill under.
        #[arg(long)]
        skill: Option<String>,
        /// Subdirectory of the remote repository to install.
        #[arg(long)]
        path: Option<String>,
    },
    /// Remove an installed skill.
    Remove {
        /// Installed identifier, as shown by `list`.
        name: String,
    },
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default()?;

    let local_root = cli.root.unwrap_or_else(|| config.local_root.clone());
    let store = SkillStore::new(config.store_root.clone());

    match cli.command {
        Commands::List => commands::list(&store, &local_root),
        Commands::Sync => commands::sync(&store, &local_root),
        Commands::Add {
            source,
            skill,
            path,
        } => commands::add(&store, &local_root, &source, skill.as_deref(), path.as_deref()),
        Commands::Remove { name } => commands::remove(&store, &name),
    }
}
