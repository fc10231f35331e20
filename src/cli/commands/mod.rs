//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod doctor;
pub mod init;
pub mod stage;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::core::global_config::GlobalConfig;
use crate::core::project::Project;
use crate::infra::dirs::PickupDirs;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new pickup project
    Init {
        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Package in build order (repeatable; discovered from java/ if omitted)
        #[arg(short, long = "package")]
        package: Vec<String>,

        /// Overwrite an existing pickup.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Compile packages in catalog order, stopping at the first failure
    Build {
        /// Start at the first package without artifacts
        #[arg(short, long, conflicts_with = "package")]
        resume: bool,

        /// Build only these packages (repeatable)
        #[arg(short, long = "package")]
        package: Vec<String>,

        /// Extra compiler argument for this run (repeatable)
        #[arg(long = "extra-arg", allow_hyphen_values = true)]
        extra_arg: Vec<String>,
    },

    /// Show which packages are built and where a resume would start
    Status,

    /// Remove build artifacts
    Clean {
        /// Clean only these packages (repeatable)
        #[arg(short, long = "package")]
        package: Vec<String>,
    },

    /// Copy listed sources from the trunk checkout
    Stage,

    /// Check the compiler and project configuration
    Doctor,
}

impl Commands {
    /// Execute the command
    pub async fn run(self, javac: Option<&str>) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        match self {
            Self::Init {
                name,
                package,
                force,
            } => init::execute(&current_dir, name, package, force).await,
            Self::Build {
                resume,
                package,
                extra_arg,
            } => {
                let options = build::BuildOptions {
                    resume,
                    packages: package,
                    extra_args: extra_arg,
                };
                build::execute(&current_dir, javac, options).await
            }
            Self::Status => status::execute(&current_dir).await,
            Self::Clean { package } => clean::execute(&current_dir, &package).await,
            Self::Stage => stage::execute(&current_dir).await,
            Self::Doctor => doctor::execute(&current_dir, javac).await,
        }
    }
}

/// Load the project in `dir`, with a hint when there is none
pub(crate) fn load_project(dir: &Path) -> Result<Project> {
    Project::load(dir).with_context(|| {
        format!(
            "Failed to load project in {}. Run 'pickup init' to create one.",
            dir.display()
        )
    })
}

/// Load the global config, honouring `PICKUP_CONFIG_DIR`
pub(crate) fn load_global_config() -> Result<GlobalConfig> {
    GlobalConfig::load(&PickupDirs::new()).with_context(|| "Failed to load global configuration")
}
