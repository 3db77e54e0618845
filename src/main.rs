use anyhow::Result;
use clap::{Parser, Subcommand};
use repo_fetch::commands::clone::OneOffClone;
use repo_fetch::commands::validators;
use repo_fetch::git::RepositoryDescriptor;
use repo_fetch::{commands::*, config::Config, constants};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repo-fetch")]
#[command(about = "Acquire git repositories and resolve raw file links")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone configured sources, or a single repository given with --url
    Clone {
        /// Specific source names to clone (if not provided, uses tag filter or all sources)
        repos: Vec<String>,

        /// Filter sources by tag (can be specified multiple times)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Exclude sources with these tags (can be specified multiple times)
        #[arg(short = 'e', long)]
        exclude_tag: Vec<String>,

        /// Execute operations in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Repository URL for a one-off clone
        #[arg(long)]
        url: Option<String>,

        /// Target directory for a one-off clone
        #[arg(long)]
        target: Option<String>,

        /// Revision to check out after a one-off clone
        #[arg(long)]
        revision: Option<String>,

        /// Access token for a one-off clone over https
        #[arg(long)]
        token: Option<String>,
    },

    /// Print the checked out branch of a repository
    Branch {
        /// Repository path (if not provided, reports every configured source)
        path: Option<PathBuf>,

        /// Filter sources by tag (can be specified multiple times)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Exclude sources with these tags (can be specified multiple times)
        #[arg(short = 'e', long)]
        exclude_tag: Vec<String>,
    },

    /// Print the raw content URL of a GitHub browse URL
    RawUrl {
        url: String,

        /// Branch, tag or commit (defaults to main)
        #[arg(long, default_value = "")]
        revision: String,

        /// Path inside the repository
        #[arg(long, default_value = "")]
        context: String,

        /// Fail unless the URL is hosted on GitHub
        #[arg(long)]
        validate: bool,
    },

    /// Download a single file from a GitHub repository
    Fetch {
        url: String,

        /// Branch, tag or commit (defaults to main)
        #[arg(long, default_value = "")]
        revision: String,

        /// Path of the file inside the repository
        #[arg(long, default_value = "")]
        context: String,

        /// Bearer token for private repositories
        #[arg(long, env = constants::github::TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,

        /// Write the file here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Clone a sample from a devfile registry
    Sample {
        /// Sample name in the registry index
        name: String,

        /// Directory to clone into
        target: PathBuf,

        /// Registry URL (defaults to the configured registry)
        #[arg(long)]
        registry: Option<String>,

        /// Revision to check out after cloning
        #[arg(long)]
        revision: Option<String>,

        /// Access token for private sample repositories
        #[arg(long)]
        token: Option<String>,
    },

    /// List the sample types of a devfile registry
    Types {
        /// Registry URL (defaults to the configured registry)
        #[arg(long)]
        registry: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => execute_command(command, &cli.config).await?,
        None => {
            anyhow::bail!("No command provided. Use --help for usage information.");
        }
    }

    Ok(())
}

async fn execute_command(command: Commands, config_path: &str) -> Result<()> {
    match command {
        Commands::Clone {
            repos,
            tag,
            exclude_tag,
            parallel,
            url,
            target,
            revision,
            token,
        } => {
            let repos = if repos.is_empty() { None } else { Some(repos) };

            // Validate clone command arguments using centralized validators
            validators::validate_clone_args(&url, &target, &repos)?;
            validators::validate_tag_filters(&tag)?;
            validators::validate_tag_filters(&exclude_tag)?;
            validators::validate_revision(&revision)?;
            if let Some(names) = &repos {
                validators::validate_source_names(names)?;
            }

            let one_off = match (url, target) {
                (Some(url), Some(target)) => {
                    let mut descriptor = RepositoryDescriptor::new(url);
                    if let Some(revision) = revision {
                        descriptor = descriptor.with_revision(revision);
                    }
                    if let Some(token) = token {
                        descriptor = descriptor.with_access_token(token);
                    }
                    Some(OneOffClone {
                        target: PathBuf::from(target),
                        descriptor,
                    })
                }
                _ => None,
            };

            let config = if one_off.is_some() {
                Config::load_or_default(config_path)?
            } else {
                Config::load_config(config_path)?
            };

            let context = CommandContext {
                config,
                tag,
                exclude_tag,
                parallel,
                repos,
            };
            CloneCommand { one_off }.execute(&context).await?;
        }
        Commands::Branch {
            path,
            tag,
            exclude_tag,
        } => {
            validators::validate_tag_filters(&tag)?;
            validators::validate_tag_filters(&exclude_tag)?;

            let config = if path.is_some() {
                Config::new()
            } else {
                Config::load_config(config_path)?
            };
            let context = CommandContext {
                config,
                tag,
                exclude_tag,
                ..Default::default()
            };
            BranchCommand { path }.execute(&context).await?;
        }
        Commands::RawUrl {
            url,
            revision,
            context,
            validate,
        } => {
            RawUrlCommand {
                url,
                revision,
                context,
                validate,
            }
            .execute(&CommandContext::default())
            .await?;
        }
        Commands::Fetch {
            url,
            revision,
            context,
            token,
            output,
        } => {
            validators::validate_output_path(&output)?;

            let config = Config::load_or_default(config_path)?;
            FetchCommand {
                url,
                revision,
                context,
                token,
                output,
            }
            .execute(&CommandContext::with_config(config))
            .await?;
        }
        Commands::Sample {
            name,
            target,
            registry,
            revision,
            token,
        } => {
            validators::validate_revision(&revision)?;

            let config = Config::load_or_default(config_path)?;
            SampleCommand {
                name,
                target,
                revision,
                token,
                registry,
            }
            .execute(&CommandContext::with_config(config))
            .await?;
        }
        Commands::Types { registry, json } => {
            let config = Config::load_or_default(config_path)?;
            TypesCommand { registry, json }
                .execute(&CommandContext::with_config(config))
                .await?;
        }
    }

    Ok(())
}
