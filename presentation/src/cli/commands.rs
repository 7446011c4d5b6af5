//! CLI command definitions

use clap::Parser;
use genie_domain::{ArtifactType, OutputTab};
use std::path::PathBuf;

/// CLI arguments for infragenie
#[derive(Parser, Debug)]
#[command(name = "infragenie")]
#[command(author, version, about = "Generate infrastructure configs from plain-English prompts")]
#[command(long_about = r#"
InfraGenie turns a plain-English prompt into a Kubernetes manifest, Terraform
module, Dockerfile, or any other artifact type the backend understands.

Command mode generates one artifact plus an explanation. Chat mode keeps a
conversation going, resending the whole transcript each turn.

Anonymous use is limited to a number of free prompts; sign in with
--sign-in <ID> for unlimited access.

Configuration files are loaded from (in priority order):
1. GENIE_* environment variables
2. --config <path>     Explicit config file
3. ./genie.toml        Project-level config
4. ~/.config/infragenie/config.toml   Global config

Example:
  infragenie "nginx deployment with 3 replicas"
  infragenie --type terraform --download "S3 bucket with versioning"
  infragenie --check main.tf --type terraform
  infragenie --chat --type dockerfile
"#)]
pub struct Cli {
    /// What to generate (starts the interactive REPL when omitted)
    pub prompt: Option<String>,

    /// Artifact type: kubernetes, terraform, dockerfile, or any other name
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "kubernetes")]
    pub artifact_type: ArtifactType,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Save the generated output to a file
    #[arg(short, long)]
    pub download: bool,

    /// Print (and download) only this half of a command result
    #[arg(long, value_name = "TAB")]
    pub tab: Option<OutputTab>,

    /// Check a file for errors and print the corrected version
    #[arg(long, value_name = "FILE", conflicts_with_all = ["prompt", "chat"])]
    pub check: Option<PathBuf>,

    /// List your previously submitted prompts (signed-in users)
    #[arg(long)]
    pub history: bool,

    /// Sign in with the given user id
    #[arg(long, value_name = "ID")]
    pub sign_in: Option<String>,

    /// Sign out
    #[arg(long, conflicts_with = "sign_in")]
    pub sign_out: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to run the interactive REPL instead of a one-shot command.
    pub fn is_interactive(&self) -> bool {
        self.chat || self.prompt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_prompt() {
        let cli = Cli::try_parse_from(["infragenie", "-t", "tf", "--download", "s3 bucket"]).unwrap();
        assert_eq!(cli.prompt.as_deref(), Some("s3 bucket"));
        assert_eq!(cli.artifact_type, ArtifactType::Terraform);
        assert!(cli.download);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["infragenie"]).unwrap();
        assert_eq!(cli.artifact_type, ArtifactType::Kubernetes);
        assert!(cli.tab.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_custom_type_and_tab() {
        let cli =
            Cli::try_parse_from(["infragenie", "--type", "Helm", "--tab", "explain", "chart"])
                .unwrap();
        assert_eq!(cli.artifact_type, ArtifactType::Other("helm".to_string()));
        assert_eq!(cli.tab, Some(OutputTab::Explanation));
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["infragenie", "-vv", "x"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_conflicts() {
        assert!(Cli::try_parse_from(["infragenie", "--check", "f.tf", "prompt"]).is_err());
        assert!(Cli::try_parse_from(["infragenie", "--sign-in", "a", "--sign-out"]).is_err());
        assert!(Cli::try_parse_from(["infragenie", "--tab", "sideways"]).is_err());
    }
}
