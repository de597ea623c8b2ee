use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use version::Language;

#[derive(Parser)]
#[command(name = "sdlc")]
#[command(
    author,
    version,
    about = "Release workflow helper: version bumps, changelog entries and issue cleanup"
)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[clap(long, global = true, env = "SDLC_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Release preparation: validation, version bumps, changelog and cleanup
    #[clap(name = "release-helper")]
    ReleaseHelper {
        #[clap(subcommand)]
        action: ReleaseAction,
    },

    /// Read and write project settings in .sdlc.json
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },

    /// Print the tool version and its release date
    Version,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ReleaseAction {
    /// Check that the current branch is ready to be released
    Validate,

    /// Bump the project version and record release notes
    #[clap(name = "bump-version")]
    BumpVersion {
        /// Release message added to the changelog entry
        #[clap(long)]
        message: String,

        /// Project language (overrides .sdlc.json)
        #[clap(short, long, value_enum)]
        language: Option<Language>,

        /// Set the major component
        #[clap(short = 'M', long)]
        major: Option<u64>,

        /// Set the minor component
        #[clap(short, long)]
        minor: Option<u64>,

        /// Set the patch component
        #[clap(short, long)]
        patch: Option<u64>,

        /// Use this exact version instead of computing one
        #[clap(short = 'V', long = "version")]
        explicit_version: Option<String>,

        /// Update the files but do not commit them
        #[clap(long, default_value_t = false)]
        no_commit: bool,

        /// Issue tracker (overrides .sdlc.json)
        #[clap(short, long)]
        tracker: Option<String>,
    },

    /// Rewrite the changelog entry for the current version
    #[clap(name = "update-changelog")]
    UpdateChangelog,

    /// Show the release notes the next bump would record
    Preview {
        /// Only issues assigned to this user
        #[clap(short, long)]
        user: Option<String>,

        /// Also summarize files changed against main
        #[clap(long, default_value_t = false)]
        changes: bool,

        /// Project language (overrides .sdlc.json)
        #[clap(short, long, value_enum)]
        language: Option<Language>,

        /// Issue tracker (overrides .sdlc.json)
        #[clap(short, long)]
        tracker: Option<String>,
    },

    /// Close the fixed issues shipped with the current version
    Cleanup {
        /// Only issues assigned to this user
        #[clap(short, long)]
        user: Option<String>,

        /// Close without asking for confirmation
        #[clap(short, long, default_value_t = false)]
        force: bool,

        /// Project language (overrides .sdlc.json)
        #[clap(short, long, value_enum)]
        language: Option<Language>,

        /// Issue tracker (overrides .sdlc.json)
        #[clap(short, long)]
        tracker: Option<String>,
    },

    /// Create a new work branch from an up-to-date main
    #[clap(name = "start-work")]
    StartWork {
        /// Kind of work, used as the branch prefix
        #[clap(short = 't', long = "type", value_enum, default_value_t = BranchType::Feature)]
        branch_type: BranchType,

        /// Branch name after the prefix
        #[clap(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Show every setting and where it comes from
    List,

    /// Print one setting
    Get {
        #[clap(value_enum)]
        key: ConfigKey,

        /// Also say whether the value is from the file or a default
        #[clap(long, default_value_t = false)]
        show_source: bool,
    },

    /// Store a setting in .sdlc.json
    Set {
        #[clap(value_enum)]
        key: ConfigKey,
        value: String,
    },

    /// Remove a setting from .sdlc.json
    Unset {
        #[clap(value_enum)]
        key: ConfigKey,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    Language,
    Tracker,
    Repo,
    View,
}

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Language => "language",
            ConfigKey::Tracker => "tracker",
            ConfigKey::Repo => "repo",
            ConfigKey::View => "view",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchType {
    Feature,
    Bugfix,
    Hotfix,
    Maintenance,
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BranchType::Feature => "feature",
            BranchType::Bugfix => "bugfix",
            BranchType::Hotfix => "hotfix",
            BranchType::Maintenance => "maintenance",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bump_version_flags() {
        let cli = Cli::parse_from([
            "sdlc",
            "release-helper",
            "bump-version",
            "--message",
            "Spring release",
            "-l",
            "python",
            "-m",
            "4",
            "--no-commit",
        ]);
        let Commands::ReleaseHelper {
            action:
                ReleaseAction::BumpVersion {
                    message,
                    language,
                    minor,
                    major,
                    no_commit,
                    ..
                },
        } = cli.command
        else {
            panic!("expected bump-version");
        };
        assert_eq!(message, "Spring release");
        assert_eq!(language, Some(Language::Python));
        assert_eq!(minor, Some(4));
        assert_eq!(major, None);
        assert!(no_commit);
    }

    #[test]
    fn start_work_defaults_to_feature() {
        let cli = Cli::parse_from(["sdlc", "release-helper", "start-work"]);
        assert!(matches!(
            cli.command,
            Commands::ReleaseHelper {
                action: ReleaseAction::StartWork {
                    branch_type: BranchType::Feature,
                    name: None
                }
            }
        ));
    }

    #[test]
    fn config_keys_are_restricted() {
        assert!(Cli::try_parse_from(["sdlc", "config", "get", "colour"]).is_err());
        assert!(Cli::try_parse_from(["sdlc", "config", "set", "view", "table"]).is_ok());
    }

    #[test]
    fn root_flag_is_global() {
        let cli = Cli::parse_from(["sdlc", "config", "list", "--root", "/tmp/project"]);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/project")));
    }
}
