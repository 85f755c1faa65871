//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Post-process generated HTML manuals
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: manpost.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "manpost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add the manual stylesheet and a content wrapper to every page, in place
    #[command(visible_alias = "i")]
    Inject {
        #[command(flatten)]
        run_args: RunArgs,
    },

    /// Turn every page into a PHP website fragment (removes the .html files)
    #[command(visible_alias = "x")]
    Extract {
        #[command(flatten)]
        run_args: RunArgs,

        /// Replace existing .php files instead of failing
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        force: Option<bool>,
    },
}

/// Shared arguments for Inject and Extract commands
#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory holding the generated .html pages (default: `walk.dir` from config)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Transform pages in memory only, write nothing
    #[arg(short, long)]
    pub dry: bool,

    /// Process pages on all cores
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub parallel: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    /// Arguments shared by every subcommand.
    pub const fn run_args(&self) -> &RunArgs {
        match self {
            Self::Inject { run_args } | Self::Extract { run_args, .. } => run_args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inject() {
        let cli = Cli::parse_from(["manpost", "inject", "doc/manual", "--dry"]);
        let args = cli.command.run_args();
        assert_eq!(args.dir, Some(PathBuf::from("doc/manual")));
        assert!(args.dry);
        assert_eq!(args.parallel, None);
        assert!(matches!(cli.command, Commands::Inject { .. }));
        assert_eq!(cli.config, PathBuf::from("manpost.toml"));
    }

    #[test]
    fn test_parse_extract_flags() {
        let cli = Cli::parse_from(["manpost", "-C", "site.toml", "x", "--force", "-p", "false"]);
        let Commands::Extract { run_args, force } = &cli.command else {
            panic!("expected extract");
        };
        assert_eq!(*force, Some(true));
        assert_eq!(run_args.parallel, Some(false));
        assert_eq!(run_args.dir, None);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
