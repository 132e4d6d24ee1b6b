//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for hal9000
#[derive(Parser, Debug)]
#[command(name = "hal9000")]
#[command(author, version, about = "A scripted HAL 9000 you can talk to")]
#[command(long_about = r#"
HAL 9000 answers typed messages with canned, pattern-matched replies and
speaks them aloud through a text-to-speech program.

Lines starting with `/` are commands:
  /open <name>       Open something (the pod bay doors, perhaps)
  /close <name>      Close something
  /relocate <name>   Move to another place
  /quit              End the session

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./hal.toml          Project-level config
3. ~/.config/hal9000/config.toml   Global config

Example:
  hal9000
  hal9000 --mute --location "pod bay"
  hal9000 --listen -vv
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Do not speak replies
    #[arg(short, long)]
    pub mute: bool,

    /// Listen for one spoken phrase before the chat starts
    #[arg(long)]
    pub listen: bool,

    /// Seed for reply selection (makes replies reproducible)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write a JSONL transcript of the session
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Where HAL thinks you are when the session starts
    #[arg(long, value_name = "NAME")]
    pub location: Option<String>,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hal9000"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.mute);
        assert!(!cli.listen);
        assert!(cli.seed.is_none());
        assert!(cli.location.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "hal9000",
            "-vv",
            "--mute",
            "--listen",
            "--seed",
            "2001",
            "--location",
            "pod bay",
            "--transcript",
            "session.jsonl",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.mute);
        assert!(cli.listen);
        assert_eq!(cli.seed, Some(2001));
        assert_eq!(cli.location.as_deref(), Some("pod bay"));
        assert_eq!(cli.transcript, Some(PathBuf::from("session.jsonl")));
    }
}
