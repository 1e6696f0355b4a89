use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fact-rip")]
#[command(about = "fact.rip landing experience in the terminal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the durable store and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Telemetry endpoint, overrides config and environment
    #[arg(long, global = true)]
    pub telemetry_endpoint: Option<String>,

    /// Error report endpoint, overrides config and environment
    #[arg(long, global = true)]
    pub report_endpoint: Option<String>,

    /// Send an error report if the recovery screen is shown
    #[arg(long, global = true)]
    pub send_report: bool,

    /// Resume from the recovery screen by remounting the app
    #[arg(long, global = true)]
    pub resume: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Render the landing screen
    Show,
    /// Join the watchtower and wait for confirmation
    Join {
        /// Press Continue once the modal is ready
        #[arg(long = "continue")]
        dismiss: bool,
    },
    /// Close the modal if it is open
    Close,
    /// Forget this visitor
    Reset,
    /// Print the journey state as JSON
    Status,
}

impl Command {
    /// Component path reported when this command fails.
    pub fn component_stack(&self) -> &'static str {
        match self {
            Command::Show => "App > Landing",
            Command::Join { .. } => "App > Landing > JoinButton",
            Command::Close => "App > Landing > Modal",
            Command::Reset => "App > Landing > Modal > Reset",
            Command::Status => "App > Status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fact-rip",
            "join",
            "--continue",
            "--data-dir",
            "/tmp/fact",
            "--telemetry-endpoint",
            "https://t.example/api",
        ])
        .unwrap();

        assert_eq!(cli.command, Command::Join { dismiss: true });
        assert_eq!(cli.options.data_dir, Some(PathBuf::from("/tmp/fact")));
        assert_eq!(
            cli.options.telemetry_endpoint.as_deref(),
            Some("https://t.example/api")
        );
        assert!(!cli.options.resume);
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Cli::try_parse_from(["fact-rip"]).is_err());
    }
}
