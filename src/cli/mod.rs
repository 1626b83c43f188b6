// CLI module for serving and maintenance operations

pub mod analytics;
pub mod migrate;

use clap::{Parser, Subcommand};

/// E-waste records backend
#[derive(Parser, Debug)]
#[command(name = "ewaste-backend")]
#[command(about = "E-waste records backend and maintenance CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,

    /// Print the analytics snapshot as JSON
    Analytics,
}

impl Cli {
    /// The selected command, defaulting to `serve`
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["ewaste-backend"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve);
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["ewaste-backend", "migrate"]).unwrap();
        assert_eq!(cli.command(), Commands::Migrate);

        let cli = Cli::try_parse_from(["ewaste-backend", "analytics"]).unwrap();
        assert_eq!(cli.command(), Commands::Analytics);

        assert!(Cli::try_parse_from(["ewaste-backend", "bootstrap"]).is_err());
    }
}
