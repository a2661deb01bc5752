use clap::{Parser, Subcommand};

/// Aggregate headlines from the built-in news source catalog
/// and print them as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to config.yaml file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the source listing
    List {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Fetch the current entries of one or more sources
    Fetch {
        /// Source ids, as printed by `list`
        #[arg(required = true)]
        ids: Vec<String>,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Build the registry and report the number of sources
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_fetch_parsing() {
        let cli = Cli::parse_from([
            "newssum",
            "--config",
            "./config.yaml",
            "fetch",
            "cbcnews",
            "bbcworld",
            "--output",
            "./out/news.json",
        ]);

        assert_eq!(cli.config.as_deref(), Some("./config.yaml"));
        assert_eq!(
            cli.command,
            Command::Fetch {
                ids: vec!["cbcnews".to_string(), "bbcworld".to_string()],
                output: Some("./out/news.json".to_string()),
                pretty: false,
            }
        );
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "newssum",
            "fetch",
            "-p",
            "-o",
            "/tmp/out.json",
            "scmp",
            "-c",
            "/tmp/c.yaml",
        ]);

        assert_eq!(cli.config.as_deref(), Some("/tmp/c.yaml"));
        match cli.command {
            Command::Fetch { ids, output, pretty } => {
                assert_eq!(ids, vec!["scmp"]);
                assert_eq!(output.as_deref(), Some("/tmp/out.json"));
                assert!(pretty);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_list_and_check() {
        let cli = Cli::parse_from(["newssum", "list", "--pretty"]);
        assert_eq!(cli.command, Command::List { pretty: true });
        assert!(cli.config.is_none());

        let cli = Cli::parse_from(["newssum", "check"]);
        assert_eq!(cli.command, Command::Check);
    }

    #[test]
    fn test_fetch_requires_an_id() {
        assert!(Cli::try_parse_from(["newssum", "fetch"]).is_err());
    }
}
