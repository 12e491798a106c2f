use crate::parse::{run_parse, ParseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rea_transmorgrifier::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "REA Listing Transmorgrifier",
    about = "Convert realestate.com.au XML listing feeds into typed listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Parse an XML document from disk and print the result
    Parse(ParseArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Parse(args) => run_parse(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["rea-transmorgrifier-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_command_reads_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "rea-transmorgrifier-api",
            "parse",
            "--file",
            "feed.xml",
            "--existing",
            "listing.json",
            "--pretty",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Parse(args)) => {
                assert_eq!(args.file, PathBuf::from("feed.xml"));
                assert_eq!(args.existing, Some(PathBuf::from("listing.json")));
                assert!(args.pretty);
                assert!(!args.summary);
            }
            other => panic!("expected parse command, got {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["rea-transmorgrifier-api", "serve", "--port", "8080"])
            .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.host, None);
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
