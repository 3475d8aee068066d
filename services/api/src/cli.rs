use crate::assess::{run_front_assessment, run_side_assessment, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use facial_harmony::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "facial-harmony-api",
    about = "Serve or run facial harmony assessments from the command line",
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
    /// Score a request body stored in a JSON file
    Assess {
        #[command(subcommand)]
        command: AssessCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AssessCommand {
    /// Score a side profile
    Side(AssessArgs),
    /// Score a front profile
    Front(AssessArgs),
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
        Command::Assess {
            command: AssessCommand::Side(args),
        } => run_side_assessment(args),
        Command::Assess {
            command: AssessCommand::Front(args),
        } => run_front_assessment(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["facial-harmony-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_side_takes_input_and_json_flag() {
        let cli = Cli::try_parse_from([
            "facial-harmony-api",
            "assess",
            "side",
            "--input",
            "body.json",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess {
                command: AssessCommand::Side(args),
            }) => {
                assert_eq!(args.input, std::path::PathBuf::from("body.json"));
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn assess_requires_an_input_file() {
        assert!(Cli::try_parse_from(["facial-harmony-api", "assess", "front"]).is_err());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["facial-harmony-api", "serve", "--port", "9100"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9100));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
