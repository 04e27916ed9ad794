use clap::{Parser, Subcommand};
use logreport_core::cli;
use logreport_core::logging::LogFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Logreport: slowest-endpoint report from a day of nginx access logs"
)]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Format of the analyzer's own log output
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },

    /// Build the report for the newest log (default)
    Run,
}

fn main() {
    let args = Cli::parse();

    let result = match args.command {
        Some(Command::Config { cmd }) => cli::config::run(cmd, &args.config),

        Some(Command::Run) | None => cli::run(&args.config, args.log_format),
    };

    if let Err(e) = result {
        eprintln!("logreport error: {e:#}");
        std::process::exit(1);
    }
}
