mod check;
mod dump;

#[cfg(test)]
mod tests;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration, resolve the newest log and exit
    Check,

    /// Print the resolved configuration as JSON
    Dump,
}

pub fn run(cmd: ConfigCmd, config_path: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check => check(config_path),
        ConfigCmd::Dump => dump(config_path),
    }
}
