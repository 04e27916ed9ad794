use crate::cli::hint::error_hint;
use crate::conf::load_config;
use crate::pipeline::plan;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    println!("{} Config loaded from {}", "✔".green(), config_path.display());
    println!("{} report size {}", "✔".green(), config.report_size);
    println!(
        "{} error threshold {}%",
        "✔".green(),
        config.error_threshold
    );

    if !config.report_template.is_file() {
        println!(
            "{} template {} not found",
            "✘".red(),
            config.report_template.display()
        );
    }

    match plan(&config) {
        Ok(plan) => {
            println!(
                "{} newest log {}",
                "✔".green(),
                plan.log.path.display()
            );
            if plan.is_done() {
                println!(
                    "{} report {} already exists, a run would do nothing",
                    "•".yellow(),
                    plan.report.display()
                );
            } else {
                println!("{} report would be written to {}", "✔".green(), plan.report.display());
            }
            Ok(())
        }
        Err(err) => {
            println!("{} {}", "✘".red(), err);
            if let Some(hint) = error_hint(&err) {
                println!();
                println!("{hint}");
            }
            Err(err.into())
        }
    }
}
