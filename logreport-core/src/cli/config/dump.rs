use crate::conf::load_config;
use std::path::Path;

pub fn dump(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
