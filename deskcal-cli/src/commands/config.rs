use std::path::Path;

use anyhow::Result;
use deskcal_core::DeskcalConfig;

pub fn run(config_path: Option<&Path>, path_only: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => DeskcalConfig::config_path()?,
    };

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    let config = match config_path {
        Some(path) => DeskcalConfig::load_from(path)?,
        None => DeskcalConfig::load()?,
    };

    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}
