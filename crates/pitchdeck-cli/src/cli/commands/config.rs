//! `pitchdeck config` – show where settings come from.

use anyhow::Result;
use pitchdeck_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_effective()?;
    println!("Config file: {}", path.display());
    println!("Environment overrides: {}", config::ENV_ALLOWLIST.join(", "));
    println!("Endpoint: {}", cfg.analyze_url()?);
    println!();
    print!("{}", toml::to_string_pretty(&cfg)?);
    Ok(())
}
