use anyhow::Result;

use bannerloop_core::AppConfig;

pub fn run() -> Result<()> {
    let config = AppConfig::default();
    config.save()?;
    println!("Wrote {}", AppConfig::config_path().display());
    Ok(())
}
