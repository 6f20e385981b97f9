use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  min_percent_rated: {}", config.min_percent_rated);
    println!("  max_rating: {}", config.max_rating);
    println!("  group_by: {}", config.group_by);
    println!("  log_level: {:?}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (CULLER_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();
    let created = config::ensure_config_file(&config_path)?;

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure culler.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
