use chell::config::Config;
use std::error::Error;
use std::process::Command;

pub fn handle_config_view() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    println!("Current chell configuration:");
    println!("  default_mode: {}", config.default_mode);
    println!("  default_height: {}", config.default_height);
    println!(
        "  log_file: {}",
        config.log_file.as_deref().unwrap_or("(none)")
    );

    Ok(())
}

pub fn handle_config_set(key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;

    config.set_value(key, value)?;
    config.save()?;

    println!("Configuration updated: {key} = {value}");

    Ok(())
}

pub fn handle_config_edit() -> Result<(), Box<dyn Error>> {
    // Start from the defaults so there is always something to edit
    if !Config::exists()? {
        Config::new().save()?;
    }

    let config_path = Config::config_path()?;
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());
    log::debug!("Editing {} with {editor}", config_path.display());

    let status = Command::new(&editor).arg(&config_path).status().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            format!("Editor '{editor}' not found. Set $VISUAL or $EDITOR.")
        } else {
            format!("Failed to launch editor '{editor}': {e}")
        }
    })?;
    if !status.success() {
        return Err(format!("Editor '{editor}' exited with {status}").into());
    }

    Config::load()
        .and_then(|config| config.validate())
        .map_err(|e| format!("{} is invalid: {e}", config_path.display()))?;
    println!("Configuration saved: {}", config_path.display());

    Ok(())
}
