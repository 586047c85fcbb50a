use chell::config::Config;
use std::error::Error;

pub fn handle_init() -> Result<(), Box<dyn Error>> {
    // Check if already initialized
    if Config::exists()? {
        return Err("chell is already initialized. Use 'chell config set <key> <value>' to change settings.".into());
    }

    let config = Config::new();
    config.save()?;

    println!("chell initialized successfully!");
    println!(
        "Configuration saved to: {}",
        Config::config_path()?.display()
    );

    Ok(())
}
