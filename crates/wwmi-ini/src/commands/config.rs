use crate::utils::config::{self, AppConfig};
use colored::Colorize;
use miette::Result;

fn update_config(update: impl FnOnce(&mut AppConfig)) -> Result<()> {
    let mut cfg = config::load_config();
    update(&mut cfg);
    config::save_config(&cfg).map_err(|e| miette::miette!("Failed to save config: {}", e))
}

pub fn show_config() -> Result<()> {
    let cfg = config::load_config();
    let config_path = config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    println!();
    println!("  {} {}", "config_file:".bright_white(), config_path);
    println!(
        "  {} {}",
        "comment_ini:".bright_white(),
        cfg.comment_ini.to_string().bright_cyan()
    );
    match cfg.output_dir {
        Some(dir) => println!("  {} {}", "output_dir:".bright_white(), dir),
        None => println!(
            "  {} {}",
            "output_dir:".bright_white(),
            "(not set)".bright_yellow()
        ),
    }
    println!();
    Ok(())
}

pub fn set_comment_ini(value: bool) -> Result<()> {
    update_config(|cfg| cfg.comment_ini = value)?;

    let state = if value { "kept" } else { "stripped" };
    println!(
        "{}",
        format!("✓ Explanatory comments will be {} by default", state)
            .bright_green()
            .bold()
    );
    Ok(())
}

pub fn set_output_dir(path: String) -> Result<()> {
    update_config(|cfg| cfg.output_dir = Some(path.clone()))?;

    println!(
        "{}",
        "✓ Output directory set successfully!".bright_green().bold()
    );
    println!();
    println!(
        "  {} {}",
        "Path:".bright_white().bold(),
        path.as_str().bright_green()
    );
    Ok(())
}

pub fn reset_config() -> Result<()> {
    let config_path = config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    config::save_config(&AppConfig::default())
        .map_err(|e| miette::miette!("Failed to reset config: {}", e))?;

    println!(
        "{}",
        "✓ Configuration reset to defaults".bright_green().bold()
    );
    println!();
    println!("  {} {}", "Config file:".bright_white().bold(), config_path);
    println!();
    Ok(())
}
