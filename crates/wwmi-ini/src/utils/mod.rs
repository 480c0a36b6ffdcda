use crate::errors::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use miette::Result;

pub mod config;

/// File name of the generated ini.
pub const MOD_INI_FILE_NAME: &str = "mod.ini";

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Resolves the export description path, searching the current directory if none is given.
pub fn resolve_config_path(config_path: Option<String>) -> Result<Utf8PathBuf> {
    match config_path {
        Some(path) => Ok(Utf8PathBuf::from(path)),
        None => {
            let cwd = std::env::current_dir().map_err(CliError::from)?;
            let cwd = Utf8PathBuf::from_path_buf(cwd)
                .map_err(|p| miette::miette!("Non UTF-8 working directory: {}", p.display()))?;
            resolve_correct_config_extension(&cwd)
        }
    }
}

pub fn resolve_correct_config_extension(export_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    // JSON first, then TOML
    let config_extensions = ["json", "toml"];

    for ext in config_extensions {
        let config_path = export_dir.join(format!("mod.export.{}", ext));
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    Err(CliError::config_not_found(export_dir.as_std_path().to_path_buf()).into())
}

/// Reads a mod.ini with `\r\n` line endings folded to `\n`.
///
/// Files written on Windows carry CRLF endings, while the checksum trailer is
/// computed over the LF text that was generated.
pub fn read_ini_text(path: &Utf8Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(CliError::from)?;
    Ok(text.replace("\r\n", "\n"))
}

/// Resolves the output directory relative to the export description's directory.
pub fn resolve_output_dir(output_dir: &str, config_path: &Utf8Path) -> Utf8PathBuf {
    let output_dir = Utf8PathBuf::from(output_dir);
    if output_dir.is_absolute() {
        return output_dir;
    }

    match config_path.parent() {
        Some(parent) => parent.join(output_dir),
        None => output_dir,
    }
}
