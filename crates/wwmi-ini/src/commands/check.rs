use camino::Utf8PathBuf;
use colored::Colorize;
use migoto_ini::checksum;
use miette::Result;

use crate::errors::CliError;
use crate::println_pad;
use crate::utils;

#[derive(Debug)]
pub struct CheckModIniArgs {
    pub file_path: String,
}

/// Outcome of checking a mod.ini against its checksum trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IniStatus {
    Unsigned,
    Modified,
    Unmodified,
}

pub fn ini_status(text: &str) -> IniStatus {
    let last_line = text.lines().last().unwrap_or_default();
    if checksum::extract_checksum(last_line).is_none() {
        IniStatus::Unsigned
    } else if checksum::is_text_modified(text) {
        IniStatus::Modified
    } else {
        IniStatus::Unmodified
    }
}

pub fn check_mod_ini(args: CheckModIniArgs) -> Result<()> {
    let path = Utf8PathBuf::from(&args.file_path);
    if !path.exists() {
        return Err(CliError::file_not_found(path.into()).into());
    }

    let text = utils::read_ini_text(&path)?;

    match ini_status(&text) {
        IniStatus::Unsigned => println!(
            "{} {}",
            "⚠ No checksum trailer found:".bright_yellow().bold(),
            path.as_str().bright_white()
        ),
        IniStatus::Modified => println!(
            "{} {}",
            "✗ File was edited by hand:".bright_red().bold(),
            path.as_str().bright_white()
        ),
        IniStatus::Unmodified => println!(
            "{} {}",
            "✓ File is unmodified:".bright_green().bold(),
            path.as_str().bright_white()
        ),
    }

    if let Some((content, trailer)) = split_trailer(&text) {
        println_pad!(
            "{} {}\n{} {}",
            "Stamped:".bright_white(),
            trailer,
            "Actual: ".bright_white(),
            checksum::sha256_hex(content)
        );
    }

    Ok(())
}

/// Splits signed text into the hashed content and the claimed checksum.
fn split_trailer(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let start = body.rfind('\n').map_or(0, |i| i + 1);
    let claimed = checksum::extract_checksum(&text[start..])?;
    Some((&text[..start], claimed))
}
