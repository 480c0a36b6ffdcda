use camino::{Utf8Path, Utf8PathBuf};
use colored::Colorize;
use migoto_ini::checksum;
use miette::Result;
use wwmi_mod_ini::{load_export, MakerOptions, ModExport, ModIniMaker};

use crate::{
    errors::CliError,
    utils::{self, config, MOD_INI_FILE_NAME},
};

#[derive(Debug)]
pub struct BuildModIniArgs {
    pub config_path: Option<String>,
    pub output_dir: Option<String>,
    /// Overrides `comment_ini` from config.toml when set.
    pub comment_code: Option<bool>,
    pub force: bool,
}

pub fn build_mod_ini(args: BuildModIniArgs) -> Result<()> {
    let config_path = utils::resolve_config_path(args.config_path)?;
    let mut export = load_export(&config_path)
        .map_err(|e| CliError::config_parse_error(config_path.clone().into(), e))?;

    let app_config = config::load_config();
    let export_dir = config_path.parent().unwrap_or(Utf8Path::new("."));

    drop_missing_logo(&mut export, export_dir);

    println!(
        "{} {}",
        "🛠 Generating mod.ini for:".bright_blue().bold(),
        export.mod_info.mod_name.bright_cyan().bold()
    );

    let options = MakerOptions {
        comment_code: args.comment_code.unwrap_or(app_config.comment_ini),
    };
    let maker = ModIniMaker::new(&export, options).map_err(CliError::generation_failed)?;

    let output_dir = match args.output_dir.or(app_config.output_dir) {
        Some(dir) => utils::resolve_output_dir(&dir, &config_path),
        None => export_dir.to_owned(),
    };
    let ini_path = write_mod_ini(&output_dir, &maker.build(), args.force)?;

    println!(
        "{}\n{} {}",
        "✅ mod.ini generated successfully!".bright_green().bold(),
        "📍 Path:".bright_green(),
        ini_path.as_str().bright_white().bold()
    );

    Ok(())
}

/// Clears `mod_logo` when the referenced file is missing so the logo resource is emitted commented out.
fn drop_missing_logo(export: &mut ModExport, export_dir: &Utf8Path) {
    let Some(logo) = export.mod_info.mod_logo.as_deref() else {
        return;
    };

    let logo_path = export_dir.join(logo);
    if !logo_path.exists() {
        tracing::warn!("Mod logo {} does not exist, skipping", logo_path);
        export.mod_info.mod_logo = None;
    }
}

/// Writes `content` to `mod.ini` inside `output_dir`, refusing to clobber hand edits unless `force` is set.
pub fn write_mod_ini(output_dir: &Utf8Path, content: &str, force: bool) -> Result<Utf8PathBuf> {
    let ini_path = output_dir.join(MOD_INI_FILE_NAME);

    if ini_path.exists() {
        let existing = utils::read_ini_text(&ini_path)?;
        if checksum::is_text_modified(&existing) {
            if !force {
                return Err(CliError::ini_manually_edited(ini_path.into()).into());
            }
            tracing::warn!("Overwriting manually edited {}", ini_path);
        }
    }

    if !output_dir.exists() {
        println!("Creating output directory: {}", output_dir);
        std::fs::create_dir_all(output_dir).map_err(|e| {
            CliError::directory_creation_failed(output_dir.as_std_path().to_path_buf(), e)
        })?;
    }

    std::fs::write(&ini_path, content).map_err(CliError::from)?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), ini_path);

    Ok(ini_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_write_creates_output_dir() {
        let (_dir, root) = temp_dir();
        let output_dir = root.join("Mods").join("MyMod");
        let content = checksum::sign("[Constants]\n");

        let path = write_mod_ini(&output_dir, &content, false).unwrap();

        assert_eq!(path, output_dir.join("mod.ini"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), content);
    }

    #[test]
    fn test_regenerate_over_unmodified_file() {
        let (_dir, root) = temp_dir();
        write_mod_ini(&root, &checksum::sign("[Constants]\n"), false).unwrap();

        let updated = checksum::sign("[Constants]\nglobal $x = 1\n");
        write_mod_ini(&root, &updated, false).unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("mod.ini")).unwrap(),
            updated
        );
    }

    #[test]
    fn test_refuses_to_overwrite_hand_edits() {
        let (_dir, root) = temp_dir();
        let signed = checksum::sign("[Constants]\n");
        let edited = signed.replace("[Constants]", "[Constants]\nglobal $mine = 1");
        std::fs::write(root.join("mod.ini"), &edited).unwrap();

        assert!(write_mod_ini(&root, &signed, false).is_err());
        assert_eq!(
            std::fs::read_to_string(root.join("mod.ini")).unwrap(),
            edited
        );

        write_mod_ini(&root, &signed, true).unwrap();
        assert_eq!(
            std::fs::read_to_string(root.join("mod.ini")).unwrap(),
            signed
        );
    }

    #[test]
    fn test_regenerate_over_crlf_file() {
        let (_dir, root) = temp_dir();
        let signed = checksum::sign("[Constants]\n");
        std::fs::write(root.join("mod.ini"), signed.replace('\n', "\r\n")).unwrap();

        let updated = checksum::sign("[Constants]\nglobal $x = 1\n");
        write_mod_ini(&root, &updated, false).unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("mod.ini")).unwrap(),
            updated
        );
    }

    #[test]
    fn test_unsigned_file_is_overwritten() {
        let (_dir, root) = temp_dir();
        std::fs::write(root.join("mod.ini"), "[Constants]\n").unwrap();

        assert!(write_mod_ini(&root, &checksum::sign("[Present]\n"), false).is_ok());
    }
}
