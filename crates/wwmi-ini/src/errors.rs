use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Export description not found")]
    #[diagnostic(
        code(config::not_found),
        help("Create a mod.export.json or mod.export.toml file in your mod directory, or pass --config-path")
    )]
    ConfigNotFound { search_path: PathBuf },

    #[error("Failed to load export description: {path}")]
    #[diagnostic(
        code(config::parse_error),
        help("Check the export description for syntax errors and missing fields")
    )]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: wwmi_mod_ini::Error,
    },

    #[error("Failed to generate mod.ini")]
    #[diagnostic(
        code(ini::generation_failed),
        help("The export metadata produced an invalid ini structure, re-run the export")
    )]
    GenerationFailed {
        #[source]
        source: wwmi_mod_ini::Error,
    },

    #[error("mod.ini was manually edited: {path}")]
    #[diagnostic(
        code(ini::manually_edited),
        help("Back up your changes and re-run with --force to overwrite the file")
    )]
    IniManuallyEdited { path: PathBuf },

    #[error("File not found: {path}")]
    #[diagnostic(
        code(file::not_found),
        help("Make sure the file exists and the path is correct")
    )]
    FileNotFound { path: PathBuf },

    #[error("Directory creation failed")]
    #[diagnostic(
        code(fs::create_dir_failed),
        help("Check file permissions and available disk space")
    )]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed")]
    #[diagnostic(code(io::operation_failed))]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn config_not_found(search_path: PathBuf) -> Self {
        Self::ConfigNotFound { search_path }
    }

    pub fn config_parse_error(path: PathBuf, source: wwmi_mod_ini::Error) -> Self {
        Self::ConfigParseError { path, source }
    }

    pub fn generation_failed(source: wwmi_mod_ini::Error) -> Self {
        Self::GenerationFailed { source }
    }

    pub fn ini_manually_edited(path: PathBuf) -> Self {
        Self::IniManuallyEdited { path }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn directory_creation_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirectoryCreationFailed { path, source }
    }
}
