mod build;
mod check;
mod config;

pub use build::*;
pub use check::*;
pub use config::*;

use clap::Subcommand;
use miette::Result;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set whether generated mod.ini files keep explanatory comments
    SetComments {
        /// true to keep comments, false to strip them
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Set the default output directory for mod.ini
    SetOutputDir {
        /// Directory, relative to the export description unless absolute
        path: String,
    },
    /// Reset configuration to defaults
    Reset,
}

pub fn run_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show_config(),
        ConfigCommands::SetComments { value } => set_comment_ini(value),
        ConfigCommands::SetOutputDir { path } => set_output_dir(path),
        ConfigCommands::Reset => reset_config(),
    }
}
