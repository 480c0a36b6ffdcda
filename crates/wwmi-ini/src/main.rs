use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    build_mod_ini, check_mod_ini, BuildModIniArgs, CheckModIniArgs, ConfigCommands,
};
use miette::Result;

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate mod.ini from an export description
    Build {
        /// The path to the export description (mod.export.json or mod.export.toml)
        #[arg(short, long)]
        config_path: Option<String>,

        /// The directory to write mod.ini to
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Keep explanatory comments in the generated code
        #[arg(long, conflicts_with = "no_comments")]
        comments: bool,

        /// Strip explanatory comments from the generated code
        #[arg(long)]
        no_comments: bool,

        /// Overwrite mod.ini even if it was edited by hand
        #[arg(long)]
        force: bool,
    },
    /// Check whether a generated mod.ini was edited by hand
    Check {
        /// The path to the mod.ini file
        #[arg(short, long, default_value = "mod.ini")]
        file_path: String,
    },
    /// Show or change persisted settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => err.exit(),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "wwmi_ini=debug,wwmi_mod_ini=debug,migoto_ini=debug"
    } else {
        "warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.verbose);

    match args.command {
        Commands::Build {
            config_path,
            output_dir,
            comments,
            no_comments,
            force,
        } => build_mod_ini(BuildModIniArgs {
            config_path,
            output_dir,
            comment_code: match (comments, no_comments) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            force,
        }),
        Commands::Check { file_path } => check_mod_ini(CheckModIniArgs { file_path }),
        Commands::Config { command } => commands::run_config_command(command),
    }
}
