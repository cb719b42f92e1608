//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use mesh_inspector::output::OutputMode;
use mesh_inspector::paths;

/// mesh-inspector - Sanity checks for polygon models
#[derive(Parser, Debug)]
#[command(
    name = "mesh-inspector",
    version,
    about = "Sanity checks for polygon models",
    long_about = "Validate scene objects before hand-off.\n\n\
                  Checks cover triangle budgets, lamina faces, missing UV shells,\n\
                  naming conventions and construction history. Presets choose\n\
                  which checks run and how they are configured."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Tool home directory (defaults to $MESH_INSPECTOR_HOME or ~/.mesh-inspector)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the current preset over a scene
    Inspect {
        /// Scene: an OBJ file, a TOML manifest or a directory
        scene: PathBuf,

        /// Objects to inspect (glob, or `re:` regex); all objects when omitted
        #[arg(short = 'o', long = "object", value_name = "PATTERN")]
        objects: Vec<String>,

        /// Run only these checks
        #[arg(short = 'c', long = "check", value_name = "CHECK")]
        checks: Vec<String>,

        /// Preset file to use instead of the current preset
        #[arg(long, value_name = "FILE")]
        preset: Option<PathBuf>,

        /// Override an option for this run
        #[arg(long = "set", value_name = "CHECK.OPTION=VALUE")]
        overrides: Vec<String>,
    },

    /// Print (or write) the nodes that fail one check
    Select {
        /// Scene: an OBJ file, a TOML manifest or a directory
        scene: PathBuf,

        /// Check whose failures to select
        #[arg(short = 'c', long = "check", value_name = "CHECK")]
        check: String,

        /// Objects to inspect (glob, or `re:` regex); all objects when omitted
        #[arg(short = 'o', long = "object", value_name = "PATTERN")]
        objects: Vec<String>,

        /// Write the selection to this file, one node per line
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List registered checks and their options
    Checks,

    /// Manage presets
    Preset {
        #[command(subcommand)]
        action: Option<PresetAction>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum PresetAction {
    /// Show the current preset
    Show,

    /// List saved presets
    List,

    /// Save the current preset under a new file and make it current
    Save {
        /// File name (bare names go to presets/custom/)
        file: PathBuf,
    },

    /// Make a preset file current
    Load {
        /// Preset file
        file: PathBuf,
    },

    /// Go back to the default preset
    Reset,

    /// Enable a check
    Enable {
        /// Check name
        check: String,
    },

    /// Disable a check
    Disable {
        /// Check name
        check: String,
    },

    /// Set a check option
    Set {
        /// Check name
        check: String,
        /// Option name
        option: String,
        /// New value
        value: String,
    },

    /// Enable every visible check of a category
    CheckAll {
        /// Category name
        category: String,
    },

    /// Disable every visible check of a category
    UncheckAll {
        /// Category name
        category: String,
    },

    /// Flip every visible check of a category
    Invert {
        /// Category name
        category: String,
    },

    /// Hide the enabled checks of a category
    RemoveChecked {
        /// Category name
        category: String,
    },

    /// Bring a hidden check back
    Add {
        /// Check name
        check: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let home = paths::home_dir(cli.home.as_deref());

    match cli.command {
        Some(Command::Inspect {
            scene,
            objects,
            checks,
            preset,
            overrides,
        }) => commands::inspect(
            &commands::InspectArgs {
                scene,
                objects,
                checks,
                preset,
                overrides,
            },
            &home,
            output_mode,
        ),
        Some(Command::Select {
            scene,
            check,
            objects,
            output,
        }) => commands::select(&scene, &check, &objects, output, &home, output_mode),
        Some(Command::Checks) => commands::checks(output_mode),
        Some(Command::Preset { action }) => {
            commands::preset(action.unwrap_or(PresetAction::Show), &home, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": mesh_inspector::VERSION
                    })
                );
            } else {
                println!("mesh-inspector v{}", mesh_inspector::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": mesh_inspector::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("mesh-inspector v{}", mesh_inspector::VERSION);
                println!("\nRun 'mesh-inspector --help' for usage");
                println!("Run 'mesh-inspector inspect <scene>' to check a model");
            }
            Ok(())
        },
    }
}
