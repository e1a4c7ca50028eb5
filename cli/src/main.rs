use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::process::{config_get, config_set};
use scene::path::build_scene_path;
use scene::process::{scene_decode, scene_encode, scene_get};

#[derive(Parser)]
#[command(name = "scene-toolkit")]
#[command(about = "CLI for level scene definition files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scene Operations (Parse/Format/Query)
    #[command(subcommand)]
    Scene(SceneCommands),
    /// Config Operations (Get/Set)
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum SceneCommands {
    /// Decode a scene file to JSON
    Decode {
        /// Input scene file
        input: PathBuf,
        /// Output JSON file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Active language character for localized lines
        #[arg(short, long, default_value_t = 'E')]
        lang: char,
    },
    /// Encode JSON back to scene text
    Encode {
        /// Input JSON file
        input: PathBuf,
        /// Output scene file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the first line matching a command
    Get {
        /// Input scene file
        input: PathBuf,
        /// Command name to look up
        command: String,
        /// Active language character for localized lines
        #[arg(short, long, default_value_t = 'E')]
        lang: char,
    },
    /// Print the constructed path for a category/chapter/rank triple
    Path {
        /// Level category (missions, free, exercises, challenges, custom, perso, win, lost)
        category: String,
        chapter: u32,
        rank: u32,
        /// Print the containing directory instead of the scene file
        #[arg(long)]
        dir: bool,
        /// Custom level directory names, indexed by chapter (for category `custom`)
        #[arg(long)]
        custom_name: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print a config value
    Get {
        /// Config file
        file: PathBuf,
        section: String,
        key: String,
    },
    /// Set a config value
    Set {
        /// Config file
        file: PathBuf,
        section: String,
        key: String,
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Scene(cmd) => match cmd {
            SceneCommands::Decode {
                input,
                output,
                lang,
            } => scene_decode(input, output, *lang)?,
            SceneCommands::Encode { input, output } => scene_encode(input, output)?,
            SceneCommands::Get {
                input,
                command,
                lang,
            } => scene_get(input, command, *lang)?,
            SceneCommands::Path {
                category,
                chapter,
                rank,
                dir,
                custom_name,
            } => {
                let path =
                    build_scene_path(category, *chapter, *rank, !dir, custom_name.as_slice());
                println!("{}", path);
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Get { file, section, key } => config_get(file, section, key)?,
            ConfigCommands::Set {
                file,
                section,
                key,
                value,
            } => config_set(file, section, key, value)?,
        },
    }

    Ok(())
}
