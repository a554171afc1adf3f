//! Shapekit CLI - shell access to the toolkit helpers

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;

use shapekit::error::kind_name;
use shapekit::{
    array_to_object, file_to_json, filter_array, object_to_array, remove_duplicates, wait,
    Encoding, FixSuggestion, LoadOptions, ReadFlag, ShapekitError, ToolkitConfig, TypeTag,
};

#[derive(Parser)]
#[command(name = "shapekit")]
#[command(about = "Shapekit - small data-shape toolkit")]
#[command(version)]
struct Cli {
    /// YAML config supplying load options, shell and commands
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a JSON file and print it
    Json {
        file: PathBuf,

        /// Text encoding (utf8, latin1); overrides the config
        #[arg(long)]
        encoding: Option<Encoding>,

        /// Read flag (r, r+); overrides the config
        #[arg(long)]
        flag: Option<ReadFlag>,

        /// Convert objects into [key, value] pairs
        #[arg(long)]
        to_array: bool,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Turn a JSON array of entries into an object
    ToObject {
        file: PathBuf,

        /// Position of the key inside each entry
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        key_index: i64,
    },

    /// Keep only array elements of the given types
    Filter {
        file: PathBuf,

        /// Type to keep (null, boolean, number, string, object); repeatable
        #[arg(short = 't', long = "type", required = true)]
        types: Vec<TypeTag>,
    },

    /// Remove duplicate array elements
    Dedup {
        file: PathBuf,

        /// JSON value exempt from de-duplication; repeatable
        #[arg(short, long, value_parser = parse_json)]
        except: Vec<Value>,
    },

    /// Sleep for a duration
    Wait {
        value: f64,

        /// Unit tag: ms, s, m or h (anything else means ms)
        #[arg(default_value = "ms")]
        unit: String,
    },

    /// Run named commands from the config file
    Run {
        /// Command names to run concurrently
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn parse_json(text: &str) -> Result<Value, String> {
    serde_json::from_str(text).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.config.as_deref(), cli.command).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

async fn run(config: Option<&Path>, command: Commands) -> Result<(), ShapekitError> {
    let config = match config {
        Some(path) => ToolkitConfig::from_file(path)?,
        None => ToolkitConfig::default(),
    };
    let load = &config.load;

    match command {
        Commands::Json {
            file,
            encoding,
            flag,
            to_array,
            compact,
        } => {
            let options = LoadOptions::new(
                encoding.unwrap_or(load.encoding),
                flag.unwrap_or(load.flag),
            );
            let value = file_to_json(&file, &options)?;
            let value = if to_array { object_to_array(&value)? } else { value };
            print_value(&value, compact);
        }
        Commands::ToObject { file, key_index } => {
            let value = file_to_json(&file, load)?;
            print_value(&array_to_object(&value, key_index)?, false);
        }
        Commands::Filter { file, types } => {
            let items = load_array(&file, load)?;
            print_value(&Value::Array(filter_array(&items, &types)), false);
        }
        Commands::Dedup { file, except } => {
            let items = load_array(&file, load)?;
            print_value(&Value::Array(remove_duplicates(&items, &except)), false);
        }
        Commands::Wait { value, unit } => wait(value, &unit).await,
        Commands::Run { names } => {
            let commands = config.shell_commands();
            let outputs =
                futures::future::try_join_all(names.iter().map(|name| commands.call(name))).await?;
            for output in outputs {
                print!("{}", output);
            }
        }
    }
    Ok(())
}

fn load_array(file: &Path, options: &LoadOptions) -> Result<Vec<Value>, ShapekitError> {
    match file_to_json(file, options)? {
        Value::Array(items) => Ok(items),
        other => Err(ShapekitError::NotAnArray {
            found: kind_name(&other),
        }),
    }
}

fn print_value(value: &Value, compact: bool) {
    if compact {
        println!("{}", value);
    } else {
        println!("{:#}", value);
    }
}
