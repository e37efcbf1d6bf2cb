//! splitlog operational tool.
//!
//! Initializes logging exactly as a service would (defaults, optional TOML
//! file, `LOG_LEVEL`) and then emits records or reports the routing, so the
//! effect of a configuration can be checked from a shell:
//!
//! ```text
//! LOG_LEVEL=warn splitlog emit --level info "dropped"
//! LOG_LEVEL=warn splitlog emit --level error "on stderr" --field code=17
//! LOG_LEVEL=debug splitlog levels
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use splitlog::config::{env::apply_env, load_config};
use splitlog::{routing, Fields, LoggerConfig, Severity};

#[derive(Parser)]
#[command(name = "splitlog")]
#[command(about = "Emit records through the level-split logger and inspect its routing", long_about = None)]
struct Cli {
    /// TOML configuration file; LOG_LEVEL still takes precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one record
    Emit {
        /// Severity name or numeric code
        #[arg(short, long, default_value = "info")]
        level: String,

        /// Structured field as key=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, Value)>,

        message: String,
    },
    /// Print where each severity is routed under the effective threshold
    Levels,
    /// Print the effective configuration
    Show,
}

/// Values that parse as JSON keep their type; anything else is a string.
fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))?;
    if key.is_empty() {
        return Err(format!("empty field name in {:?}", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_owned(), value))
}

fn resolve_config(path: Option<&PathBuf>) -> Result<LoggerConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => {
            let mut config = LoggerConfig::default();
            apply_env(&mut config);
            Ok(config)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_ref())?;
    let log = splitlog::init_with(config)?;

    match cli.command {
        Commands::Emit {
            level,
            fields,
            message,
        } => {
            let severity = Severity::from_config(Some(level.as_str()));
            let fields: Fields = fields.into_iter().collect();
            log.log(severity, message, &fields);
        }
        Commands::Levels => {
            for severity in Severity::ALL {
                let target = routing::destination(severity, log.threshold())
                    .map_or("dropped", |stream| stream.as_str());
                println!("{:<7} {}", severity, target);
            }
        }
        Commands::Show => {
            print!("{}", toml::to_string(log.config())?);
        }
    }

    log.sync()?;
    Ok(())
}
