use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashmon::config::{AppSettings, JsonFileConfigStore};
use dashmon::widgets;
use dashmon::WidgetView;
use dashmon_core::{ConfigValue, PostedValues, RouteUrlResolver, WidgetContext};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;

/// dashmon - configurable widgets for an admin monitoring dashboard
#[derive(Parser, Debug)]
#[command(name = "dashmon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Widget config store file (overrides the saved settings)
    #[arg(long = "store", value_name = "FILE")]
    store: Option<PathBuf>,

    /// Admin base URL used for button links (overrides the saved settings)
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in widgets
    List,
    /// Render widgets as JSON (all widgets when none is given)
    Show {
        #[arg(value_name = "WIDGET")]
        widget: Option<String>,
    },
    /// Print a widget's effective configuration as JSON
    Config {
        #[arg(value_name = "WIDGET")]
        widget: String,
    },
    /// Save widget configuration; keys not given are cleared
    Set {
        #[arg(value_name = "WIDGET")]
        widget: String,
        /// Values as key=value
        #[arg(value_name = "KEY=VALUE", value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },
    /// Delete all stored configuration of a widget
    Reset {
        #[arg(value_name = "WIDGET")]
        widget: String,
    },
    /// Save --store/--base-url as the new defaults and print the settings
    Settings,
    /// Run a widget callback
    Callback {
        #[arg(value_name = "WIDGET")]
        widget: String,
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Parse "key=value" into its two halves
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected format: key=value, got: {}", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Missing key in: {}", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting dashmon v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_settings() -> AppSettings {
    match AppSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn build_context(cli: &Cli) -> Result<WidgetContext> {
    let settings = load_settings();

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => settings.resolved_store_path()?,
    };
    let base_url = cli.base_url.clone().unwrap_or(settings.base_url);

    info!("Using config store {}", store_path.display());
    let store = JsonFileConfigStore::open(&store_path)
        .with_context(|| format!("Failed to open config store {}", store_path.display()))?;

    Ok(WidgetContext::new(
        Arc::new(store),
        Arc::new(RouteUrlResolver::new(base_url)),
    ))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List => {
            for name in widgets::BUILTIN_WIDGETS {
                println!("{}", name);
            }
            return Ok(());
        }
        Command::Settings => {
            let mut settings = load_settings();
            if let Some(store) = &cli.store {
                settings.store_path = Some(store.clone());
            }
            if let Some(base_url) = &cli.base_url {
                settings.base_url = base_url.clone();
            }
            settings.save()?;
            info!("Settings saved");
            return print_json(&settings);
        }
        _ => {}
    }

    let context = build_context(&cli)?;

    match cli.command {
        Command::List | Command::Settings => Ok(()),
        Command::Show { widget: Some(name) } => {
            let mut widget = widgets::create(&name, context)?;
            print_json(&WidgetView::build(widget.as_mut())?)
        }
        Command::Show { widget: None } => {
            let mut views = Vec::new();
            for (name, mut widget) in widgets::create_all(&context)? {
                if !widget.is_active() {
                    info!("Skipping inactive widget {}", name);
                    continue;
                }
                views.push(WidgetView::build(widget.as_mut())?);
            }
            print_json(&views)
        }
        Command::Config { widget: name } => {
            let mut widget = widgets::create(&name, context)?;
            print_json(widget.load_config()?)
        }
        Command::Set {
            widget: name,
            values,
        } => {
            let mut widget = widgets::create(&name, context)?;
            let known: Vec<String> = widget.config().keys().map(str::to_string).collect();
            for (key, _) in &values {
                if !known.contains(key) {
                    warn!("{} has no config key '{}', ignoring it", name, key);
                }
            }
            let posted: PostedValues = values
                .into_iter()
                .map(|(key, value)| (key, ConfigValue::from(value)))
                .collect();
            widget.save_config(&posted)?;
            print_json(widget.load_config()?)
        }
        Command::Reset { widget: name } => {
            let mut widget = widgets::create(&name, context)?;
            widget.delete_config()?;
            println!("Configuration of {} reset", widget.id());
            Ok(())
        }
        Command::Callback { widget: name, name: callback } => {
            let mut widget = widgets::create(&name, context)?;
            match widget.exec_callback(&callback)? {
                Some(message) => println!("{}", message),
                None => println!("Callback {} done", callback),
            }
            Ok(())
        }
    }
}
