use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use imgvis::config::{Cli, Command};
use imgvis::placeholders::Placeholders;
use imgvis::plugins::{catalog, PluginCommand};
use imgvis::{write_docs, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Plugins log at their own level, everything else at info
    let default_filter = match &cli.command {
        Command::Plugin(plugin) => plugin.logging().logging_level.to_level_filter().as_str(),
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::List { json } => list_plugins(json),
        Command::Docs { output_dir } => {
            info!("Generating plugin documentation...");
            write_docs(&output_dir)?;
            Ok(())
        }
        Command::Expand {
            template,
            input,
            placeholders,
        } => {
            let placeholders = match placeholders {
                Some(path) => Placeholders::load(&path)?,
                None => Placeholders::new(),
            };
            println!("{}", placeholders.expand(&template, input.as_deref()));
            Ok(())
        }
        Command::Plugin(plugin) => check_plugin(&plugin),
    }
}

fn list_plugins(json: bool) -> Result<()> {
    let plugins = catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&plugins)?);
        return Ok(());
    }
    for plugin in &plugins {
        let accepts: Vec<String> = plugin.accepts.iter().map(|k| k.to_string()).collect();
        let generates: Vec<String> = plugin.generates.iter().map(|k| k.to_string()).collect();
        println!("{} [{}]", plugin.name, plugin.role);
        println!("    {}", plugin.description);
        println!("    accepts:   {}", accepts.join(", "));
        if !generates.is_empty() {
            println!("    generates: {}", generates.join(", "));
        }
    }
    Ok(())
}

fn check_plugin(plugin: &PluginCommand) -> Result<()> {
    let settings = plugin.initialize()?;
    info!("Options of {} are valid.", plugin.name());
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
