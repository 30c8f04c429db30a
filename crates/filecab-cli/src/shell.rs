//! The interactive shell: one store per session, commands on stdin.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};

use filecab_store::{MemoryStore, RecordService, ServiceLogger, ServiceMeter};
use filecab_validation::{RuleSetValidator, ValidationConfig};

use crate::args::Cli;
use crate::handlers;
use crate::parser::{parse_command, Command};

pub fn run(cli: Cli) -> Result<()> {
    let mut service = build_service(&cli)?;

    println!("filecab {} ({} rules)", env!("CARGO_PKG_VERSION"), cli.validation);
    println!("Type 'help' for the command reference.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Exit) => {
                println!("Exiting an application...");
                break;
            }
            Ok(command) => {
                if let Err(error) = dispatch(service.as_mut(), &cli, command) {
                    println!("Error: {:#}", error);
                }
            }
            Err(error) => println!("Error: {:#}", error),
        }
    }

    Ok(())
}

/// The session's service stack: store, then logger, then stopwatch, each
/// layer optional by flag.
fn build_service(cli: &Cli) -> Result<Box<dyn RecordService>> {
    let config = match &cli.validation_rules {
        Some(path) => ValidationConfig::load_from(path)
            .with_context(|| format!("failed to load validation rules from {}", path.display()))?,
        None => ValidationConfig::load_from(&ValidationConfig::default_path()?)?,
    };
    let rules = config
        .rule_set(&cli.validation)
        .ok_or_else(|| anyhow!("unknown validation rule set '{}'", cli.validation))?
        .clone();

    let store = MemoryStore::new(Box::new(RuleSetValidator::new(rules)));
    let mut service: Box<dyn RecordService> = Box::new(store);

    if cli.use_logger {
        let logger = ServiceLogger::new(service, &cli.log_file)
            .with_context(|| format!("failed to open log file {}", cli.log_file.display()))?;
        service = Box::new(logger);
    }
    if cli.use_stopwatch {
        service = Box::new(ServiceMeter::new(service));
    }
    Ok(service)
}

fn dispatch(service: &mut dyn RecordService, cli: &Cli, command: Command) -> Result<()> {
    match command {
        Command::Create(pairs) => handlers::create::handle(service, pairs),
        Command::Edit(id, pairs) => handlers::edit::handle(service, id, pairs),
        Command::Insert(pairs) => handlers::insert::handle(service, pairs),
        Command::Find(field, value) => handlers::find::handle(service, field, &value),
        Command::List => handlers::list::handle(service, &cli.format),
        Command::Select { projection, clauses } => {
            handlers::select::handle(service, &projection, &clauses)
        }
        Command::Update { assignments, query } => {
            handlers::update::handle(service, &assignments, &query)
        }
        Command::Delete { query } => handlers::delete::handle(service, &query),
        Command::Remove(id) => handlers::remove::handle(service, id),
        Command::Purge => handlers::purge::handle(service),
        Command::Stat => handlers::stat::handle(service),
        Command::Export { format, path } => handlers::export::handle(service, format, &path),
        Command::Import { format, path } => handlers::import::handle(service, format, &path),
        Command::Help => {
            handlers::help::handle();
            Ok(())
        }
        Command::Exit => Ok(()),
    }
}
