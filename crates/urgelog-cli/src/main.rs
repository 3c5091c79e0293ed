//! Urgelog CLI - a local-first, CLI-first urge tracker
//!
//! This is the command-line interface for Urgelog. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;

use clap::Parser;

use urgelog_core::{UrgeLogError, ValidationError};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let result = match &cli.command {
        Some(Commands::Init(args)) => commands::init::handle_init(&ctx, args),
        Some(Commands::Add(args)) => commands::add::handle_add(&ctx, args),
        Some(Commands::Edit(args)) => commands::edit::handle_edit(&ctx, args),
        Some(Commands::Delete(args)) => commands::delete::handle_delete(&ctx, args),
        Some(Commands::List(args)) => commands::list::handle_list(&ctx, args),
        Some(Commands::Show(args)) => commands::show::handle_show(&ctx, args),
        Some(Commands::Stats(args)) => commands::stats::handle_stats(&ctx, args),
        Some(Commands::Export(args)) => commands::export::handle_export(&ctx, args),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args),
        None => {
            commands::misc::print_quickstart();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        if let Some(UrgeLogError::NotFound(_)) = err.downcast_ref::<UrgeLogError>() {
            eprintln!("Hint: run `urgelog list` to see entry ids.");
        }
        std::process::exit(exit_code(&err));
    }
}

/// Exit codes: 2 for rejected input (clap uses 2 for usage errors too),
/// 3 for a missing entry, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(core) = err.downcast_ref::<UrgeLogError>() {
        return match core {
            UrgeLogError::NotFound(_) => 3,
            UrgeLogError::Validation(_) | UrgeLogError::InvalidInput(_) => 2,
            _ => 1,
        };
    }
    if err.downcast_ref::<ValidationError>().is_some() {
        return 2;
    }
    1
}
