//! Completions and the bare-invocation banner.

use clap::CommandFactory;
use clap_complete::generate;

use urgelog_core::VERSION;

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "urgelog", &mut std::io::stdout());
    Ok(())
}

pub fn print_quickstart() {
    println!("Urgelog v{}", VERSION);
    println!();
    println!("Quickstart:");
    println!("  urgelog init          Create your local urge log");
    println!("  urgelog add           Log an urge interactively");
    println!("  urgelog list          Browse your history");
    println!("  urgelog stats         See your patterns");
    println!();
    println!("Run `urgelog --help` for all commands.");
}
