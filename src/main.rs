#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "msgdoc", about = "Flattened message inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print header-level message information.
	Info(cmd::info::Args),
	/// List the message's field table.
	List(cmd::list::Args),
	/// Render every occurrence of one field.
	Show(cmd::show::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> msgdoc::msg::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::List(args) => cmd::list::run(args),
		Commands::Show(args) => cmd::show::run(args),
	}
}
