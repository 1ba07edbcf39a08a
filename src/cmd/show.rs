use std::path::PathBuf;

use msgdoc::msg::{InspectionSession, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub index: usize,
	#[arg(long)]
	pub json: bool,
}

/// Render every occurrence of the field at the given index.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, index, json } = args;

	let mut session = InspectionSession::new();
	session.load(&path)?;
	let report = session.inspect(index)?;

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			index,
			name: report.name,
			type_name: report.type_name,
			count: report.count,
			values: report.values,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("name: {}", report.name);
	println!("type: {}", report.type_name);
	println!("count: {}", report.count);
	println!();
	for (occurrence, value) in report.values.iter().enumerate() {
		println!("{occurrence}\t{value}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	index: usize,
	name: String,
	type_name: &'static str,
	count: u32,
	values: Vec<String>,
}
