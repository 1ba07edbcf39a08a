use std::path::PathBuf;

use msgdoc::msg::{InspectionSession, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// List the field table of a flattened message file.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, json } = args;

	let mut session = InspectionSession::new();
	session.load(&path)?;
	let rows = session.list();

	if json {
		let payload = ListJson {
			path: path.display().to_string(),
			fields: rows
				.iter()
				.map(|row| FieldJson {
					index: row.index,
					name: row.name.clone(),
					type_name: row.type_name,
					count: row.count,
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("fields: {}", rows.len());
	println!();
	println!("index\tname\ttype\tcount");
	for row in &rows {
		println!("{}\t{}\t{}\t{}", row.index, row.name, row.type_name, row.count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ListJson {
	path: String,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	index: usize,
	name: String,
	type_name: &'static str,
	count: u32,
}
