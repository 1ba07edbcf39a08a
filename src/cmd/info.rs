use std::path::PathBuf;

use msgdoc::msg::{FlatMessage, Result, TypeCode};

use crate::cmd::util::{code_hex, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print header-level message information.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, json } = args;

	let message = FlatMessage::open(&path)?;
	let header = message.header();
	let what = TypeCode(header.what);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			format: "haiku",
			what: what.fourcc(),
			what_hex: code_hex(header.what),
			flags: code_hex(header.flags),
			field_count: header.field_count,
			data_size: header.data_size,
			flattened_size: header.flattened_size(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("format: haiku");
	println!("what: {} ({})", what.fourcc(), code_hex(header.what));
	println!("flags: {}", code_hex(header.flags));
	println!("field_count: {}", header.field_count);
	println!("data_size: {}", header.data_size);
	println!("flattened_size: {}", header.flattened_size());

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	format: &'static str,
	what: String,
	what_hex: String,
	flags: String,
	field_count: u32,
	data_size: u32,
	flattened_size: u64,
}
