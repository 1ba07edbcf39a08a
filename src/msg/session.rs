use std::path::{Path, PathBuf};

use crate::msg::message::FlatMessage;
use crate::msg::render::render_occurrence;
use crate::msg::{MsgError, Result};

/// One row of the field listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
	/// Position in the field table.
	pub index: usize,
	/// Field name.
	pub name: String,
	/// Registry name of the field's type.
	pub type_name: &'static str,
	/// Occurrence count.
	pub count: u32,
}

/// One inspected field with every occurrence rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
	/// Field name.
	pub name: String,
	/// Registry name of the field's type.
	pub type_name: &'static str,
	/// Occurrence count.
	pub count: u32,
	/// Rendered occurrences in storage order.
	pub values: Vec<String>,
}

/// Inspection orchestration over one exclusively owned message.
///
/// A successful load replaces the owned message wholesale; a failed load
/// leaves the previous message untouched.
#[derive(Default)]
pub struct InspectionSession {
	message: Option<FlatMessage>,
	path: Option<PathBuf>,
}

impl InspectionSession {
	/// Create an empty session.
	pub fn new() -> Self {
		Self::default()
	}

	/// Read and unflatten a message file into the session.
	pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		if path.to_string_lossy().trim().is_empty() {
			return Err(MsgError::NoFileSpecified);
		}

		let message = FlatMessage::open(path)?;
		self.message = Some(message);
		self.path = Some(path.to_owned());
		Ok(())
	}

	/// Whether a message is currently loaded.
	pub fn is_loaded(&self) -> bool {
		self.message.is_some()
	}

	/// Path of the currently loaded message file.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Project the field table into listing rows; empty when nothing is loaded.
	pub fn list(&self) -> Vec<FieldRow> {
		let Some(message) = self.message.as_ref() else {
			return Vec::new();
		};

		message
			.fields()
			.iter()
			.enumerate()
			.map(|(index, entry)| FieldRow {
				index,
				name: entry.name().to_owned(),
				type_name: entry.type_code().name(),
				count: entry.count(),
			})
			.collect()
	}

	/// Render every occurrence of the field at `index`.
	pub fn inspect(&self, index: usize) -> Result<FieldReport> {
		let message = self.message.as_ref().ok_or(MsgError::NoMessageLoaded)?;
		let entry = message.field(index)?;

		let count = entry.count();
		let mut values = Vec::with_capacity(count as usize);
		for occurrence in 0..count {
			values.push(render_occurrence(message, index, occurrence)?);
		}

		Ok(FieldReport {
			name: entry.name().to_owned(),
			type_name: entry.type_code().name(),
			count,
			values,
		})
	}
}
