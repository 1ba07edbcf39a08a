use crate::msg::bytes::Cursor;
use crate::msg::Result;

/// Flattened filesystem entry reference.
///
/// Device and directory inode only resolve to a full path on the system
/// that produced the message; the leaf name travels with the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRef {
	/// Device identifier on the originating system.
	pub device: i32,
	/// Directory inode on the originating system.
	pub directory: i64,
	/// Leaf name of the referenced entry.
	pub name: Box<str>,
}

impl EntryRef {
	/// Parse a flattened `entry_ref` payload.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let device = cursor.read_i32_le()?;
		let directory = cursor.read_i64_le()?;
		let name = String::from_utf8_lossy(cursor.read_cstring_bytes()?)
			.into_owned()
			.into_boxed_str();

		Ok(Self {
			device,
			directory,
			name,
		})
	}
}
