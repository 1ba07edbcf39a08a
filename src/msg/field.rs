use crate::msg::bytes::Cursor;
use crate::msg::{Result, TypeCode};

pub(crate) const FIELD_FLAG_VALID: u32 = 0x0001;
pub(crate) const FIELD_FLAG_FIXED_SIZE: u32 = 0x0002;

/// One raw record of the flattened field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldHeader {
	/// Field flags (valid, fixed-size).
	pub flags: u32,
	/// Name byte length including the terminator.
	pub name_length: u32,
	/// Declared value type.
	pub type_code: TypeCode,
	/// Occurrence count.
	pub count: u32,
	/// Payload byte length after the name.
	pub data_size: u32,
	/// Field start offset within the data area.
	pub offset: u32,
	/// Name-hash chain link; unused by decode.
	pub next_field: i32,
}

impl FieldHeader {
	/// Fixed record size in bytes.
	pub const SIZE: usize = 28;

	/// Parse one field table record.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let flags = cursor.read_u32_le()?;
		let name_length = cursor.read_u32_le()?;
		let type_code = TypeCode(cursor.read_u32_le()?);
		let count = cursor.read_u32_le()?;
		let data_size = cursor.read_u32_le()?;
		let offset = cursor.read_u32_le()?;
		let next_field = cursor.read_i32_le()?;

		Ok(Self {
			flags,
			name_length,
			type_code,
			count,
			data_size,
			offset,
			next_field,
		})
	}

	/// Whether this field stores fixed-size occurrences.
	pub fn is_fixed_size(&self) -> bool {
		self.flags & FIELD_FLAG_FIXED_SIZE != 0
	}
}

/// One named, typed slot of a decoded message.
///
/// Read-only after unflatten; layout internals stay private and feed the
/// lazy occurrence extraction in [`crate::msg::FlatMessage`].
#[derive(Debug, Clone)]
pub struct FieldEntry {
	name: Box<str>,
	head: FieldHeader,
}

impl FieldEntry {
	pub(crate) fn new(name: Box<str>, head: FieldHeader) -> Self {
		Self { name, head }
	}

	/// Field name, unique within the message.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared value type.
	pub fn type_code(&self) -> TypeCode {
		self.head.type_code
	}

	/// Number of stored occurrences.
	pub fn count(&self) -> u32 {
		self.head.count
	}

	pub(crate) fn head(&self) -> &FieldHeader {
		&self.head
	}
}
