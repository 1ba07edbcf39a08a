use crate::msg::bytes::Cursor;
use crate::msg::field::FieldHeader;
use crate::msg::{MsgError, Result};

/// Format word of a little-endian Haiku flattened message ("HMF1" on disk).
pub const FORMAT_HAIKU: u32 = 0x31464D48;

const FORMAT_HAIKU_SWAPPED: u32 = 0x484D4631;
const FORMAT_R5: u32 = 0x464F4231;
const FORMAT_R5_SWAPPED: u32 = 0x31424F46;
const FORMAT_DANO: u32 = 0x464F4232;

const MESSAGE_FLAG_VALID: u32 = 0x0001;

/// Parsed fixed-size flattened message header.
///
/// Delivery and reply bookkeeping words are validated positionally but not
/// retained; inspection never uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
	/// Application-defined command constant.
	pub what: u32,
	/// Message flags.
	pub flags: u32,
	/// Byte length of the data area.
	pub data_size: u32,
	/// Number of field table records.
	pub field_count: u32,
	/// Name-hash bucket count (always 5 in flattened form).
	pub hash_table_size: u32,
}

impl MessageHeader {
	/// Fixed header size in bytes.
	pub const SIZE: usize = 68;

	/// Parse a flattened message header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(0..Self::SIZE).ok_or(MsgError::TruncatedHeader { len: bytes.len() })?;
		let mut cursor = Cursor::new(header);

		let format = cursor.read_u32_le()?;
		match format {
			FORMAT_HAIKU => {}
			FORMAT_HAIKU_SWAPPED => return Err(MsgError::ByteSwappedUnsupported),
			FORMAT_R5 | FORMAT_R5_SWAPPED | FORMAT_DANO => {
				return Err(MsgError::LegacyFormatUnsupported { format });
			}
			_ => return Err(MsgError::NotFlattenedMessage { format }),
		}

		let what = cursor.read_u32_le()?;
		let flags = cursor.read_u32_le()?;
		if flags & MESSAGE_FLAG_VALID == 0 {
			return Err(MsgError::MessageNotValid { flags });
		}

		// target, current specifier, area, reply port, reply target, reply team
		for _ in 0..6 {
			let _ = cursor.read_i32_le()?;
		}

		let data_size = cursor.read_u32_le()?;
		let field_count = cursor.read_u32_le()?;
		let hash_table_size = cursor.read_u32_le()?;

		Ok(Self {
			what,
			flags,
			data_size,
			field_count,
			hash_table_size,
		})
	}

	/// Total flattened size implied by the header's length fields.
	pub fn flattened_size(&self) -> u64 {
		Self::SIZE as u64 + u64::from(self.field_count) * FieldHeader::SIZE as u64 + u64::from(self.data_size)
	}
}
