use std::fs;
use std::path::Path;

use crate::msg::bytes::Cursor;
use crate::msg::field::{FIELD_FLAG_VALID, FieldEntry, FieldHeader};
use crate::msg::{MessageHeader, MsgError, Result};

/// Decoded flattened message.
///
/// Unflatten validates structure only; occurrence payloads stay as raw
/// bytes in the owned buffer and are sliced on demand.
#[derive(Debug)]
pub struct FlatMessage {
	header: MessageHeader,
	entries: Vec<FieldEntry>,
	bytes: Vec<u8>,
	data_offset: usize,
}

impl FlatMessage {
	/// Read and unflatten a message file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::unflatten(raw)
	}

	/// Unflatten a message from an owned byte buffer.
	///
	/// The buffer must be exactly one flattened message; trailing bytes are
	/// rejected. Walks the field table once, validating every record against
	/// the data area, and extracts field names. No value payload is decoded.
	pub fn unflatten(bytes: Vec<u8>) -> Result<Self> {
		let header = MessageHeader::parse(&bytes)?;

		let expected = header.flattened_size();
		if bytes.len() as u64 != expected {
			return Err(MsgError::FlattenedSizeMismatch {
				expected,
				actual: bytes.len() as u64,
			});
		}

		// Exact size check above guarantees both regions are in bounds.
		let field_count = header.field_count as usize;
		let data_offset = MessageHeader::SIZE + field_count * FieldHeader::SIZE;
		let data = &bytes[data_offset..];

		let mut cursor = Cursor::new(&bytes[MessageHeader::SIZE..data_offset]);
		let mut entries = Vec::with_capacity(field_count);
		for index in 0..field_count {
			let head = FieldHeader::parse(&mut cursor)?;
			validate_field(index, &head, data)?;
			let name = field_name(index, &head, data)?;
			entries.push(FieldEntry::new(name, head));
		}

		Ok(Self {
			header,
			entries,
			bytes,
			data_offset,
		})
	}

	/// Parsed message header.
	pub fn header(&self) -> &MessageHeader {
		&self.header
	}

	/// Application-defined command constant.
	pub fn what(&self) -> u32 {
		self.header.what
	}

	/// Field entries in field-table order.
	pub fn fields(&self) -> &[FieldEntry] {
		&self.entries
	}

	/// Field entry at `index`.
	pub fn field(&self, index: usize) -> Result<&FieldEntry> {
		self.entries.get(index).ok_or(MsgError::FieldIndexOutOfRange {
			index,
			len: self.entries.len(),
		})
	}

	/// Find a field entry by name.
	pub fn find_field(&self, name: &str) -> Option<(usize, &FieldEntry)> {
		self.entries.iter().enumerate().find(|(_, entry)| entry.name() == name)
	}

	/// Raw payload bytes of one occurrence of the field at `field_index`.
	pub fn occurrence(&self, field_index: usize, occurrence: u32) -> Result<&[u8]> {
		let entry = self.field(field_index)?;
		let head = entry.head();
		if occurrence >= head.count {
			return Err(MsgError::OccurrenceOutOfRange {
				index: occurrence,
				count: head.count,
			});
		}

		// Extents were validated during unflatten.
		let data = &self.bytes[self.data_offset..];
		let start = head.offset as usize + head.name_length as usize;
		let payload = &data[start..start + head.data_size as usize];

		if head.is_fixed_size() {
			let item = (head.data_size / head.count) as usize;
			let at = item * occurrence as usize;
			return Ok(&payload[at..at + item]);
		}

		let mut pos = 0_usize;
		for _ in 0..occurrence {
			pos += 4 + item_len(payload, pos);
		}
		let len = item_len(payload, pos);
		Ok(&payload[pos + 4..pos + 4 + len])
	}
}

fn validate_field(index: usize, head: &FieldHeader, data: &[u8]) -> Result<()> {
	if head.flags & FIELD_FLAG_VALID == 0 {
		return Err(MsgError::InvalidFieldFlags { index, flags: head.flags });
	}
	if head.name_length < 2 {
		return Err(MsgError::InvalidFieldName { index });
	}
	if head.count == 0 {
		return Err(MsgError::EmptyField { index });
	}

	let need = u64::from(head.name_length) + u64::from(head.data_size);
	let end = u64::from(head.offset) + need;
	if end > data.len() as u64 {
		return Err(MsgError::FieldDataOutOfRange {
			index,
			offset: head.offset,
			need,
			have: data.len(),
		});
	}

	if head.is_fixed_size() {
		if head.data_size % head.count != 0 {
			return Err(MsgError::FieldSizeIndivisible {
				index,
				data_size: head.data_size,
				count: head.count,
			});
		}
		return Ok(());
	}

	// Variable-size items carry a u32 length prefix each; the chain must
	// consume the declared payload exactly.
	let start = head.offset as usize + head.name_length as usize;
	let payload = &data[start..start + head.data_size as usize];
	let mut pos = 0_u64;
	for _ in 0..head.count {
		let at = pos as usize;
		if pos + 4 > payload.len() as u64 {
			return Err(MsgError::ItemChainMismatch {
				index,
				declared: head.data_size,
				walked: pos,
			});
		}
		pos += 4 + u64::from(read_u32_at(payload, at));
		if pos > payload.len() as u64 {
			return Err(MsgError::ItemChainMismatch {
				index,
				declared: head.data_size,
				walked: pos,
			});
		}
	}
	if pos != payload.len() as u64 {
		return Err(MsgError::ItemChainMismatch {
			index,
			declared: head.data_size,
			walked: pos,
		});
	}

	Ok(())
}

fn field_name(index: usize, head: &FieldHeader, data: &[u8]) -> Result<Box<str>> {
	let start = head.offset as usize;
	let raw = &data[start..start + head.name_length as usize];
	let Some((&0, name)) = raw.split_last() else {
		return Err(MsgError::InvalidFieldName { index });
	};
	if name.is_empty() {
		return Err(MsgError::InvalidFieldName { index });
	}
	Ok(String::from_utf8_lossy(name).into_owned().into_boxed_str())
}

fn read_u32_at(payload: &[u8], at: usize) -> u32 {
	let mut buf = [0_u8; 4];
	buf.copy_from_slice(&payload[at..at + 4]);
	u32::from_le_bytes(buf)
}

fn item_len(payload: &[u8], at: usize) -> usize {
	read_u32_at(payload, at) as usize
}
