use crate::msg::{MsgError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// All multi-byte reads are little-endian, matching the flattened
/// message wire layout.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(MsgError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_le_bytes(buf))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64_le(&mut self) -> Result<i64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(i64::from_le_bytes(buf))
	}

	/// Read a zero-terminated byte string without the terminator.
	pub fn read_cstring_bytes(&mut self) -> Result<&'a [u8]> {
		let start = self.pos;
		let rem = &self.bytes[self.pos..];
		let Some(rel_end) = rem.iter().position(|byte| *byte == 0) else {
			return Err(MsgError::UnexpectedEof {
				at: self.pos,
				need: 1,
				rem: self.remaining(),
			});
		};

		let end = start + rel_end;
		self.pos = end + 1;
		Ok(&self.bytes[start..end])
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::msg::MsgError;

	#[test]
	fn read_past_end_reports_eof() {
		let mut cursor = Cursor::new(&[1, 2, 3]);
		let err = cursor.read_u32_le().expect_err("short read fails");
		assert!(matches!(err, MsgError::UnexpectedEof { at: 0, need: 4, rem: 3 }));
	}

	#[test]
	fn cstring_stops_at_terminator() {
		let mut cursor = Cursor::new(b"abc\0def\0");
		assert_eq!(cursor.read_cstring_bytes().expect("first string"), b"abc");
		assert_eq!(cursor.read_cstring_bytes().expect("second string"), b"def");
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn unterminated_cstring_reports_eof() {
		let mut cursor = Cursor::new(b"abc");
		assert!(cursor.read_cstring_bytes().is_err());
	}
}
