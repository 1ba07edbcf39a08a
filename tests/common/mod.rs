#![allow(dead_code)]

//! Test-only flatten writer producing the container's byte layout.

use std::path::PathBuf;

use msgdoc::msg::{FORMAT_HAIKU, TypeCode};

const MESSAGE_FLAG_VALID: u32 = 0x0001;
const FIELD_FLAG_VALID: u32 = 0x0001;
const FIELD_FLAG_FIXED_SIZE: u32 = 0x0002;
const HASH_TABLE_SIZE: usize = 5;

struct BuiltField {
	name: Vec<u8>,
	type_code: TypeCode,
	fixed: bool,
	items: Vec<Vec<u8>>,
}

/// Builds flattened message bytes field by field, in add order.
pub struct MessageBuilder {
	what: u32,
	fields: Vec<BuiltField>,
}

impl MessageBuilder {
	pub fn new(what: u32) -> Self {
		Self { what, fields: Vec::new() }
	}

	/// Add a field with fixed-size occurrences stored contiguously.
	pub fn fixed(mut self, name: &str, type_code: TypeCode, items: Vec<Vec<u8>>) -> Self {
		self.fields.push(BuiltField {
			name: name.as_bytes().to_vec(),
			type_code,
			fixed: true,
			items,
		});
		self
	}

	/// Add a field with length-prefixed variable-size occurrences.
	pub fn variable(mut self, name: &str, type_code: TypeCode, items: Vec<Vec<u8>>) -> Self {
		self.fields.push(BuiltField {
			name: name.as_bytes().to_vec(),
			type_code,
			fixed: false,
			items,
		});
		self
	}

	/// Add a string field; each value is stored with its terminator.
	pub fn strings(self, name: &str, values: &[&str]) -> Self {
		let items = values
			.iter()
			.map(|value| {
				let mut bytes = value.as_bytes().to_vec();
				bytes.push(0);
				bytes
			})
			.collect();
		self.variable(name, TypeCode::STRING, items)
	}

	/// Emit header, field table (with name-hash chains), and data area.
	pub fn flatten(&self) -> Vec<u8> {
		let mut next: Vec<i32> = vec![-1; self.fields.len()];
		let mut buckets = [-1_i32; HASH_TABLE_SIZE];
		let mut heads: Vec<(u32, u32, u32, u32, u32, u32)> = Vec::new();
		let mut data = Vec::new();

		for (index, field) in self.fields.iter().enumerate() {
			let offset = data.len() as u32;
			data.extend_from_slice(&field.name);
			data.push(0);

			let data_start = data.len();
			if field.fixed {
				for item in &field.items {
					data.extend_from_slice(item);
				}
			} else {
				for item in &field.items {
					data.extend_from_slice(&(item.len() as u32).to_le_bytes());
					data.extend_from_slice(item);
				}
			}

			let flags = FIELD_FLAG_VALID | if field.fixed { FIELD_FLAG_FIXED_SIZE } else { 0 };
			heads.push((
				flags,
				field.name.len() as u32 + 1,
				field.type_code.0,
				field.items.len() as u32,
				(data.len() - data_start) as u32,
				offset,
			));

			let bucket = (hash_name(&field.name) as usize) % HASH_TABLE_SIZE;
			if buckets[bucket] < 0 {
				buckets[bucket] = index as i32;
			} else {
				let mut link = buckets[bucket] as usize;
				while next[link] >= 0 {
					link = next[link] as usize;
				}
				next[link] = index as i32;
			}
		}

		let mut out = Vec::new();
		out.extend_from_slice(&FORMAT_HAIKU.to_le_bytes());
		out.extend_from_slice(&self.what.to_le_bytes());
		out.extend_from_slice(&MESSAGE_FLAG_VALID.to_le_bytes());
		for _ in 0..6 {
			out.extend_from_slice(&(-1_i32).to_le_bytes());
		}
		out.extend_from_slice(&(data.len() as u32).to_le_bytes());
		out.extend_from_slice(&(self.fields.len() as u32).to_le_bytes());
		out.extend_from_slice(&(HASH_TABLE_SIZE as u32).to_le_bytes());
		for bucket in buckets {
			out.extend_from_slice(&bucket.to_le_bytes());
		}

		for (index, (flags, name_length, type_code, count, data_size, offset)) in heads.iter().enumerate() {
			out.extend_from_slice(&flags.to_le_bytes());
			out.extend_from_slice(&name_length.to_le_bytes());
			out.extend_from_slice(&type_code.to_le_bytes());
			out.extend_from_slice(&count.to_le_bytes());
			out.extend_from_slice(&data_size.to_le_bytes());
			out.extend_from_slice(&offset.to_le_bytes());
			out.extend_from_slice(&next[index].to_le_bytes());
		}

		out.extend_from_slice(&data);
		out
	}
}

/// Name hash used for the header's bucket chains.
pub fn hash_name(name: &[u8]) -> u32 {
	let mut result: u32 = 0;
	for byte in name {
		result = (result << 7) ^ (result >> 24);
		result ^= u32::from(*byte);
	}
	result ^ (result << 12)
}

/// Concatenate little-endian `f32` components.
pub fn f32_payload(values: &[f32]) -> Vec<u8> {
	let mut out = Vec::with_capacity(values.len() * 4);
	for value in values {
		out.extend_from_slice(&value.to_le_bytes());
	}
	out
}

/// Build a flattened `entry_ref` payload.
pub fn ref_payload(device: i32, directory: i64, name: &str) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(&device.to_le_bytes());
	out.extend_from_slice(&directory.to_le_bytes());
	out.extend_from_slice(name.as_bytes());
	out.push(0);
	out
}

/// Write fixture bytes to a per-process temp file and return its path.
pub fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let path = std::env::temp_dir().join(format!("msgdoc-{}-{}", std::process::id(), name));
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}
