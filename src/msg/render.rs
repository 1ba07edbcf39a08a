use crate::msg::entry_ref::EntryRef;
use crate::msg::message::FlatMessage;
use crate::msg::{Result, TypeCode};

/// Sentinel rendering for types the inspector does not special-case.
pub const UNDISPLAYABLE: &str = "data cannot be displayed";

/// Render one occurrence of a field as display text.
///
/// Fails only for out-of-bounds field or occurrence indexes; type dispatch
/// itself is total and degrades to [`UNDISPLAYABLE`].
pub fn render_occurrence(message: &FlatMessage, field_index: usize, occurrence: u32) -> Result<String> {
	let entry = message.field(field_index)?;
	let type_code = entry.type_code();
	let payload = message.occurrence(field_index, occurrence)?;
	Ok(render_payload(type_code, payload))
}

/// Render a raw occurrence payload under the given type's formatting rule.
///
/// Numeric and compound payloads of unexpected width render the type's
/// default value, matching the container's get-with-default accessor
/// semantics. Floats use Rust's shortest round-trip `Display` form.
pub fn render_payload(type_code: TypeCode, payload: &[u8]) -> String {
	match type_code {
		TypeCode::STRING => cstring_text(payload),
		TypeCode::INT8 => i8::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::INT16 => i16::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::INT32 => i32::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::INT64 => i64::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::UINT8 => u8::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::UINT16 => u16::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::UINT32 => u32::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::UINT64 => u64::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::FLOAT => f32::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::DOUBLE => f64::from_le_bytes(scalar(payload)).to_string(),
		TypeCode::BOOL => {
			if payload.first().is_some_and(|byte| *byte != 0) {
				"true".to_owned()
			} else {
				"false".to_owned()
			}
		}
		TypeCode::RGB_COLOR => {
			let chan = |index: usize| payload.get(index).copied().unwrap_or(0);
			format!("{}, {}, {}, {}", chan(0), chan(1), chan(2), chan(3))
		}
		TypeCode::RECT => {
			format!(
				"{}, {}, {}, {}",
				f32_at(payload, 0),
				f32_at(payload, 1),
				f32_at(payload, 2),
				f32_at(payload, 3)
			)
		}
		TypeCode::SIZE => format!("{}, {}", f32_at(payload, 0), f32_at(payload, 1)),
		TypeCode::POINT => format!("{}, {}", f32_at(payload, 0), f32_at(payload, 1)),
		// Unresolvable references render empty by design; the parse error
		// is swallowed, never propagated.
		TypeCode::REF => EntryRef::parse(payload).map(|parsed| parsed.name.into_string()).unwrap_or_default(),
		_ => UNDISPLAYABLE.to_owned(),
	}
}

fn cstring_text(payload: &[u8]) -> String {
	let bytes = payload.strip_suffix(&[0]).unwrap_or(payload);
	String::from_utf8_lossy(bytes).into_owned()
}

fn scalar<const N: usize>(payload: &[u8]) -> [u8; N] {
	let mut buf = [0_u8; N];
	if payload.len() == N {
		buf.copy_from_slice(payload);
	}
	buf
}

fn f32_at(payload: &[u8], index: usize) -> f32 {
	let start = index * 4;
	match payload.get(start..start + 4) {
		Some(raw) => {
			let mut buf = [0_u8; 4];
			buf.copy_from_slice(raw);
			f32::from_le_bytes(buf)
		}
		None => 0.0,
	}
}
