/// Serialize a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Render a 32-bit code as `0x`-prefixed hex.
pub(crate) fn code_hex(code: u32) -> String {
	format!("0x{code:08x}")
}
