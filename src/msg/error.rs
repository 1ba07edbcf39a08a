use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MsgError>;

/// Errors produced while reading, unflattening, and inspecting message files.
#[derive(Debug, Error)]
pub enum MsgError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Load was attempted without a file path.
	#[error("no file specified")]
	NoFileSpecified,
	/// Leading format word does not name a flattened message.
	#[error("not a flattened message (format=0x{format:08x})")]
	NotFlattenedMessage {
		/// Format word read from the first four bytes.
		format: u32,
	},
	/// Flattened message was written with the opposite byte order.
	#[error("byte-swapped flattened message not supported")]
	ByteSwappedUnsupported,
	/// Flattened message uses a recognized pre-Haiku format.
	#[error("legacy flattened format not supported (format=0x{format:08x})")]
	LegacyFormatUnsupported {
		/// Format word read from the first four bytes.
		format: u32,
	},
	/// Buffer ends before the fixed message header.
	#[error("truncated message header: {len} bytes")]
	TruncatedHeader {
		/// Available buffer length.
		len: usize,
	},
	/// Message header flags lack the valid bit.
	#[error("message flags not valid (flags=0x{flags:08x})")]
	MessageNotValid {
		/// Parsed header flags.
		flags: u32,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Buffer length disagrees with the header's declared sizes.
	#[error("flattened size mismatch: declared {expected}, buffer {actual}")]
	FlattenedSizeMismatch {
		/// Size implied by field count and data size.
		expected: u64,
		/// Actual buffer length.
		actual: u64,
	},
	/// Field header flags lack the valid bit.
	#[error("field {index} flags not valid (flags=0x{flags:08x})")]
	InvalidFieldFlags {
		/// Field table index.
		index: usize,
		/// Parsed field flags.
		flags: u32,
	},
	/// Field name is empty, unterminated, or out of bounds.
	#[error("field {index} has an invalid name")]
	InvalidFieldName {
		/// Field table index.
		index: usize,
	},
	/// Field declares zero occurrences.
	#[error("field {index} has no occurrences")]
	EmptyField {
		/// Field table index.
		index: usize,
	},
	/// Field extent exceeds the data area.
	#[error("field {index} data out of range: offset={offset}, need={need}, data area={have}")]
	FieldDataOutOfRange {
		/// Field table index.
		index: usize,
		/// Declared field offset.
		offset: u32,
		/// Bytes required from the offset.
		need: u64,
		/// Data area length.
		have: usize,
	},
	/// Fixed-size field payload does not divide evenly by its count.
	#[error("field {index} size indivisible: data_size={data_size}, count={count}")]
	FieldSizeIndivisible {
		/// Field table index.
		index: usize,
		/// Declared payload size.
		data_size: u32,
		/// Declared occurrence count.
		count: u32,
	},
	/// Variable-size item chain does not consume the declared payload.
	#[error("field {index} item chain mismatch: declared {declared}, walked {walked}")]
	ItemChainMismatch {
		/// Field table index.
		index: usize,
		/// Declared payload size.
		declared: u32,
		/// Bytes consumed by walking the item chain.
		walked: u64,
	},
	/// Inspection was requested before any message was loaded.
	#[error("no message loaded")]
	NoMessageLoaded,
	/// Requested field index is outside the field table.
	#[error("field index {index} out of range (fields={len})")]
	FieldIndexOutOfRange {
		/// Requested field index.
		index: usize,
		/// Number of fields in the table.
		len: usize,
	},
	/// Requested occurrence is outside the field's recorded count.
	#[error("occurrence {index} out of range (count={count})")]
	OccurrenceOutOfRange {
		/// Requested occurrence index.
		index: u32,
		/// Recorded occurrence count.
		count: u32,
	},
}
