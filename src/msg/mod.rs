mod bytes;
mod entry_ref;
mod error;
mod field;
mod header;
mod message;
mod render;
mod session;
mod typecode;

/// Flattened filesystem reference payload.
pub use entry_ref::EntryRef;
/// Error and result aliases.
pub use error::{MsgError, Result};
/// Field table record and decoded field entry.
pub use field::{FieldEntry, FieldHeader};
/// Fixed message header representation and format word.
pub use header::{FORMAT_HAIKU, MessageHeader};
/// Message container and unflatten entry point.
pub use message::FlatMessage;
/// Typed occurrence rendering entry points.
pub use render::{UNDISPLAYABLE, render_occurrence, render_payload};
/// Inspection session orchestration types.
pub use session::{FieldReport, FieldRow, InspectionSession};
/// Type code registry.
pub use typecode::TypeCode;
