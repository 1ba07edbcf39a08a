/// Four-character code identifying a field's semantic type.
///
/// The built-in set is closed; codes outside it are carried opaquely and
/// name as `"unidentified"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode(pub u32);

impl TypeCode {
	/// 2D affine transform matrix.
	pub const AFFINE_TRANSFORM: Self = Self::from_fourcc(*b"AMTX");
	/// Horizontal/vertical alignment pair.
	pub const ALIGNMENT: Self = Self::from_fourcc(*b"ALGN");
	/// Wildcard matching any type.
	pub const ANY: Self = Self::from_fourcc(*b"ANYT");
	/// Reference-counted atom.
	pub const ATOM: Self = Self::from_fourcc(*b"ATOM");
	/// Weak atom reference.
	pub const ATOMREF: Self = Self::from_fourcc(*b"ATMR");
	/// One-byte boolean.
	pub const BOOL: Self = Self::from_fourcc(*b"BOOL");
	/// Single character.
	pub const CHAR: Self = Self::from_fourcc(*b"CHAR");
	/// 8-bit palette color index.
	pub const COLOR_8_BIT: Self = Self::from_fourcc(*b"CLRB");
	/// 64-bit IEEE float.
	pub const DOUBLE: Self = Self::from_fourcc(*b"DBLE");
	/// 32-bit IEEE float.
	pub const FLOAT: Self = Self::from_fourcc(*b"FLOT");
	/// 8-bit grayscale bitmap data.
	pub const GRAYSCALE_8_BIT: Self = Self::from_fourcc(*b"GRYB");
	/// Signed 8-bit integer.
	pub const INT8: Self = Self::from_fourcc(*b"BYTE");
	/// Signed 16-bit integer.
	pub const INT16: Self = Self::from_fourcc(*b"SHRT");
	/// Signed 32-bit integer.
	pub const INT32: Self = Self::from_fourcc(*b"LONG");
	/// Signed 64-bit integer.
	pub const INT64: Self = Self::from_fourcc(*b"LLNG");
	/// 32x32 icon bitmap.
	pub const LARGE_ICON: Self = Self::from_fourcc(*b"ICON");
	/// Media kit parameter group.
	pub const MEDIA_PARAMETER_GROUP: Self = Self::from_fourcc(*b"BMCG");
	/// Media kit parameter.
	pub const MEDIA_PARAMETER: Self = Self::from_fourcc(*b"BMCT");
	/// Media kit parameter web.
	pub const MEDIA_PARAMETER_WEB: Self = Self::from_fourcc(*b"BMCW");
	/// Nested flattened message.
	pub const MESSAGE: Self = Self::from_fourcc(*b"MSGG");
	/// Flattened messenger target.
	pub const MESSENGER: Self = Self::from_fourcc(*b"MSNG");
	/// MIME type record.
	pub const MIME: Self = Self::from_fourcc(*b"MIME");
	/// 16x16 icon bitmap.
	pub const MINI_ICON: Self = Self::from_fourcc(*b"MICN");
	/// 1-bit monochrome bitmap data.
	pub const MONOCHROME_1_BIT: Self = Self::from_fourcc(*b"MNOB");
	/// Opaque object pointer.
	pub const OBJECT: Self = Self::from_fourcc(*b"OPTR");
	/// File offset integer.
	pub const OFF_T: Self = Self::from_fourcc(*b"OFFT");
	/// 8x8 fill pattern.
	pub const PATTERN: Self = Self::from_fourcc(*b"PATN");
	/// Raw memory pointer.
	pub const POINTER: Self = Self::from_fourcc(*b"PNTR");
	/// 2D point (x, y).
	pub const POINT: Self = Self::from_fourcc(*b"BPNT");
	/// Scripting property info.
	pub const PROPERTY_INFO: Self = Self::from_fourcc(*b"SCTD");
	/// Untyped raw bytes.
	pub const RAW: Self = Self::from_fourcc(*b"RAWT");
	/// Rectangle (left, top, right, bottom).
	pub const RECT: Self = Self::from_fourcc(*b"RECT");
	/// Filesystem entry reference.
	pub const REF: Self = Self::from_fourcc(*b"RREF");
	/// 32-bit RGB bitmap data.
	pub const RGB_32_BIT: Self = Self::from_fourcc(*b"RGBB");
	/// RGBA color (four byte channels).
	pub const RGB_COLOR: Self = Self::from_fourcc(*b"RGBC");
	/// 2D size (width, height).
	pub const SIZE: Self = Self::from_fourcc(*b"SIZE");
	/// Unsigned size integer.
	pub const SIZE_T: Self = Self::from_fourcc(*b"SIZT");
	/// Signed size integer.
	pub const SSIZE_T: Self = Self::from_fourcc(*b"SSZT");
	/// Zero-terminated string.
	pub const STRING: Self = Self::from_fourcc(*b"CSTR");
	/// Flattened string list.
	pub const STRING_LIST: Self = Self::from_fourcc(*b"STRL");
	/// Time value.
	pub const TIME: Self = Self::from_fourcc(*b"TIME");
	/// Unsigned 8-bit integer.
	pub const UINT8: Self = Self::from_fourcc(*b"UBYT");
	/// Unsigned 16-bit integer.
	pub const UINT16: Self = Self::from_fourcc(*b"USHT");
	/// Unsigned 32-bit integer.
	pub const UINT32: Self = Self::from_fourcc(*b"ULNG");
	/// Unsigned 64-bit integer.
	pub const UINT64: Self = Self::from_fourcc(*b"ULLG");
	/// Vector icon data.
	pub const VECTOR_ICON: Self = Self::from_fourcc(*b"VICN");
	/// Extended attribute data.
	pub const XATTR: Self = Self::from_fourcc(*b"XATR");
	/// Flattened network address.
	pub const NETWORK_ADDRESS: Self = Self::from_fourcc(*b"NWAD");
	/// MIME string.
	pub const MIME_STRING: Self = Self::from_fourcc(*b"MIMS");
	/// Plain ASCII text.
	pub const ASCII: Self = Self::from_fourcc(*b"TEXT");

	/// Build a code from its four-character constant.
	pub const fn from_fourcc(code: [u8; 4]) -> Self {
		Self(u32::from_be_bytes(code))
	}

	/// Resolve the code to its constant name.
	///
	/// Total over all inputs: codes outside the built-in set yield
	/// `"unidentified"`.
	pub fn name(self) -> &'static str {
		match self {
			Self::AFFINE_TRANSFORM => "B_AFFINE_TRANSFORM_TYPE",
			Self::ALIGNMENT => "B_ALIGNMENT_TYPE",
			Self::ANY => "B_ANY_TYPE",
			Self::ATOM => "B_ATOM_TYPE",
			Self::ATOMREF => "B_ATOMREF_TYPE",
			Self::BOOL => "B_BOOL_TYPE",
			Self::CHAR => "B_CHAR_TYPE",
			Self::COLOR_8_BIT => "B_COLOR_8_BIT_TYPE",
			Self::DOUBLE => "B_DOUBLE_TYPE",
			Self::FLOAT => "B_FLOAT_TYPE",
			Self::GRAYSCALE_8_BIT => "B_GRAYSCALE_8_BIT_TYPE",
			Self::INT8 => "B_INT8_TYPE",
			Self::INT16 => "B_INT16_TYPE",
			Self::INT32 => "B_INT32_TYPE",
			Self::INT64 => "B_INT64_TYPE",
			Self::LARGE_ICON => "B_LARGE_ICON_TYPE",
			Self::MEDIA_PARAMETER_GROUP => "B_MEDIA_PARAMETER_GROUP_TYPE",
			Self::MEDIA_PARAMETER => "B_MEDIA_PARAMETER_TYPE",
			Self::MEDIA_PARAMETER_WEB => "B_MEDIA_PARAMETER_WEB_TYPE",
			Self::MESSAGE => "B_MESSAGE_TYPE",
			Self::MESSENGER => "B_MESSENGER_TYPE",
			Self::MIME => "B_MIME_TYPE",
			Self::MINI_ICON => "B_MINI_ICON_TYPE",
			Self::MONOCHROME_1_BIT => "B_MONOCHROME_1_BIT_TYPE",
			Self::OBJECT => "B_OBJECT_TYPE",
			Self::OFF_T => "B_OFF_T_TYPE",
			Self::PATTERN => "B_PATTERN_TYPE",
			Self::POINTER => "B_POINTER_TYPE",
			Self::POINT => "B_POINT_TYPE",
			Self::PROPERTY_INFO => "B_PROPERTY_INFO_TYPE",
			Self::RAW => "B_RAW_TYPE",
			Self::RECT => "B_RECT_TYPE",
			Self::REF => "B_REF_TYPE",
			Self::RGB_32_BIT => "B_RGB_32_BIT_TYPE",
			Self::RGB_COLOR => "B_RGB_COLOR_TYPE",
			Self::SIZE => "B_SIZE_TYPE",
			Self::SIZE_T => "B_SIZE_T_TYPE",
			Self::SSIZE_T => "B_SSIZE_T_TYPE",
			Self::STRING => "B_STRING_TYPE",
			Self::STRING_LIST => "B_STRING_LIST_TYPE",
			Self::TIME => "B_TIME_TYPE",
			Self::UINT8 => "B_UINT8_TYPE",
			Self::UINT16 => "B_UINT16_TYPE",
			Self::UINT32 => "B_UINT32_TYPE",
			Self::UINT64 => "B_UINT64_TYPE",
			Self::VECTOR_ICON => "B_VECTOR_ICON_TYPE",
			Self::XATTR => "B_XATTR_TYPE",
			Self::NETWORK_ADDRESS => "B_NETWORK_ADDRESS_TYPE",
			Self::MIME_STRING => "B_MIME_STRING_TYPE",
			Self::ASCII => "B_ASCII_TYPE",
			_ => "unidentified",
		}
	}

	/// Render the code as a printable four-character label.
	pub fn fourcc(self) -> String {
		self.0
			.to_be_bytes()
			.iter()
			.map(|byte| {
				if byte.is_ascii_graphic() || *byte == b' ' {
					char::from(*byte)
				} else {
					'.'
				}
			})
			.collect()
	}
}
