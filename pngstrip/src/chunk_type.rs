use std::fmt::{Debug, Display};

/// Adds conversions `from` and `into` integer to enums
///
/// Values without a variant land in `Unknown`.
macro_rules! convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
            /// Value without a named variant
            ///
            /// Build values with `from` or
            /// [`ChunkType::from_bytes`](crate::ChunkType::from_bytes).
            /// Wrapping a value that has a named variant in `Unknown` gives a
            /// type that is not equal to that variant and never matches it.
            Unknown($type)
        }

        impl std::convert::From<$type> for $enum_name {
            fn from(v: $type) -> Self {
                match v {
                    $(x if x == $variant_value => Self::$variant_name,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> $type {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                    $enum_name::Unknown(other) => other,
                }
            }
        }
    }
}

convertible_enum!(
    #[repr(u32)]
    #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[non_exhaustive]
    #[allow(non_camel_case_types)]
    /// Type of a chunk
    ///
    /// The value is stored as big endian [`u32`] of the original byte string.
    /// Tags that are not listed here, including ones that are not ASCII, are
    /// kept as [`ChunkType::Unknown`] and written back unchanged.
    pub enum ChunkType {
        /// Header
        IHDR = b(b"IHDR"),
        /// Palette
        PLTE = b(b"PLTE"),
        /// Image Data
        IDAT = b(b"IDAT"),
        /// End of file
        IEND = b(b"IEND"),

        /// Primary chromaticities
        cHRM = b(b"cHRM"),
        /// Gamma
        gAMA = b(b"gAMA"),
        /// Significant bits
        sBIT = b(b"sBIT"),
        /// Image uses sRGB color space with the given rendering intent
        sRGB = b(b"sRGB"),
        /// Background Color
        bKGD = b(b"bKGD"),
        /// Palette histogram
        hIST = b(b"hIST"),
        /// Transparency
        tRNS = b(b"tRNS"),
        /// Physical pixel dimensions
        pHYs = b(b"pHYs"),
        /// Suggested palette
        sPLT = b(b"sPLT"),
        /// Image last-modification time
        tIME = b(b"tIME"),
        /// Exif
        eXIf = b(b"eXIf"),
        /// Embedded ICC profile
        iCCP = b(b"iCCP"),
        /// International textual data
        iTXt = b(b"iTXt"),
        /// Textual information
        tEXt = b(b"tEXt"),
        /// Compressed textual data
        zTXt = b(b"zTXt"),
        /// Apple proprietary, information for faster image loading
        ///
        /// See <https://www.hackerfactor.com/blog/index.php?/archives/895-Connecting-the-iDOTs.html>
        iDOT = b(b"iDOT"),
    }
);

impl ChunkType {
    /// Returns the byte string of the chunk
    pub fn bytes(self) -> [u8; 4] {
        u32::to_be_bytes(self.into())
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from(u32::from_be_bytes(bytes))
    }

    /// Critical chunks have bit 5 of the first byte cleared
    ///
    /// ```
    /// # use pngstrip::ChunkType;
    /// assert!(ChunkType::IHDR.is_critical());
    /// assert!(!ChunkType::tEXt.is_critical());
    /// ```
    pub fn is_critical(self) -> bool {
        self.bytes()[0] & 0x20 == 0
    }

    /// Whether the chunk may be selected for removal
    ///
    /// See [`REMOVABLE_CHUNK_TYPES`](crate::REMOVABLE_CHUNK_TYPES).
    pub fn is_removable(self) -> bool {
        crate::policy::is_removable(self)
    }

    fn name(self) -> String {
        let bytes = self.bytes();
        if bytes.is_ascii() {
            String::from_utf8_lossy(&bytes).into_owned()
        } else {
            <Self as Into<u32>>::into(self).to_string()
        }
    }
}

impl Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(_) => write!(f, "Unknown({:?})", self.name()),
            _ => f.write_str(&self.name()),
        }
    }
}

impl Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Convert bytes to u32
const fn b(d: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown() {
        assert_eq!(ChunkType::from_bytes(*b"tEXt"), ChunkType::tEXt);
        assert_eq!(ChunkType::tEXt.bytes(), *b"tEXt");

        let private = ChunkType::from_bytes(*b"prVt");
        assert_eq!(private, ChunkType::Unknown(u32::from_be_bytes(*b"prVt")));
        assert_eq!(private.bytes(), *b"prVt");
        assert_eq!(format!("{private:?}"), "Unknown(\"prVt\")");
        assert_eq!(private.to_string(), "prVt");
    }

    #[test]
    fn unknown_is_not_canonical() {
        let value = u32::from_be_bytes(*b"tEXt");
        assert_eq!(ChunkType::from(value), ChunkType::tEXt);
        assert_eq!(ChunkType::from_bytes(*b"tEXt"), ChunkType::tEXt);

        let wrapped = ChunkType::Unknown(value);
        assert_ne!(wrapped, ChunkType::tEXt);
        assert!(!wrapped.is_removable());
        assert!(!crate::ChunkSelection::types([wrapped]).matches(1, ChunkType::tEXt));
    }

    #[test]
    fn non_ascii_tag() {
        let odd = ChunkType::from_bytes([0xff, 0, 0, 1]);
        assert_eq!(odd.bytes(), [0xff, 0, 0, 1]);
        assert_eq!(odd.to_string(), 0xff00_0001_u32.to_string());
    }

    #[test]
    fn critical_bit() {
        assert!(ChunkType::IDAT.is_critical());
        assert!(ChunkType::PLTE.is_critical());
        assert!(!ChunkType::pHYs.is_critical());
        assert!(!ChunkType::iDOT.is_critical());
    }
}
