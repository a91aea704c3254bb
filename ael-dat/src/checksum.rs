/// Checksum algorithms a catalog entry may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
    Crc32,
    Md5,
    Sha1,
}

impl ChecksumKind {
    /// Number of hex digits in a well-formed value.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Crc32 => 8,
            Self::Md5 => 32,
            Self::Sha1 => 40,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC32",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
        }
    }
}

/// Normalize a checksum string to lowercase hex.
///
/// Returns `None` when the value has the wrong length or non-hex characters,
/// so garbled input simply never matches.
pub fn normalize_checksum(value: &str, kind: ChecksumKind) -> Option<String> {
    let value = value.trim();
    if value.len() != kind.hex_len() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(value.to_ascii_lowercase())
}
