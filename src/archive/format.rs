use crate::error::{Result, WadError};
use std::io::{Read, Write};

/// Header size in bytes: magic, lump count, directory offset
pub const HEADER_SIZE: usize = 12;

/// Directory entry size in bytes: position, size, name
pub const DIRECTORY_ENTRY_SIZE: usize = 16;

/// Fixed width of a lump name on disk
pub const MAX_NAME_LENGTH: usize = 8;

/// Container variants recognised by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WadKind {
    /// Internal WAD, lumps stored verbatim
    Iwad,
    /// Patch WAD, lumps stored verbatim
    Pwad,
    /// Legacy tag; handled like `Pwad`
    Sdll,
    /// Flat WAD, lumps replaced by their byte count, dumps index-prefixed
    Fwad,
    /// Flat WAD, lumps replaced by their byte count, dumps named plainly
    Ewad,
}

impl WadKind {
    pub const ALL: [WadKind; 5] = [
        WadKind::Iwad,
        WadKind::Pwad,
        WadKind::Sdll,
        WadKind::Fwad,
        WadKind::Ewad,
    ];

    pub fn from_magic(magic: &[u8; 4]) -> Result<Self> {
        match magic {
            b"IWAD" => Ok(Self::Iwad),
            b"PWAD" => Ok(Self::Pwad),
            b"SDLL" => Ok(Self::Sdll),
            b"FWAD" => Ok(Self::Fwad),
            b"EWAD" => Ok(Self::Ewad),
            _ => Err(WadError::InvalidMagic(*magic)),
        }
    }

    pub fn magic(self) -> [u8; 4] {
        match self {
            Self::Iwad => *b"IWAD",
            Self::Pwad => *b"PWAD",
            Self::Sdll => *b"SDLL",
            Self::Fwad => *b"FWAD",
            Self::Ewad => *b"EWAD",
        }
    }

    /// Flat variants store each lump's decimal length instead of its data.
    pub fn is_flat(self) -> bool {
        matches!(self, Self::Fwad | Self::Ewad)
    }

    /// Pick the flat variant matching the dump naming scheme.
    pub fn flat(use_index: bool) -> Self {
        if use_index {
            Self::Fwad
        } else {
            Self::Ewad
        }
    }
}

impl std::fmt::Display for WadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magic = self.magic();
        // Tags are always ASCII
        f.write_str(std::str::from_utf8(&magic).unwrap_or("????"))
    }
}

/// WAD header at the beginning of the file
///
/// Structure (12 bytes, little-endian):
/// - Magic: 4 bytes
/// - Lump count: int32
/// - Directory offset: int32
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WadHeader {
    pub kind: WadKind,
    pub num_lumps: i32,
    pub directory_offset: i32,
}

impl WadHeader {
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.kind.magic())?;
        writer.write_all(&self.num_lumps.to_le_bytes())?;
        writer.write_all(&self.directory_offset.to_le_bytes())?;
        Ok(())
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        let kind = WadKind::from_magic(&magic)?;

        let num_lumps = read_i32(&mut reader)?;
        let directory_offset = read_i32(&mut reader)?;

        Ok(Self {
            kind,
            num_lumps,
            directory_offset,
        })
    }

    /// Reject counts and offsets no valid archive can carry.
    pub fn validate(&self) -> Result<()> {
        if self.num_lumps < 0 {
            return Err(WadError::InvalidFormat(format!(
                "negative lump count {}",
                self.num_lumps
            )));
        }
        if self.directory_offset < 0 {
            return Err(WadError::InvalidFormat(format!(
                "negative directory offset {}",
                self.directory_offset
            )));
        }
        Ok(())
    }
}

/// One 16-byte record of the lump directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub position: i32,
    pub size: i32,
    pub name: [u8; MAX_NAME_LENGTH],
}

impl DirectoryEntry {
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.position.to_le_bytes())?;
        writer.write_all(&self.size.to_le_bytes())?;
        writer.write_all(&self.name)?;
        Ok(())
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let position = read_i32(&mut reader)?;
        let size = read_i32(&mut reader)?;
        let mut name = [0u8; MAX_NAME_LENGTH];
        reader.read_exact(&mut name)?;
        Ok(Self {
            position,
            size,
            name,
        })
    }

    /// Name with trailing NUL padding removed
    pub fn name(&self) -> String {
        decode_name(&self.name)
    }
}

/// Decode a fixed-width name field as Latin-1, dropping trailing NULs.
///
/// Interior NULs are kept so every byte value survives a decode.
pub fn decode_name(raw: &[u8]) -> String {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    raw[..end].iter().map(|&b| b as char).collect()
}

/// Encode a lump name into its on-disk field.
///
/// Surrounding whitespace is trimmed, the result truncated to
/// [`MAX_NAME_LENGTH`] characters and NUL-padded.
pub fn encode_name(name: &str) -> Result<[u8; MAX_NAME_LENGTH]> {
    let mut buf = [0u8; MAX_NAME_LENGTH];
    for (slot, c) in buf.iter_mut().zip(name.trim().chars()) {
        *slot = u8::try_from(u32::from(c))
            .map_err(|_| WadError::UnencodableName(name.to_string()))?;
    }
    Ok(buf)
}

fn read_i32<R: Read>(mut reader: R) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_magic() {
        for kind in WadKind::ALL {
            assert_eq!(WadKind::from_magic(&kind.magic()).unwrap(), kind);
        }
        assert!(matches!(
            WadKind::from_magic(b"ZWAD"),
            Err(WadError::InvalidMagic(m)) if &m == b"ZWAD"
        ));
    }

    #[test]
    fn test_flat_kinds() {
        assert!(WadKind::Fwad.is_flat());
        assert!(WadKind::Ewad.is_flat());
        assert!(!WadKind::Iwad.is_flat());
        assert!(!WadKind::Sdll.is_flat());
        assert_eq!(WadKind::flat(true), WadKind::Fwad);
        assert_eq!(WadKind::flat(false), WadKind::Ewad);
        assert_eq!(WadKind::Ewad.to_string(), "EWAD");
    }

    #[test]
    fn test_header_layout() {
        let header = WadHeader {
            kind: WadKind::Pwad,
            num_lumps: 3,
            directory_offset: 0x0102_0304,
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), HEADER_SIZE);
        assert_eq!(&buf[..4], b"PWAD");
        assert_eq!(&buf[4..8], &[3, 0, 0, 0]);
        assert_eq!(&buf[8..12], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(WadHeader::read_from(&buf[..]).unwrap(), header);
    }

    #[test]
    fn test_header_validate_rejects_negatives() {
        let mut header = WadHeader {
            kind: WadKind::Iwad,
            num_lumps: -1,
            directory_offset: 12,
        };
        assert!(header.validate().is_err());
        header.num_lumps = 0;
        header.directory_offset = -12;
        assert!(header.validate().is_err());
        header.directory_offset = 12;
        assert!(header.validate().is_ok());
    }

    #[test]
    fn test_directory_entry_layout() {
        let entry = DirectoryEntry {
            position: 28,
            size: 4,
            name: encode_name("PLAYPAL").unwrap(),
        };

        let mut buf = Vec::new();
        entry.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), DIRECTORY_ENTRY_SIZE);
        assert_eq!(&buf[8..], b"PLAYPAL\0");

        let parsed = DirectoryEntry::read_from(&buf[..]).unwrap();
        assert_eq!(parsed, entry);
        assert_eq!(parsed.name(), "PLAYPAL");
    }

    #[test]
    fn test_name_truncation_and_padding() {
        assert_eq!(&encode_name("averylongname").unwrap(), b"averylon");
        assert_eq!(&encode_name("MAP01").unwrap(), b"MAP01\0\0\0");
        assert_eq!(&encode_name("  S_START \t").unwrap(), b"S_START\0");
        assert_eq!(&encode_name("").unwrap(), &[0u8; 8]);
    }

    #[test]
    fn test_name_latin1() {
        let raw = [b'A', 0xE9, 0xFF, b'B', 0, 0, 0, 0];
        let name = decode_name(&raw);
        assert_eq!(name.chars().count(), 4);
        assert_eq!(encode_name(&name).unwrap(), raw);

        assert!(matches!(
            encode_name("snow\u{2603}"),
            Err(WadError::UnencodableName(_))
        ));
        // Characters past the cut are never encoded
        assert!(encode_name("ABCDEFGH\u{2603}").is_ok());
    }

    #[test]
    fn test_decode_name_keeps_interior_nul() {
        assert_eq!(decode_name(b"AB\0C\0\0\0\0"), "AB\0C");
        assert_eq!(decode_name(&[0u8; 8]), "");
    }
}
