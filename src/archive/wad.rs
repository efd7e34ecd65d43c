use crate::archive::format::WadKind;
use std::borrow::Cow;

/// A single named payload inside a WAD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lump {
    pub name: String,
    pub data: Vec<u8>,
}

impl Lump {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Bytes stored for this lump under the given variant
    ///
    /// Verbatim variants borrow the payload; only flat variants allocate.
    pub fn stored_data(&self, kind: WadKind) -> Cow<'_, [u8]> {
        if kind.is_flat() {
            Cow::Owned(self.data.len().to_string().into_bytes())
        } else {
            Cow::Borrowed(&self.data[..])
        }
    }
}

/// An in-memory WAD: ordered lumps plus the variant they were read as
///
/// Lump order is significant; dumps and flat conversions refer to lumps
/// by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wad {
    kind: WadKind,
    lumps: Vec<Lump>,
}

impl Wad {
    /// Create an empty WAD of the given variant
    pub fn new(kind: WadKind) -> Self {
        Self {
            kind,
            lumps: Vec::new(),
        }
    }

    pub fn from_lumps(kind: WadKind, lumps: Vec<Lump>) -> Self {
        Self { kind, lumps }
    }

    pub fn kind(&self) -> WadKind {
        self.kind
    }

    pub fn lumps(&self) -> &[Lump] {
        &self.lumps
    }

    pub fn into_lumps(self) -> Vec<Lump> {
        self.lumps
    }

    /// Append a lump at the end of the directory
    pub fn add_lump(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.lumps.push(Lump::new(name, data));
    }

    pub fn len(&self) -> usize {
        self.lumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lumps.is_empty()
    }

    /// First lump with the given name
    pub fn find(&self, name: &str) -> Option<&Lump> {
        self.lumps.iter().find(|lump| lump.name == name)
    }
}
