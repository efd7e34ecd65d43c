use crate::archive::format::{
    encode_name, DirectoryEntry, WadHeader, WadKind, DIRECTORY_ENTRY_SIZE, HEADER_SIZE,
};
use crate::archive::wad::Wad;
use crate::error::{Result, WadError};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl Wad {
    /// Encode this WAD to `path` as the given variant.
    ///
    /// The directory directly follows the header and the lump data follows
    /// the directory. Flat variants store each lump's decimal byte count
    /// instead of its contents. A failed write leaves a partial file.
    pub fn save<P: AsRef<Path>>(&self, path: P, kind: WadKind) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, kind)?;
        writer.flush()?;
        tracing::info!(
            "Wrote {} with {} lumps to {}",
            kind,
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Encode this WAD into any writer.
    pub fn write_to<W: Write>(&self, mut writer: W, kind: WadKind) -> Result<()> {
        let num_lumps = i32::try_from(self.len()).map_err(|_| {
            WadError::InvalidFormat(format!("too many lumps: {}", self.len()))
        })?;

        let payloads: Vec<Cow<'_, [u8]>> =
            self.lumps().iter().map(|l| l.stored_data(kind)).collect();

        let header = WadHeader {
            kind,
            num_lumps,
            directory_offset: HEADER_SIZE as i32,
        };
        header.write_to(&mut writer)?;

        let mut position = HEADER_SIZE as u64 + self.len() as u64 * DIRECTORY_ENTRY_SIZE as u64;
        for (lump, payload) in self.lumps().iter().zip(&payloads) {
            let entry = DirectoryEntry {
                position: to_i32(position, &lump.name)?,
                size: to_i32(payload.len() as u64, &lump.name)?,
                name: encode_name(&lump.name)?,
            };
            entry.write_to(&mut writer)?;
            position += payload.len() as u64;
        }
        // The last lump must end inside the signed offset range too
        to_i32(position, "end of data")?;

        for payload in &payloads {
            writer.write_all(payload)?;
        }

        Ok(())
    }

    /// Encode this WAD into a fresh buffer.
    pub fn to_bytes(&self, kind: WadKind) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, kind)?;
        Ok(buf)
    }
}

fn to_i32(value: u64, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        WadError::InvalidFormat(format!("{} does not fit a 32-bit offset: {}", what, value))
    })
}
