use crate::archive::format::{DirectoryEntry, WadHeader, DIRECTORY_ENTRY_SIZE};
use crate::archive::wad::{Lump, Wad};
use crate::error::{Result, WadError};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

impl Wad {
    /// Decode a WAD file.
    ///
    /// The file is closed before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let wad = Self::read_from(&mut BufReader::new(file))?;
        tracing::info!(
            "Read {} with {} lumps from {}",
            wad.kind(),
            wad.len(),
            path.display()
        );
        Ok(wad)
    }

    /// Decode a WAD from any seekable source.
    ///
    /// The source is assumed to start at the WAD header; its total length
    /// bounds every directory and lump range.
    pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let file_len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let header = WadHeader::read_from(&mut *reader)?;
        header.validate()?;

        // Check the whole directory fits before allocating for it
        let count = header.num_lumps as u64;
        let offset = header.directory_offset as u64;
        let directory_end = offset + count * DIRECTORY_ENTRY_SIZE as u64;
        if directory_end > file_len {
            return Err(WadError::DirectoryOutOfBounds {
                offset,
                count,
                file_len,
            });
        }

        reader.seek(SeekFrom::Start(offset))?;

        let mut lumps = Vec::with_capacity(header.num_lumps as usize);
        for index in 0..header.num_lumps as usize {
            let entry = DirectoryEntry::read_from(&mut *reader)?;
            let name = entry.name();

            if entry.position < 0
                || entry.size < 0
                || entry.position as u64 + entry.size as u64 > file_len
            {
                return Err(WadError::LumpOutOfBounds {
                    index,
                    name,
                    position: entry.position.into(),
                    size: entry.size.into(),
                    file_len,
                });
            }

            // Payloads may sit anywhere; come back to the directory after
            let next_entry = reader.stream_position()?;
            reader.seek(SeekFrom::Start(entry.position as u64))?;
            let mut data = vec![0u8; entry.size as usize];
            reader.read_exact(&mut data)?;
            reader.seek(SeekFrom::Start(next_entry))?;

            tracing::debug!(
                "Lump {}: {:?} at {} ({} bytes)",
                index,
                name,
                entry.position,
                entry.size
            );
            lumps.push(Lump { name, data });
        }

        Ok(Wad::from_lumps(header.kind, lumps))
    }
}
