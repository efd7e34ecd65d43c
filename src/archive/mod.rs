mod dump;
mod format;
mod reader;
mod wad;
mod writer;

pub use dump::{sanitize_file_name, DumpOptions, LumpDumper};
pub use format::{
    decode_name, encode_name, DirectoryEntry, WadHeader, WadKind, DIRECTORY_ENTRY_SIZE,
    HEADER_SIZE, MAX_NAME_LENGTH,
};
pub use wad::{Lump, Wad};
