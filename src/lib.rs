//! wadkit: WAD resource archive tooling
//!
//! This library provides:
//! - A codec for WAD archives (`IWAD`, `PWAD`, legacy `SDLL`)
//! - Conversion to flat WADs (`FWAD`/`EWAD`), where each lump is replaced
//!   by its byte count
//! - Lump dumping with optional SHA-256 companion files
//! - AppImage dependency pruning over `ldd` output
//!
//! # Example
//!
//! ```no_run
//! use wadkit::{Wad, WadKind};
//!
//! let wad = Wad::open("srb2.pk3")?;
//! for lump in wad.lumps() {
//!     println!("{} ({} bytes)", lump.name, lump.data.len());
//! }
//! wad.save("srb2-f.pk3", WadKind::Fwad)?;
//! # Ok::<(), wadkit::error::WadError>(())
//! ```

// Core modules
pub mod archive;
pub mod checksum;
pub mod config;
pub mod convert;
pub mod deps;
pub mod error;

// Re-export commonly used types
pub use archive::{
    DirectoryEntry, DumpOptions, Lump, LumpDumper, Wad, WadHeader, WadKind,
    DIRECTORY_ENTRY_SIZE, HEADER_SIZE, MAX_NAME_LENGTH,
};
pub use config::DependencyWhitelist;
pub use convert::{convert_to_flat, default_output_path, ConvertOptions, ConvertReport};
pub use deps::DependencyFilter;
pub use error::{Result, WadError};
