//! WAD to flat-WAD conversion

use crate::archive::{DumpOptions, LumpDumper, Wad, WadKind};
use crate::checksum::checksum_file;
use crate::error::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Settings for [`convert_to_flat`]
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Where to dump lumps; `None` uses `_<input name>` beside the input
    pub dump_dir: Option<PathBuf>,
    /// Skip dumping entirely
    pub skip_dump: bool,
    /// Write `.md5` files for each dumped lump and the output WAD
    pub checksums: bool,
    /// Index-prefix dumped lumps and write `FWAD`; otherwise `EWAD`
    pub use_index: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dump_dir: None,
            skip_dump: false,
            checksums: false,
            use_index: true,
        }
    }
}

/// What a conversion produced
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub kind: WadKind,
    pub lump_count: usize,
    pub output: PathBuf,
    pub dumped: Vec<PathBuf>,
    pub checksum: Option<PathBuf>,
}

/// Default flat-WAD path: `<stem>-f.<ext>` beside the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push("-f");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Read `input`, dump its lumps, and write the flat variant to `output`.
pub fn convert_to_flat(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let wad = Wad::open(input)?;

    let dumped = if options.skip_dump {
        Vec::new()
    } else {
        let directory = options
            .dump_dir
            .clone()
            .unwrap_or_else(|| LumpDumper::default_directory(input));
        let dumper = LumpDumper::new(
            directory,
            DumpOptions {
                use_index: options.use_index,
                checksums: options.checksums,
            },
        );
        dumper.dump(&wad)?
    };

    let kind = WadKind::flat(options.use_index);
    wad.save(output, kind)?;

    let checksum = if options.checksums {
        Some(checksum_file(output)?)
    } else {
        None
    };

    Ok(ConvertReport {
        kind,
        lump_count: wad.len(),
        output: output.to_path_buf(),
        dumped,
        checksum,
    })
}
