use crate::archive::wad::Wad;
use crate::checksum::write_checksum_file;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// How lumps are named and checksummed when dumped to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Prefix each file with the lump's directory index (`3_PLAYPAL`)
    pub use_index: bool,
    /// Write a `.md5` file next to each dumped lump
    pub checksums: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            use_index: true,
            checksums: false,
        }
    }
}

/// Writes every lump of a WAD to its own file
pub struct LumpDumper {
    directory: PathBuf,
    options: DumpOptions,
}

impl LumpDumper {
    pub fn new<P: AsRef<Path>>(directory: P, options: DumpOptions) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            options,
        }
    }

    /// Default dump directory for a WAD: `_<file name>` beside it
    pub fn default_directory(wad_path: &Path) -> PathBuf {
        let parent = wad_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut name = std::ffi::OsString::from("_");
        if let Some(file_name) = wad_path.file_name() {
            name.push(file_name);
        }
        parent.join(name)
    }

    /// Dump all lumps, returning the paths of the payload files in lump order.
    ///
    /// Existing files are overwritten, so repeated dumps are identical.
    /// Without an index prefix, later lumps with the same name replace
    /// earlier ones.
    pub fn dump(&self, wad: &Wad) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.directory)?;

        let mut written = Vec::with_capacity(wad.len());
        for (index, lump) in wad.lumps().iter().enumerate() {
            let path = self.directory.join(self.file_name(index, &lump.name));
            fs::write(&path, &lump.data)?;
            if self.options.checksums {
                write_checksum_file(&path, &lump.data)?;
            }
            tracing::debug!("Dumped {:?} to {}", lump.name, path.display());
            written.push(path);
        }

        tracing::info!(
            "Dumped {} lumps to {}",
            written.len(),
            self.directory.display()
        );
        Ok(written)
    }

    fn file_name(&self, index: usize, name: &str) -> String {
        let name = sanitize_file_name(name);
        if self.options.use_index {
            format!("{}_{}", index, name)
        } else {
            name
        }
    }
}

/// Make a lump name safe to use as a single path component.
///
/// Separators and control characters become `_`, and names that would
/// resolve to the directory itself or its parent are replaced.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("PLAYPAL"), "PLAYPAL");
        assert_eq!(sanitize_file_name("../etc"), ".._etc");
        assert_eq!(sanitize_file_name("A\\B/C"), "A_B_C");
        assert_eq!(sanitize_file_name("AB\0C"), "AB_C");
        assert_eq!(sanitize_file_name(".."), "_");
        assert_eq!(sanitize_file_name("."), "_");
        assert_eq!(sanitize_file_name(""), "_");
        assert_eq!(sanitize_file_name("MAP01[1]"), "MAP01[1]");
    }

    #[test]
    fn test_file_names() {
        let indexed = LumpDumper::new("out", DumpOptions::default());
        assert_eq!(indexed.file_name(0, "MAP01"), "0_MAP01");
        assert_eq!(indexed.file_name(12, ".."), "12__");

        let plain = LumpDumper::new(
            "out",
            DumpOptions {
                use_index: false,
                checksums: false,
            },
        );
        assert_eq!(plain.file_name(12, "MAP01"), "MAP01");
    }

    #[test]
    fn test_default_directory() {
        assert_eq!(
            LumpDumper::default_directory(Path::new("assets/srb2.pk3")),
            PathBuf::from("assets/_srb2.pk3")
        );
        assert_eq!(
            LumpDumper::default_directory(Path::new("main.wad")),
            PathBuf::from("./_main.wad")
        );
    }
}
