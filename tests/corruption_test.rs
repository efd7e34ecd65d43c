//! Detection of malformed and truncated WAD files

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use tempfile::NamedTempFile;
use wadkit::{Wad, WadError, WadKind, HEADER_SIZE};

/// Helper: Create a valid test WAD
fn create_test_wad() -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    let mut wad = Wad::new(WadKind::Pwad);
    wad.add_lump("TEXT", b"Hello, World!".to_vec());
    wad.add_lump("DATA", vec![0xAB; 1024]);
    wad.save(temp_file.path(), WadKind::Pwad).unwrap();
    temp_file
}

/// Helper: Overwrite bytes at a specific offset
fn overwrite_at(path: &std::path::Path, offset: u64, bytes: &[u8]) {
    let mut file = OpenOptions::new().read(true).write(true).open(path).unwrap();
    file.seek(SeekFrom::Start(offset)).unwrap();
    file.write_all(bytes).unwrap();
}

/// Helper: Truncate file at specific offset
fn truncate_at(path: &std::path::Path, new_length: u64) {
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_len(new_length).unwrap();
}

#[test]
fn test_corrupted_magic() {
    let temp_file = create_test_wad();
    overwrite_at(temp_file.path(), 0, b"ZWAD");

    match Wad::open(temp_file.path()) {
        Err(WadError::InvalidMagic(magic)) => assert_eq!(&magic, b"ZWAD"),
        other => panic!("Expected InvalidMagic, got: {:?}", other),
    }
}

#[test]
fn test_truncated_header() {
    let temp_file = create_test_wad();
    truncate_at(temp_file.path(), 6);

    match Wad::open(temp_file.path()) {
        Err(WadError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("Expected Io error, got: {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Wad::open(dir.path().join("missing.wad")).unwrap_err();
    assert!(matches!(err, WadError::Io(_)));
    assert!(!err.is_format_error());
}

#[test]
fn test_lump_count_exceeds_file() {
    // Header claims five lumps but the file ends right after it
    let temp_file = NamedTempFile::new().unwrap();
    let mut bytes = b"PWAD".to_vec();
    bytes.extend_from_slice(&5i32.to_le_bytes());
    bytes.extend_from_slice(&(HEADER_SIZE as i32).to_le_bytes());
    bytes.extend_from_slice(&[0u8; 20]);
    std::fs::write(temp_file.path(), &bytes).unwrap();

    match Wad::open(temp_file.path()) {
        Err(WadError::DirectoryOutOfBounds { count, .. }) => assert_eq!(count, 5),
        other => panic!("Expected DirectoryOutOfBounds, got: {:?}", other),
    }
}

#[test]
fn test_huge_lump_count() {
    let temp_file = create_test_wad();
    overwrite_at(temp_file.path(), 4, &i32::MAX.to_le_bytes());

    let err = Wad::open(temp_file.path()).unwrap_err();
    assert!(err.is_format_error(), "got: {:?}", err);
}

#[test]
fn test_negative_lump_count() {
    let temp_file = create_test_wad();
    overwrite_at(temp_file.path(), 4, &(-1i32).to_le_bytes());

    match Wad::open(temp_file.path()) {
        Err(WadError::InvalidFormat(_)) => {}
        other => panic!("Expected InvalidFormat, got: {:?}", other),
    }
}

#[test]
fn test_directory_offset_past_end() {
    let temp_file = create_test_wad();
    overwrite_at(temp_file.path(), 8, &0x7FFF_0000i32.to_le_bytes());

    match Wad::open(temp_file.path()) {
        Err(WadError::DirectoryOutOfBounds { .. }) => {}
        other => panic!("Expected DirectoryOutOfBounds, got: {:?}", other),
    }
}

#[test]
fn test_truncated_lump_data() {
    let temp_file = create_test_wad();
    let len = std::fs::metadata(temp_file.path()).unwrap().len();
    truncate_at(temp_file.path(), len - 100);

    match Wad::open(temp_file.path()) {
        Err(WadError::LumpOutOfBounds { index, name, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(name, "DATA");
        }
        other => panic!("Expected LumpOutOfBounds, got: {:?}", other),
    }
}

#[test]
fn test_lump_size_overflow() {
    let temp_file = create_test_wad();
    // Size field of the first directory entry
    overwrite_at(temp_file.path(), HEADER_SIZE as u64 + 4, &i32::MAX.to_le_bytes());

    let err = Wad::open(temp_file.path()).unwrap_err();
    assert!(matches!(err, WadError::LumpOutOfBounds { index: 0, .. }));
}
