#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use wadkit::{Wad, WadKind};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must fail cleanly, never panic
    let wad = match Wad::read_from(&mut Cursor::new(data)) {
        Ok(w) => w,
        Err(_) => return,
    };

    // Whatever decoded must re-encode and decode to the same lumps
    // (names may shrink to eight trimmed bytes, so only check data)
    let Ok(bytes) = wad.to_bytes(WadKind::Pwad) else {
        return;
    };
    let again = Wad::read_from(&mut Cursor::new(bytes)).expect("re-encoded WAD must decode");
    assert_eq!(again.len(), wad.len());
    for (a, b) in again.lumps().iter().zip(wad.lumps()) {
        assert_eq!(a.data, b.data);
    }

    let _ = wad.to_bytes(WadKind::Fwad);
});
