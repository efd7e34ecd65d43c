//! Generate seed corpus for fuzzing

use std::fs;
use wadkit::{Wad, WadKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let corpus_dir = "fuzz/corpus/fuzz_wad_decode";
    fs::create_dir_all(corpus_dir)?;

    println!("Generating seed corpus...");

    // Seed 1: Empty WAD
    {
        let path = format!("{}/seed_empty.wad", corpus_dir);
        Wad::new(WadKind::Iwad).save(&path, WadKind::Iwad)?;
        println!("Generated: {}", path);
    }

    // Seed 2: Map lumps with a marker
    {
        let path = format!("{}/seed_map.wad", corpus_dir);
        let mut wad = Wad::new(WadKind::Pwad);
        wad.add_lump("MAP01", Vec::new());
        wad.add_lump("THINGS", vec![0u8; 40]);
        wad.add_lump("LINEDEFS", vec![1u8; 84]);
        wad.save(&path, WadKind::Pwad)?;
        println!("Generated: {}", path);
    }

    // Seed 3: Flat WAD
    {
        let path = format!("{}/seed_flat.wad", corpus_dir);
        let mut wad = Wad::new(WadKind::Pwad);
        wad.add_lump("PLAYPAL", vec![0u8; 10752]);
        wad.add_lump("COLORMAP", vec![0u8; 8704]);
        wad.save(&path, WadKind::Fwad)?;
        println!("Generated: {}", path);
    }

    // Seed 4: Legacy tag
    {
        let path = format!("{}/seed_sdll.wad", corpus_dir);
        let mut wad = Wad::new(WadKind::Sdll);
        wad.add_lump("SOC_1", b"FREESLOT\nMT_THING\n".to_vec());
        wad.save(&path, WadKind::Sdll)?;
        println!("Generated: {}", path);
    }

    println!("Seed corpus ready in {}", corpus_dir);
    Ok(())
}
