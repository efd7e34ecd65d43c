//! Command-line interface for wadkit

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wadkit::deps::prune_dependencies;
use wadkit::{convert_to_flat, default_output_path, ConvertOptions, DependencyWhitelist, Wad};

#[derive(Parser, Debug)]
#[command(name = "wadkit")]
#[command(about = "WAD archive and packaging tools", long_about = None)]
pub struct Cli {
    /// Log every lump and dependency processed
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a WAD to a flat-file WAD
    Fwad(FwadArgs),
    /// List the lumps of a WAD
    List(ListArgs),
    /// Print allow-listed shared-library dependencies of an executable
    PruneDepends(PruneDependsArgs),
}

#[derive(Parser, Debug)]
pub struct FwadArgs {
    /// Input WAD file
    in_file: PathBuf,

    /// Output FWAD file (defaults to <name>-f.<ext> beside the input)
    out_file: Option<PathBuf>,

    /// Directory to output lump files (defaults to "_<in_file>" beside the input)
    #[arg(short, long)]
    dump: Option<PathBuf>,

    /// Do not dump lump files
    #[arg(long, conflicts_with = "dump")]
    no_dump: bool,

    /// Output MD5 digests of lumps and of the output WAD as <file>.md5
    #[arg(long, alias = "checksum")]
    md5: bool,

    /// Do not name lump files with their index number (writes EWAD)
    #[arg(long)]
    noindex: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// WAD file to inspect
    in_file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct PruneDependsArgs {
    /// Path to the program executable
    executable: PathBuf,

    /// TOML file with `libraries = [...]` replacing the built-in allow-list
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fwad(args) => cmd_fwad(args),
        Commands::List(args) => cmd_list(args),
        Commands::PruneDepends(args) => cmd_prune_depends(args),
    }
}

fn cmd_fwad(args: FwadArgs) -> Result<()> {
    let output = args
        .out_file
        .unwrap_or_else(|| default_output_path(&args.in_file));

    let options = ConvertOptions {
        dump_dir: args.dump,
        skip_dump: args.no_dump,
        checksums: args.md5,
        use_index: !args.noindex,
    };

    let report = convert_to_flat(&args.in_file, &output, &options).with_context(|| {
        format!(
            "failed to convert {} to {}",
            args.in_file.display(),
            output.display()
        )
    })?;

    println!(
        "Wrote {} with {} lumps to {}",
        report.kind,
        report.lump_count,
        report.output.display()
    );
    if !report.dumped.is_empty() {
        println!("Dumped {} lump files", report.dumped.len());
    }
    if let Some(checksum) = report.checksum {
        println!("Checksum: {}", checksum.display());
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> Result<()> {
    let wad = Wad::open(&args.in_file)
        .with_context(|| format!("failed to read {}", args.in_file.display()))?;

    println!("{}: {} ({} lumps)", args.in_file.display(), wad.kind(), wad.len());
    for (index, lump) in wad.lumps().iter().enumerate() {
        println!("{:>5}  {:<8}  {:>10}", index, lump.name, lump.data.len());
    }
    Ok(())
}

fn cmd_prune_depends(args: PruneDependsArgs) -> Result<()> {
    let whitelist = match &args.config {
        Some(path) => DependencyWhitelist::load(path)
            .with_context(|| format!("failed to load allow-list {}", path.display()))?,
        None => DependencyWhitelist::default(),
    };

    let deps = prune_dependencies(&args.executable, whitelist).with_context(|| {
        format!(
            "failed to list dependencies of {}",
            args.executable.display()
        )
    })?;

    println!("{}", deps.join(" "));
    Ok(())
}
