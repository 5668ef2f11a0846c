use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;

use got_scraper::containers::graphics_got::GraphicsGot;

/// Extract and decompress chunks from a GRAPHICS.GOT container.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to GRAPHICS.GOT
    #[arg(long)]
    file: PathBuf,

    /// List chunks and exit
    #[arg(long)]
    list: bool,

    /// Emit the chunk listing as JSON (implies --list)
    #[arg(long)]
    json: bool,

    /// Chunk index (0-based)
    #[arg(long)]
    chunk: Option<usize>,

    /// Output file path for --chunk
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the compressed payload without decompressing
    #[arg(long)]
    raw: bool,

    /// Extract every chunk into --out-dir
    #[arg(long)]
    all: bool,

    /// Output directory for --all
    #[arg(long, default_value = "./output")]
    out_dir: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let got = GraphicsGot::from_file(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    if args.list || args.json {
        return list_chunks(&got, args.json);
    }
    if args.all {
        return extract_all(&got, &args.out_dir);
    }

    let Some(index) = args.chunk else {
        bail!("nothing to do: pass --list, --all, or --chunk");
    };
    let out_path = args.out.context("--chunk requires --out")?;

    let bytes = if args.raw {
        got.extract_raw(index)?.to_vec()
    } else {
        got.extract(index)?
    };

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, &bytes)?;

    let desc = got.descriptors()[index];
    println!(
        "Wrote {} ({} bytes) from chunk {} (type {})",
        out_path.display(),
        bytes.len(),
        index,
        desc.comp_type
    );
    Ok(())
}

fn list_chunks(got: &GraphicsGot, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(got.descriptors())?);
        return Ok(());
    }
    for (i, d) in got.descriptors().iter().enumerate() {
        println!(
            "{i:4} type={} off=0x{:08X} in={} out={} w={} h={}",
            d.comp_type, d.file_offset, d.in_size, d.out_size, d.width, d.height
        );
    }
    Ok(())
}

/// Batch mode: a chunk that fails to decode is reported and skipped so
/// one corrupt descriptor does not sink the whole run.
fn extract_all(got: &GraphicsGot, out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = 0usize;
    for i in 0..got.chunk_count() {
        match got.extract(i) {
            Ok(bytes) => {
                let path = out_dir.join(format!("chunk_{i:04}.bin"));
                fs::write(&path, &bytes)?;
                written += 1;
            }
            Err(e) => eprintln!("Skipping chunk {i}: {e}"),
        }
    }
    println!(
        "Extracted {written}/{} chunks to {}",
        got.chunk_count(),
        out_dir.display()
    );
    Ok(())
}
