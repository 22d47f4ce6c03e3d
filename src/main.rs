use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use huffpack::{persist, HuffmanCodec};

/// Huffman-compress 7-bit text files.
///
/// The packed blob carries no code table, so decoding needs the text the
/// code was built from.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Build a code from TEXT and write TEXT's packed encoding to OUTPUT
    Encode { text: PathBuf, output: PathBuf },
    /// Rebuild the code from TEXT and unpack PACKED into OUTPUT
    Decode {
        text: PathBuf,
        packed: PathBuf,
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.mode {
        Mode::Encode { text, output } => {
            let source =
                File::open(&text).with_context(|| format!("opening {}", text.display()))?;
            let symbols = persist::read_symbols(source)?;
            let codec = HuffmanCodec::from_symbols(&symbols)?;
            let blob = codec.encode(&symbols)?;
            persist::write_packed(&output, &blob)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("packed {} symbols into {} bytes", symbols.len(), blob.len());
        }
        Mode::Decode {
            text,
            packed,
            output,
        } => {
            let source =
                File::open(&text).with_context(|| format!("opening {}", text.display()))?;
            let symbols = persist::read_symbols(source)?;
            let codec = HuffmanCodec::from_symbols(&symbols)?;
            let blob = persist::read_packed(&packed)
                .with_context(|| format!("reading {}", packed.display()))?;
            let decoded = codec.decode(&blob)?;
            let sink =
                File::create(&output).with_context(|| format!("creating {}", output.display()))?;
            persist::write_symbols(sink, &decoded)?;
            println!(
                "unpacked {} bytes into {} symbols",
                blob.len(),
                decoded.len()
            );
        }
    }

    Ok(())
}
