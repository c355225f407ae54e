use std::fmt::Debug;
use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use huffman_tree_compression::{compress_with_summary, decompress, CodeTable, FrequencyTable};


#[derive(Parser, Debug)]
#[command(about = "Compress and decompress files with a Huffman code")]
struct Args {
    #[command(subcommand)]
    mode: Mode,
}


#[derive(Subcommand, Debug)]
enum Mode {
    /// Compress a file
    Compress {
        /// The file to compress
        input: PathBuf,
        /// Destination file, defaults to <stem>_encode.htc next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Code raw bytes instead of UTF-8 characters
        #[arg(long)]
        bytes: bool,
        /// Strip trailing whitespace from the text before compressing
        #[arg(long, conflicts_with = "bytes")]
        trim_end: bool,
    },
    /// Decompress a file produced by `compress`
    Decompress {
        /// The compressed file
        input: PathBuf,
        /// Destination file, defaults to <stem>_decompressed.txt next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// The file was compressed with --bytes
        #[arg(long)]
        bytes: bool,
    },
    /// Print the frequency and code of every symbol of a file
    Codes {
        input: PathBuf,
        #[arg(long)]
        bytes: bool,
    },
}


/// `<dir>/<stem><suffix>.<extension>` for `input` at `<dir>/<stem>.<ext>`.
fn default_output(input: &Path, suffix: &str, extension: &str) -> PathBuf {

    let stem = input.file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_else(|| "output".into());

    input.with_file_name(format!("{stem}{suffix}.{extension}"))
}


fn compress_file(input: &Path, output: Option<PathBuf>, bytes: bool, trim_end: bool) -> Result<()> {

    let output = output.unwrap_or_else(|| default_output(input, "_encode", "htc"));

    let (original_size, (compressed, summary)) = if bytes {

        let data = fs::read(input)
            .with_context(|| format!("Could not read {}", input.display()))?;

        (data.len(), compress_with_summary(data.iter().copied())?)

    } else {

        let text = fs::read_to_string(input)
            .with_context(|| format!("Could not read {} as UTF-8 text", input.display()))?;

        let text = if trim_end { text.trim_end() } else { text.as_str() };

        (text.len(), compress_with_summary(text.chars())?)
    };

    fs::write(&output, &compressed)
        .with_context(|| format!("Could not write {}", output.display()))?;

    println!("Compressed {} into {}", input.display(), output.display());
    println!("Symbols: {} ({} distinct)\nOriginal size: {} bytes\nCompressed size: {} bytes\nCompression ratio: {}%",
        summary.symbols, summary.distinct_symbols, original_size, summary.output_bytes,
        (summary.compression_ratio(original_size) * 100.0) as i32);

    Ok(())
}


fn decompress_file(input: &Path, output: Option<PathBuf>, bytes: bool) -> Result<()> {

    let output = output.unwrap_or_else(|| default_output(input, "_decompressed", if bytes { "bin" } else { "txt" }));

    let compressed = fs::read(input)
        .with_context(|| format!("Could not read {}", input.display()))?;

    let decompressed: Vec<u8> = if bytes {
        decompress::<u8>(&compressed)
            .with_context(|| format!("Could not decompress {}", input.display()))?
            .into_vec()
    } else {
        decompress::<char>(&compressed)
            .with_context(|| format!("Could not decompress {}", input.display()))?
            .iter()
            .collect::<String>()
            .into_bytes()
    };

    fs::write(&output, &decompressed)
        .with_context(|| format!("Could not write {}", output.display()))?;

    println!("Decompressed {} into {} ({} bytes)", input.display(), output.display(), decompressed.len());

    Ok(())
}


fn print_codes<T>(data: impl IntoIterator<Item = T>) -> Result<()>
where
    T: Eq + Hash + Clone + Debug
{

    let frequencies = FrequencyTable::count(data)?;
    let table = CodeTable::from_frequencies(&frequencies);

    let mut rows: Vec<(&T, usize)> = frequencies.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    for (symbol, count) in rows {
        let code = table.code(symbol)
            .with_context(|| format!("No code for counted symbol {symbol:?}"))?;
        println!("{symbol:?}\t{count}\t{code}");
    }

    println!("{} symbols, {} distinct, longest code {} bits", frequencies.total(), frequencies.len(), table.max_code_len());

    Ok(())
}


fn main() -> Result<()> {

    let args = Args::parse();

    match args.mode {

        Mode::Compress { input, output, bytes, trim_end } => compress_file(&input, output, bytes, trim_end),

        Mode::Decompress { input, output, bytes } => decompress_file(&input, output, bytes),

        Mode::Codes { input, bytes } => {
            if bytes {
                let data = fs::read(&input)
                    .with_context(|| format!("Could not read {}", input.display()))?;
                print_codes(data)
            } else {
                let text = fs::read_to_string(&input)
                    .with_context(|| format!("Could not read {} as UTF-8 text", input.display()))?;
                print_codes(text.chars())
            }
        },
    }
}
