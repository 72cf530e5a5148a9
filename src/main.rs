use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huffle::{build_tree, code_table, decode, encode, sorted_frequencies};

const SAMPLES: &[(&str, usize)] = &[
    ("beep boop beer!", 40),
    ("qwe5qwq", 13),
    ("Абракадабра", 27),
    ("", 0),
    ("fffff", 5),
    ("Если нет хлеба, пусть едят пирожные", 146),
];

#[derive(Parser)]
#[command(name = "huffle", version)]
#[command(about = "Build Huffman codes for text and run them through encode/decode")]
struct Cli {
    /// Show codec diagnostics (skipped symbols, undecodable bits)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in sample texts through the full pipeline
    Demo,
    /// Build a code for TEXT, encode it and verify the round trip
    Pack { text: String },
    /// Like pack, but the text is read from a file
    File { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Commands::Demo => demo(),
        Commands::Pack { text } => pack(&text),
        Commands::File { path } => {
            let text = fs::read_to_string(&path).context("read provided file")?;
            pack(&text)
        }
    }
}

fn demo() -> Result<()> {
    for &(text, expected_bits) in SAMPLES {
        let table = code_table(build_tree(sorted_frequencies(text)).as_ref());
        let bits = encode(text, &table);
        let decoded = decode(&bits, &table)?;

        let passed = decoded.text == text && bits.len() == expected_bits;
        println!(
            "{} {:38} {:4} bits, decoded: {}",
            if passed { "+ " } else { "--" },
            text,
            bits.len(),
            decoded.text
        );
    }
    Ok(())
}

fn pack(text: &str) -> Result<()> {
    let frequencies = sorted_frequencies(text);
    let tree = build_tree(frequencies.clone());
    let table = code_table(tree.as_ref());

    // Most frequent symbols (shortest codes) first
    for entry in frequencies.iter().rev() {
        println!(
            "{:?} x{:<6} {}",
            entry.symbol, entry.frequency, table[&entry.symbol]
        );
    }

    let bits = encode(text, &table);
    let decoded = decode(&bits, &table)?;

    println!("{} chars -> {} bits", text.chars().count(), bits.len());
    if let Some(leftover) = &decoded.leftover {
        println!("undecodable trailing bits: {leftover}");
    }
    println!(
        "round trip {}",
        if decoded.text == text { "ok" } else { "FAILED" }
    );

    Ok(())
}
