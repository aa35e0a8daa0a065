//! Print the Huffman code table for a file, one line per coded symbol.

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use huffcode::{report, FrequencyTable, HuffmanTree};

fn main() -> ExitCode {
    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("usage: hufftable <file>");
            return ExitCode::FAILURE;
        }
    };

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("hufftable: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let freqs = match FrequencyTable::from_reader(BufReader::new(file)) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("hufftable: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let tree = HuffmanTree::from_frequencies(&freqs);
    for line in report(&freqs, &tree) {
        println!("{}", line);
    }
    ExitCode::SUCCESS
}
