//!
//! Reads a program image into the instruction-memory layout the simulator
//! expects: one line per architectural byte, each line two hex characters,
//! the four bytes of every instruction in little-endian order.
//!

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use owo_colors::OwoColorize;
use thiserror::Error;

use crate::simulator::IMEM_SIZE;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    IO(#[from] io::Error),

    #[error("Line {line} of the program image is '{}', expected two hex characters", .found.bright_yellow())]
    BadLine { line: usize, found: String },

    #[error("The program image has more than {} bytes and does not fit instruction memory", IMEM_SIZE / 2)]
    TooLarge,
}

/// A loaded program image: the instruction-memory contents plus the PC
/// bound the simulation runs to.
pub struct Program {
    image: Vec<u8>,
}

impl Program {
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    /// The first PC value past the loaded program, in instruction memory
    /// units (hex characters).
    pub fn bound(&self) -> usize {
        self.image.len()
    }
}

/// Loads a program image from a file.
pub fn load(path: &str) -> Result<Program, Error> {
    read_image(BufReader::new(File::open(path)?))
}

/// Parses the image format from any buffered reader. Blank lines are
/// skipped; anything else that isn't exactly two hex characters is
/// rejected before the simulator ever sees it.
pub fn read_image(reader: impl BufRead) -> Result<Program, Error> {
    let mut image = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.len() != 2 || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::BadLine {
                line: index + 1,
                found: line.to_string(),
            });
        }

        if image.len() + 2 > IMEM_SIZE {
            return Err(Error::TooLarge);
        }
        image.extend_from_slice(line.as_bytes());
    }

    Ok(Program { image })
}
