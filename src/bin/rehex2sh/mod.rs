//! # rehex2sh
//!
//! Converts a `readelf` hex dump into a list of C byte literals:
//!
//! ```console
//! $ readelf -x .spasm_text shellcode.o | rehex2sh
//! ```
//!
//! No instructions or labels are recovered, use `sections2shell` for
//! commented output.

use colored::Colorize;
use log::trace;
use sections2shell_lib::hexdump::{self, HexdumpError};
use structopt::StructOpt;
use thiserror::Error;

use std::{
    io::{self, Read, Write},
    process,
};

#[derive(Debug, StructOpt)]
#[structopt(usage = "readelf -x <section> <elfexecutable> | rehex2sh")]
/// Convert a readelf hex dump into C byte literals.
pub struct Args {
    /// Number of byte literals per output line.
    ///
    /// Zero puts all literals on a single line.
    #[structopt(long, value_name = "N", default_value = "10")]
    pub bytes_per_line: usize,
}

#[derive(Error, Debug)]
pub enum Error {
    /// Thrown when the hex dump contains something unreadable.
    #[error("{0}")]
    Hexdump(#[from] HexdumpError),
    /// Thrown when reading the dump or writing the literals failed.
    #[error("Input/Output failed: {0}")]
    InputOutput(#[from] io::Error),
}

#[paw::main]
fn main(args: Args) {
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), Error> {
    trace!("Reading hex dump from stdin..");
    let mut raw = vec![];
    io::stdin().read_to_end(&mut raw)?;
    let input = String::from_utf8_lossy(&raw);
    let literals = hexdump::convert(input.lines(), args.bytes_per_line)?;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "{}", literals)?;
    Ok(())
}
