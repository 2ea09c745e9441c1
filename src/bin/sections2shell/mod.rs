//! # sections2shell
//!
//! Converts the disassembly of specially named sections into C arrays.
//! This makes it easy to write shellcode in assembly, assemble it into
//! sections prefixed with `spasm_` and embed the resulting machine code
//! into a host program:
//!
//! ```console
//! $ objdump -D shellcode.o | sections2shell > shellcode.c
//! $ objdump -D shellcode.o | sections2shell --header > shellcode.h
//! ```
//!
//! Given the disassembly
//!
//! ```text
//! Disassembly of section .spasm_text:
//!
//! 0000000000000000 <spasm_entry>:
//!    0:	48 31 c0             	xor    %rax,%rax
//!    3:	c3                   	ret
//! ```
//!
//! the following array is generated:
//!
//! ```text
//! const unsigned char spasm_text[] = {
//!                                         /* spasm_entry: */
//!     0x48, 0x31, 0xc0,                   /* xor    %rax,%rax */
//!     0xc3,                               /* ret */
//! };
//! ```
//!
//! A different section prefix can be given as the only positional argument.
//! Set `RUST_LOG=debug` to see which sections are collected or skipped.

mod args;
mod error;

use args::Args;
use colored::Colorize;
use error::Error;
use log::trace;
use sections2shell_lib::parser::DisassemblyParser;

use std::{
    io::{self, Read, Write},
    process,
};

#[paw::main]
fn main(args: Args) {
    pretty_env_logger::init();

    // Exit with errorcode 1 if an error occured.
    if let Err(e) = run(&args) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let generator = args.generator();
    trace!("Reading disassembly from stdin..");
    let mut raw = vec![];
    io::stdin().read_to_end(&mut raw)?;
    let input = String::from_utf8_lossy(&raw);
    trace!("Parsing disassembly..");
    let sections = DisassemblyParser::parse(input.lines(), &args.prefix)?;
    trace!("Generating arrays..");
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "{}", generator.generate(&sections))?;
    Ok(())
}
