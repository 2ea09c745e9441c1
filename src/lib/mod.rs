//! Library for sections2shell
//!
//! Turns the disassembly of prefixed sections into C byte arrays,
//! ready to be embedded as shellcode.

pub mod generator;
pub mod hexdump;
pub mod parser;

#[cfg(test)]
mod tests;
