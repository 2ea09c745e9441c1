//! Conversion of `readelf -x <section>` hex dumps.
//!
//! Unlike the [`parser`](crate::parser), no labels or instructions are
//! recovered here. The raw section content is simply re-emitted as a
//! list of byte literals that can be pasted into an initializer.
//!
//! ```
//! # use sections2shell_lib::hexdump;
//! let dump = "
//! Hex dump of section '.spasm_text':
//!   0x00000000 554889e5 c3                          UH...
//! ";
//! let literals = hexdump::convert(dump.lines(), 10).expect("Valid dump");
//! assert_eq!(literals, "0x55, 0x48, 0x89, 0xe5, 0xc3");
//! ```
use log::{debug, trace};
use thiserror::Error;

/// How many bytes `rehex2sh` puts on one line by default.
pub const DEFAULT_BYTES_PER_LINE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexdumpError {
    /// The collected digits can't be split into whole bytes.
    #[error("Odd number of hex digits ({0}) in dump")]
    OddDigitCount(usize),
    /// Something that is not a hex digit ended up in the data columns.
    #[error("Invalid hex byte `{0}` in dump")]
    InvalidByte(String),
}

/// Concatenate the data columns of every dump line.
///
/// A dump line consists of an address starting with `0x`, four data
/// columns and the ascii rendering. Everything else is skipped.
pub fn collect_hex<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hex = String::new();
    for line in lines {
        let line = line.as_ref();
        let components: Vec<&str> = line.trim().splitn(6, ' ').collect();
        if components.len() == 6 && components[0].starts_with("0x") {
            trace!("Data columns of {:?}: {:?}", components[0], &components[1..5]);
            hex.extend(components[1..5].iter().copied());
        } else {
            trace!("Skipping {:?}", line);
        }
    }
    hex
}

/// Turn a string of hex digit pairs into bytes.
pub fn parse_hex(hex: &str) -> Result<Vec<u8>, HexdumpError> {
    if hex.len() % 2 != 0 {
        return Err(HexdumpError::OddDigitCount(hex.len()));
    }
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let token = String::from_utf8_lossy(pair);
            // `from_str_radix` alone would accept a sign, i.e. `+f`
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(HexdumpError::InvalidByte(token.into_owned()));
            }
            u8::from_str_radix(&token, 16).map_err(|_| HexdumpError::InvalidByte(token.into_owned()))
        })
        .collect()
}

/// Render bytes as `0x..` literals, separated by `", "`.
///
/// After every `bytes_per_line` bytes a line break follows the separator.
/// A `bytes_per_line` of zero keeps everything on one line.
pub fn format_bytes(bytes: &[u8], bytes_per_line: usize) -> String {
    let mut s = String::new();
    for (i, byte) in bytes.iter().enumerate() {
        if i != 0 {
            s.push_str(", ");
            if bytes_per_line != 0 && i % bytes_per_line == 0 {
                s.push('\n');
            }
        }
        s += &format!("0x{:02x}", byte);
    }
    s
}

/// Convert a whole hex dump into byte literals.
pub fn convert<I, S>(lines: I, bytes_per_line: usize) -> Result<String, HexdumpError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bytes = parse_hex(&collect_hex(lines))?;
    debug!("Collected {} bytes from hex dump", bytes.len());
    Ok(format_bytes(&bytes, bytes_per_line))
}
