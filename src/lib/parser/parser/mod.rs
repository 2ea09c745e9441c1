//! # Line classification and section collection
//!
//! Every line of the disassembly is classified on its own by the
//! [`DisassemblyParser`] grammar. The [`SectionCollector`] then walks
//! through the classified lines and sorts instructions and labels into
//! their sections.
use log::{debug, info, log_enabled, trace, Level};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::parser::ast::{Entry, SectionName, Sections};

mod error;

pub use error::ParserError;
type ParseResult<T> = Result<T, ParserError>;

/// Parser for the output of `objdump -D`.
/// See [module documentation](crate::parser) for more information.
#[derive(Parser)]
#[grammar = "../objdump.pest"]
pub struct DisassemblyParser;

/// The shape of a single line of disassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `Disassembly of section .<name>:`
    Header(SectionName),
    /// `<address>:\t<byte> <byte> ...\t<text>`
    Instruction(Vec<u8>, String),
    /// `<address> <<symbol>>:`
    Symbol(String),
    /// Anything else.
    Ignored,
}

/// Where the next instruction or symbol will be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserState {
    /// No section header was seen yet or the last one was filtered out.
    NoActiveSection,
    /// Entries are appended to the named section.
    ActiveSection(SectionName),
}

/// Collects [`Entry`]s into [`Sections`], one line at a time.
#[derive(Debug, Clone)]
pub struct SectionCollector {
    prefix: String,
    state: ParserState,
    sections: Sections,
    line_number: usize,
}

impl DisassemblyParser {
    /// Parse the given disassembly.
    ///
    /// # Arguments
    /// - `lines`: The lines of disassembly, without line terminators.
    /// - `prefix`: Only sections whose name starts with this are collected.
    ///
    /// # Returns
    /// - All collected [`Sections`] or
    /// - a [`ParserError`]
    pub fn parse<I, S>(lines: I, prefix: &str) -> ParseResult<Sections>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collector = SectionCollector::new(prefix);
        for line in lines {
            collector.push_line(line.as_ref())?;
        }
        Ok(collector.finish())
    }
}

impl Line {
    /// Classify a single line.
    ///
    /// Lines that do not match any known shape are [`Line::Ignored`].
    /// An error is only returned if a byte token of an otherwise valid
    /// instruction line can't be read.
    pub fn classify(line: &str) -> ParseResult<Self> {
        let mut parsed = match <DisassemblyParser as Parser<Rule>>::parse(Rule::line, line) {
            Ok(parsed) => parsed,
            Err(e) => {
                if log_enabled!(Level::Trace) {
                    trace!("Ignoring {:?}: {}", line, e.renamed_rules(|r| r.to_string()));
                }
                return Ok(Line::Ignored);
            }
        };
        let pair = match parsed.next() {
            Some(pair) => pair,
            None => return Ok(Line::Ignored),
        };
        match pair.as_rule() {
            Rule::header => Ok(Line::Header(parse_header(pair))),
            Rule::instruction => parse_instruction(pair),
            Rule::symbol => Ok(Line::Symbol(parse_symbol(pair))),
            _ => unreachable!(),
        }
    }
}

/// Extract the section name from a header line.
fn parse_header(header: Pair<Rule>) -> SectionName {
    header
        .into_inner()
        .find(|p| p.as_rule() == Rule::section_name)
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

/// Extract bytes and text from an instruction line.
fn parse_instruction(instruction: Pair<Rule>) -> ParseResult<Line> {
    let mut bytes = vec![];
    let mut text = String::new();
    for element in instruction.into_inner() {
        match element.as_rule() {
            Rule::address | Rule::EOI => {}
            Rule::bytes => {
                for byte in element.into_inner() {
                    bytes.push(parse_byte(byte)?);
                }
            }
            Rule::text => text = element.as_str().to_string(),
            _ => unreachable!(),
        }
    }
    Ok(Line::Instruction(bytes, text))
}

/// Extract the symbol name from a symbol line.
fn parse_symbol(symbol: Pair<Rule>) -> String {
    symbol
        .into_inner()
        .find(|p| p.as_rule() == Rule::symbol_name)
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

fn parse_byte(byte: Pair<Rule>) -> ParseResult<u8> {
    let token = byte.as_str();
    u8::from_str_radix(token, 16).map_err(|source| ParserError::InvalidByte {
        token: token.to_string(),
        source,
    })
}

impl SectionCollector {
    /// Create a new collector without any sections and no active section.
    pub fn new(prefix: &str) -> Self {
        SectionCollector {
            prefix: prefix.to_string(),
            state: ParserState::NoActiveSection,
            sections: Sections::new(),
            line_number: 0,
        }
    }
    /// The current state of the collector.
    pub fn state(&self) -> &ParserState {
        &self.state
    }
    /// Classify the next line and store whatever it contains.
    pub fn push_line(&mut self, line: &str) -> ParseResult<()> {
        self.line_number += 1;
        let classified = Line::classify(line).map_err(|e| {
            debug!("Line {}: {}", self.line_number, e);
            e
        })?;
        self.push(classified);
        Ok(())
    }
    /// Store an already classified line.
    pub fn push(&mut self, line: Line) {
        match line {
            Line::Header(name) => self.enter_section(name),
            Line::Instruction(bytes, text) => self.append(Entry::Instruction(bytes, text)),
            Line::Symbol(name) => self.append(Entry::Label(name)),
            Line::Ignored => {}
        }
    }
    /// Hand out all collected sections.
    pub fn finish(self) -> Sections {
        info!(
            "Collected {} section(s) with prefix {:?}",
            self.sections.len(),
            self.prefix
        );
        self.sections
    }
    fn enter_section(&mut self, name: SectionName) {
        if name.starts_with(&self.prefix) {
            debug!("Line {}: Collecting section {:?}", self.line_number, name);
            self.sections.entry(name.clone()).or_default();
            self.state = ParserState::ActiveSection(name);
        } else {
            debug!("Line {}: Skipping section {:?}", self.line_number, name);
            self.state = ParserState::NoActiveSection;
        }
    }
    fn append(&mut self, entry: Entry) {
        if let ParserState::ActiveSection(name) = &self.state {
            if let Some(entries) = self.sections.get_mut(name) {
                entries.push(entry);
            }
        }
    }
}
