#[cfg(test)]
use proptest_derive::Arbitrary;

use indexmap::IndexMap;

pub type Comment = String;
pub type Label = String;
pub type SectionName = String;

/// All collected sections, in the order their first header was seen.
pub type Sections = IndexMap<SectionName, Vec<Entry>>;

/// A single piece of information found inside a section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Entry {
    /// The raw bytes of one disassembled line and the
    /// disassembler's rendering of it (mnemonic and operands).
    Instruction(Vec<u8>, Comment),
    /// A symbol defined at this position of the section.
    Label(Label),
}

impl Entry {
    /// The bytes of this entry.
    ///
    /// Labels never carry any bytes.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Entry::Instruction(bytes, _) => bytes,
            Entry::Label(_) => &[],
        }
    }
    /// The free text attached to this entry.
    ///
    /// This is the instruction text or the symbol name.
    pub fn comment(&self) -> &str {
        match self {
            Entry::Instruction(_, comment) => comment,
            Entry::Label(label) => label,
        }
    }
    /// Whether this entry is a bare position marker.
    pub fn is_label(&self) -> bool {
        self.bytes().is_empty()
    }
}
