//! Flag types shared by the scanner and the declaration parser.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

// Token flags from the scanner.
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                              = 0;
        const PRECEDING_LINE_BREAK              = 1 << 0;
        const UNTERMINATED                      = 1 << 1;
        const SCIENTIFIC                        = 1 << 2;
        const HEX_SPECIFIER                     = 1 << 3;
        const BINARY_SPECIFIER                  = 1 << 4;
        const OCTAL_SPECIFIER                   = 1 << 5;
        const CONTAINS_SEPARATOR                = 1 << 6;
    }
}

// Modifiers attached to an extracted function declaration.
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u8 {
        const NONE      = 0;
        const ASYNC     = 1 << 0;
        const GENERATOR = 1 << 1;

        const ASYNC_GENERATOR = Self::ASYNC.bits() | Self::GENERATOR.bits();
    }
}

impl ModifierFlags {
    /// Lowercase names of the set modifiers, in source order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        [(Self::ASYNC, "async"), (Self::GENERATOR, "generator")]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.names().collect();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(" "))
        }
    }
}

/// Modifiers serialize as a list of names: `[]`, `["async"]`, `["async","generator"]`.
impl Serialize for ModifierFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<_> = self.names().collect();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}
