use std::fmt;

/// An opaque edge label.
///
/// Only equality and stable hashing are required by the algebra; `Symbol`
/// carries its bytes rather than an interned index, leaving interning as a
/// concern callers can layer on top of this type if they want it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Vec<u8>);

impl Symbol {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol(s.as_bytes().to_vec())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol(s.into_bytes())
    }
}

impl From<&[u8]> for Symbol {
    fn from(b: &[u8]) -> Self {
        Symbol(b.to_vec())
    }
}

impl From<Vec<u8>> for Symbol {
    fn from(b: Vec<u8>) -> Self {
        Symbol(b)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "{:02x?}", self.0),
        }
    }
}
