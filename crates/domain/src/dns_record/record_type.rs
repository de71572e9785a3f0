use std::fmt;

/// Record types a resolver instance can be configured to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    PTR,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::PTR => "PTR",
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::PTR => 12,
            RecordType::AAAA => 28,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
