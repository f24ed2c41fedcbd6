//! FormattedRecord - the rendered string written to every selected channel

use std::fmt;

/// A fully rendered record, ready to write.
///
/// Produced once per dispatch; every channel receives the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedRecord(String);

impl FormattedRecord {
    /// Wrap an already rendered string
    pub fn from_rendered(rendered: String) -> Self {
        Self(rendered)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for FormattedRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FormattedRecord> for String {
    fn from(record: FormattedRecord) -> Self {
        record.0
    }
}
