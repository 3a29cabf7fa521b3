use crate::types::Record;

/// Most recently fetched record sequence.
///
/// Replaced wholesale on every successful fetch; readers only ever get a
/// shared slice.
#[derive(Debug, Default, Clone)]
pub struct RecordCache {
    records: Vec<Record>,
    loaded: bool,
}

impl RecordCache {
    pub fn new() -> Self { Self::default() }

    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.loaded = true;
    }

    pub fn records(&self) -> &[Record] { &self.records }

    /// Whether any fetch has succeeded yet.
    pub fn is_loaded(&self) -> bool { self.loaded }
}
