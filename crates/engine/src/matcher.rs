use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub groups: Vec<Option<String>>,
}

impl MatchRecord {
    pub fn new(text: impl Into<String>, start: usize, end: usize, groups: Vec<Option<String>>) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            groups,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Character offsets of this match within `subject`, the form shown to users.
    ///
    /// `subject` must be the text the match was produced from.
    pub fn char_span(&self, subject: &str) -> (usize, usize) {
        let start = subject
            .get(..self.start)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        (start, start + self.text.chars().count())
    }
}

/// Matches ordered by `start` and pairwise non-overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    records: Vec<MatchRecord>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from records that are already ordered and non-overlapping.
    /// Returns `None` when the records violate either property.
    pub fn from_records(records: Vec<MatchRecord>) -> Option<Self> {
        let ordered = records.iter().all(|r| r.start <= r.end)
            && records
                .windows(2)
                .all(|pair| pair[0].start < pair[1].start && pair[0].end <= pair[1].start);
        ordered.then_some(Self { records })
    }

    pub(crate) fn push(&mut self, record: MatchRecord) {
        debug_assert!(
            self.records
                .last()
                .is_none_or(|last| last.start < record.start && last.end <= record.start)
        );
        self.records.push(record);
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&MatchRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    /// Index of the match covering `offset`, if any.
    pub fn match_at(&self, offset: usize) -> Option<usize> {
        let index = self.records.partition_point(|r| r.end <= offset);
        self.records
            .get(index)
            .filter(|r| r.contains(offset))
            .map(|_| index)
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
