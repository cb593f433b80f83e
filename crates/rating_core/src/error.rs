use std::fmt;

/// Which identifier a match record is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Winner,
    Loser,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner => write!(f, "winner"),
            Self::Loser => write!(f, "loser"),
        }
    }
}

/// A match record could not be rated because a participant is unknown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("match record #{index} has no {field} identifier")]
pub struct MissingDataError {
    /// Position of the record in the supplied history
    pub index: usize,
    pub field: MissingField,
}
