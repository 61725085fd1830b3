use thiserror::Error;

/// Fatal translation errors. Every variant aborts the run; nothing is
/// skipped or retried, since a silently dropped task would corrupt the
/// imported list.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Parsed record count and raw line count disagree, so positional
    /// pairing would be wrong for every record after the gap.
    #[error("parsed {records} records but read {lines} raw lines")]
    SequenceLengthMismatch { records: usize, lines: usize },

    /// Creation-date recovery found several date-shaped substrings and
    /// cannot tell which one is the creation date.
    #[error("more than one date found in {line:?}")]
    AmbiguousDateRecovery { line: String },

    /// A date string on the task is not a valid ISO calendar date.
    #[error("invalid date {value:?}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
