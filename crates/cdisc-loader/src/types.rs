//! Loader-specific types for delimited dataset processing.

use std::fmt;

use thiserror::Error;

/// Errors reported by the strict helpers of this crate.
///
/// The parsing and projection pipeline itself never fails; these are only
/// produced by opt-in checks such as [`ParsedTable::require_columns`].
///
/// [`ParsedTable::require_columns`]: crate::ParsedTable::require_columns
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CdiscError {
    /// Required column missing from the header.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// The input had no header line.
    #[error("Table has no header line")]
    EmptyTable,
}

/// Result type for CDISC loader operations.
pub type CdiscResult<T> = Result<T, CdiscError>;

/// Configuration for table parsing.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter.
    pub delimiter: char,
    /// Whether to remove a UTF-8 byte order mark from the header line.
    pub strip_bom: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            strip_bom: true,
        }
    }
}

impl TableConfig {
    /// Creates a config for tab-delimited text.
    pub fn tab_delimited() -> Self {
        Self {
            delimiter: '\t',
            ..Default::default()
        }
    }
}

/// Quoting problem found while splitting a line.
///
/// Quoted fields have no escape convention, so these inputs are not
/// supported. The scanner still produces a value for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteIssue {
    /// Text followed a closing quote before the next delimiter.
    EmbeddedQuote,
    /// A quoted field was still open at the end of the line.
    UnterminatedQuote,
}

impl fmt::Display for QuoteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmbeddedQuote => f.write_str("text after closing quote"),
            Self::UnterminatedQuote => f.write_str("unterminated quoted field"),
        }
    }
}

/// A quoting issue with the 1-based physical line it occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIssue {
    /// Line number in the source text, counting blank lines.
    pub line: usize,
    /// What went wrong.
    pub issue: QuoteIssue,
}

/// Statistics from parsing a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Physical lines in the input, including blank ones.
    pub total_lines: usize,
    /// Blank or whitespace-only lines skipped.
    pub blank_lines: usize,
    /// Data rows produced.
    pub rows: usize,
    /// Rows whose field count differed from the header width.
    pub ragged_rows: usize,
    /// Lines with a quoting issue.
    pub quote_issues: usize,
}

impl ParseStats {
    /// Returns true if every row matched the header and quoting was clean.
    pub fn is_clean(&self) -> bool {
        self.ragged_rows == 0 && self.quote_issues == 0
    }
}
