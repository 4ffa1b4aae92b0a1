//! Delimited text parser.
//!
//! Turns header-first, comma-delimited text into [`Row`] mappings keyed by
//! uppercase column name. Fields may be wrapped in double quotes to carry
//! delimiters; there is no escape convention for quotes inside a quoted
//! field (see [`QuoteIssue`]).

use std::collections::HashMap;

use csv::StringRecord;

use crate::types::{CdiscError, CdiscResult, LineIssue, ParseStats, QuoteIssue, TableConfig};

/// Trait for typed records that can be projected from parsed rows.
pub trait CdiscRecord: Sized {
    /// SDTM domain code the record comes from.
    const DOMAIN: &'static str;

    /// Columns a table needs for this record type.
    const REQUIRED_COLUMNS: &'static [&'static str];

    /// Builds a record from a row, or `None` if the row does not qualify.
    fn from_row(row: &Row) -> Option<Self>;
}

/// Projects every qualifying row into `T`, in row order.
pub fn project<T: CdiscRecord>(rows: &[Row]) -> Vec<T> {
    rows.iter().filter_map(T::from_row).collect()
}

/// Normalizes a column name the way header columns are stored.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_uppercase()
}

/// One data line as a column-name to value mapping.
///
/// Keys are normalized with [`normalize_column`] on insertion, and lookups
/// normalize the requested name the same way, so `get("usubjid")` and
/// `get("USUBJID")` agree. This matches [`ParsedTable::has_column`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a row from header columns and a scanned record.
    ///
    /// Columns without a matching field get an empty value; fields beyond
    /// the header are ignored. A repeated column keeps its last value.
    fn from_record(columns: &StringRecord, record: &StringRecord) -> Self {
        let mut row = Self {
            fields: HashMap::with_capacity(columns.len()),
        };
        for (i, column) in columns.iter().enumerate() {
            row.insert(column, record.get(i).unwrap_or(""));
        }
        row
    }

    /// Inserts a value, normalizing the column name. The value is stored as given.
    pub fn insert(&mut self, column: &str, value: &str) {
        self.fields.insert(normalize_column(column), value.to_string());
    }

    /// Returns the value of a column, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.lookup(column).map(String::as_str)
    }

    /// Returns true if the row has the column, even with an empty value.
    pub fn contains(&self, column: &str) -> bool {
        self.lookup(column).is_some()
    }

    // Stored keys are already normalized; skip the allocation for them.
    fn lookup(&self, column: &str) -> Option<&String> {
        self.fields
            .get(column)
            .or_else(|| self.fields.get(&normalize_column(column)))
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(column, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column.as_ref(), value.as_ref());
        }
        row
    }
}

/// A parsed table with its header, rows and parse diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    columns: StringRecord,
    rows: Vec<Row>,
    issues: Vec<LineIssue>,
    stats: ParseStats,
}

impl ParsedTable {
    /// Normalized header columns, in source order.
    pub fn columns(&self) -> &StringRecord {
        &self.columns
    }

    /// Returns true if the header contains `column` (normalized before comparing).
    pub fn has_column(&self, column: &str) -> bool {
        let column = normalize_column(column);
        self.columns.iter().any(|c| c == column)
    }

    /// Data rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Quoting issues found while scanning, in line order.
    pub fn issues(&self) -> &[LineIssue] {
        &self.issues
    }

    /// Returns the parse statistics.
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Checks that every column in `required` is present in the header.
    ///
    /// # Errors
    /// Returns [`CdiscError::EmptyTable`] if there was no header line, or
    /// [`CdiscError::MissingColumn`] for the first absent column.
    pub fn require_columns(&self, required: &[&str]) -> CdiscResult<()> {
        if self.columns.is_empty() {
            return Err(CdiscError::EmptyTable);
        }

        for column in required {
            if !self.has_column(column) {
                return Err(CdiscError::MissingColumn {
                    column: normalize_column(column),
                });
            }
        }

        Ok(())
    }

    /// Checks the header against the required columns of `T`.
    pub fn require_columns_for<T: CdiscRecord>(&self) -> CdiscResult<()> {
        self.require_columns(T::REQUIRED_COLUMNS)
    }
}

/// Parses comma-delimited text into rows.
///
/// The first non-blank line is the header. Blank lines anywhere are
/// skipped, and either `\n` or `\r\n` ends a line. This never fails:
/// text without data lines gives an empty `Vec`.
///
/// # Examples
///
/// ```
/// use cdisc_loader::parse_table;
///
/// let rows = parse_table("usubjid,note\r\nS1,\"a,b\"\r\n\r\n");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("USUBJID"), Some("S1"));
/// assert_eq!(rows[0].get("NOTE"), Some("a,b"));
/// ```
pub fn parse_table(text: &str) -> Vec<Row> {
    parse_table_with(text, &TableConfig::default()).into_rows()
}

/// Parses delimited text with an explicit configuration, keeping diagnostics.
pub fn parse_table_with(text: &str, config: &TableConfig) -> ParsedTable {
    let mut stats = ParseStats::default();
    let mut issues = Vec::new();
    let mut header: Option<StringRecord> = None;
    let mut rows = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        stats.total_lines += 1;

        let line = if header.is_none() && config.strip_bom {
            raw.trim_start_matches('\u{feff}')
        } else {
            raw
        };

        if line.trim().is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        let (record, issue) = split_line(line, config.delimiter);

        if let Some(issue) = issue {
            tracing::warn!(
                line = index + 1,
                %issue,
                "Unsupported quoting, using best-effort split"
            );
            issues.push(LineIssue {
                line: index + 1,
                issue,
            });
            stats.quote_issues += 1;
        }

        match &header {
            None => {
                header = Some(record.iter().map(normalize_column).collect());
            }
            Some(columns) => {
                if record.len() != columns.len() {
                    stats.ragged_rows += 1;
                }
                rows.push(Row::from_record(columns, &record));
            }
        }
    }

    stats.rows = rows.len();
    tracing::debug!(
        lines = stats.total_lines,
        rows = stats.rows,
        blank = stats.blank_lines,
        ragged = stats.ragged_rows,
        "Parsed delimited table"
    );

    ParsedTable {
        columns: header.unwrap_or_default(),
        rows,
        issues,
        stats,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Nothing but whitespace seen in the current field.
    FieldStart,
    Unquoted,
    Quoted,
    /// Just past the closing quote of a quoted field.
    AfterQuote,
}

/// Splits one line into trimmed fields.
///
/// A field that opens with `"` (after optional whitespace) runs to the
/// next `"` and may contain the delimiter; the quotes are dropped. A `"`
/// in the middle of an unquoted field is ordinary text. Text after a
/// closing quote is appended to the field as-is and reported as
/// [`QuoteIssue::EmbeddedQuote`]; a quote left open at the end of the
/// line keeps what it has and is reported as
/// [`QuoteIssue::UnterminatedQuote`]. Only the first issue is returned.
pub fn split_line(line: &str, delimiter: char) -> (StringRecord, Option<QuoteIssue>) {
    let mut record = StringRecord::new();
    let mut field = String::new();
    let mut state = ScanState::FieldStart;
    let mut issue = None;

    for c in line.chars() {
        state = match state {
            ScanState::FieldStart | ScanState::Unquoted | ScanState::AfterQuote
                if c == delimiter =>
            {
                record.push_field(&field);
                field.clear();
                ScanState::FieldStart
            }
            ScanState::FieldStart if c == '"' => {
                field.clear();
                ScanState::Quoted
            }
            ScanState::FieldStart if c.is_whitespace() => {
                field.push(c);
                ScanState::FieldStart
            }
            ScanState::FieldStart | ScanState::Unquoted => {
                field.push(c);
                ScanState::Unquoted
            }
            ScanState::Quoted if c == '"' => ScanState::AfterQuote,
            ScanState::Quoted => {
                field.push(c);
                ScanState::Quoted
            }
            ScanState::AfterQuote if c.is_whitespace() => {
                field.push(c);
                ScanState::AfterQuote
            }
            ScanState::AfterQuote => {
                issue = issue.or(Some(QuoteIssue::EmbeddedQuote));
                field.push(c);
                ScanState::Unquoted
            }
        };
    }

    if state == ScanState::Quoted {
        issue = issue.or(Some(QuoteIssue::UnterminatedQuote));
    }
    record.push_field(&field);
    record.trim();

    (record, issue)
}

/// Helper functions for coercing field values.
pub mod parse {
    use super::Row;

    /// Parses a value as a finite number.
    ///
    /// Surrounding whitespace is ignored. Empty text, non-numeric text,
    /// `NaN` and infinities give `None`.
    pub fn finite_number(value: &str) -> Option<f64> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
    }

    /// Parses the first run of ASCII digits and `.` in `text`.
    ///
    /// Used for time point labels like `"0.5 h"` or `"Day 2"`. A sign is
    /// never part of the run. Returns `None` when there is no run or the
    /// run is not a number (`"."`, `"1.2.3"`).
    pub fn leading_number(text: &str) -> Option<f64> {
        let is_numeric = |c: char| c.is_ascii_digit() || c == '.';
        let start = text.find(is_numeric)?;
        let rest = &text[start..];
        let end = rest.find(|c: char| !is_numeric(c)).unwrap_or(rest.len());
        finite_number(&rest[..end])
    }

    /// Copies a column value out of a row, keeping absence distinct from empty.
    pub fn optional(row: &Row, column: &str) -> Option<String> {
        row.get(column).map(str::to_string)
    }
}
