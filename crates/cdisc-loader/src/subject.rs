//! Demographics (DM) projection.

use std::collections::HashSet;

use cdisc_types::variables::{dm, USUBJID};
use cdisc_types::SubjectRecord;

use crate::parser::{parse, project, CdiscRecord, Row};

/// Columns a DM table must provide.
const DM_COLUMNS: &[&str] = &[USUBJID];

impl CdiscRecord for SubjectRecord {
    const DOMAIN: &'static str = dm::DOMAIN;
    const REQUIRED_COLUMNS: &'static [&'static str] = DM_COLUMNS;

    /// Every row yields a subject, even one without USUBJID.
    fn from_row(row: &Row) -> Option<Self> {
        Some(SubjectRecord {
            usubjid: parse::optional(row, USUBJID),
            arm: parse::optional(row, dm::ARM),
            sex: parse::optional(row, dm::SEX),
            age: parse::optional(row, dm::AGE),
        })
    }
}

/// Projects DM rows into subject records, one per row, in row order.
///
/// Duplicate identifiers are kept; see [`unique_subjects`].
pub fn project_subjects(rows: &[Row]) -> Vec<SubjectRecord> {
    let subjects = project::<SubjectRecord>(rows);
    tracing::debug!(subjects = subjects.len(), "Projected DM rows");
    subjects
}

/// Keeps the first record for each USUBJID, in first-seen order.
///
/// Records without a USUBJID have nothing to match on and are all kept.
pub fn unique_subjects(subjects: &[SubjectRecord]) -> Vec<SubjectRecord> {
    let mut seen = HashSet::with_capacity(subjects.len());
    subjects
        .iter()
        .filter(|subject| match subject.usubjid.as_deref() {
            Some(usubjid) => seen.insert(usubjid),
            None => true,
        })
        .cloned()
        .collect()
}
