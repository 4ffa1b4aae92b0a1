//! Pharmacokinetic Concentrations (PC) projection and nominal time resolution.

use cdisc_types::variables::{pc, USUBJID};
use cdisc_types::ObservationRecord;

use crate::parser::{parse, CdiscRecord, Row};

/// Columns a PC table must provide.
const PC_COLUMNS: &[&str] = &[USUBJID, pc::PCSTRESN];

impl CdiscRecord for ObservationRecord {
    const DOMAIN: &'static str = pc::DOMAIN;
    const REQUIRED_COLUMNS: &'static [&'static str] = PC_COLUMNS;

    /// Rows without USUBJID or without a finite PCSTRESN are rejected.
    fn from_row(row: &Row) -> Option<Self> {
        let usubjid = row.get(USUBJID)?;
        let concentration = parse::finite_number(row.get(pc::PCSTRESN)?)?;

        Some(ObservationRecord {
            usubjid: usubjid.to_string(),
            time_label: parse::optional(row, pc::PCTPT),
            time_number: parse::optional(row, pc::PCTPTNUM),
            collected_at: parse::optional(row, pc::PCDTC),
            concentration,
            unit: parse::optional(row, pc::PCSTRESU),
        })
    }
}

/// Returns the observations of one subject, in row order.
///
/// A row is kept when its USUBJID equals `subject_id` exactly
/// (case-sensitive) and its PCSTRESN is a finite number.
///
/// # Examples
///
/// ```
/// use cdisc_loader::{parse_table, project_observations};
///
/// let rows = parse_table("USUBJID,PCSTRESN\nS1,5.2\nS1,\nS1,abc\ns1,7\n");
/// let observations = project_observations(&rows, "S1");
/// assert_eq!(observations.len(), 1);
/// assert_eq!(observations[0].concentration, 5.2);
/// ```
pub fn project_observations(rows: &[Row], subject_id: &str) -> Vec<ObservationRecord> {
    let mut matched = 0usize;
    let observations: Vec<ObservationRecord> = rows
        .iter()
        .filter(|row| row.get(USUBJID) == Some(subject_id))
        .inspect(|_| matched += 1)
        .filter_map(ObservationRecord::from_row)
        .collect();

    tracing::debug!(
        subject = subject_id,
        kept = observations.len(),
        dropped = matched - observations.len(),
        "Projected PC rows"
    );

    observations
}

/// Resolves the nominal time of an observation.
///
/// PCTPTNUM wins when it is a finite number, with no range check. Otherwise
/// the first number in PCTPT is used, so `"0.5 h"` gives `0.5`. Returns
/// `None` when neither yields a number; PCDTC is never consulted.
pub fn resolve_nominal_time(observation: &ObservationRecord) -> Option<f64> {
    if let Some(time) = observation
        .time_number
        .as_deref()
        .and_then(parse::finite_number)
    {
        return Some(time);
    }

    observation
        .time_label
        .as_deref()
        .and_then(parse::leading_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    fn make_row(fields: &[(&str, &str)]) -> Row {
        fields.iter().copied().collect()
    }

    fn make_observation(time_number: Option<&str>, time_label: Option<&str>) -> ObservationRecord {
        ObservationRecord {
            usubjid: "S1".to_string(),
            time_label: time_label.map(str::to_string),
            time_number: time_number.map(str::to_string),
            collected_at: Some("2024-01-01T08:00".to_string()),
            concentration: 1.0,
            unit: None,
        }
    }

    fn resolve(time_number: Option<&str>, time_label: Option<&str>) -> Option<f64> {
        resolve_nominal_time(&make_observation(time_number, time_label))
    }

    #[test]
    fn test_observation_from_row() {
        let row = make_row(&[
            ("USUBJID", "S1"),
            ("PCTPT", "1 h"),
            ("PCTPTNUM", "1"),
            ("PCDTC", "2024-01-01T09:00"),
            ("PCSTRESN", " 12.5 "),
            ("PCSTRESU", "ng/mL"),
        ]);

        let observation = ObservationRecord::from_row(&row).unwrap();
        assert_eq!(observation.usubjid, "S1");
        assert_eq!(observation.time_label.as_deref(), Some("1 h"));
        assert_eq!(observation.time_number.as_deref(), Some("1"));
        assert_eq!(
            observation.collected_at.as_deref(),
            Some("2024-01-01T09:00")
        );
        assert_eq!(observation.concentration, 12.5);
        assert_eq!(observation.unit.as_deref(), Some("ng/mL"));
    }

    #[test]
    fn test_invalid_concentration_rejected() {
        for value in ["", "abc", "NaN", "inf", "<LLOQ"] {
            let row = make_row(&[("USUBJID", "S1"), ("PCSTRESN", value)]);
            assert_eq!(ObservationRecord::from_row(&row), None, "value {value:?}");
        }

        let row = make_row(&[("USUBJID", "S1")]);
        assert_eq!(ObservationRecord::from_row(&row), None);
    }

    #[test]
    fn test_project_filters_invalid_concentrations() {
        let rows = parse_table("USUBJID,PCTPT,PCSTRESN\nS1,0 h,5.2\nS1,1 h,\nS1,2 h,abc\n");
        let observations = project_observations(&rows, "S1");

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].concentration, 5.2);
        assert_eq!(observations[0].time_label.as_deref(), Some("0 h"));
    }

    #[test]
    fn test_project_is_case_sensitive() {
        let rows = parse_table("USUBJID,PCSTRESN\ns1,1\nS1,2\n S1 ,3\n");
        let observations = project_observations(&rows, "S1");

        let values: Vec<_> = observations.iter().map(|o| o.concentration).collect();
        assert_eq!(values, vec![2.0, 3.0]);
        assert!(project_observations(&rows, "s2").is_empty());
    }

    #[test]
    fn test_project_preserves_order() {
        let rows = parse_table("USUBJID,PCSTRESN\nS1,3\nS2,9\nS1,1\nS1,2\nS2,8\n");
        let values: Vec<_> = project_observations(&rows, "S1")
            .iter()
            .map(|o| o.concentration)
            .collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_project_without_rows_or_match() {
        assert!(project_observations(&[], "S1").is_empty());

        let rows = parse_table("USUBJID,PCSTRESN\nS2,1\n");
        assert!(project_observations(&rows, "S1").is_empty());

        let rows = parse_table("SUBJID,PCSTRESN\nS1,1\n");
        assert!(project_observations(&rows, "S1").is_empty());
    }

    #[test]
    fn test_project_is_repeatable() {
        let rows = parse_table("USUBJID,PCTPTNUM,PCSTRESN\nS1,0,0\nS1,1,4.5\n");
        assert_eq!(
            project_observations(&rows, "S1"),
            project_observations(&rows, "S1")
        );
    }

    #[test]
    fn test_resolve_prefers_numeric_time() {
        let observation = make_observation(Some("2"), Some("1 h"));
        assert_eq!(resolve_nominal_time(&observation), Some(2.0));
    }

    #[test]
    fn test_resolve_numeric_time_has_no_range_check() {
        assert_eq!(resolve(Some("-0.25"), None), Some(-0.25));
        assert_eq!(resolve(Some("0"), None), Some(0.0));
        assert_eq!(resolve(Some("1.75"), None), Some(1.75));
    }

    #[test]
    fn test_resolve_falls_back_to_label() {
        assert_eq!(resolve(None, Some("0.5 h")), Some(0.5));
        assert_eq!(resolve(Some(""), Some("4 h")), Some(4.0));
        assert_eq!(resolve(Some("x"), Some("12HR")), Some(12.0));
    }

    #[test]
    fn test_resolve_absent() {
        assert_eq!(resolve(None, Some("PRE")), None);
        assert_eq!(resolve(None, Some("")), None);
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some("abc"), None), None);
    }
}
