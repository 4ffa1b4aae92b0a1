//! # cdisc-loader
//!
//! Parser and projector for CDISC DM and PC datasets in delimited text.
//!
//! The pipeline is text → [`Row`]s → typed records → numeric nominal
//! time. Nothing here fails: malformed numbers are treated as absent and
//! unmatched subjects give empty results.
//!
//! ```rust
//! use cdisc_loader::{parse_table, project_observations, project_subjects, resolve_nominal_time};
//!
//! let dm = parse_table("USUBJID,ARM,SEX,AGE\nS1,Drug A,F,39\n");
//! let subjects = project_subjects(&dm);
//! assert_eq!(subjects[0].arm.as_deref(), Some("Drug A"));
//!
//! let pc = parse_table("USUBJID,PCTPT,PCTPTNUM,PCSTRESN\nS1,0.5 h,,12.1\nS1,1 h,1,8.4\n");
//! let times: Vec<_> = project_observations(&pc, "S1")
//!     .iter()
//!     .map(resolve_nominal_time)
//!     .collect();
//! assert_eq!(times, vec![Some(0.5), Some(1.0)]);
//! ```

#![warn(missing_docs)]

mod observation;
pub mod parser;
mod series;
mod subject;
mod types;

pub use observation::{project_observations, resolve_nominal_time};
pub use parser::{
    parse_table, parse_table_with, project, split_line, CdiscRecord, ParsedTable, Row,
};
pub use series::concentration_series;
pub use subject::{project_subjects, unique_subjects};
pub use types::{CdiscError, CdiscResult, LineIssue, ParseStats, QuoteIssue, TableConfig};

// Re-export cdisc-types for convenience
pub use cdisc_types;

#[cfg(test)]
mod tests {
    use super::*;
    use cdisc_types::{ObservationRecord, SubjectRecord};

    const DM: &str = "\
STUDYID,DOMAIN,USUBJID,ARM,SEX,AGE
\"PK01\",\"DM\",\"PK01-001\",\"Drug A, 10 mg\",\"M\",\"34\"
\"PK01\",\"DM\",\"PK01-002\",\"Placebo\",\"F\",\"\"
";

    const PC: &str = "\
STUDYID,DOMAIN,USUBJID,PCTPT,PCTPTNUM,PCDTC,PCSTRESN,PCSTRESU
PK01,PC,PK01-001,PRE-DOSE,0,2024-03-01T07:55,,ng/mL
PK01,PC,PK01-001,0.5 h,0.5,2024-03-01T08:30,12.3,ng/mL
PK01,PC,PK01-001,1 h,,2024-03-01T09:00,18.9,ng/mL
PK01,PC,PK01-002,1 h,1,2024-03-01T09:02,0,ng/mL
PK01,PC,PK01-001,24 h,24,2024-03-02T08:00,BLQ,ng/mL
";

    #[test]
    fn test_dm_pc_pipeline() {
        let dm = parse_table_with(DM, &TableConfig::default());
        assert!(dm.require_columns_for::<SubjectRecord>().is_ok());
        assert!(dm.stats().is_clean());

        let subjects = project_subjects(dm.rows());
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].arm.as_deref(), Some("Drug A, 10 mg"));
        assert_eq!(subjects[1].age.as_deref(), Some(""));

        let pc = parse_table_with(PC, &TableConfig::default());
        assert!(pc.require_columns_for::<ObservationRecord>().is_ok());

        let usubjid = subjects[0].usubjid.as_deref().unwrap();
        let observations = project_observations(pc.rows(), usubjid);
        let times: Vec<_> = observations.iter().map(resolve_nominal_time).collect();
        assert_eq!(times, vec![Some(0.5), Some(1.0)]);

        let series = concentration_series(pc.rows(), usubjid);
        assert_eq!(series.concentrations, vec![12.3, 18.9]);
    }

    #[test]
    fn test_generic_projection_matches_named() {
        let rows = parse_table(DM);
        assert_eq!(project::<SubjectRecord>(&rows), project_subjects(&rows));
        assert_eq!(<SubjectRecord as CdiscRecord>::DOMAIN, "DM");
        assert_eq!(<ObservationRecord as CdiscRecord>::DOMAIN, "PC");
    }

    #[test]
    fn test_dm_table_fails_pc_requirements() {
        let dm = parse_table_with(DM, &TableConfig::default());
        assert_eq!(
            dm.require_columns_for::<ObservationRecord>(),
            Err(CdiscError::MissingColumn {
                column: "PCSTRESN".to_string()
            })
        );
    }
}
