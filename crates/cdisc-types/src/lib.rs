//! # cdisc-types
//!
//! Type definitions for CDISC clinical trial records.
//!
//! This crate provides Rust type definitions for the two SDTM views used
//! for concentration-time plotting: subjects from the Demographics (DM)
//! domain and concentration observations from the Pharmacokinetic
//! Concentrations (PC) domain.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use cdisc_types::{ObservationRecord, Sex, SubjectRecord};
//! use cdisc_types::variables::{self, pc};
//!
//! let subject = SubjectRecord {
//!     usubjid: Some("STUDY01-001".to_string()),
//!     arm: Some("Drug A 10 mg".to_string()),
//!     sex: Some("M".to_string()),
//!     age: Some("34".to_string()),
//! };
//! assert_eq!(subject.sex(), Some(Sex::Male));
//!
//! let observation = ObservationRecord {
//!     usubjid: "STUDY01-001".to_string(),
//!     time_label: Some("1 h".to_string()),
//!     time_number: Some("1".to_string()),
//!     collected_at: None,
//!     concentration: 15.2,
//!     unit: Some("ng/mL".to_string()),
//! };
//! assert_eq!(subject.usubjid.as_deref(), Some(observation.usubjid.as_str()));
//!
//! // Column names for row lookups
//! assert_eq!(variables::USUBJID, "USUBJID");
//! assert_eq!(pc::PCSTRESN, "PCSTRESN");
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! cdisc-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod enums;
mod observation;
mod series;
mod subject;
pub mod variables;

// Re-export all public types at crate root
pub use enums::{AxisScale, Sex};
pub use observation::ObservationRecord;
pub use series::ConcentrationSeries;
pub use subject::SubjectRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _sex = Sex::Undifferentiated;
        let _scale = AxisScale::Log;
        let _series = ConcentrationSeries::default();
        assert_eq!(variables::dm::DOMAIN, "DM");
        assert_eq!(variables::pc::DOMAIN, "PC");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let observation = ObservationRecord {
            usubjid: "S1".to_string(),
            time_label: Some("0.5 h".to_string()),
            time_number: None,
            collected_at: None,
            concentration: 3.25,
            unit: Some("ng/mL".to_string()),
        };

        let json = serde_json::to_string(&observation).unwrap();
        let parsed: ObservationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(observation, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_axis_scale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AxisScale::Log).unwrap(), "\"log\"");
        assert_eq!(
            serde_json::to_string(&AxisScale::Linear).unwrap(),
            "\"linear\""
        );
    }
}
