//! CDISC Pharmacokinetic Concentrations (PC) observation record.

/// A concentration observation from a PC dataset.
///
/// Only rows with a finite numeric PCSTRESN become observations, so
/// `concentration` is always a finite number.
///
/// # Examples
///
/// ```
/// use cdisc_types::ObservationRecord;
///
/// let observation = ObservationRecord {
///     usubjid: "STUDY01-001".to_string(),
///     time_label: Some("0.5 h".to_string()),
///     time_number: None,
///     collected_at: Some("2024-03-01T08:30".to_string()),
///     concentration: 12.7,
///     unit: Some("ng/mL".to_string()),
/// };
///
/// assert!(observation.has_nominal_time());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationRecord {
    /// Unique subject identifier (USUBJID).
    pub usubjid: String,
    /// Planned time point name (PCTPT).
    pub time_label: Option<String>,
    /// Planned time point number as collected (PCTPTNUM).
    pub time_number: Option<String>,
    /// Collection date/time (PCDTC).
    pub collected_at: Option<String>,
    /// Numeric result in standard units (PCSTRESN).
    pub concentration: f64,
    /// Standard units (PCSTRESU).
    pub unit: Option<String>,
}

impl ObservationRecord {
    /// Returns true if either nominal time field is present.
    ///
    /// Presence does not guarantee that a numeric time can be resolved.
    pub fn has_nominal_time(&self) -> bool {
        self.time_number.is_some() || self.time_label.is_some()
    }
}
