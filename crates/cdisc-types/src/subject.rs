//! CDISC Demographics (DM) subject record.

use crate::Sex;

/// A subject from a DM dataset.
///
/// Each field is copied verbatim from the source row. A field is `None`
/// when the column was absent from the row; an empty cell is kept as
/// `Some("")`.
///
/// # Examples
///
/// ```
/// use cdisc_types::{Sex, SubjectRecord};
///
/// let subject = SubjectRecord {
///     usubjid: Some("STUDY01-001".to_string()),
///     arm: Some("Placebo".to_string()),
///     sex: Some("F".to_string()),
///     age: Some("42".to_string()),
/// };
///
/// assert_eq!(subject.sex(), Some(Sex::Female));
/// assert_eq!(subject.age_value(), Some(42.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectRecord {
    /// Unique subject identifier (USUBJID).
    pub usubjid: Option<String>,
    /// Description of planned arm (ARM).
    pub arm: Option<String>,
    /// Sex code as collected (SEX).
    pub sex: Option<String>,
    /// Age as collected (AGE).
    pub age: Option<String>,
}

impl SubjectRecord {
    /// Returns the sex enum value.
    ///
    /// Returns `None` if SEX is absent or not a recognised code.
    pub fn sex(&self) -> Option<Sex> {
        self.sex.as_deref().and_then(Sex::from_code)
    }

    /// Returns AGE as a number, if it holds a finite one.
    pub fn age_value(&self) -> Option<f64> {
        self.age
            .as_deref()
            .and_then(|age| age.trim().parse::<f64>().ok())
            .filter(|age| age.is_finite())
    }
}
