//! CDISC controlled terminology enums.

/// Sex of a subject, from the DM `SEX` code list (C66731).
///
/// # Examples
///
/// ```
/// use cdisc_types::Sex;
///
/// assert_eq!(Sex::from_code("F"), Some(Sex::Female));
/// assert_eq!(Sex::from_code("female"), None);
/// assert_eq!(Sex::Male.code(), "M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Unknown.
    Unknown,
    /// Undifferentiated.
    Undifferentiated,
}

impl Sex {
    /// Submission value for male.
    pub const MALE_CODE: &'static str = "M";
    /// Submission value for female.
    pub const FEMALE_CODE: &'static str = "F";
    /// Submission value for unknown.
    pub const UNKNOWN_CODE: &'static str = "U";
    /// Submission value for undifferentiated.
    pub const UNDIFFERENTIATED_CODE: &'static str = "UNDIFFERENTIATED";

    /// Creates a Sex from its submission value.
    ///
    /// Matching is exact after trimming; returns `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            Self::MALE_CODE => Some(Self::Male),
            Self::FEMALE_CODE => Some(Self::Female),
            Self::UNKNOWN_CODE => Some(Self::Unknown),
            Self::UNDIFFERENTIATED_CODE => Some(Self::Undifferentiated),
            _ => None,
        }
    }

    /// Returns the submission value for this sex.
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => Self::MALE_CODE,
            Self::Female => Self::FEMALE_CODE,
            Self::Unknown => Self::UNKNOWN_CODE,
            Self::Undifferentiated => Self::UNDIFFERENTIATED_CODE,
        }
    }
}

/// Axis scale requested by a plotting front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AxisScale {
    /// Linear axis; every value can be drawn.
    #[default]
    Linear,
    /// Logarithmic axis; only strictly positive values can be drawn.
    Log,
}

impl AxisScale {
    /// Returns true if `value` can be placed on an axis of this scale.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Self::Linear => value.is_finite(),
            Self::Log => value.is_finite() && value > 0.0,
        }
    }
}
