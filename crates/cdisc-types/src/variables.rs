//! Well-known CDISC SDTM variable names.
//!
//! Column names used when projecting DM and PC rows. Parsed rows carry
//! uppercase keys, so these constants can be used for lookups directly.
//!
//! # Examples
//!
//! ```
//! use cdisc_types::variables::{self, dm, pc};
//!
//! assert_eq!(variables::USUBJID, "USUBJID");
//! assert_eq!(dm::ARM, "ARM");
//! assert_eq!(pc::PCSTRESN, "PCSTRESN");
//! ```

/// Unique subject identifier, shared by every subject-level domain.
pub const USUBJID: &str = "USUBJID";

// =============================================================================
// Demographics (DM)
// =============================================================================

/// Variables of the Demographics (DM) domain.
pub mod dm {
    /// Domain code.
    pub const DOMAIN: &str = "DM";

    /// Description of planned arm.
    pub const ARM: &str = "ARM";

    /// Sex code (`M`, `F`, `U`, `UNDIFFERENTIATED`).
    pub const SEX: &str = "SEX";

    /// Age at reference start, as collected.
    pub const AGE: &str = "AGE";
}

// =============================================================================
// Pharmacokinetic Concentrations (PC)
// =============================================================================

/// Variables of the Pharmacokinetic Concentrations (PC) domain.
pub mod pc {
    /// Domain code.
    pub const DOMAIN: &str = "PC";

    /// Planned time point name, e.g. `"0.5 h"` or `"PRE-DOSE"`.
    pub const PCTPT: &str = "PCTPT";

    /// Planned time point number.
    pub const PCTPTNUM: &str = "PCTPTNUM";

    /// Date/time of specimen collection (ISO 8601).
    pub const PCDTC: &str = "PCDTC";

    /// Numeric result in standard units.
    pub const PCSTRESN: &str = "PCSTRESN";

    /// Standard units of the result.
    pub const PCSTRESU: &str = "PCSTRESU";
}
