//! Concentration-time series for plotting.

use cdisc_types::ConcentrationSeries;

use crate::observation::{project_observations, resolve_nominal_time};
use crate::parser::Row;

/// Builds the concentration-time series of one subject.
///
/// Uses the subject's observations with a resolvable nominal time, sorted
/// by time; equal times keep row order. The unit is the first non-empty
/// PCSTRESU among the observations.
///
/// # Examples
///
/// ```
/// use cdisc_loader::{concentration_series, parse_table};
/// use cdisc_types::AxisScale;
///
/// let rows = parse_table(
///     "USUBJID,PCTPT,PCSTRESN,PCSTRESU\n\
///      S1,2 h,4.0,ng/mL\n\
///      S1,PRE,0,ng/mL\n\
///      S1,0.5 h,9.5,ng/mL\n",
/// );
///
/// let series = concentration_series(&rows, "S1");
/// assert_eq!(series.times, vec![0.5, 2.0]);
/// assert_eq!(series.concentrations, vec![9.5, 4.0]);
/// assert_eq!(series.skipped, 1);
/// assert_eq!(series.for_scale(AxisScale::Log).len(), 2);
/// ```
pub fn concentration_series(rows: &[Row], subject_id: &str) -> ConcentrationSeries {
    let observations = project_observations(rows, subject_id);

    let mut points: Vec<(f64, f64)> = observations
        .iter()
        .filter_map(|o| resolve_nominal_time(o).map(|time| (time, o.concentration)))
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let unit = observations
        .iter()
        .filter_map(|o| o.unit.as_deref())
        .find(|unit| !unit.is_empty())
        .map(str::to_string);

    let skipped = observations.len() - points.len();
    if skipped > 0 {
        tracing::debug!(
            subject = subject_id,
            skipped,
            "Observations without nominal time left out of series"
        );
    }

    let (times, concentrations) = points.into_iter().unzip();

    ConcentrationSeries {
        name: subject_id.to_string(),
        times,
        concentrations,
        unit,
        skipped,
    }
}
