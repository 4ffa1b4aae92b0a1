//! Concentration-time series for plotting.

use crate::AxisScale;

/// One subject's concentration-time profile as parallel numeric arrays.
///
/// `times` and `concentrations` always have the same length; point `i` is
/// `(times[i], concentrations[i])`. This is the shape a plotting surface
/// takes as the x and y arrays of a single named trace.
///
/// # Examples
///
/// ```
/// use cdisc_types::{AxisScale, ConcentrationSeries};
///
/// let series = ConcentrationSeries {
///     name: "S1".to_string(),
///     times: vec![0.0, 1.0, 2.0],
///     concentrations: vec![0.0, 8.5, 4.1],
///     unit: Some("ng/mL".to_string()),
///     skipped: 0,
/// };
///
/// let log = series.for_scale(AxisScale::Log);
/// assert_eq!(log.times, vec![1.0, 2.0]);
/// assert_eq!(log.concentrations, vec![8.5, 4.1]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcentrationSeries {
    /// Trace name, normally the subject identifier.
    pub name: String,
    /// Nominal times (x values).
    pub times: Vec<f64>,
    /// Concentrations (y values).
    pub concentrations: Vec<f64>,
    /// Concentration unit, if one was reported.
    pub unit: Option<String>,
    /// Observations left out because no nominal time could be resolved.
    pub skipped: usize,
}

impl ConcentrationSeries {
    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over `(time, concentration)` points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.concentrations.iter().copied())
    }

    /// Returns a copy holding only the points drawable on `scale`.
    ///
    /// Points removed here are not added to `skipped`, which only counts
    /// observations without a nominal time.
    pub fn for_scale(&self, scale: AxisScale) -> Self {
        let (times, concentrations) = self
            .points()
            .filter(|&(_, concentration)| scale.accepts(concentration))
            .unzip();

        Self {
            name: self.name.clone(),
            times,
            concentrations,
            unit: self.unit.clone(),
            skipped: self.skipped,
        }
    }
}
