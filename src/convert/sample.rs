use chrono::NaiveDateTime;
use serde::Serialize;

/// Textual pattern used for the `DateTime` column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One validated GPS + inclination measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Sequence order as provided by the source; display-only, not re-derived.
    pub index: i64,
    pub timestamp: NaiveDateTime,
    /// Degrees, [-90, 90].
    pub latitude: f64,
    /// Degrees, [-180, 180].
    pub longitude: f64,
    /// Degrees, signed. Finite but otherwise not range-checked.
    pub inclination: f64,
}

/// Ordered samples for one conversion run. Insertion order equals input row
/// order and drives both the track polyline and map centering.
pub type SampleBatch = Vec<Sample>;
