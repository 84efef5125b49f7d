use serde::Serialize;

/// Visual category derived from the magnitude of the inclination angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Low,
    Medium,
    High,
    Steep,
}

impl ColorBucket {
    /// Boundary values belong to the higher bucket (30 is Medium, not Low).
    /// Total over finite inputs; the parser rejects non-finite inclinations
    /// before they reach classification.
    pub fn from_inclination(inclination: f64) -> Self {
        let magnitude = inclination.abs();
        if magnitude < 30.0 {
            ColorBucket::Low
        } else if magnitude < 60.0 {
            ColorBucket::Medium
        } else if magnitude < 90.0 {
            ColorBucket::High
        } else {
            ColorBucket::Steep
        }
    }

    /// Marker color understood by the map template.
    pub fn color(&self) -> &'static str {
        match self {
            ColorBucket::Low => "green",
            ColorBucket::Medium => "orange",
            ColorBucket::High => "red",
            ColorBucket::Steep => "darkred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorBucket;

    #[test]
    fn buckets_at_boundaries() {
        assert_eq!(ColorBucket::from_inclination(0.0), ColorBucket::Low);
        assert_eq!(ColorBucket::from_inclination(29.999), ColorBucket::Low);
        assert_eq!(ColorBucket::from_inclination(30.0), ColorBucket::Medium);
        assert_eq!(ColorBucket::from_inclination(59.999), ColorBucket::Medium);
        assert_eq!(ColorBucket::from_inclination(60.0), ColorBucket::High);
        assert_eq!(ColorBucket::from_inclination(89.999), ColorBucket::High);
        assert_eq!(ColorBucket::from_inclination(90.0), ColorBucket::Steep);
        assert_eq!(ColorBucket::from_inclination(180.0), ColorBucket::Steep);
    }

    #[test]
    fn magnitude_based() {
        assert_eq!(ColorBucket::from_inclination(-30.0), ColorBucket::Medium);
        assert_eq!(ColorBucket::from_inclination(-90.0), ColorBucket::Steep);
        assert_eq!(ColorBucket::from_inclination(-12.5), ColorBucket::Low);
    }
}
