use chrono::NaiveDateTime;
use csv::StringRecord;

use super::error::RowError;
use super::sample::{Sample, DATETIME_FORMAT};

/// Mandatory header: exact names, case-sensitive, order-sensitive.
pub const EXPECTED_HEADER: [&str; 5] = [
    "Index",
    "DateTime",
    "Latitude",
    "Longitude",
    "Inclination(degrees)",
];

pub fn header_matches(record: &StringRecord) -> bool {
    record.len() == EXPECTED_HEADER.len()
        && record.iter().zip(EXPECTED_HEADER).all(|(got, want)| got == want)
}

/// Parses one data row into a Sample. Pure function of the row: either every
/// field parses and passes its range check, or the row is rejected whole.
/// Aggregating rejections is the driver's job.
pub fn parse_record(record: &StringRecord) -> Result<Sample, RowError> {
    if record.len() != EXPECTED_HEADER.len() {
        return Err(RowError::FieldCount(record.len()));
    }

    let index = parse_int("Index", &record[0])?;
    let timestamp = NaiveDateTime::parse_from_str(record[1].trim(), DATETIME_FORMAT)
        .map_err(|_| RowError::DateTime(record[1].to_string()))?;
    let latitude = parse_float("Latitude", &record[2])?;
    let longitude = parse_float("Longitude", &record[3])?;
    let inclination = parse_float("Inclination(degrees)", &record[4])?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(RowError::Range {
            field: "Latitude",
            value: latitude,
        });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(RowError::Range {
            field: "Longitude",
            value: longitude,
        });
    }

    Ok(Sample {
        index,
        timestamp,
        latitude,
        longitude,
        inclination,
    })
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, RowError> {
    raw.trim().parse().map_err(|_| RowError::Number {
        field,
        value: raw.to_string(),
    })
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, RowError> {
    let value: f64 = raw.trim().parse().map_err(|_| RowError::Number {
        field,
        value: raw.to_string(),
    })?;

    // "NaN" and "inf" parse as f64 but carry no usable measurement.
    if !value.is_finite() {
        return Err(RowError::Number {
            field,
            value: raw.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn valid_row() {
        let sample = parse_record(&record(&[
            "3",
            "2026-08-01 12:30:00",
            "48.137154",
            "11.576124",
            "-42.50",
        ]))
        .unwrap();
        assert_eq!(sample.index, 3);
        assert_eq!(sample.latitude, 48.137154);
        assert_eq!(sample.longitude, 11.576124);
        assert_eq!(sample.inclination, -42.5);
    }

    #[test]
    fn wrong_field_count() {
        let err = parse_record(&record(&["1", "2026-08-01 12:30:00", "48.0", "11.0"]));
        assert_eq!(err, Err(RowError::FieldCount(4)));
    }

    #[test]
    fn non_numeric_fields() {
        let err = parse_record(&record(&["x", "2026-08-01 12:30:00", "48.0", "11.0", "0"]));
        assert!(matches!(err, Err(RowError::Number { field: "Index", .. })));

        let err = parse_record(&record(&["1", "2026-08-01 12:30:00", "north", "11.0", "0"]));
        assert!(matches!(err, Err(RowError::Number { field: "Latitude", .. })));
    }

    #[test]
    fn non_finite_inclination_rejected() {
        for bad in ["NaN", "inf", "-inf"] {
            let err = parse_record(&record(&["1", "2026-08-01 12:30:00", "48.0", "11.0", bad]));
            assert!(
                matches!(err, Err(RowError::Number { field: "Inclination(degrees)", .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn coordinate_bounds_inclusive() {
        assert!(parse_record(&record(&["1", "2026-08-01 12:30:00", "90.0", "-180.0", "0"])).is_ok());

        let err = parse_record(&record(&["1", "2026-08-01 12:30:00", "90.0001", "0", "0"]));
        assert!(matches!(err, Err(RowError::Range { field: "Latitude", .. })));

        let err = parse_record(&record(&["1", "2026-08-01 12:30:00", "0", "180.5", "0"]));
        assert!(matches!(err, Err(RowError::Range { field: "Longitude", .. })));
    }

    #[test]
    fn malformed_datetime() {
        let err = parse_record(&record(&["1", "01/08/2026 12:30", "48.0", "11.0", "0"]));
        assert_eq!(err, Err(RowError::DateTime("01/08/2026 12:30".into())));
    }

    #[test]
    fn header_contract_is_exact() {
        assert!(header_matches(&record(&EXPECTED_HEADER)));
        assert!(!header_matches(&record(&["Idx", "Time", "Lat", "Lon", "Incl"])));
        assert!(!header_matches(&record(&[
            "index",
            "DateTime",
            "Latitude",
            "Longitude",
            "Inclination(degrees)",
        ])));
        assert!(!header_matches(&record(&["Index", "DateTime", "Latitude", "Longitude"])));
    }
}
