use askama::Template;
use serde::Serialize;

use crate::convert::classify::ColorBucket;
use crate::convert::error::ConvertError;
use crate::convert::sample::{Sample, SampleBatch, DATETIME_FORMAT};

/// Initial zoom of the rendered map. 18 is the street-level ceiling for the
/// OSM tile layer.
pub const STREET_ZOOM: u8 = 18;

/// One marker as it appears on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub latitude: f64,
    pub longitude: f64,
    pub color: &'static str,
    pub popup: String,
    pub tooltip: String,
}

impl MarkerView {
    fn from_sample(sample: &Sample) -> Self {
        let bucket = ColorBucket::from_inclination(sample.inclination);
        MarkerView {
            latitude: sample.latitude,
            longitude: sample.longitude,
            color: bucket.color(),
            popup: format!(
                "<b>Entry #{}</b><br>\
                 <b>DateTime:</b> {}<br>\
                 <b>Latitude:</b> {:.6}<br>\
                 <b>Longitude:</b> {:.6}<br>\
                 <b>Inclination:</b> {:+.2}&deg;",
                sample.index,
                sample.timestamp.format(DATETIME_FORMAT),
                sample.latitude,
                sample.longitude,
                sample.inclination,
            ),
            tooltip: format!("#{}: {:+.2}\u{b0}", sample.index, sample.inclination),
        }
    }
}

/// Semantic content of one rendered map: everything that must be identical
/// across runs for the same batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub markers: Vec<MarkerView>,
    /// Track polyline vertices, in batch order.
    pub track: Vec<[f64; 2]>,
}

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate<'a> {
    center_latitude: f64,
    center_longitude: f64,
    zoom: u8,
    markers: &'a str,
    track: &'a str,
}

impl MapDocument {
    /// Builds the document content for a batch. The view is centered on the
    /// arithmetic mean of all coordinates.
    pub fn build(batch: &SampleBatch) -> Result<Self, ConvertError> {
        if batch.is_empty() {
            return Err(ConvertError::EmptyDataset);
        }

        let n = batch.len() as f64;
        let center_latitude = batch.iter().map(|s| s.latitude).sum::<f64>() / n;
        let center_longitude = batch.iter().map(|s| s.longitude).sum::<f64>() / n;

        Ok(MapDocument {
            center_latitude,
            center_longitude,
            zoom: STREET_ZOOM,
            markers: batch.iter().map(MarkerView::from_sample).collect(),
            track: batch.iter().map(|s| [s.latitude, s.longitude]).collect(),
        })
    }

    /// Renders the interactive HTML document.
    pub fn render(&self) -> Result<String, ConvertError> {
        let markers = serde_json::to_string(&self.markers)?;
        let track = serde_json::to_string(&self.track)?;

        let page = MapTemplate {
            center_latitude: self.center_latitude,
            center_longitude: self.center_longitude,
            zoom: self.zoom,
            markers: &markers,
            track: &track,
        };

        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample(index: i64, latitude: f64, longitude: f64, inclination: f64) -> Sample {
        Sample {
            index,
            timestamp: NaiveDateTime::parse_from_str("2026-08-01 12:00:00", DATETIME_FORMAT)
                .unwrap(),
            latitude,
            longitude,
            inclination,
        }
    }

    #[test]
    fn center_is_arithmetic_mean() {
        let batch = vec![sample(1, 0.0, 0.0, 0.0), sample(2, 2.0, 0.0, 0.0), sample(3, 4.0, 0.0, 0.0)];
        let doc = MapDocument::build(&batch).unwrap();
        assert_eq!(doc.center_latitude, 2.0);
        assert_eq!(doc.center_longitude, 0.0);
        assert_eq!(doc.zoom, STREET_ZOOM);
    }

    #[test]
    fn track_preserves_batch_order() {
        // Deliberately not sorted by position.
        let batch = vec![sample(1, 4.0, 1.0, 0.0), sample(2, 0.0, 2.0, 0.0), sample(3, 2.0, 3.0, 0.0)];
        let doc = MapDocument::build(&batch).unwrap();
        assert_eq!(doc.track, vec![[4.0, 1.0], [0.0, 2.0], [2.0, 3.0]]);
    }

    #[test]
    fn markers_carry_bucket_color_and_popup() {
        let batch = vec![sample(7, 48.137154, 11.576124, -62.5)];
        let doc = MapDocument::build(&batch).unwrap();

        let marker = &doc.markers[0];
        assert_eq!(marker.color, "red");
        assert!(marker.popup.contains("Entry #7"));
        assert!(marker.popup.contains("2026-08-01 12:00:00"));
        assert!(marker.popup.contains("48.137154"));
        assert!(marker.popup.contains("11.576124"));
        assert!(marker.popup.contains("-62.50"));
        assert_eq!(marker.tooltip, "#7: -62.50\u{b0}");
    }

    #[test]
    fn positive_inclination_shows_explicit_sign() {
        let batch = vec![sample(1, 0.0, 0.0, 12.3)];
        let doc = MapDocument::build(&batch).unwrap();
        assert!(doc.markers[0].popup.contains("+12.30"));
    }

    #[test]
    fn empty_batch_is_an_error() {
        let err = MapDocument::build(&Vec::new());
        assert!(matches!(err, Err(ConvertError::EmptyDataset)));
    }

    #[test]
    fn rendered_page_embeds_semantic_content() {
        let batch = vec![sample(1, 1.5, 2.5, 30.0)];
        let doc = MapDocument::build(&batch).unwrap();
        let html = doc.render().unwrap();

        assert!(html.contains("\"color\":\"orange\""));
        assert!(html.contains("[[1.5,2.5]]"));
        assert!(html.contains("L.control.layers"));
    }
}
