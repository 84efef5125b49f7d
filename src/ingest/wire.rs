use serde::Deserialize;
use utoipa::ToSchema;

/// One measurement as submitted by the collection page.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub index: i64,
    /// YYYY-MM-DD HH:MM:SS; validated downstream by the record parser.
    pub date_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub inclination: f64,
}

/// A batch of samples from one submission.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UploadBatch {
    /// Submission time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub data: Vec<UploadRecord>,
}
