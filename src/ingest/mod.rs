pub mod store;
pub mod transcode;
pub mod wire;

pub use store::{ArtifactStore, SubmissionPaths};
pub use wire::{UploadBatch, UploadRecord};
