//! Field-data capture backend: GPS + inclination sample batches in,
//! interactive Leaflet maps out.

pub mod convert;
pub mod ingest;
pub mod render;
pub mod web;
