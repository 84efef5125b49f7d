pub mod classify;
pub mod driver;
pub mod error;
pub mod parser;
pub mod sample;

pub use classify::ColorBucket;
pub use driver::{convert_file, ConversionReport};
pub use error::{ConvertError, Rejection, RowError};
pub use sample::{Sample, SampleBatch};
