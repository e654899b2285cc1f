pub mod authorize;
pub mod filter;
pub mod ingest;
pub mod pipeline;
pub mod serialize;

pub use crate::domain::model::{ClientCode, CsvAttachment, FilterOutcome, RawTable, Record};
pub use crate::domain::ports::{ClientRegistry, ConfigProvider, Storage};
pub use crate::utils::error::Result;
