pub mod cache;
pub mod decorator;
pub mod error;
pub mod index;
pub mod matcher;
pub mod service;
pub mod snapshot;
pub mod store;

pub use decorator::{ServiceLogger, ServiceMeter};
pub use error::{Error, Result};
pub use service::{DeleteReport, RecordService, StoreStat};
pub use snapshot::{RestoreReport, Snapshot};
pub use store::MemoryStore;
