pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;
pub mod style;

pub use config::{CanvasConfig, HistoryMode, IdAllocation};
pub use error::{ConfigError, StoreError, StyleError};
pub use id::ElementId;
pub use model::*;
pub use store::{ElementStore, Snapshot};
pub use style::StyleController;
