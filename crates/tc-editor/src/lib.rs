pub mod drag;
pub mod history;
pub mod input;
pub mod shortcuts;
pub mod surface;

pub use surface::{CanvasSurface, KeyOutcome};
