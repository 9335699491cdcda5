pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, FinboardError};
pub use events::PanelEvent;
pub use types::{PanelId, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, FinboardError>;
