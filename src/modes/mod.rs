pub mod play;

pub use play::{DEFAULT_TICK_INTERVAL, PlayMode, PlaySettings};
