//! Persistence module for window layout
//!
//! Provides the storage abstraction, the snapshot codec, and the position
//! store that merges stored placements over registry defaults.

mod snapshot;
mod storage;
mod store;

pub use snapshot::{decode_layout, encode_layout, MAX_STORED_Z};
pub use storage::{MemoryStorage, Storage};
pub use store::{PositionStore, WINDOW_POSITION_STORAGE_KEY};
