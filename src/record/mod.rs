//! Move history.
//!
//! - `move_record`: [`MoveRecord`], one resolved move with before/after
//!   snapshots
//! - `log`: [`MoveLog`], the append-only chronological history
//! - `export`: [`MoveTable`], the log flattened for tabular consumers

mod export;
mod log;
mod move_record;

pub use export::MoveTable;
pub use log::MoveLog;
pub use move_record::{MoveRecord, SlotKind};
