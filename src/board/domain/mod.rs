//! Domain model for the task board.
//!
//! Tasks, the four status columns and the board aggregate that ties them
//! together. Everything here is pure data and pure transitions; ownership of
//! the current board lives in [`crate::board::store`].

mod board;
mod column;
mod demo;
mod error;
mod ids;
mod snapshot;
mod status;
mod task;

pub use board::Board;
pub use column::Column;
pub use demo::demo_board;
pub use error::{
    BoardError, BoardIntegrityError, ParsePriorityError, ParseStatusError, TaskDomainError,
};
pub use ids::TaskId;
pub use snapshot::{BoardSnapshot, ColumnRecord, RehydrationPolicy};
pub use status::{Priority, Status};
pub use task::{Task, TaskDraft};
