//! Application services for board orchestration.

mod board_service;
mod requests;

pub use board_service::{BoardService, BoardServiceError, BoardServiceResult};
pub use requests::{AddTaskRequest, MoveTaskRequest};
