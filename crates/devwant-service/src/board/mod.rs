//! Boards, their admin screens, and per-board categories.

pub mod admin;
pub mod category;
pub mod service;

pub use admin::{BoardAdminService, CreateBoardRequest, UpdateBoardRequest};
pub use category::CategoryService;
pub use service::{BoardPage, BoardService};
