pub mod app;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod likes;
pub mod models;
pub mod seed;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_store_dir, Store};
