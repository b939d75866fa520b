//! HTTP request handlers for API endpoints.

pub mod health;
pub mod lines;

pub use health::health_handler;
pub use lines::{
    create_line_handler, delete_line_handler, get_line_handler, line_list_handler,
    update_line_handler,
};
