//! Business logic services for the application layer.

pub mod line_service;

pub use line_service::LineService;
