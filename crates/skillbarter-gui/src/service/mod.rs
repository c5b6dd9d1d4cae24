//! Services performing side effects on behalf of handlers.

pub mod export;

pub use export::{EXPORT_HTML, write_export};
