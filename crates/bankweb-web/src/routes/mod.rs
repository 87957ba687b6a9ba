//! Route modules for the view layer
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON endpoints and HTMX partials
//! - page.rs: Full page rendering

pub mod accounts;
