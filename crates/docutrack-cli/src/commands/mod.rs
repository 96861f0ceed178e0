//! Command implementations.

pub mod config;
pub mod extract;
pub mod fields;
pub mod text;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::fields::execute_fields;
pub use self::text::execute_text;
