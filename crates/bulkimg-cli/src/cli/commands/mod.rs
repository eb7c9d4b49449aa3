//! CLI command handlers. Each command is in its own file.

mod archive;
mod brand_model;
mod columns;
mod urls;

pub use brand_model::run_brand_model;
pub use columns::run_columns;
pub use urls::run_urls;
