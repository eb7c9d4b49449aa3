pub mod config;
pub mod logging;

pub mod archive;
pub mod batch;
pub mod fetch;
pub mod naming;
pub mod sheet;
