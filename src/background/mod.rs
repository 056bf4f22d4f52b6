pub mod compose;
pub mod config;
pub mod mode;
pub mod placement;
