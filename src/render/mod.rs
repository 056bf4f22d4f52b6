pub mod context;
pub mod cpu;
pub mod pipeline;
pub mod recording;
