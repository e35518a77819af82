pub mod engine;
pub mod pipeline;
pub mod ports;
pub mod services;
