pub mod engine;
pub mod event_bus;
pub mod journal;
pub mod pipeline;
pub mod state;
