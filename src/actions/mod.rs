pub mod handler;
pub mod handlers;
pub mod host;
pub mod map;
pub mod registry;
pub mod restrict;
pub mod values;
