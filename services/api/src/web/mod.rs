pub mod catalog;
pub mod chat;
pub mod protocol;
pub mod quiz;
pub mod rest;
pub mod state;
pub mod view;

// Re-export the router builder to make it easily accessible
// to the binary that builds the web server.
pub use rest::{api_router, ApiDoc};
