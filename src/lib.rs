pub mod defaults;
pub mod engine;
pub mod model;
pub mod schema;
pub mod validate;

#[cfg(feature = "full")]
pub mod api;
#[cfg(feature = "full")]
pub mod config;
#[cfg(feature = "full")]
pub mod store;
