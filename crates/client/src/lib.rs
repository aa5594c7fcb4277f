//! Gigboard client application: configuration and the wired [`App`].

pub mod app;
pub mod config;

pub use app::App;
pub use config::ClientConfig;
