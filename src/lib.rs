pub mod chrome;
pub mod config;
pub mod gallery;
pub mod game;
pub mod home;
pub mod media;
pub mod media_view;
pub mod project;
pub mod routes;
pub mod scroll_lock;
pub mod timeline;
pub mod viewer;

pub use routes::{App, Route};
