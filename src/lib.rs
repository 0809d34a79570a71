//! Todo frontend
//!
//! Browser todo list kept in `localStorage`.
//! - models, store, storage, edit, intent, view: DOM-free logic
//! - components, context, app: Leptos presentation

pub mod config;
pub mod error;
pub mod models;
pub mod ids;
pub mod storage;
pub mod store;
pub mod view;
pub mod edit;
pub mod intent;
pub mod logger;
pub mod context;
pub mod components;
pub mod app;

pub use app::App;
pub use config::AppConfig;
