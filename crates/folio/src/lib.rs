//! Interactive behavior for a static portfolio page.
//!
//! The page markup supplies an opening overlay, a sidebar with its trigger,
//! navigation links tagged with `data-section`, and one container per
//! section. [`controller::ViewController`] owns the view state;
//! [`platform::browser`] binds it to the live document and
//! [`platform::headless`] to an in-memory page.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod platform;

pub use config::Config;
pub use controller::{KeyInput, Page, ViewController};
pub use error::FolioError;
