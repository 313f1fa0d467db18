pub mod browser;
pub mod headless;
