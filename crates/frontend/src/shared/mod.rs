pub mod browser;
pub mod components;
pub mod embedded;
pub mod list_utils;
