pub mod login;
pub mod placeholder;
pub mod profile;
