pub mod mock;
pub mod ui;
