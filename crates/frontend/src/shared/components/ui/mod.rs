//! Minimal UI kit for the console screens.

pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod select;

pub use badge::Badge;
pub use button::Button;
pub use card::Card;
pub use input::Input;
pub use select::Select;
