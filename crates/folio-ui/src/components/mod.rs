//! Reusable UI components

mod button;
mod category_pills;
mod input;
mod load_status;

pub use button::*;
pub use category_pills::*;
pub use input::*;
pub use load_status::*;
