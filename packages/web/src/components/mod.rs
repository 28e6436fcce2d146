//! Reusable UI components

mod avatar;
mod doctor_card;
mod loading;
mod notices;

pub use avatar::*;
pub use doctor_card::*;
pub use loading::*;
pub use notices::*;
