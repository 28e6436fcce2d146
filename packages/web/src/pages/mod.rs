//! Application pages

mod book;
mod home;
mod not_found;
mod profile;
mod success;

pub use book::*;
pub use home::*;
pub use not_found::*;
pub use profile::*;
pub use success::*;
