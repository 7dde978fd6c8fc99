pub mod appointment;
pub mod config;
pub mod roster;

pub use appointment::*;
pub use config::*;
pub use roster::*;
