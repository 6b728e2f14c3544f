pub mod config;
pub mod convert;
pub mod embed;
pub mod inspect;
pub mod palette;
pub mod preview;

pub use config::{Command, Config};
