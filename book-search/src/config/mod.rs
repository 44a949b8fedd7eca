//! Process configuration and dependency wiring.

mod dependencies;

pub use dependencies::{client_config_from, Dependencies};
