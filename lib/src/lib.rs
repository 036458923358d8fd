pub mod env_keys;
pub mod utilities;
pub mod service;
pub mod analysis;
