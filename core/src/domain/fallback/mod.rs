pub mod keys;
pub mod ports;

pub use ports::FallbackStore;
