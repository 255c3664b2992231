pub mod assistant;
pub mod builder;
pub mod entities;
pub mod ports;
pub mod services;
