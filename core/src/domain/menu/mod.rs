pub mod catalog;
pub mod entities;
pub mod generator;
pub mod ports;
pub mod sample;
pub mod services;
pub mod value_objects;
