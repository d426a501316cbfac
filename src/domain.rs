pub mod fixture;
pub mod ports;
