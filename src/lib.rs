pub mod controller;
pub mod errors;
pub mod surface;
pub mod transport;
pub mod types;
