pub mod normalizers;
pub mod ports;
pub mod services;
pub mod store;
pub mod use_cases;
