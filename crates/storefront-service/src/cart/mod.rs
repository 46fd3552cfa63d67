//! Shopping cart service.

pub mod service;

pub use service::CartService;
