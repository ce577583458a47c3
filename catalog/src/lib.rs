pub mod cache;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;
pub mod strangler;
pub mod validation;
