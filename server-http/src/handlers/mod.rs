pub mod health;
pub mod strangler;
pub mod v1;
pub mod v2;

pub use health::health_check;
