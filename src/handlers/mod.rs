mod analyze;
mod health;

pub use analyze::analyze;
pub use health::health_check;
