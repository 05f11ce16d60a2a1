pub mod health;
pub mod heart_rate;

pub use health::health_check;
pub use heart_rate::{get_average, get_heart_rates, interval_average, record_heart_rate};
