pub mod stats;
pub mod validation;

pub use stats::{average, diagnosis, readings_since, Condition};
pub use validation::{validate_reading_input, ReadingInput, ValidationError};
