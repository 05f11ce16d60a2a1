pub mod user;

pub use user::{Reading, UserRecord};
