pub mod heart_rate;

pub use heart_rate::{
    AverageResponse, IntervalAverageRequest, IntervalAverageResponse, ReadingRecordedResponse,
    ReadingsResponse,
};
