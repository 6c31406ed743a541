#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod quantity;
mod sensor;
mod summary;
mod workout;

pub use quantity::{
    Duration, DurationError, Height, HeightError, PoolLength, PoolLengthError, Weight, WeightError,
};
pub use sensor::{PackageError, read_package};
pub use summary::TrainingSummary;
pub use workout::{
    M_IN_KM, Running, STEP_LENGTH_M, SportsWalking, Swimming, SwimmingError, Workout,
};
