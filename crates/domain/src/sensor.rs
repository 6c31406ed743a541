use crate::{
    Duration, DurationError, Height, HeightError, PoolLength, PoolLengthError, Running,
    SportsWalking, Swimming, SwimmingError, Weight, WeightError, Workout,
};

/// Turn a sensor package into the matching workout.
///
/// The data fields are positional: action count, duration in hours and
/// weight in kilograms, followed by the height in centimeters for `WLK`
/// and the pool length in meters and lap count for `SWM`.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Workout>, PackageError> {
    match code {
        "RUN" => {
            let [action, duration, weight] = fields(code, data)?;
            Ok(Box::new(Running::new(
                count(action)?,
                new_duration(duration)?,
                new_weight(weight)?,
            )))
        }
        "WLK" => {
            let [action, duration, weight, height] = fields(code, data)?;
            Ok(Box::new(SportsWalking::new(
                count(action)?,
                new_duration(duration)?,
                new_weight(weight)?,
                new_height(height)?,
            )))
        }
        "SWM" => {
            let [action, duration, weight, pool_length, pool_laps] = fields(code, data)?;
            Ok(Box::new(Swimming::new(
                count(action)?,
                new_duration(duration)?,
                new_weight(weight)?,
                new_pool_length(pool_length)?,
                count(pool_laps)?,
            )?))
        }
        _ => Err(PackageError::UnknownActivity(code.to_string())),
    }
}

fn fields<const N: usize>(code: &str, data: &[f64]) -> Result<[f64; N], PackageError> {
    <[f64; N]>::try_from(data).map_err(|_| PackageError::InvalidFieldCount {
        code: code.to_string(),
        expected: N,
        actual: data.len(),
    })
}

fn count(value: f64) -> Result<u32, PackageError> {
    if !(0.0..=f64::from(u32::MAX)).contains(&value) || value.fract() != 0.0 {
        return Err(PackageError::InvalidCount(value));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}

#[allow(clippy::cast_possible_truncation)]
fn new_duration(hours: f64) -> Result<Duration, DurationError> {
    Duration::new(hours as f32)
}

#[allow(clippy::cast_possible_truncation)]
fn new_weight(kilograms: f64) -> Result<Weight, WeightError> {
    Weight::new(kilograms as f32)
}

#[allow(clippy::cast_possible_truncation)]
fn new_height(centimeters: f64) -> Result<Height, HeightError> {
    Height::new(centimeters as f32)
}

#[allow(clippy::cast_possible_truncation)]
fn new_pool_length(meters: f64) -> Result<PoolLength, PoolLengthError> {
    PoolLength::new(meters as f32)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PackageError {
    #[error("Unknown activity code: {0}")]
    UnknownActivity(String),
    #[error("Activity {code} requires {expected} data fields ({actual} given)")]
    InvalidFieldCount {
        code: String,
        expected: usize,
        actual: usize,
    },
    #[error("Action and lap counts must be non-negative integers ({0} given)")]
    InvalidCount(f64),
    #[error(transparent)]
    InvalidDuration(#[from] DurationError),
    #[error(transparent)]
    InvalidWeight(#[from] WeightError),
    #[error(transparent)]
    InvalidHeight(#[from] HeightError),
    #[error(transparent)]
    InvalidPoolLength(#[from] PoolLengthError),
    #[error(transparent)]
    InvalidSwimming(#[from] SwimmingError),
}
