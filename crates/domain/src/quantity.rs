use derive_more::{Display, Into};

/// Workout duration in hours.
///
/// Mean speed is derived by dividing by the duration, so non-positive
/// values are rejected at construction.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Duration(f32);

impl Duration {
    pub fn new(hours: f32) -> Result<Self, DurationError> {
        if hours.is_nan() || hours <= 0.0 {
            return Err(DurationError::NonPositive(hours));
        }

        Ok(Self(hours))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("Duration must be a positive number of hours ({0} given)")]
    NonPositive(f32),
}

/// Body weight in kilograms.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(kilograms: f32) -> Result<Self, WeightError> {
        if kilograms.is_nan() || kilograms <= 0.0 {
            return Err(WeightError::NonPositive(kilograms));
        }

        Ok(Self(kilograms))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a positive number of kilograms ({0} given)")]
    NonPositive(f32),
}

/// Body height in centimeters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub fn new(centimeters: f32) -> Result<Self, HeightError> {
        if centimeters.is_nan() || centimeters <= 0.0 {
            return Err(HeightError::NonPositive(centimeters));
        }

        Ok(Self(centimeters))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HeightError {
    #[error("Height must be a positive number of centimeters ({0} given)")]
    NonPositive(f32),
}

/// Pool length in meters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct PoolLength(f32);

impl PoolLength {
    pub fn new(meters: f32) -> Result<Self, PoolLengthError> {
        if meters.is_nan() || meters <= 0.0 {
            return Err(PoolLengthError::NonPositive(meters));
        }

        Ok(Self(meters))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PoolLengthError {
    #[error("Pool length must be a positive number of meters ({0} given)")]
    NonPositive(f32),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, Ok(Duration(1.0)))]
    #[case(0.5, Ok(Duration(0.5)))]
    #[case(0.0, Err(DurationError::NonPositive(0.0)))]
    #[case(-1.5, Err(DurationError::NonPositive(-1.5)))]
    fn test_duration_new(#[case] hours: f32, #[case] expected: Result<Duration, DurationError>) {
        assert_eq!(Duration::new(hours), expected);
    }

    #[test]
    fn test_duration_new_nan() {
        assert!(matches!(
            Duration::new(f32::NAN),
            Err(DurationError::NonPositive(_))
        ));
    }

    #[rstest]
    #[case(75.0, Ok(Weight(75.0)))]
    #[case(0.0, Err(WeightError::NonPositive(0.0)))]
    #[case(-80.0, Err(WeightError::NonPositive(-80.0)))]
    fn test_weight_new(#[case] kilograms: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(kilograms), expected);
    }

    #[rstest]
    #[case(180.0, Ok(Height(180.0)))]
    #[case(0.0, Err(HeightError::NonPositive(0.0)))]
    fn test_height_new(#[case] centimeters: f32, #[case] expected: Result<Height, HeightError>) {
        assert_eq!(Height::new(centimeters), expected);
    }

    #[rstest]
    #[case(25.0, Ok(PoolLength(25.0)))]
    #[case(0.0, Err(PoolLengthError::NonPositive(0.0)))]
    fn test_pool_length_new(
        #[case] meters: f32,
        #[case] expected: Result<PoolLength, PoolLengthError>,
    ) {
        assert_eq!(PoolLength::new(meters), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration(1.5).to_string(), "1.5");
        assert_eq!(Weight(75.0).to_string(), "75");
    }
}
