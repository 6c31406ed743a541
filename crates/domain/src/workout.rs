use crate::{Duration, Height, PoolLength, TrainingSummary, Weight};

pub const M_IN_KM: f32 = 1000.0;

/// Distance covered by one step, in meters.
pub const STEP_LENGTH_M: f32 = 0.65;

const MIN_IN_H: f32 = 60.0;

/// A single recorded workout.
///
/// Distance and mean speed are derived from the raw sensor readings by the
/// provided methods. Every variant must supply its own calorie formula;
/// there is no default.
pub trait Workout {
    fn label(&self) -> &'static str;
    fn action_count(&self) -> u32;
    fn duration(&self) -> Duration;
    fn weight(&self) -> Weight;
    fn spent_calories(&self) -> f32;

    /// Distance covered by one step or stroke, in meters.
    fn step_length_m(&self) -> f32 {
        STEP_LENGTH_M
    }

    #[must_use]
    fn distance_km(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let action_count = self.action_count() as f32;
        action_count * self.step_length_m() / M_IN_KM
    }

    #[must_use]
    fn mean_speed_kmh(&self) -> f32 {
        self.distance_km() / f32::from(self.duration())
    }

    #[must_use]
    fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            training_type: self.label(),
            duration: self.duration().into(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: u32,
    duration: Duration,
    weight: Weight,
}

impl Running {
    const SPEED_FACTOR: f32 = 18.0;
    const SPEED_SHIFT: f32 = 20.0;

    #[must_use]
    pub fn new(action: u32, duration: Duration, weight: Weight) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn weight(&self) -> Weight {
        self.weight
    }

    fn spent_calories(&self) -> f32 {
        (Self::SPEED_FACTOR * self.mean_speed_kmh() - Self::SPEED_SHIFT)
            * f32::from(self.weight)
            / M_IN_KM
            * (f32::from(self.duration) * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: Duration,
    weight: Weight,
    height: Height,
}

impl SportsWalking {
    const WEIGHT_FACTOR: f32 = 0.035;
    const SPEED_HEIGHT_FACTOR: f32 = 0.029;

    #[must_use]
    pub fn new(action: u32, duration: Duration, weight: Weight, height: Height) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Workout for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn weight(&self) -> Weight {
        self.weight
    }

    fn spent_calories(&self) -> f32 {
        let weight = f32::from(self.weight);
        let speed = self.mean_speed_kmh();
        // The squared speed is floor-divided by the height. The truncation
        // is part of the established formula and must be kept.
        let speed_height_term = (speed * speed / f32::from(self.height)).floor();
        (Self::WEIGHT_FACTOR * weight + speed_height_term * Self::SPEED_HEIGHT_FACTOR * weight)
            * (f32::from(self.duration) * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: Duration,
    weight: Weight,
    pool_length: PoolLength,
    pool_laps: u32,
}

impl Swimming {
    /// Distance covered by one stroke, in meters.
    pub const STROKE_LENGTH_M: f32 = 1.38;

    const SPEED_SHIFT: f32 = 1.1;
    const WEIGHT_FACTOR: f32 = 2.0;

    pub fn new(
        action: u32,
        duration: Duration,
        weight: Weight,
        pool_length: PoolLength,
        pool_laps: u32,
    ) -> Result<Self, SwimmingError> {
        if pool_laps == 0 {
            return Err(SwimmingError::NoPoolLaps);
        }

        Ok(Self {
            action,
            duration,
            weight,
            pool_length,
            pool_laps,
        })
    }
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn weight(&self) -> Weight {
        self.weight
    }

    fn step_length_m(&self) -> f32 {
        Self::STROKE_LENGTH_M
    }

    /// Mean speed is taken from the pool crossings, not the stroke count.
    fn mean_speed_kmh(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let pool_laps = self.pool_laps as f32;
        f32::from(self.pool_length) * pool_laps / M_IN_KM / f32::from(self.duration)
    }

    fn spent_calories(&self) -> f32 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * f32::from(self.weight)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SwimmingError {
    #[error("Pool lap count must be a positive integer")]
    NoPoolLaps,
}
