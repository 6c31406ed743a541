use std::fmt;

/// Outcome of a single workout, produced once and used only for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub training_type: &'static str,
    pub duration: f32,
    pub distance: f32,
    pub speed: f32,
    pub calories: f32,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::running(
        TrainingSummary {
            training_type: "Running",
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        },
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    )]
    #[case::rounded(
        TrainingSummary {
            training_type: "Swimming",
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        },
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    )]
    fn test_training_summary_display(#[case] summary: TrainingSummary, #[case] expected: &str) {
        assert_eq!(summary.to_string(), expected);
    }
}
