use crate::DragModel;

/// Returns `samples` evenly spaced times covering `[0, duration]`.
///
/// The first time is zero and the last is `duration`. A single sample yields
/// just the launch instant and zero samples yield nothing.
#[must_use]
pub fn sample_times(duration: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = duration / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// Returns displacements from the launch point at evenly spaced times.
///
/// Positions are relative to the launch point. Add the origin to place them
/// in world coordinates.
#[must_use]
pub fn sample(
    model: &DragModel,
    velocity: [f64; 3],
    duration: f64,
    samples: usize,
) -> Vec<[f64; 3]> {
    sample_times(duration, samples)
        .into_iter()
        .map(|t| model.displacement(velocity, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn times_span_the_duration() {
        let times = sample_times(3.0, 4);
        assert_eq!(times.len(), 4);
        assert_relative_eq!(times[0], 0.0);
        assert_relative_eq!(times[1], 1.0);
        assert_relative_eq!(times[3], 3.0);
    }

    #[test]
    fn degenerate_sample_counts() {
        assert!(sample_times(2.0, 0).is_empty());
        assert_eq!(sample_times(2.0, 1), vec![0.0]);
        assert_eq!(sample_times(2.0, 2), vec![0.0, 2.0]);
    }

    #[test]
    fn samples_start_at_the_launch_point() {
        let model = DragModel::new(0.2, 32.7435).unwrap();
        let points = sample(&model, [10.0, 40.0, -5.0], 2.5, 256);

        assert_eq!(points.len(), 256);
        assert_eq!(points[0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn samples_follow_the_model() {
        let model = DragModel::new(0.2, 32.7435).unwrap();
        let velocity = [10.0, 40.0, -5.0];
        let points = sample(&model, velocity, 2.0, 5);

        for (point, t) in points.iter().zip(sample_times(2.0, 5)) {
            let expected = model.displacement(velocity, t);
            assert_relative_eq!(point[0], expected[0]);
            assert_relative_eq!(point[1], expected[1]);
            assert_relative_eq!(point[2], expected[2]);
        }
    }

    #[test]
    fn horizontal_travel_grows_monotonically() {
        let model = DragModel::new(0.2, 32.7435).unwrap();
        let points = sample(&model, [25.0, 10.0, 0.0], 4.0, 32);

        assert!(points.windows(2).all(|pair| pair[1][0] > pair[0][0]));
    }
}
