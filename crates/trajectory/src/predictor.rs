use plumb_solvers::equation::newton::{self, Config};
use thiserror::Error;

use crate::{DragModel, Error, Flight, sample};

/// Settings for a [`Predictor`].
///
/// The target plane lies `ground_offset` below world `y = 0`, so a launch
/// from height `origin.y` starts `origin.y + ground_offset` above it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PredictorConfig {
    /// Linear drag coefficient.
    pub drag: f64,
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Points sampled along each trajectory, at least 2.
    pub samples: usize,
    /// Depth of the target plane below world `y = 0`.
    pub ground_offset: f64,
    /// Extra time added past the latest impact.
    pub time_margin: f64,
    /// Speed uncertainty used to pick the sampled duration.
    pub speed_spread: f64,
    /// Speed offset of the near and far band trajectories.
    pub band_spread: f64,
    /// Whether [`Predictor::predict`] also samples the band.
    pub show_band: bool,
    /// Solver iteration limit.
    pub max_iters: usize,
    /// Solver absolute tolerance.
    pub abs_tol: f64,
    /// Solver relative tolerance.
    pub rel_tol: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        let solver = Config::default();
        Self {
            drag: 0.2,
            gravity: 32.7435,
            samples: 256,
            ground_offset: 5.0,
            time_margin: 0.01,
            speed_spread: 0.15,
            band_spread: 1.5,
            show_band: false,
            max_iters: solver.max_iters(),
            abs_tol: solver.tolerance().abs(),
            rel_tol: solver.tolerance().rel(),
        }
    }
}

impl PredictorConfig {
    /// Checks the sampling and spread settings.
    ///
    /// Drag, gravity, and solver settings are checked when the [`Predictor`]
    /// builds its model and solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested, if
    /// `ground_offset` is not finite, or if a margin or spread is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), PredictorError> {
        if self.samples < 2 {
            return Err(PredictorError::TooFewSamples(self.samples));
        }
        if !self.ground_offset.is_finite() {
            return Err(PredictorError::InvalidParameter {
                name: "ground_offset",
                value: self.ground_offset,
            });
        }
        for (name, value) in [
            ("time_margin", self.time_margin),
            ("speed_spread", self.speed_spread),
            ("band_spread", self.band_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PredictorError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Errors that can occur when configuring or running a [`Predictor`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PredictorError {
    #[error("at least 2 samples are required, got {0}")]
    TooFewSamples(usize),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid solver settings: {0}")]
    Solver(#[from] newton::ConfigError),

    #[error("launch direction has zero length")]
    ZeroDirection,

    #[error("no impact with the target plane at speed {speed}")]
    NoImpact { speed: f64 },
}

/// Where and how a projectile leaves the launcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    origin: [f64; 3],
    direction: [f64; 3],
    speed: f64,
}

impl Launch {
    /// Creates a launch, normalizing `direction` to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::ZeroDirection`] if `direction` has zero or
    /// non-finite length.
    pub fn new(origin: [f64; 3], direction: [f64; 3], speed: f64) -> Result<Self, PredictorError> {
        let [dx, dy, dz] = direction;
        let norm = (dx * dx + dy * dy + dz * dz).sqrt();
        if !norm.is_normal() {
            return Err(PredictorError::ZeroDirection);
        }
        Ok(Self {
            origin,
            direction: [dx / norm, dy / norm, dz / norm],
            speed,
        })
    }

    #[must_use]
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    #[must_use]
    pub fn direction(&self) -> [f64; 3] {
        self.direction
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Launch velocity at the nominal speed.
    #[must_use]
    pub fn velocity(&self) -> [f64; 3] {
        self.velocity_at(self.speed)
    }

    /// Launch velocity along this direction at `speed`.
    #[must_use]
    pub fn velocity_at(&self, speed: f64) -> [f64; 3] {
        self.direction.map(|d| d * speed)
    }
}

/// Trajectories bracketing the nominal one.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Sampled at `speed - band_spread`.
    pub near: Vec<[f64; 3]>,
    /// Sampled at `speed + band_spread`.
    pub far: Vec<[f64; 3]>,
}

/// Sampled trajectories for a [`Launch`], in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Time covered by each trajectory.
    pub duration: f64,
    /// Time between consecutive samples.
    pub step: f64,
    /// Trajectory at the launch speed.
    pub nominal: Vec<[f64; 3]>,
    /// Present when [`PredictorConfig::show_band`] is set.
    pub band: Option<Band>,
}

/// Predicts where launched projectiles travel until they hit the target plane.
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    config: PredictorConfig,
    model: DragModel,
    solver: Config,
}

impl Predictor {
    /// Creates a predictor from validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings, drag model, or solver settings are
    /// invalid.
    pub fn new(config: &PredictorConfig) -> Result<Self, Error> {
        config.validate()?;
        let model = DragModel::new(config.drag, config.gravity)?;
        let solver = Config::new(config.max_iters, config.abs_tol, config.rel_tol)
            .map_err(PredictorError::from)?;

        Ok(Self {
            config: *config,
            model,
            solver,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    #[must_use]
    pub fn model(&self) -> DragModel {
        self.model
    }

    /// Time for a projectile leaving `launch` at `speed` to reach the target plane.
    ///
    /// NaN when no impact exists, for example when launching downward from
    /// below the plane.
    ///
    /// # Errors
    ///
    /// Propagates solver argument errors.
    pub fn impact_time(&self, launch: &Launch, speed: f64) -> Result<f64, Error> {
        let [_, vy, _] = launch.velocity_at(speed);
        let y0 = launch.origin[1] + self.config.ground_offset;
        Flight::new(self.model, vy, y0).impact_time(&self.solver)
    }

    /// Time span sampled for `launch`.
    ///
    /// Covers the later of the impacts at `speed ± speed_spread`, plus
    /// `time_margin`, so every trajectory in the uncertainty range ends
    /// below the target plane.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::NoImpact`] if neither speed reaches the
    /// target plane.
    pub fn duration(&self, launch: &Launch) -> Result<f64, Error> {
        let spread = self.config.speed_spread;
        let slow = self.impact_time(launch, launch.speed - spread)?;
        let fast = self.impact_time(launch, launch.speed + spread)?;

        let duration = slow.max(fast) + self.config.time_margin;
        if duration.is_finite() {
            Ok(duration)
        } else {
            Err(PredictorError::NoImpact {
                speed: launch.speed,
            }
            .into())
        }
    }

    /// Samples the nominal trajectory and, if enabled, the band around it.
    ///
    /// # Errors
    ///
    /// Returns an error if no impact exists for the launch.
    pub fn predict(&self, launch: &Launch) -> Result<Prediction, Error> {
        let duration = self.duration(launch)?;
        let samples = self.config.samples;
        let step = duration / (samples - 1) as f64;

        let nominal = self.sample_at(launch, launch.speed, duration);
        let band = self.config.show_band.then(|| {
            let spread = self.config.band_spread;
            Band {
                near: self.sample_at(launch, launch.speed - spread, duration),
                far: self.sample_at(launch, launch.speed + spread, duration),
            }
        });

        log::debug!(
            "predicted {samples} samples over {duration} for speed {}",
            launch.speed
        );

        Ok(Prediction {
            duration,
            step,
            nominal,
            band,
        })
    }

    fn sample_at(&self, launch: &Launch, speed: f64, duration: f64) -> Vec<[f64; 3]> {
        let [ox, oy, oz] = launch.origin;
        sample(
            &self.model,
            launch.velocity_at(speed),
            duration,
            self.config.samples,
        )
        .into_iter()
        .map(|[x, y, z]| [ox + x, oy + y, oz + z])
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn launch() -> Launch {
        Launch::new([2.0, 10.0, -3.0], [1.0, 1.0, 0.0], 60.0).unwrap()
    }

    #[test]
    fn defaults() {
        let config = PredictorConfig::default();
        assert_relative_eq!(config.drag, 0.2);
        assert_relative_eq!(config.gravity, 32.7435);
        assert_eq!(config.samples, 256);
        assert_relative_eq!(config.ground_offset, 5.0);
        assert_relative_eq!(config.time_margin, 0.01);
        assert_relative_eq!(config.speed_spread, 0.15);
        assert_relative_eq!(config.band_spread, 1.5);
        assert!(!config.show_band);
        assert_eq!(config.max_iters, 50);
        assert_relative_eq!(config.abs_tol, 1.48e-8);
        assert_relative_eq!(config.rel_tol, 0.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let config = PredictorConfig {
            samples: 1,
            ..PredictorConfig::default()
        };
        assert_eq!(config.validate(), Err(PredictorError::TooFewSamples(1)));

        let config = PredictorConfig {
            time_margin: -0.5,
            ..PredictorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(PredictorError::InvalidParameter {
                name: "time_margin",
                value: -0.5
            })
        );

        let config = PredictorConfig {
            band_spread: f64::INFINITY,
            ..PredictorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PredictorError::InvalidParameter {
                name: "band_spread",
                ..
            })
        ));
    }

    #[test]
    fn invalid_model_and_solver_settings_are_rejected() {
        let config = PredictorConfig {
            drag: 0.0,
            ..PredictorConfig::default()
        };
        assert!(matches!(Predictor::new(&config), Err(Error::Model(_))));

        let config = PredictorConfig {
            max_iters: 0,
            ..PredictorConfig::default()
        };
        assert!(matches!(
            Predictor::new(&config),
            Err(Error::Predictor(PredictorError::Solver(_)))
        ));
    }

    #[test]
    fn launch_direction_is_normalized() {
        let launch = Launch::new([0.0; 3], [3.0, 4.0, 0.0], 10.0).unwrap();
        let [vx, vy, vz] = launch.velocity();
        assert_relative_eq!(vx, 6.0);
        assert_relative_eq!(vy, 8.0);
        assert_relative_eq!(vz, 0.0);

        assert_eq!(
            Launch::new([0.0; 3], [0.0; 3], 10.0),
            Err(PredictorError::ZeroDirection)
        );
    }

    #[test]
    fn duration_covers_the_fastest_impact() {
        let predictor = Predictor::new(&PredictorConfig::default()).unwrap();
        let launch = launch();

        let fast = predictor.impact_time(&launch, launch.speed() + 0.15).unwrap();
        let slow = predictor.impact_time(&launch, launch.speed() - 0.15).unwrap();
        assert!(fast > slow);

        let duration = predictor.duration(&launch).unwrap();
        assert_relative_eq!(duration, fast + 0.01);
    }

    #[test]
    fn nominal_trajectory_starts_at_origin_and_ends_below_ground() {
        let predictor = Predictor::new(&PredictorConfig::default()).unwrap();
        let launch = launch();
        let prediction = predictor.predict(&launch).unwrap();

        assert_eq!(prediction.nominal.len(), 256);
        assert_relative_eq!(prediction.step, prediction.duration / 255.0);
        assert!(prediction.band.is_none());

        let first = prediction.nominal[0];
        assert_relative_eq!(first[0], 2.0);
        assert_relative_eq!(first[1], 10.0);
        assert_relative_eq!(first[2], -3.0);

        let last = prediction.nominal[255];
        assert!(last[1] < -5.0);
        assert_relative_eq!(last[2], -3.0);
    }

    #[test]
    fn band_brackets_the_nominal_trajectory() {
        let config = PredictorConfig {
            show_band: true,
            ..PredictorConfig::default()
        };
        let predictor = Predictor::new(&config).unwrap();
        let prediction = predictor.predict(&launch()).unwrap();

        let band = prediction.band.expect("band is enabled");
        assert_eq!(band.near.len(), 256);
        assert_eq!(band.far.len(), 256);

        let reach = |points: &[[f64; 3]]| points[255][0];
        assert!(reach(&band.near) < reach(&prediction.nominal));
        assert!(reach(&prediction.nominal) < reach(&band.far));
    }

    #[test]
    fn no_impact_is_an_error() {
        let predictor = Predictor::new(&PredictorConfig::default()).unwrap();
        let launch = Launch::new([0.0, -20.0, 0.0], [0.0, -1.0, 0.0], 10.0).unwrap();

        assert!(predictor.impact_time(&launch, 10.0).unwrap().is_nan());
        assert_eq!(
            predictor.predict(&launch),
            Err(Error::Predictor(PredictorError::NoImpact { speed: 10.0 }))
        );
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn config_from_toml() {
        let config: PredictorConfig = toml::from_str(
            r#"
            drag = 0.3
            samples = 64
            show_band = true
            "#,
        )
        .unwrap();

        assert_relative_eq!(config.drag, 0.3);
        assert_eq!(config.samples, 64);
        assert!(config.show_band);
        assert_relative_eq!(config.gravity, 32.7435);
        assert_relative_eq!(config.band_spread, 1.5);
    }
}
