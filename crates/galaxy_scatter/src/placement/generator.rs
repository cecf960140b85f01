//! Rejection sampling of separated star positions.
use glam::DVec2;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::placement::config::GenerationConfig;
use crate::placement::events::{EventSink, GenerationEvent};
use crate::placement::grid::SeparationGrid;

/// Result of a successful generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Accepted points in draw order.
    pub points: Vec<DVec2>,
    /// Total candidates drawn.
    pub attempts: usize,
    /// Candidates discarded by the separation test.
    pub rejected: usize,
}

/// Owns a validated [`GenerationConfig`] and runs the rejection sampler.
pub struct PointGenerator {
    /// Configuration applied to every run.
    pub config: GenerationConfig,
}

impl PointGenerator {
    pub fn try_new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the generator, returning the accepted points.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        generate_points_with_events(&self.config, rng, &mut ())
    }

    pub fn generate_with_events(
        &self,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<GenerationReport> {
        generate_points_with_events(&self.config, rng, sink)
    }
}

pub fn generate_points(
    config: &GenerationConfig,
    rng: &mut dyn RngCore,
) -> Result<GenerationReport> {
    generate_points_with_events(config, rng, &mut ())
}

/// Draws candidates until `total_points` of them are pairwise at least
/// `min_distance` apart, or until `max_attempts` candidates were spent.
pub fn generate_points_with_events(
    config: &GenerationConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Result<GenerationReport> {
    config.validate()?;

    let sampling = config.policy.sampling();
    let total = config.total_points;
    let radius_limit = config.radius_limit;

    sink.send(GenerationEvent::Started {
        config: config.clone(),
    });

    let diameter = sampling.domain_diameter(radius_limit);
    if total > 1 && config.min_distance > diameter {
        warn!(
            "min_distance {} exceeds the {} domain diameter {:.3}; no packing exists.",
            config.min_distance,
            config.policy.tag(),
            diameter
        );
        sink.send(GenerationEvent::Warning {
            context: config.policy.tag().into(),
            message: format!(
                "min_distance {} exceeds domain diameter {diameter:.3}",
                config.min_distance
            ),
        });
        return Err(Error::PackingInfeasible {
            requested: total,
            placed: 0,
            attempts: 0,
        });
    }

    // Zero separation never rejects, so the index is skipped entirely.
    let mut grid = (config.min_distance > 0.0)
        .then(|| SeparationGrid::new(config.min_distance, radius_limit));

    let mut points: Vec<DVec2> = Vec::with_capacity(total);
    let mut attempts = 0usize;

    while points.len() < total {
        if attempts >= config.max_attempts {
            warn!(
                "Gave up after {} candidates with {}/{} points placed.",
                attempts,
                points.len(),
                total
            );
            return Err(Error::PackingInfeasible {
                requested: total,
                placed: points.len(),
                attempts,
            });
        }

        let candidate = sampling.draw(radius_limit, rng);
        attempts += 1;

        let accepted = match grid.as_ref() {
            Some(grid) => grid.is_separated(candidate),
            None => true,
        };
        if !accepted {
            continue;
        }

        if let Some(grid) = grid.as_mut() {
            grid.insert(candidate);
        }
        sink.send(GenerationEvent::PointAccepted {
            index: points.len(),
            point: candidate,
            attempts,
        });
        points.push(candidate);
    }

    let report = GenerationReport {
        rejected: attempts - points.len(),
        points,
        attempts,
    };

    info!(
        "Placed {} {} points in {} candidates ({} rejected).",
        report.points.len(),
        config.policy.tag(),
        report.attempts,
        report.rejected
    );
    debug!(
        "Acceptance rate {:.3}.",
        report.points.len() as f64 / report.attempts.max(1) as f64
    );

    sink.send(GenerationEvent::Finished {
        report: report.clone(),
    });

    Ok(report)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::placement::config::GenerationPolicy;
    use crate::placement::events::VecSink;

    fn pairwise_min_distance(points: &[DVec2]) -> f64 {
        let mut min = f64::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                min = min.min(points[i].distance(points[j]));
            }
        }
        min
    }

    #[test]
    fn zero_separation_accepts_every_candidate() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GenerationConfig::new(5, 0.0, 10.0, GenerationPolicy::Irregular);
        let report = generate_points(&config, &mut rng).expect("generation succeeds");

        assert_eq!(report.points.len(), 5);
        assert_eq!(report.attempts, 5);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn accepted_points_are_the_first_draws_in_order() {
        let config = GenerationConfig::new(3, 0.0, 10.0, GenerationPolicy::Elliptical);
        let mut rng = StdRng::seed_from_u64(77);
        let report = generate_points(&config, &mut rng).expect("generation succeeds");

        let sampling = config.policy.sampling();
        let mut replay = StdRng::seed_from_u64(77);
        for point in &report.points {
            assert_eq!(*point, sampling.draw(10.0, &mut replay));
        }
    }

    #[test]
    fn separation_and_bounds_hold_for_every_policy() {
        let policies = [
            GenerationPolicy::spiral_degrees(4, 12.0),
            GenerationPolicy::Elliptical,
            GenerationPolicy::Irregular,
        ];

        for (seed, policy) in policies.into_iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let config = GenerationConfig::new(150, 1.0, 20.0, policy);
            let report = generate_points(&config, &mut rng).expect("generation succeeds");
            let sampling = policy.sampling();

            assert_eq!(report.points.len(), 150);
            assert!(pairwise_min_distance(&report.points) >= 1.0);
            for p in &report.points {
                assert!(sampling.contains(*p, 20.0), "{p:?} outside {}", policy.tag());
            }
        }
    }

    #[test]
    fn single_spiral_point_is_never_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let config =
            GenerationConfig::new(1, 5.0, 10.0, GenerationPolicy::spiral_degrees(4, 12.0));
        let report = generate_points(&config, &mut rng).expect("generation succeeds");
        assert_eq!(report.points.len(), 1);
        assert_eq!(report.attempts, 1);
        assert!(report.points[0].length() <= 10.0);
    }

    #[test]
    fn oversized_separation_fails_without_drawing() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GenerationConfig::new(2, 25.0, 10.0, GenerationPolicy::Elliptical);
        let err = generate_points(&config, &mut rng).expect_err("must be infeasible");
        assert!(matches!(
            err,
            Error::PackingInfeasible {
                requested: 2,
                placed: 0,
                attempts: 0
            }
        ));
    }

    #[test]
    fn exhausted_budget_reports_progress() {
        // 2R < d < 2√2·R: passes the diameter check but a disc can hold only one point.
        let mut rng = StdRng::seed_from_u64(11);
        let config = GenerationConfig::new(3, 19.9, 10.0, GenerationPolicy::Elliptical)
            .with_max_attempts(2_000);
        match generate_points(&config, &mut rng) {
            Err(Error::PackingInfeasible {
                requested,
                placed,
                attempts,
            }) => {
                assert_eq!(requested, 3);
                assert!(placed < 3);
                assert_eq!(attempts, 2_000);
            }
            other => panic!("expected PackingInfeasible, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_sampling() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GenerationConfig::new(0, 1.0, 10.0, GenerationPolicy::Irregular);
        assert!(matches!(
            generate_points(&config, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn events_trace_the_run() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = GenerationConfig::new(4, 0.5, 10.0, GenerationPolicy::Irregular);
        let mut sink = VecSink::new();
        let report =
            generate_points_with_events(&config, &mut rng, &mut sink).expect("generation succeeds");

        let events = sink.into_inner();
        assert!(matches!(events.first(), Some(GenerationEvent::Started { .. })));
        assert!(matches!(events.last(), Some(GenerationEvent::Finished { .. })));

        let accepted: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                GenerationEvent::PointAccepted { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(accepted, vec![0, 1, 2, 3]);
        assert_eq!(report.points.len(), 4);
    }

    #[test]
    fn determinism_for_same_seed() {
        let generator = PointGenerator::try_new(GenerationConfig::new(
            40,
            1.5,
            15.0,
            GenerationPolicy::spiral_degrees(3, 20.0),
        ))
        .expect("valid config");

        let a = generator
            .generate(&mut StdRng::seed_from_u64(99))
            .expect("generation succeeds");
        let b = generator
            .generate(&mut StdRng::seed_from_u64(99))
            .expect("generation succeeds");
        assert_eq!(a.points, b.points);
        assert_eq!(a.attempts, b.attempts);
    }
}
