//! Coordinate system rewriting.
//!
//! Provider locations arrive on a 100x100 grid with the origin at the
//! bottom-left corner of the pitch and the y axis pointing up. The
//! transformer rewrites every location on an event or frame into one of
//! the closed set of target systems.

use touchline_model::{
    CoordinateSystem, Event, EventKind, Frame, PitchDimensions, Point, Point3,
};

use crate::error::TransformError;

/// Crossbar height in meters. Goal-mouth placements express height on the
/// same 0-100 scale as the grid; metric output maps that range onto the
/// bar.
const CROSSBAR_HEIGHT_M: f64 = 2.44;

#[derive(Debug, Clone, Copy)]
enum Target {
    Provider,
    Unit,
    Metric(PitchDimensions),
}

/// Rewrites provider-grid locations into a target coordinate system.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTransformer {
    target: Target,
}

impl CoordinateTransformer {
    /// Builds a transformer for the target system. Metric output needs
    /// the metadata pitch dimensions to scale against.
    pub fn new(
        target: CoordinateSystem,
        pitch: Option<PitchDimensions>,
    ) -> Result<Self, TransformError> {
        let target = match target {
            CoordinateSystem::Provider => Target::Provider,
            CoordinateSystem::Unit => Target::Unit,
            CoordinateSystem::Metric => {
                Target::Metric(pitch.ok_or(TransformError::MissingPitchDimensions)?)
            }
        };
        Ok(Self { target })
    }

    pub fn system(&self) -> CoordinateSystem {
        match self.target {
            Target::Provider => CoordinateSystem::Provider,
            Target::Unit => CoordinateSystem::Unit,
            Target::Metric(_) => CoordinateSystem::Metric,
        }
    }

    pub fn point(&self, point: Point) -> Point {
        match self.target {
            Target::Provider => point,
            Target::Unit => Point::new(point.x / 100.0, 1.0 - point.y / 100.0),
            Target::Metric(pitch) => Point::new(
                (point.x / 100.0 - 0.5) * pitch.length,
                (point.y / 100.0 - 0.5) * pitch.width,
            ),
        }
    }

    /// Height only changes scale for metric output; the other targets
    /// keep the grid value.
    pub fn point3(&self, point: Point3) -> Point3 {
        let Point { x, y } = self.point(point.xy());
        let z = match self.target {
            Target::Metric(_) => point.z / 100.0 * CROSSBAR_HEIGHT_M,
            _ => point.z,
        };
        Point3::new(x, y, z)
    }

    /// Rewrites the event's base location and any end locations its kind
    /// carries.
    pub fn event(&self, mut event: Event) -> Event {
        event.coordinates = event.coordinates.map(|point| self.point(point));
        match &mut event.kind {
            EventKind::Pass {
                receiver_coordinates,
                ..
            } => {
                *receiver_coordinates = receiver_coordinates.map(|point| self.point(point));
            }
            EventKind::Shot {
                end_coordinates, ..
            } => {
                *end_coordinates = end_coordinates.map(|point| self.point3(point));
            }
            _ => {}
        }
        event
    }

    /// Rewrites a tracking frame's ball and player locations.
    pub fn frame(&self, mut frame: Frame) -> Frame {
        frame.ball_coordinates = frame.ball_coordinates.map(|point| self.point3(point));
        for player in frame.players.values_mut() {
            player.coordinates = self.point(player.coordinates);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metric() -> CoordinateTransformer {
        CoordinateTransformer::new(
            CoordinateSystem::Metric,
            Some(PitchDimensions::new(105.0, 68.0)),
        )
        .unwrap()
    }

    #[test]
    fn provider_is_the_identity() {
        let transformer =
            CoordinateTransformer::new(CoordinateSystem::Provider, None).unwrap();
        assert_eq!(
            transformer.point(Point::new(81.5, 12.0)),
            Point::new(81.5, 12.0)
        );
        assert_eq!(transformer.system(), CoordinateSystem::Provider);
    }

    #[test]
    fn unit_flips_the_y_axis() {
        let transformer = CoordinateTransformer::new(CoordinateSystem::Unit, None).unwrap();
        assert_eq!(
            transformer.point(Point::new(50.0, 50.0)),
            Point::new(0.5, 0.5)
        );
        // Bottom-left of the grid is the top-left origin's far corner.
        assert_eq!(transformer.point(Point::new(0.0, 0.0)), Point::new(0.0, 1.0));
        assert_eq!(
            transformer.point(Point::new(100.0, 100.0)),
            Point::new(1.0, 0.0)
        );
    }

    #[test]
    fn metric_centers_on_the_pitch() {
        let transformer = metric();
        assert_eq!(
            transformer.point(Point::new(50.0, 50.0)),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            transformer.point(Point::new(100.0, 100.0)),
            Point::new(52.5, 34.0)
        );
        assert_eq!(
            transformer.point(Point::new(0.0, 0.0)),
            Point::new(-52.5, -34.0)
        );
    }

    #[test]
    fn metric_requires_pitch_dimensions() {
        let err = CoordinateTransformer::new(CoordinateSystem::Metric, None).unwrap_err();
        assert!(matches!(err, TransformError::MissingPitchDimensions));
    }

    #[test]
    fn height_scales_to_the_crossbar_only_in_metric() {
        let over_the_line = Point3::new(100.0, 50.0, 100.0);
        let metric_point = metric().point3(over_the_line);
        assert!((metric_point.z - CROSSBAR_HEIGHT_M).abs() < 1e-9);

        let unit = CoordinateTransformer::new(CoordinateSystem::Unit, None).unwrap();
        assert_eq!(unit.point3(over_the_line).z, 100.0);
    }

    proptest! {
        #[test]
        fn unit_output_stays_inside_the_unit_square(
            x in 0.0f64..=100.0,
            y in 0.0f64..=100.0,
        ) {
            let transformer =
                CoordinateTransformer::new(CoordinateSystem::Unit, None).unwrap();
            let point = transformer.point(Point::new(x, y));
            prop_assert!((0.0..=1.0).contains(&point.x));
            prop_assert!((0.0..=1.0).contains(&point.y));
        }
    }
}
