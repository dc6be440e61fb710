use super::Error;

/// Relative tolerance, in units of `dt`, for treating the span as a whole
/// number of steps.
const SNAP_TOL: f64 = 1e-9;

/// An inclusive, uniformly stepped time grid.
///
/// Points are `start + k·dt` for every `k` that stays within `[start, end]`,
/// and the last point is always exactly `end`:
///
/// - When the span is a whole number of steps (within `1e-9·dt`), the last
///   regular point is snapped to `end`.
/// - Otherwise `end` is appended after the last regular point, so the final
///   interval is shorter than `dt`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
    dt: f64,
}

impl TimeGrid {
    /// Largest number of points a grid may hold.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Builds the grid covering `[start, end]` with step `dt`.
    ///
    /// Consecutive points must be distinguishable in `f64`; a `dt` below the
    /// spacing of floating-point values near `start` or `end` is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if `dt` is not finite
    /// and positive, if `end < start`, if the grid would exceed
    /// [`TimeGrid::MAX_POINTS`], or if rounding makes two consecutive points
    /// equal.
    pub fn new(start: f64, end: f64, dt: f64) -> Result<Self, Error> {
        for value in [start, end] {
            if !value.is_finite() {
                return Err(Error::NonFiniteTime { value });
            }
        }

        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::InvalidStep { dt });
        }

        if end < start {
            return Err(Error::ReversedSpan { start, end });
        }

        // `end - start` can overflow to infinity for finite bounds.
        let span = (end - start) / dt;
        let whole = (span + SNAP_TOL).floor();

        #[allow(clippy::cast_precision_loss)]
        let max_points = Self::MAX_POINTS as f64;

        // Regular points plus a possibly appended endpoint.
        if !span.is_finite() || whole + 2.0 > max_points {
            return Err(Error::TooManyPoints {
                start,
                end,
                dt,
                max: Self::MAX_POINTS,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = whole as usize;

        #[allow(clippy::cast_precision_loss)]
        let mut points: Vec<f64> = (0..=intervals).map(|k| start + k as f64 * dt).collect();

        if span - whole <= SNAP_TOL {
            if let Some(last) = points.last_mut() {
                *last = end;
            }
        } else {
            points.push(end);
        }

        if let Some(pair) = points.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(Error::UnresolvedStep {
                time: pair[0],
                dt,
            });
        }

        Ok(Self { points, dt })
    }

    /// Returns the grid points in increasing order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns the nominal step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of grid points (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a grid contains at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_multiple_includes_endpoint() {
        let grid = TimeGrid::new(0.0, 1.0, 0.5).expect("valid grid");
        assert_eq!(grid.points(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn accumulated_rounding_snaps_to_endpoint() {
        let grid = TimeGrid::new(0.0, 0.3, 0.1).expect("valid grid");

        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid.points()[1], 0.1);
        assert_relative_eq!(grid.points()[2], 0.2);
        assert_eq!(grid.points()[3], 0.3);
    }

    #[test]
    fn partial_final_step_appends_endpoint() {
        let grid = TimeGrid::new(0.0, 1.0, 0.3).expect("valid grid");

        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid.points()[3], 0.9, epsilon = 1e-12);
        assert_eq!(grid.points()[4], 1.0);
        assert!(grid.points().iter().all(|&t| t <= 1.0));
    }

    #[test]
    fn zero_span_is_single_point() {
        let grid = TimeGrid::new(2.5, 2.5, 0.1).expect("valid grid");
        assert_eq!(grid.points(), &[2.5]);
        assert!(!grid.is_empty());
    }

    #[test]
    fn step_larger_than_span() {
        let grid = TimeGrid::new(0.0, 1.0, 10.0).expect("valid grid");
        assert_eq!(grid.points(), &[0.0, 1.0]);
        assert_relative_eq!(grid.dt(), 10.0);
    }

    #[test]
    fn errors_on_bad_step() {
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = TimeGrid::new(0.0, 1.0, dt);
            assert!(matches!(result, Err(Error::InvalidStep { .. })));
        }
    }

    #[test]
    fn errors_on_non_finite_bounds() {
        let result = TimeGrid::new(f64::NEG_INFINITY, 1.0, 0.1);
        assert!(matches!(result, Err(Error::NonFiniteTime { .. })));

        let result = TimeGrid::new(0.0, f64::NAN, 0.1);
        assert!(matches!(result, Err(Error::NonFiniteTime { .. })));
    }

    #[test]
    fn errors_on_too_many_points() {
        let result = TimeGrid::new(0.0, 1.0, 1e-12);
        assert!(matches!(
            result,
            Err(Error::TooManyPoints { max, .. }) if max == TimeGrid::MAX_POINTS
        ));

        // The span overflows to infinity even though both bounds are finite.
        let result = TimeGrid::new(-1e308, 1e308, 1.0);
        assert!(matches!(result, Err(Error::TooManyPoints { .. })));
    }

    #[test]
    fn largest_allowed_grid_is_built() {
        #[allow(clippy::cast_precision_loss)]
        let end = (TimeGrid::MAX_POINTS - 2) as f64;

        let grid = TimeGrid::new(0.0, end, 1.0).expect("within limit");
        assert_eq!(grid.len(), TimeGrid::MAX_POINTS - 1);
    }

    #[test]
    fn errors_when_step_is_below_float_resolution() {
        // Adjacent f64 values near 1e16 are 2 apart, so a step of 1 repeats points.
        let result = TimeGrid::new(1e16, 1e16 + 4.0, 1.0);
        assert!(matches!(result, Err(Error::UnresolvedStep { .. })));

        let grid = TimeGrid::new(1e16, 1e16 + 4.0, 2.0).expect("resolvable step");
        assert_eq!(grid.len(), 3);
        assert!(grid.points().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn errors_on_reversed_span() {
        let result = TimeGrid::new(1.0, 0.0, 0.1);
        assert_eq!(
            result,
            Err(Error::ReversedSpan {
                start: 1.0,
                end: 0.0
            })
        );
    }
}
