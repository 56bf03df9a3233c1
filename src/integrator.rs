//! Exact kinematic state integration for constant-jerk segments.
//!
//! A trajectory planner calls [`integrate`] once per axis per query time,
//! potentially millions of times while searching for candidate profiles, so
//! the evaluation is a pure closed form: no iteration, no allocation, no
//! internal state.

/// Position, velocity and acceleration of a single axis at one instant.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub pos: f64,
    pub vel: f64,
    pub acc: f64,
}

impl KinematicState {
    /// Creates a new KinematicState.
    pub fn new(pos: f64, vel: f64, acc: f64) -> Self {
        Self { pos, vel, acc }
    }
}

/// A time interval over which jerk is held constant. The unit of
/// integration: a planner describes a profile as a chain of these.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JerkSegment {
    /// Constant jerk applied over the segment.
    pub jerk: f64,
    /// Nominal segment duration in seconds.
    pub duration: f64,
}

impl JerkSegment {
    /// Creates a new JerkSegment.
    pub fn new(jerk: f64, duration: f64) -> Self {
        Self { jerk, duration }
    }

    /// State reached `t` seconds after entering this segment at `from`.
    ///
    /// `t` is not clamped to the segment duration; negative values evaluate
    /// before the nominal start, which bracketing searches rely on.
    pub fn state_at(&self, from: KinematicState, t: f64) -> KinematicState {
        let (pos, vel, acc) = integrate(t, from.pos, from.vel, from.acc, self.jerk);
        KinematicState { pos, vel, acc }
    }

    /// State at the end of the segment, i.e. the entry state of the next one.
    pub fn end_state(&self, from: KinematicState) -> KinematicState {
        self.state_at(from, self.duration)
    }
}

/// Integrates with constant jerk `j` for duration `t` from the initial
/// position `p0`, velocity `v0` and acceleration `a0`. Returns the new
/// position, velocity and acceleration.
///
/// ```text
/// a(t) = a0 + j*t
/// v(t) = v0 + a0*t + j*t^2/2
/// p(t) = p0 + v0*t + a0*t^2/2 + j*t^3/6
/// ```
///
/// Position and velocity are evaluated in Horner form rather than through
/// separate powers of `t`; this keeps rounding error bounded for large `|t|`
/// or large jerk and must not be reordered. Inputs are not validated:
/// non-finite values propagate by IEEE 754 rules.
#[inline]
pub fn integrate(t: f64, p0: f64, v0: f64, a0: f64, j: f64) -> (f64, f64, f64) {
    (
        p0 + t * (v0 + t * (a0 / 2.0 + t * j / 6.0)),
        v0 + t * (a0 + t * j / 2.0),
        a0 + t * j,
    )
}
