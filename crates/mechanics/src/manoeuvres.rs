//! Impulsive manoeuvre taxonomy: feasibility predicates and delta-v formulas.
//!
//! Each manoeuvre type is a zero-sized strategy implementing
//! [`ManoeuvreType`]. Feasibility (`evaluate`) is advisory and free of side
//! effects; committing a manoeuvre happens through the transfer graph, which
//! stores an immutable [`Manoeuvre`] record and registers it on both
//! endpoint orbits. Computing a delta-v for a pair that fails `evaluate`
//! succeeds but yields a number without physical meaning.

use std::fmt;

use thiserror::Error;

use crate::graph::OrbitId;
use crate::orbits::Orbit;
use pathfinder_core::maths;

/// Shared-radius tolerance for apsis comparisons (metres).
pub const RADIUS_TOLERANCE_M: f64 = 1e-3;
/// Tolerance for treating two inclinations as the same plane (degrees).
pub const INCLINATION_TOLERANCE_DEG: f64 = 1e-6;

fn same_radius(a_m: f64, b_m: f64) -> bool {
    (a_m - b_m).abs() <= RADIUS_TOLERANCE_M
}

fn same_inclination(orbit1: &Orbit, orbit2: &Orbit) -> bool {
    (orbit1.inclination_deg() - orbit2.inclination_deg()).abs() <= INCLINATION_TOLERANCE_DEG
}

/// First apsis radius the two orbits have in common, if any: the point in
/// space where a single burn can move between them.
pub fn shared_apsis(orbit1: &Orbit, orbit2: &Orbit) -> Option<f64> {
    for r1 in orbit1.apsides() {
        for r2 in orbit2.apsides() {
            if same_radius(r1, r2) {
                return Some(r1);
            }
        }
    }
    None
}

/// A family of impulsive burns: a feasibility predicate over two orbits and
/// the delta-v formula to move between them at an intersection radius.
///
/// Implementations are expected to be zero-sized; consumers can add new
/// manoeuvre families without touching the existing ones.
pub trait ManoeuvreType {
    /// Human-readable family name, recorded on committed manoeuvres.
    fn name(&self) -> &'static str;

    /// Whether a burn of this family can move between the two orbits. Pure
    /// and symmetric in its arguments; no construction, no side effects.
    fn evaluate(&self, orbit1: &Orbit, orbit2: &Orbit) -> bool;

    /// Delta-v cost in m/s of the burn applied at radius `insect_r_m`, the
    /// radius at which the two orbits intersect (or, for a pure plane
    /// change, the conserved radius of the burn point).
    fn delta_v(&self, orbit1: &Orbit, orbit2: &Orbit, insect_r_m: f64) -> f64;
}

/// A prograde or retrograde burn at a shared apsis: changes speed along the
/// flight direction, leaving the orbital plane untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProRetroGrade;

impl ManoeuvreType for ProRetroGrade {
    fn name(&self) -> &'static str {
        "pro/retrograde"
    }

    /// Requires a shared apsis radius and a shared orbital plane: the burn
    /// point must exist on both orbits with the velocity vectors aligned.
    fn evaluate(&self, orbit1: &Orbit, orbit2: &Orbit) -> bool {
        same_inclination(orbit1, orbit2) && shared_apsis(orbit1, orbit2).is_some()
    }

    fn delta_v(&self, orbit1: &Orbit, orbit2: &Orbit, insect_r_m: f64) -> f64 {
        (orbit1.velocity_at(insect_r_m) - orbit2.velocity_at(insect_r_m)).abs()
    }
}

/// A pure plane change: rotates the velocity vector without changing its
/// magnitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclinationChange;

impl ManoeuvreType for InclinationChange {
    fn name(&self) -> &'static str {
        "inclination change"
    }

    /// Requires identical orbit geometry (so the speed at the burn radius is
    /// shared) and a difference in inclination.
    fn evaluate(&self, orbit1: &Orbit, orbit2: &Orbit) -> bool {
        same_radius(orbit1.apoapsis_m(), orbit2.apoapsis_m())
            && same_radius(orbit1.periapsis_m(), orbit2.periapsis_m())
            && !same_inclination(orbit1, orbit2)
    }

    /// `2·v·sin(Δi/2)`: the chord of two equal-length velocity vectors
    /// separated by the inclination difference.
    fn delta_v(&self, orbit1: &Orbit, orbit2: &Orbit, insect_r_m: f64) -> f64 {
        let di = (orbit1.inclination_deg() - orbit2.inclination_deg()).abs();
        maths::plane_change(orbit1.velocity_at(insect_r_m), di)
    }
}

/// A plane change combined with a prograde/retrograde burn in a single
/// impulse. By the triangle inequality this never costs more than doing the
/// two burns separately, which is why it is modelled as its own family.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedInclinationAndProRetroGrade;

impl ManoeuvreType for CombinedInclinationAndProRetroGrade {
    fn name(&self) -> &'static str {
        "combined plane change + pro/retrograde"
    }

    /// Requires a shared apsis radius (like the pure prograde burn) and a
    /// difference in inclination (unlike it).
    fn evaluate(&self, orbit1: &Orbit, orbit2: &Orbit) -> bool {
        !same_inclination(orbit1, orbit2) && shared_apsis(orbit1, orbit2).is_some()
    }

    /// Law of cosines over the two velocity vectors at the burn radius.
    fn delta_v(&self, orbit1: &Orbit, orbit2: &Orbit, insect_r_m: f64) -> f64 {
        let di = (orbit1.inclination_deg() - orbit2.inclination_deg()).abs();
        maths::velocity_change(
            orbit1.velocity_at(insect_r_m),
            orbit2.velocity_at(insect_r_m),
            di,
        )
    }
}

/// Errors raised by manoeuvre queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ManoeuvreError {
    /// [`Manoeuvre::get_other`] was handed an orbit that is not an endpoint.
    #[error("orbit {orbit:?} is not an endpoint of this manoeuvre")]
    UnrelatedOrbit { orbit: OrbitId },
}

/// A committed, bidirectional one-burn transfer between two orbits.
///
/// Immutable once stored: the delta-v is the fixed cost of this specific
/// transfer, and a different transfer needs a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct Manoeuvre {
    orbit1: OrbitId,
    orbit2: OrbitId,
    kind: &'static str,
    delta_v_m_s: f64,
}

impl Manoeuvre {
    pub(crate) fn new(orbit1: OrbitId, orbit2: OrbitId, kind: &'static str, delta_v_m_s: f64) -> Self {
        Self {
            orbit1,
            orbit2,
            kind,
            delta_v_m_s,
        }
    }

    /// First endpoint, as passed at construction.
    pub fn orbit1(&self) -> OrbitId {
        self.orbit1
    }

    /// Second endpoint, as passed at construction.
    pub fn orbit2(&self) -> OrbitId {
        self.orbit2
    }

    /// Name of the manoeuvre family that produced this record.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Propulsive cost of the burn in m/s.
    pub fn delta_v_m_s(&self) -> f64 {
        self.delta_v_m_s
    }

    /// The endpoint on the other side of the burn from `origin`.
    ///
    /// Symmetric and involutive; fails with
    /// [`ManoeuvreError::UnrelatedOrbit`] when `origin` is neither endpoint.
    pub fn get_other(&self, origin: OrbitId) -> Result<OrbitId, ManoeuvreError> {
        if origin == self.orbit1 {
            Ok(self.orbit2)
        } else if origin == self.orbit2 {
            Ok(self.orbit1)
        } else {
            Err(ManoeuvreError::UnrelatedOrbit { orbit: origin })
        }
    }
}

impl fmt::Display for Manoeuvre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} manoeuvre: {} m/s between {:?} and {:?}",
            self.kind, self.delta_v_m_s, self.orbit1, self.orbit2
        )
    }
}
