//! Keplerian two-body orbits around a central body.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::bodies::CentralBody;
use crate::graph::ManoeuvreId;

/// Errors raised while constructing an [`Orbit`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// Apoapsis below periapsis. The caller must order the apsides.
    #[error("invalid orbit geometry: apoapsis {apoapsis_m} m below periapsis {periapsis_m} m")]
    ApsidesReversed { apoapsis_m: f64, periapsis_m: f64 },
    /// Periapsis at or below the body centre.
    #[error("invalid orbit geometry: periapsis {periapsis_m} m must be positive")]
    NonPositivePeriapsis { periapsis_m: f64 },
    /// Inclination outside the plane-defining range.
    #[error("invalid orbit geometry: inclination {inclination_deg}° outside [0, 180]")]
    InclinationOutOfRange { inclination_deg: f64 },
    /// Eccentricity outside the closed-orbit range.
    #[error("invalid orbit geometry: eccentricity {eccentricity} outside [0, 1)")]
    EccentricityOutOfRange { eccentricity: f64 },
}

/// A closed two-body orbit, described by its apsides and inclination.
///
/// Orbits are transfer endpoints, not simulated trajectories: geometry is
/// fixed at construction. The only mutable state is the append-only list of
/// manoeuvres incident on this orbit, filled in by
/// [`TransferGraph::add_manoeuvre`](crate::graph::TransferGraph::add_manoeuvre).
#[derive(Debug, Clone)]
pub struct Orbit {
    central_body: Arc<CentralBody>,
    apoapsis_m: f64,
    periapsis_m: f64,
    inclination_deg: f64,
    manoeuvres: Vec<ManoeuvreId>,
}

impl Orbit {
    /// Build an orbit from its apsis radii (body-centre relative, metres) and
    /// inclination in degrees.
    ///
    /// Fails eagerly when `apo_m < per_m`, `per_m <= 0`, or the inclination
    /// leaves [0, 180].
    pub fn new(
        central_body: Arc<CentralBody>,
        apo_m: f64,
        per_m: f64,
        inclination_deg: f64,
    ) -> Result<Self, OrbitError> {
        if per_m <= 0.0 {
            return Err(OrbitError::NonPositivePeriapsis { periapsis_m: per_m });
        }
        if apo_m < per_m {
            return Err(OrbitError::ApsidesReversed {
                apoapsis_m: apo_m,
                periapsis_m: per_m,
            });
        }
        if !(0.0..=180.0).contains(&inclination_deg) {
            return Err(OrbitError::InclinationOutOfRange { inclination_deg });
        }
        Ok(Self {
            central_body,
            apoapsis_m: apo_m,
            periapsis_m: per_m,
            inclination_deg,
            manoeuvres: Vec::new(),
        })
    }

    /// Build an orbit from semi-major axis and eccentricity instead of
    /// apsides.
    pub fn from_elements(
        central_body: Arc<CentralBody>,
        a_m: f64,
        e: f64,
        inclination_deg: f64,
    ) -> Result<Self, OrbitError> {
        if !(0.0..1.0).contains(&e) {
            return Err(OrbitError::EccentricityOutOfRange { eccentricity: e });
        }
        Self::new(
            central_body,
            a_m * (1.0 + e),
            a_m * (1.0 - e),
            inclination_deg,
        )
    }

    /// Build a circular orbit of the given radius.
    pub fn circular(
        central_body: Arc<CentralBody>,
        radius_m: f64,
        inclination_deg: f64,
    ) -> Result<Self, OrbitError> {
        Self::new(central_body, radius_m, radius_m, inclination_deg)
    }

    /// The body this orbit is around.
    pub fn central_body(&self) -> &Arc<CentralBody> {
        &self.central_body
    }

    /// Apoapsis radius in m.
    pub fn apoapsis_m(&self) -> f64 {
        self.apoapsis_m
    }

    /// Periapsis radius in m.
    pub fn periapsis_m(&self) -> f64 {
        self.periapsis_m
    }

    /// Inclination in degrees, within [0, 180].
    pub fn inclination_deg(&self) -> f64 {
        self.inclination_deg
    }

    /// Both apsis radii, periapsis first.
    pub fn apsides(&self) -> [f64; 2] {
        [self.periapsis_m, self.apoapsis_m]
    }

    /// Semi-major axis in m.
    pub fn semi_major_axis_m(&self) -> f64 {
        (self.apoapsis_m + self.periapsis_m) / 2.0
    }

    /// Eccentricity; 0 for a circular orbit.
    pub fn eccentricity(&self) -> f64 {
        1.0 - 2.0 / (self.apoapsis_m / self.periapsis_m + 1.0)
    }

    /// Orbital speed at radius `r_m`, by the vis-viva relation
    /// `v = sqrt(μ (2/r − 1/a))`.
    pub fn velocity_at(&self, r_m: f64) -> f64 {
        (self.central_body.mu_m3_s2 * (2.0 / r_m - 1.0 / self.semi_major_axis_m())).sqrt()
    }

    /// Speed at apoapsis, the slowest point of the orbit.
    pub fn velocity_at_apoapsis(&self) -> f64 {
        self.velocity_at(self.apoapsis_m)
    }

    /// Speed at periapsis, the fastest point of the orbit.
    pub fn velocity_at_periapsis(&self) -> f64 {
        self.velocity_at(self.periapsis_m)
    }

    /// Orbital period in seconds: `2π sqrt(a³/μ)`.
    pub fn period_s(&self) -> f64 {
        let a = self.semi_major_axis_m();
        2.0 * std::f64::consts::PI * (a.powi(3) / self.central_body.mu_m3_s2).sqrt()
    }

    /// Ids of every manoeuvre incident on this orbit, in creation order.
    pub fn manoeuvres(&self) -> &[ManoeuvreId] {
        &self.manoeuvres
    }

    /// Record an incident manoeuvre. Only the transfer graph's manoeuvre
    /// constructor calls this; the list is append-only.
    pub(crate) fn register_manoeuvre(&mut self, id: ManoeuvreId) {
        self.manoeuvres.push(id);
    }
}

/// Orbits compare equal on geometry (apsides and inclination), matching the
/// transfer-planning view where two identically shaped orbits are the same
/// node regardless of how they were constructed.
impl PartialEq for Orbit {
    fn eq(&self, other: &Self) -> bool {
        self.apoapsis_m == other.apoapsis_m
            && self.periapsis_m == other.periapsis_m
            && self.inclination_deg == other.inclination_deg
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orbit(apo={} m, per={} m, i={}°)",
            self.apoapsis_m, self.periapsis_m, self.inclination_deg
        )
    }
}
