//! Central bodies: the massive primaries that orbits are defined around.

use pathfinder_core::constants::GRAVITATIONAL_CONSTANT;
use thiserror::Error;

/// Errors raised while constructing a [`CentralBody`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    /// A physical parameter that must be non-negative was negative.
    #[error("invalid physical parameter: {name} = {value} must be non-negative")]
    InvalidPhysicalParameter { name: &'static str, value: f64 },
}

/// A massive central body around which other objects orbit.
///
/// The two-body approximation used throughout assumes the orbiting object is
/// light enough that its pull on the body can be ignored. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralBody {
    /// Mass in kg.
    pub mass_kg: f64,
    /// Mean radius in m.
    pub radius_m: f64,
    /// Lowest viable orbit radius from the body centre in m, accounting for
    /// terrain and atmosphere.
    pub min_orbit_radius_m: f64,
    /// Highest viable orbit radius in m, estimated as a third of the Hill
    /// sphere when the body itself orbits a parent. `None` for an isolated
    /// body.
    pub max_orbit_radius_m: Option<f64>,
    /// Standard gravitational parameter μ in m³/s².
    pub mu_m3_s2: f64,
}

impl CentralBody {
    /// Build a body from its physical parameters.
    ///
    /// μ is taken as given when supplied; many bodies have μ measured to more
    /// digits than either G or their mass. When absent it is derived as G·m.
    /// Fails with [`BodyError::InvalidPhysicalParameter`] on a negative mass,
    /// radius, or lowest-orbit altitude.
    pub fn new(
        mass_kg: f64,
        radius_m: f64,
        lowest_orbit_altitude_m: f64,
        mu_m3_s2: Option<f64>,
    ) -> Result<Self, BodyError> {
        if mass_kg < 0.0 {
            return Err(BodyError::InvalidPhysicalParameter {
                name: "mass_kg",
                value: mass_kg,
            });
        }
        if radius_m < 0.0 {
            return Err(BodyError::InvalidPhysicalParameter {
                name: "radius_m",
                value: radius_m,
            });
        }
        if lowest_orbit_altitude_m < 0.0 {
            return Err(BodyError::InvalidPhysicalParameter {
                name: "lowest_orbit_altitude_m",
                value: lowest_orbit_altitude_m,
            });
        }
        Ok(Self {
            mass_kg,
            radius_m,
            min_orbit_radius_m: radius_m + lowest_orbit_altitude_m,
            max_orbit_radius_m: None,
            mu_m3_s2: mu_m3_s2.unwrap_or(mass_kg * GRAVITATIONAL_CONSTANT),
        })
    }

    /// Like [`CentralBody::new`], for a body that itself orbits `parent` with
    /// semi-major axis `a_m` and eccentricity `e`. Bounds the viable orbit
    /// range from above by a third of the Hill sphere radius.
    pub fn orbiting(
        mass_kg: f64,
        radius_m: f64,
        lowest_orbit_altitude_m: f64,
        mu_m3_s2: Option<f64>,
        parent: &CentralBody,
        a_m: f64,
        e: f64,
    ) -> Result<Self, BodyError> {
        let mut body = Self::new(mass_kg, radius_m, lowest_orbit_altitude_m, mu_m3_s2)?;
        let hill = hill_sphere_radius(a_m, e, mass_kg, parent.mass_kg);
        body.max_orbit_radius_m = Some((hill / 3.0).round());
        Ok(body)
    }

    /// Convert a surface-relative altitude to a centre-relative radius.
    pub fn add_radius(&self, altitude_m: f64) -> f64 {
        altitude_m + self.radius_m
    }

    /// Sample candidate orbit radii between the viable bounds, divided into
    /// sections by `section_limits_m` (each section contributes
    /// `per_section` uniformly spaced radii).
    ///
    /// The lower bound is the body's minimum viable orbit radius; the upper
    /// bound is the Hill-sphere-derived maximum. Sections let callers sample
    /// low orbits densely and high orbits sparsely.
    pub fn sample_radii(&self, per_section: usize, section_limits_m: &[f64]) -> Vec<f64> {
        let Some(max_r) = self.max_orbit_radius_m else {
            return Vec::new();
        };
        if per_section == 0 {
            return Vec::new();
        }
        let mut limits = Vec::with_capacity(section_limits_m.len() + 2);
        limits.push(self.min_orbit_radius_m);
        limits.extend_from_slice(section_limits_m);
        limits.push(max_r);

        let mut radii = Vec::new();
        for pair in limits.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if hi <= lo {
                continue;
            }
            let step = (hi - lo) / per_section as f64;
            for i in 0..per_section {
                radii.push((lo + step * i as f64).round());
            }
        }
        radii
    }
}

/// Hill sphere radius of a body of mass `mass_kg` orbiting a parent of mass
/// `parent_mass_kg` with semi-major axis `a_m` and eccentricity `e`.
pub fn hill_sphere_radius(a_m: f64, e: f64, mass_kg: f64, parent_mass_kg: f64) -> f64 {
    a_m * (1.0 - e) * (mass_kg / (3.0 * parent_mass_kg)).cbrt()
}
