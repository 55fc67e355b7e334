//! Core constants, units, and shared math helpers for the orbit transfer
//! pathfinder workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian constant of gravitation (m³ kg⁻¹ s⁻²), per JPL SSD.
    pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
    /// Standard gravitational parameter of Earth (m³/s²).
    pub const MU_EARTH: f64 = 3.986_004_418e14;
    /// Standard gravitational parameter of the Sun (m³/s²).
    pub const MU_SUN: f64 = 1.327_124_400_18e20;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }
}

/// Scalar helpers shared by the velocity-change formulas.
pub mod maths {
    /// Arithmetic mean of a slice of samples. Returns 0 for an empty slice.
    #[inline]
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Law-of-cosines combination of two speeds separated by an angle.
    ///
    /// Returns the magnitude of the velocity-change vector that turns a
    /// velocity of magnitude `v1` into one of magnitude `v2` rotated by
    /// `angle_deg` degrees, i.e. `sqrt(v1² + v2² − 2·v1·v2·cos Δ)`.
    #[inline]
    pub fn velocity_change(v1: f64, v2: f64, angle_deg: f64) -> f64 {
        (v1 * v1 + v2 * v2 - 2.0 * v1 * v2 * angle_deg.to_radians().cos()).sqrt()
    }

    /// Chord of the isoceles velocity triangle for a pure plane change:
    /// `2·v·sin(Δ/2)`.
    #[inline]
    pub fn plane_change(v: f64, angle_deg: f64) -> f64 {
        2.0 * v * (angle_deg.to_radians() / 2.0).sin()
    }
}
