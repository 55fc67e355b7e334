//! Built-in celestial bodies with published parameters: the real-world
//! Sun/Earth/Moon system and the Kerbal Space Program system used widely in
//! transfer-planning examples. Measured μ values are supplied directly since
//! they are known to more digits than G·m.

use pathfinder_mechanics::bodies::{CentralBody, hill_sphere_radius};

const SUN_MASS_KG: f64 = 1.989e30;
const KERBOL_MASS_KG: f64 = 1.7565459e28;
const KERBIN_MASS_KG: f64 = 5.2915158e22;

fn body(mass_kg: f64, radius_m: f64, lowest_orbit_altitude_m: f64, mu_m3_s2: f64) -> CentralBody {
    CentralBody {
        mass_kg,
        radius_m,
        min_orbit_radius_m: radius_m + lowest_orbit_altitude_m,
        max_orbit_radius_m: None,
        mu_m3_s2,
    }
}

fn bounded(mut body: CentralBody, parent_mass_kg: f64, a_m: f64, e: f64) -> CentralBody {
    let hill = hill_sphere_radius(a_m, e, body.mass_kg, parent_mass_kg);
    body.max_orbit_radius_m = Some((hill / 3.0).round());
    body
}

/// The Sun.
pub fn sun() -> CentralBody {
    body(SUN_MASS_KG, 696_349_999.0, 0.0, 1.32712440018e20)
}

/// Earth, on its heliocentric orbit (a = 1 AU, e = 0.0167086).
pub fn earth() -> CentralBody {
    bounded(
        body(5.9736e24, 6_371_000.0, 160_000.0, 3.986004418e14),
        SUN_MASS_KG,
        149_598_023_000.0,
        0.0167086,
    )
}

/// The Moon, on its geocentric orbit (apogee 405400 km, perigee 363228.9 km).
pub fn moon() -> CentralBody {
    let apo = 405_400_000.0;
    let per = 363_228_900.0;
    bounded(
        body(7.34767309e22, 1_737_400.0, 0.0, 4.9048695e12),
        5.9736e24,
        (apo + per) / 2.0,
        (apo - per) / (apo + per),
    )
}

/// Kerbol, the KSP home star.
pub fn kerbol() -> CentralBody {
    body(KERBOL_MASS_KG, 261_600_000.0, 0.0, 1.1723328e18)
}

/// Kerbin, on its circular orbit around Kerbol.
pub fn kerbin() -> CentralBody {
    bounded(
        body(KERBIN_MASS_KG, 600_000.0, 70_000.0, 3.5316e12),
        KERBOL_MASS_KG,
        13_599_840_256.0,
        0.0,
    )
}

/// The Mun, on its circular orbit around Kerbin.
pub fn mun() -> CentralBody {
    bounded(
        body(9.7599066e20, 200_000.0, 0.0, 6.5138398e10),
        KERBIN_MASS_KG,
        12_000_000.0,
        0.0,
    )
}

/// Minmus, on its circular orbit around Kerbin.
pub fn minmus() -> CentralBody {
    bounded(
        body(2.645758e19, 60_000.0, 0.0, 1.7658e9),
        KERBIN_MASS_KG,
        47_000_000.0,
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_uses_the_jpl_gravitational_parameter() {
        assert_eq!(earth().mu_m3_s2, 3.986004418e14);
        assert_eq!(earth().min_orbit_radius_m, 6_531_000.0);
    }

    #[test]
    fn orbiting_bodies_carry_a_hill_sphere_bound() {
        for body in [earth(), moon(), kerbin(), mun(), minmus()] {
            let max = body.max_orbit_radius_m.expect("bounded body");
            assert!(max > body.min_orbit_radius_m);
        }
        assert!(sun().max_orbit_radius_m.is_none());
        assert!(kerbol().max_orbit_radius_m.is_none());
    }

    #[test]
    fn earth_hill_bound_is_about_half_a_gigametre() {
        let max = earth().max_orbit_radius_m.unwrap();
        assert!((4.0e8..7.0e8).contains(&max), "max = {max}");
    }
}
