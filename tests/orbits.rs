use std::sync::Arc;

use orbit_transfer_pathfinder::{CentralBody, Orbit, OrbitError};

const MU_EARTH: f64 = 3.986004418e14; // m^3 / s^2

fn earth() -> Arc<CentralBody> {
    Arc::new(CentralBody::new(5.9736e24, 6_371_000.0, 160_000.0, Some(MU_EARTH)).unwrap())
}

#[test]
fn apsis_velocities_satisfy_vis_viva() {
    let earth = earth();
    // A GTO-like ellipse and a near-circular LEO.
    let cases = [
        Orbit::new(Arc::clone(&earth), 42_164_000.0, 6_571_000.0, 28.5).unwrap(),
        Orbit::new(Arc::clone(&earth), 6_793_000.0, 6_789_000.0, 52.0).unwrap(),
    ];
    for orbit in &cases {
        let a = orbit.semi_major_axis_m();
        for (v, r) in [
            (orbit.velocity_at_apoapsis(), orbit.apoapsis_m()),
            (orbit.velocity_at_periapsis(), orbit.periapsis_m()),
        ] {
            let expected = (MU_EARTH * (2.0 / r - 1.0 / a)).sqrt();
            assert!(
                (v - expected).abs() / expected < 1e-9,
                "v = {v}, vis-viva = {expected}"
            );
        }
    }
}

#[test]
fn periapsis_is_always_the_faster_apsis() {
    let orbit = Orbit::new(earth(), 42_164_000.0, 6_571_000.0, 0.0).unwrap();
    assert!(orbit.velocity_at_periapsis() > orbit.velocity_at_apoapsis());
}

#[test]
fn circular_orbit_speed_matches_sqrt_mu_over_r() {
    let r = 6_771_000.0;
    let orbit = Orbit::circular(earth(), r, 0.0).unwrap();
    let expected = (MU_EARTH / r).sqrt();
    assert!(
        (orbit.velocity_at(r) - expected).abs() < 1e-9,
        "v = {}, circular = {expected}",
        orbit.velocity_at(r)
    );
}

#[test]
fn geo_period_is_a_sidereal_day() {
    let geo = Orbit::circular(earth(), 42_164_000.0, 0.0).unwrap();
    let sidereal_day = 86_164.1;
    assert!(
        (geo.period_s() - sidereal_day).abs() < 60.0,
        "period = {} s",
        geo.period_s()
    );
}

#[test]
fn construction_rejects_bad_geometry() {
    let earth = earth();
    assert!(matches!(
        Orbit::new(Arc::clone(&earth), 10_000.0, 20_000.0, 0.0),
        Err(OrbitError::ApsidesReversed { .. })
    ));
    assert!(matches!(
        Orbit::new(Arc::clone(&earth), 20_000.0, -1.0, 0.0),
        Err(OrbitError::NonPositivePeriapsis { .. })
    ));
    assert!(matches!(
        Orbit::new(Arc::clone(&earth), 20_000.0, 10_000.0, 180.5),
        Err(OrbitError::InclinationOutOfRange { .. })
    ));
}

#[test]
fn central_body_rejects_negative_parameters() {
    use orbit_transfer_pathfinder::BodyError;

    let err = CentralBody::new(5.9736e24, -6_371_000.0, 0.0, None).unwrap_err();
    assert_eq!(
        err,
        BodyError::InvalidPhysicalParameter {
            name: "radius_m",
            value: -6_371_000.0
        }
    );
}

#[test]
fn elements_and_apsides_constructions_agree() {
    let earth = earth();
    let from_apsides = Orbit::new(Arc::clone(&earth), 24_000_000.0, 8_000_000.0, 10.0).unwrap();
    let from_elements =
        Orbit::from_elements(Arc::clone(&earth), 16_000_000.0, 0.5, 10.0).unwrap();
    assert_eq!(from_apsides, from_elements);
    assert!((from_apsides.eccentricity() - 0.5).abs() < 1e-12);
}
