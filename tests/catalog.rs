use std::io::Write;
use std::sync::Arc;

use orbit_transfer_pathfinder::Orbit;
use orbit_transfer_pathfinder::catalog::{builtin, load_bodies, load_body_configs};

#[test]
fn builtin_earth_matches_the_published_parameters() {
    let earth = builtin::earth();
    assert_eq!(earth.mu_m3_s2, 3.986004418e14);
    assert_eq!(earth.radius_m, 6_371_000.0);
    assert_eq!(earth.min_orbit_radius_m, 6_531_000.0);
}

#[test]
fn a_loaded_body_plans_like_a_builtin_one() {
    let yaml = r#"
- name: Earth
  mass_kg: 5.9736e24
  radius_m: 6371000.0
  lowest_orbit_altitude_m: 160000.0
  mu_m3_s2: 3.986004418e14
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let bodies = load_bodies(file.path()).unwrap();
    let (_, loaded) = bodies.into_iter().next().unwrap();

    let r = 7_000_000.0;
    let from_catalog = Orbit::circular(Arc::new(loaded), r, 0.0).unwrap();
    let from_builtin = Orbit::circular(Arc::new(builtin::earth()), r, 0.0).unwrap();
    assert!(
        (from_catalog.velocity_at(r) - from_builtin.velocity_at(r)).abs() < 1e-9,
        "identical mu must give identical speeds"
    );
}

#[test]
fn toml_and_yaml_agree_on_the_same_body() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("kerbin.toml");
    std::fs::write(
        &toml_path,
        "name = \"Kerbin\"\nmass_kg = 5.2915158e22\nradius_m = 600000.0\nlowest_orbit_altitude_m = 70000.0\nmu_m3_s2 = 3.5316e12\n",
    )
    .unwrap();

    let configs = load_body_configs(&toml_path).unwrap();
    assert_eq!(configs.len(), 1);
    let kerbin = configs[0].into_body().unwrap();
    assert_eq!(kerbin.mu_m3_s2, builtin::kerbin().mu_m3_s2);
    assert_eq!(kerbin.min_orbit_radius_m, builtin::kerbin().min_orbit_radius_m);
}

#[test]
fn catalog_validation_surfaces_body_errors() {
    let yaml = r#"
- name: Broken
  mass_kg: 1.0e24
  radius_m: -1.0
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let err = load_bodies(file.path()).unwrap_err();
    assert!(
        err.to_string().contains("radius_m"),
        "error should carry the offending field, got: {err}"
    );
}
