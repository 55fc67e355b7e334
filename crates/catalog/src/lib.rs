//! Celestial body catalogs.
//!
//! Bodies can come from configuration files (a YAML list, a TOML file, or a
//! directory of TOML files) or from the built-in set of well-known bodies.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use pathfinder_mechanics::bodies::{BodyError, CentralBody};

pub mod builtin;

/// Central body description parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub lowest_orbit_altitude_m: f64,
    /// Measured gravitational parameter; derived from the mass when absent.
    #[serde(default)]
    pub mu_m3_s2: Option<f64>,
}

impl BodyConfig {
    /// Validate the config into a [`CentralBody`].
    pub fn into_body(&self) -> Result<CentralBody, BodyError> {
        CentralBody::new(
            self.mass_kg,
            self.radius_m,
            self.lowest_orbit_altitude_m,
            self.mu_m3_s2,
        )
    }
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid body in catalog: {0}")]
    Body(#[from] BodyError),
}

/// Load body configurations from a YAML file, a TOML file, or a directory of
/// TOML files (one body per file, read in sorted order).
pub fn load_body_configs<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, CatalogError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_configs(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: BodyConfig = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load and validate a catalog into ready-to-use bodies, keeping the names.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<(String, CentralBody)>, CatalogError> {
    let configs = load_body_configs(path)?;
    let mut bodies = Vec::with_capacity(configs.len());
    for config in configs {
        let body = config.into_body()?;
        bodies.push((config.name, body));
    }
    Ok(bodies)
}

fn read_dir_configs(dir: &Path) -> Result<Vec<BodyConfig>, CatalogError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    let mut records = Vec::new();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{BodyConfig, load_bodies, load_body_configs};

    #[test]
    fn yaml_catalog_round_trips() {
        let yaml = r#"
- name: Earth
  mass_kg: 5.9736e24
  radius_m: 6371000.0
  lowest_orbit_altitude_m: 160000.0
  mu_m3_s2: 3.986004418e14
- name: Moon
  mass_kg: 7.34767309e22
  radius_m: 1737400.0
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let bodies = load_bodies(file.path()).unwrap();
        assert_eq!(bodies.len(), 2);
        let (name, earth) = &bodies[0];
        assert_eq!(name, "Earth");
        assert_eq!(earth.mu_m3_s2, 3.986004418e14);
        assert_eq!(earth.min_orbit_radius_m, 6_531_000.0);

        // Mu falls back to G*m when the catalog omits it.
        let (_, moon) = &bodies[1];
        assert!((moon.mu_m3_s2 - 4.9048695e12).abs() / 4.9048695e12 < 1e-3);
    }

    #[test]
    fn toml_directory_loads_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b_moon.toml"),
            "name = \"Moon\"\nmass_kg = 7.34767309e22\nradius_m = 1737400.0\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a_earth.toml"),
            "name = \"Earth\"\nmass_kg = 5.9736e24\nradius_m = 6371000.0\n",
        )
        .unwrap();

        let configs = load_body_configs(dir.path()).unwrap();
        assert_eq!(
            configs.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Earth", "Moon"]
        );
    }

    #[test]
    fn invalid_bodies_are_rejected_at_load() {
        let config = BodyConfig {
            name: "Broken".into(),
            mass_kg: -1.0,
            radius_m: 1.0,
            lowest_orbit_altitude_m: 0.0,
            mu_m3_s2: None,
        };
        assert!(config.into_body().is_err());
    }
}
