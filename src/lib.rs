//! Orbit transfer pathfinding: two-body orbital mechanics, an impulsive
//! manoeuvre taxonomy, and shortest-path search over the resulting transfer
//! graph.
//!
//! The heavy lifting lives in the member crates; this facade re-exports them
//! so downstream consumers (mission-design tools, front-ends) depend on a
//! single crate.

pub mod export;

pub use pathfinder_catalog as catalog;
pub use pathfinder_core::{constants, maths, units};
pub use pathfinder_mechanics as mechanics;
pub use pathfinder_search as search;

pub use pathfinder_mechanics::{
    BodyError, CentralBody, CombinedInclinationAndProRetroGrade, GraphError, InclinationChange,
    Manoeuvre, ManoeuvreError, ManoeuvreId, ManoeuvreType, Orbit, OrbitError, OrbitId,
    ProRetroGrade, TransferGraph, TransferPlan, shared_apsis,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
