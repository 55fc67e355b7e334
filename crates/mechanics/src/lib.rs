//! Two-body orbital mechanics core: central bodies, Keplerian orbits, and the
//! impulsive manoeuvre taxonomy, plus the transfer graph that ties them into
//! a searchable network.
//!
//! All quantities are SI (metres, kilograms, seconds) with inclinations in
//! degrees. Manoeuvres are impulsive: an instantaneous velocity change at a
//! radius where both orbits pass.

pub mod bodies;
pub mod graph;
pub mod manoeuvres;
pub mod orbits;

pub use bodies::{BodyError, CentralBody};
pub use graph::{GraphError, ManoeuvreId, OrbitId, TransferGraph, TransferPlan};
pub use manoeuvres::{
    CombinedInclinationAndProRetroGrade, InclinationChange, Manoeuvre, ManoeuvreError,
    ManoeuvreType, ProRetroGrade, shared_apsis,
};
pub use orbits::{Orbit, OrbitError};
