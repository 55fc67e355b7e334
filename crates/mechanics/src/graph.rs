//! Arena-backed transfer graph: orbits as nodes, manoeuvres as edges.
//!
//! Orbits and manoeuvres reference each other many-to-many. To avoid
//! ownership cycles both live in arenas owned by [`TransferGraph`] and refer
//! to each other through copyable ids. All mutation goes through `&mut self`,
//! which is the exclusive-write discipline the core assumes; the graph does
//! no locking of its own.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use thiserror::Error;

use crate::bodies::CentralBody;
use crate::manoeuvres::{Manoeuvre, ManoeuvreType};
use crate::orbits::Orbit;
use pathfinder_search::{CostGraph, EdgeRef, shortest_path};

/// Routing bias added per traversed manoeuvre during path search (m/s).
/// Prefers plans with fewer burns among equally priced routes; never part of
/// the reported total.
pub const ROUTING_EDGE_BIAS_M_S: f64 = 5.0;

/// Handle to an orbit stored in a [`TransferGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbitId(pub(crate) usize);

impl OrbitId {
    /// Arena index of this orbit.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to a manoeuvre stored in a [`TransferGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManoeuvreId(pub(crate) usize);

impl ManoeuvreId {
    /// Arena index of this manoeuvre.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Errors raised by transfer-graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An orbit id that does not belong to this graph.
    #[error("unknown orbit id {orbit:?}")]
    UnknownOrbit { orbit: OrbitId },
    /// No sequence of manoeuvres connects the two orbits.
    #[error("no manoeuvre path between {start:?} and {target:?}")]
    NoPath { start: OrbitId, target: OrbitId },
}

/// The cheapest sequence of manoeuvres between two orbits.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPlan {
    /// Sum of the leg delta-vs in m/s (routing bias excluded).
    pub total_delta_v_m_s: f64,
    /// Orbits visited in order, starting at the requested origin.
    pub orbits: Vec<OrbitId>,
    /// Burns performed in order; one fewer entry than `orbits`.
    pub manoeuvres: Vec<ManoeuvreId>,
}

/// A collection of orbits around one central body and the manoeuvres linking
/// them.
pub struct TransferGraph {
    central_body: Arc<CentralBody>,
    orbits: Vec<Orbit>,
    manoeuvres: Vec<Manoeuvre>,
    // Orbits grouped by apsis radius, bucketed at 1 m, so that candidate
    // burn points can be enumerated without comparing every orbit pair.
    apside_index: BTreeMap<u64, Vec<OrbitId>>,
}

impl TransferGraph {
    /// An empty graph for orbits around `central_body`.
    pub fn new(central_body: Arc<CentralBody>) -> Self {
        Self {
            central_body,
            orbits: Vec::new(),
            manoeuvres: Vec::new(),
            apside_index: BTreeMap::new(),
        }
    }

    /// The body all orbits in this graph are around.
    pub fn central_body(&self) -> &Arc<CentralBody> {
        &self.central_body
    }

    fn apside_key(radius_m: f64) -> u64 {
        radius_m.round() as u64
    }

    /// Store an orbit and index it under each of its distinct apsis radii.
    pub fn add_orbit(&mut self, orbit: Orbit) -> OrbitId {
        let id = OrbitId(self.orbits.len());
        let per_key = Self::apside_key(orbit.periapsis_m());
        let apo_key = Self::apside_key(orbit.apoapsis_m());
        self.apside_index.entry(per_key).or_default().push(id);
        if apo_key != per_key {
            self.apside_index.entry(apo_key).or_default().push(id);
        }
        self.orbits.push(orbit);
        id
    }

    /// Commit a manoeuvre of the given family between two stored orbits,
    /// burning at radius `insect_r_m`.
    ///
    /// Computes and fixes the delta-v, then registers the record on `orbit1`
    /// and `orbit2`, exactly once each, in that order. Feasibility is not
    /// checked here: `evaluate` is an advisory predicate the caller consults
    /// beforehand, and committing an infeasible pair produces a structurally
    /// valid record whose delta-v has no physical meaning.
    pub fn add_manoeuvre(
        &mut self,
        kind: &dyn ManoeuvreType,
        orbit1: OrbitId,
        orbit2: OrbitId,
        insect_r_m: f64,
    ) -> Result<ManoeuvreId, GraphError> {
        let first = self
            .orbits
            .get(orbit1.0)
            .ok_or(GraphError::UnknownOrbit { orbit: orbit1 })?;
        let second = self
            .orbits
            .get(orbit2.0)
            .ok_or(GraphError::UnknownOrbit { orbit: orbit2 })?;

        let delta_v = kind.delta_v(first, second, insect_r_m);
        let id = ManoeuvreId(self.manoeuvres.len());
        self.manoeuvres
            .push(Manoeuvre::new(orbit1, orbit2, kind.name(), delta_v));
        self.orbits[orbit1.0].register_manoeuvre(id);
        self.orbits[orbit2.0].register_manoeuvre(id);
        Ok(id)
    }

    /// Generate candidate orbits across the body's viable radius range:
    /// every apoapsis/periapsis pairing of the sampled radii, at every
    /// inclination from 0° to 180° in `inclination_step_deg` steps.
    ///
    /// Returns the number of orbits added. A body without a Hill-sphere
    /// bound contributes no radii, hence no orbits.
    pub fn generate_orbits(
        &mut self,
        per_section: usize,
        section_limits_m: &[f64],
        inclination_step_deg: usize,
    ) -> usize {
        let radii = self.central_body.sample_radii(per_section, section_limits_m);
        let body = Arc::clone(&self.central_body);
        let mut added = 0;
        for inclination in (0..=180).step_by(inclination_step_deg.max(1)) {
            for per_idx in 0..radii.len() {
                for apo_idx in per_idx..radii.len() {
                    if let Ok(orbit) = Orbit::new(
                        Arc::clone(&body),
                        radii[apo_idx],
                        radii[per_idx],
                        inclination as f64,
                    ) {
                        self.add_orbit(orbit);
                        added += 1;
                    }
                }
            }
        }
        added
    }

    /// Link every pair of orbits that share an apsis bucket with the first
    /// feasible manoeuvre family from `kinds`, burning at the bucket radius.
    ///
    /// At most one manoeuvre is created per orbit pair, even when the pair
    /// shares both apsides. Returns the number of manoeuvres created.
    pub fn link_all(&mut self, kinds: &[&dyn ManoeuvreType]) -> Result<usize, GraphError> {
        let buckets: Vec<(f64, Vec<OrbitId>)> = self
            .apside_index
            .iter()
            .map(|(&key, ids)| (key as f64, ids.clone()))
            .collect();

        let mut linked: HashSet<(OrbitId, OrbitId)> = HashSet::new();
        let mut created = 0;
        for (radius_m, ids) in buckets {
            for i in 0..ids.len() {
                for j in (i + 1)..ids.len() {
                    let pair = if ids[i] < ids[j] {
                        (ids[i], ids[j])
                    } else {
                        (ids[j], ids[i])
                    };
                    if linked.contains(&pair) {
                        continue;
                    }
                    for kind in kinds {
                        if kind.evaluate(&self.orbits[ids[i].0], &self.orbits[ids[j].0]) {
                            self.add_manoeuvre(*kind, ids[i], ids[j], radius_m)?;
                            linked.insert(pair);
                            created += 1;
                            break;
                        }
                    }
                }
            }
        }
        Ok(created)
    }

    /// The orbit behind an id, if it belongs to this graph.
    pub fn orbit(&self, id: OrbitId) -> Option<&Orbit> {
        self.orbits.get(id.0)
    }

    /// The manoeuvre behind an id, if it belongs to this graph.
    pub fn manoeuvre(&self, id: ManoeuvreId) -> Option<&Manoeuvre> {
        self.manoeuvres.get(id.0)
    }

    /// Ids of the manoeuvres incident on an orbit, in creation order.
    pub fn manoeuvres_of(&self, id: OrbitId) -> Option<&[ManoeuvreId]> {
        self.orbits.get(id.0).map(|orbit| orbit.manoeuvres())
    }

    /// Number of stored orbits.
    pub fn orbit_count(&self) -> usize {
        self.orbits.len()
    }

    /// Number of committed manoeuvres.
    pub fn manoeuvre_count(&self) -> usize {
        self.manoeuvres.len()
    }

    /// Handles of every stored orbit, in creation order.
    pub fn orbit_ids(&self) -> impl Iterator<Item = OrbitId> + '_ {
        (0..self.orbits.len()).map(OrbitId)
    }

    /// Id of the first stored orbit with the same geometry, if any.
    pub fn find_orbit(&self, orbit: &Orbit) -> Option<OrbitId> {
        self.orbits
            .iter()
            .position(|candidate| candidate == orbit)
            .map(OrbitId)
    }

    /// The cheapest manoeuvre sequence from `start` to `target` by total
    /// delta-v, found with Dijkstra's algorithm over the committed
    /// manoeuvres.
    pub fn cheapest_transfer(
        &self,
        start: OrbitId,
        target: OrbitId,
    ) -> Result<TransferPlan, GraphError> {
        for id in [start, target] {
            if id.0 >= self.orbits.len() {
                return Err(GraphError::UnknownOrbit { orbit: id });
            }
        }
        let path = shortest_path(self, start.0, target.0, ROUTING_EDGE_BIAS_M_S)
            .ok_or(GraphError::NoPath { start, target })?;
        Ok(TransferPlan {
            total_delta_v_m_s: path.total_weight,
            orbits: path.nodes.into_iter().map(OrbitId).collect(),
            manoeuvres: path.edges.into_iter().map(ManoeuvreId).collect(),
        })
    }
}

impl CostGraph for TransferGraph {
    fn node_count(&self) -> usize {
        self.orbits.len()
    }

    fn edges_from(&self, node: usize) -> Vec<EdgeRef> {
        let Some(orbit) = self.orbits.get(node) else {
            return Vec::new();
        };
        orbit
            .manoeuvres()
            .iter()
            .filter_map(|&id| {
                let manoeuvre = &self.manoeuvres[id.0];
                let other = manoeuvre.get_other(OrbitId(node)).ok()?;
                Some(EdgeRef {
                    edge: id.0,
                    other: other.0,
                    weight: manoeuvre.delta_v_m_s(),
                })
            })
            .collect()
    }
}
