//! Export helpers for transfer-plan artifacts: a CSV of burn legs and a JSON
//! summary sidecar.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use pathfinder_mechanics::{TransferGraph, TransferPlan};

/// Errors raised while writing plan artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plan references orbits or manoeuvres not present in the graph")]
    ForeignPlan,
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// One burn leg of a transfer plan, flattened for CSV rows.
#[derive(Debug, Clone, Serialize)]
pub struct LegRecord {
    pub leg: usize,
    pub manoeuvre: String,
    pub delta_v_m_s: f64,
    pub from_apoapsis_m: f64,
    pub from_periapsis_m: f64,
    pub from_inclination_deg: f64,
    pub to_apoapsis_m: f64,
    pub to_periapsis_m: f64,
    pub to_inclination_deg: f64,
}

/// JSON sidecar summarising a transfer plan.
#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub total_delta_v_m_s: f64,
    pub burns: usize,
    pub legs: Vec<LegRecord>,
}

/// Flatten a plan into per-leg records, resolving ids against `graph`.
pub fn plan_legs(graph: &TransferGraph, plan: &TransferPlan) -> Result<Vec<LegRecord>, ExportError> {
    let mut legs = Vec::with_capacity(plan.manoeuvres.len());
    for (index, (&manoeuvre_id, pair)) in plan
        .manoeuvres
        .iter()
        .zip(plan.orbits.windows(2))
        .enumerate()
    {
        let manoeuvre = graph.manoeuvre(manoeuvre_id).ok_or(ExportError::ForeignPlan)?;
        let from = graph.orbit(pair[0]).ok_or(ExportError::ForeignPlan)?;
        let to = graph.orbit(pair[1]).ok_or(ExportError::ForeignPlan)?;
        legs.push(LegRecord {
            leg: index + 1,
            manoeuvre: manoeuvre.kind().to_string(),
            delta_v_m_s: manoeuvre.delta_v_m_s(),
            from_apoapsis_m: from.apoapsis_m(),
            from_periapsis_m: from.periapsis_m(),
            from_inclination_deg: from.inclination_deg(),
            to_apoapsis_m: to.apoapsis_m(),
            to_periapsis_m: to.periapsis_m(),
            to_inclination_deg: to.inclination_deg(),
        });
    }
    Ok(legs)
}

/// Write the plan's legs as CSV with a header row.
pub fn write_plan_csv<W: Write>(
    writer: W,
    graph: &TransferGraph,
    plan: &TransferPlan,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for leg in plan_legs(graph, plan)? {
        csv_writer.serialize(leg)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the plan summary as pretty-printed JSON.
pub fn write_plan_json<W: Write>(
    writer: W,
    graph: &TransferGraph,
    plan: &TransferPlan,
) -> Result<(), ExportError> {
    let summary = PlanSummary {
        total_delta_v_m_s: plan.total_delta_v_m_s,
        burns: plan.manoeuvres.len(),
        legs: plan_legs(graph, plan)?,
    };
    serde_json::to_writer_pretty(writer, &summary)?;
    Ok(())
}
