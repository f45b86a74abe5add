//! Build command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use console::style;
use tracing::info;

use ising_ir::Circuit;
use ising_qasm3::{emit, emit_qasm2};
use ising_synth::{CircuitAssembler, LatticeTopology};

use super::OutputFormat;
use super::edges::dims_label;
use crate::config::{self, Experiment, ExperimentConfig};

/// Execute the build command.
pub fn execute(
    config_path: Option<&Path>,
    overrides: ExperimentConfig,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let experiment = config::load(config_path, overrides)?;
    let assembler = CircuitAssembler::from_dims(&experiment.dims, experiment.params)?;
    let circuit = assembler.assemble()?;
    info!(
        name = circuit.name(),
        ops = circuit.len(),
        "circuit assembled"
    );

    let rendered = render(&experiment, assembler.topology(), &circuit, format)?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            println!(
                "{} Wrote {} ({} qubits, {} ops) to {}",
                style("✓").green().bold(),
                style(circuit.name()).cyan(),
                circuit.num_qubits(),
                circuit.len(),
                style(path.display()).green()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Render `circuit` in the requested format.
pub fn render(
    experiment: &Experiment,
    topology: &LatticeTopology,
    circuit: &Circuit,
    format: OutputFormat,
) -> Result<String> {
    if format != OutputFormat::Summary {
        let non_finite = circuit.iter().find_map(|op| {
            op.angle()
                .filter(|theta| !theta.is_finite())
                .map(|theta| (op.name(), theta))
        });
        if let Some((name, theta)) = non_finite {
            bail!("{name} angle {theta} is not finite; check coupling, field and dt");
        }
    }

    Ok(match format {
        OutputFormat::Qasm => emit(circuit),
        OutputFormat::Qasm2 => emit_qasm2(circuit),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(circuit).context("Failed to serialize circuit")?;
            json.push('\n');
            json
        }
        OutputFormat::Summary => summary(experiment, topology, circuit),
    })
}

fn summary(experiment: &Experiment, topology: &LatticeTopology, circuit: &Circuit) -> String {
    let params = &experiment.params;

    let title = experiment.name.as_deref().unwrap_or(circuit.name());
    let mut out = format!("{}\n", style(title).cyan().bold());
    out.push_str(&format!(
        "  Lattice:  {} ({} qubits)\n",
        dims_label(topology.dims()),
        topology.num_sites()
    ));

    let per_axis: Vec<String> = (0..topology.num_axes())
        .map(|axis| format!("axis {axis}: {}", topology.edge_count_along(axis)))
        .collect();
    out.push_str(&format!(
        "  Edges:    {} ({})\n",
        topology.edge_count(),
        per_axis.join(", ")
    ));
    out.push_str(&format!(
        "  Slices:   {} (dt = {}, total time = {})\n",
        params.slices,
        params.dt,
        params.total_time()
    ));
    out.push_str(&format!(
        "  Angles:   rz = {}, rx = {}\n",
        params.rz_angle(),
        params.rx_angle()
    ));
    out.push_str(&format!("  Depth:    {}\n", circuit.depth()));
    out.push_str(&format!("  Ops:      {}\n", circuit.len()));
    for (name, count) in circuit.count_ops() {
        out.push_str(&format!("    {name:<8} {count}\n"));
    }
    out
}
