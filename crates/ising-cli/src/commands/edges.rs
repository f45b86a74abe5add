//! Edges command implementation.

use anyhow::Result;
use console::style;
use ising_synth::LatticeTopology;

/// Execute the edges command.
pub fn execute(dims: &[usize]) -> Result<()> {
    let topology = LatticeTopology::new(dims)?;
    print!("{}", render(&topology));
    Ok(())
}

fn render(topology: &LatticeTopology) -> String {
    let mut out = format!(
        "{} {} sites, {} edges\n",
        style(dims_label(topology.dims())).cyan().bold(),
        topology.num_sites(),
        topology.edge_count()
    );
    for axis in 0..topology.num_axes() {
        out.push_str(&format!(
            "axis {axis} ({} edges)\n",
            topology.edge_count_along(axis)
        ));
        for edge in topology.edges_along(axis) {
            out.push_str(&format!("  {} -- {}\n", edge.source.0, edge.target.0));
        }
    }
    out
}

/// `[3, 3]` as `3x3`.
pub(crate) fn dims_label(dims: &[usize]) -> String {
    dims.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("x")
}
