//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Trotterized transverse-field Ising circuit synthesis",
        style("Ising").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  ising-ir     Circuit representation");
    println!("  ising-synth  Lattice topology and Trotter circuit assembly");
    println!("  ising-qasm3  OpenQASM emitter");
    println!("  ising-hal    Execution contract");
    println!("  ising-cli    Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
