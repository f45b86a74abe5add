//! Backend trait.
//!
//! A [`Backend`] takes an assembled circuit and a shot count and returns a
//! histogram of measured bitstrings. Backends live outside this workspace;
//! the trait is the contract they implement.
//!
//! | Method | Kind | Required | Returns |
//! |--------|------|----------|---------|
//! | `name()` | sync | yes | `&str` |
//! | `run()` | async | yes | `HalResult<ExecutionResult>` |
//! | `execute()` | async | provided | `HalResult<ExecutionResult>` |

use async_trait::async_trait;
use ising_ir::Circuit;
use tracing::debug;

use crate::error::{HalError, HalResult};
use crate::result::ExecutionResult;

/// Trait for quantum backends.
///
/// # Contract
///
/// - `run()` executes `circuit` `shots` times and returns one count per
///   shot, keyed by bitstrings of width `circuit.num_clbits()`.
/// - Callers go through `execute()`, which rejects `shots == 0` before the
///   backend is reached and checks the returned counts.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Execute `circuit` for `shots` repetitions.
    async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;

    /// Run `circuit` and check the result against the contract.
    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        if shots == 0 {
            return Err(HalError::InvalidShots(
                "at least one shot is required".into(),
            ));
        }

        debug!(
            backend = self.name(),
            circuit = circuit.name(),
            n_qubits = circuit.num_qubits(),
            shots,
            "running circuit"
        );
        let result = self.run(circuit, shots).await?;

        if result.shots != shots {
            return Err(HalError::Backend(format!(
                "{} ran {} shots, {} requested",
                self.name(),
                result.shots,
                shots
            )));
        }
        result.validate(circuit.num_clbits())?;
        Ok(result)
    }
}
