//! Execution contract for Ising evolution circuits
//!
//! This crate defines what an executor of assembled circuits must provide.
//! No backend ships here: simulators and hardware clients implement
//! [`Backend`] in their own crates.
//!
//! - [`Backend`]: async `run(&Circuit, shots)` plus a checked `execute`
//! - [`ExecutionResult`] and [`Counts`]: the measured histogram
//! - [`HalError`]: contract violations and backend failures
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use ising_hal::{Backend, Counts, ExecutionResult, HalResult};
//! use ising_ir::Circuit;
//! use async_trait::async_trait;
//!
//! struct AllZeros;
//!
//! #[async_trait]
//! impl Backend for AllZeros {
//!     fn name(&self) -> &str { "all_zeros" }
//!
//!     async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
//!         let zeros = "0".repeat(circuit.num_clbits());
//!         let counts = Counts::from_pairs([(zeros, u64::from(shots))]);
//!         Ok(ExecutionResult::new(counts, shots))
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod result;

pub use backend::Backend;
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
