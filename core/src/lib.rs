//! Synthetic CPU and memory stress workloads scaled by a single load factor,
//! plus the sequential runner and text report used by the `stressbench` CLI.

pub mod load_factor;
pub mod report;
pub mod runner;
pub mod workload;

#[cfg(test)]
mod load_factor_test;

pub use load_factor::{InvalidLoadFactor, InvalidReason, LoadFactor};
pub use report::{BenchReport, WorkloadSample};
pub use runner::BenchmarkRunner;
pub use workload::{Workload, WorkloadOutcome};
