use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::load_factor::LoadFactor;
use crate::workload::Workload;

pub const DIVIDER: &str = "---------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSample {
    pub workload: Workload,
    pub elapsed: Duration,
}

impl WorkloadSample {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Timings collected by one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    load_factor: LoadFactor,
    samples: Vec<WorkloadSample>,
    total: Duration,
}

impl BenchReport {
    pub fn new(load_factor: LoadFactor, samples: Vec<WorkloadSample>, total: Duration) -> Self {
        Self {
            load_factor,
            samples,
            total,
        }
    }

    pub fn load_factor(&self) -> LoadFactor {
        self.load_factor
    }

    pub fn samples(&self) -> &[WorkloadSample] {
        &self.samples
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn duration_of(&self, workload: Workload) -> Option<Duration> {
        self.samples
            .iter()
            .find(|sample| sample.workload == workload)
            .map(|sample| sample.elapsed)
    }

    /// Sum of the per-workload timings; never exceeds [`Self::total`].
    pub fn workload_sum(&self) -> Duration {
        self.samples.iter().map(|sample| sample.elapsed).sum()
    }

    pub fn write_results<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{DIVIDER}")?;
        writeln!(out, "Benchmark Results:")?;
        for sample in &self.samples {
            writeln!(out, " > {}: {:.2} ms", sample.workload.name(), sample.millis())?;
        }
        writeln!(out, "{DIVIDER}")?;
        writeln!(out, "Total Execution Time: {:.2} seconds", self.total.as_secs_f64())?;
        out.flush().context("flush benchmark results")
    }
}
