use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::load_factor::LoadFactor;
use crate::report::{BenchReport, DIVIDER, WorkloadSample};
use crate::workload::Workload;

const TRACE_TARGET: &str = "stressbench::runner";

/// Runs every workload once, in order, printing progress to `out`.
pub struct BenchmarkRunner<W: Write> {
    out: W,
}

impl<W: Write> BenchmarkRunner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, load: LoadFactor) -> Result<BenchReport> {
        writeln!(self.out, "Starting benchmark with load factor: {load}").context("write banner")?;
        writeln!(self.out, "{DIVIDER}").context("write banner")?;

        let total_start = Instant::now();
        let mut samples = Vec::with_capacity(Workload::ALL.len());
        for workload in Workload::ALL {
            samples.push(self.run_one(workload, load)?);
        }
        let total = total_start.elapsed();

        info!(
            target: TRACE_TARGET,
            load_factor = load.get(),
            total_secs = total.as_secs_f64(),
            "benchmark finished"
        );
        Ok(BenchReport::new(load, samples, total))
    }

    /// Runs the full benchmark and prints the results block after it.
    pub fn run_and_report(&mut self, load: LoadFactor) -> Result<BenchReport> {
        let report = self.run(load)?;
        report.write_results(&mut self.out)?;
        Ok(report)
    }

    fn run_one(&mut self, workload: Workload, load: LoadFactor) -> Result<WorkloadSample> {
        let sizing = workload.sizing(load);
        write!(self.out, "Running {} ({sizing})...", workload.name())
            .and_then(|_| self.out.flush())
            .with_context(|| format!("write progress for {}", workload.key()))?;

        debug!(target: TRACE_TARGET, workload = workload.key(), sizing = %sizing, "workload start");
        let start = Instant::now();
        let outcome = workload.execute(load);
        let elapsed = start.elapsed();
        debug!(
            target: TRACE_TARGET,
            workload = workload.key(),
            elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
            outcome = ?outcome,
            "workload done"
        );

        writeln!(self.out, " Done.").with_context(|| format!("write progress for {}", workload.key()))?;
        Ok(WorkloadSample { workload, elapsed })
    }
}
