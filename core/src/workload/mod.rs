//! The three stress routines. Each one is a straight-line loop whose result is
//! routed through [`std::hint::black_box`] so the optimizer cannot drop it.

pub mod math;
pub mod matrix;
pub mod memory;


use crate::load_factor::LoadFactor;

pub use math::MathOutcome;
pub use matrix::Matrix;
pub use memory::MemoryOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    Matrix,
    Math,
    Memory,
}

impl Workload {
    /// Execution order used by the runner.
    pub const ALL: [Workload; 3] = [Workload::Matrix, Workload::Math, Workload::Memory];

    pub fn name(self) -> &'static str {
        match self {
            Workload::Matrix => "Matrix Benchmark",
            Workload::Math => "Math Benchmark",
            Workload::Memory => "Memory Benchmark",
        }
    }

    /// Short identifier used for tracing fields and bench ids.
    pub fn key(self) -> &'static str {
        match self {
            Workload::Matrix => "matrix",
            Workload::Math => "math",
            Workload::Memory => "memory",
        }
    }

    /// Size description shown next to the workload name while it runs.
    pub fn sizing(self, load: LoadFactor) -> String {
        match self {
            Workload::Matrix => {
                let n = load.matrix_dim();
                format!("size {n}x{n}")
            }
            Workload::Math => format!("{} operations", load.iterations()),
            Workload::Memory => format!("{} elements", load.iterations()),
        }
    }

    pub fn execute(self, load: LoadFactor) -> WorkloadOutcome {
        match self {
            Workload::Matrix => WorkloadOutcome::Matrix {
                dim: matrix::run(load.matrix_dim()),
            },
            Workload::Math => WorkloadOutcome::Math(math::run(load.iterations())),
            Workload::Memory => WorkloadOutcome::Memory(memory::run(load.iterations())),
        }
    }
}

/// What a workload actually did, kept so callers can check the work was
/// sized as requested. Computed values themselves are discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkloadOutcome {
    Matrix { dim: usize },
    Math(MathOutcome),
    Memory(MemoryOutcome),
}
