use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::ir::{ProgramIR, Stm};

// One counter for the whole process: labels are never reused across
// compilations in a session, and concurrent lowerings cannot race.
static PROCESS_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Source of fresh label names.
///
/// Generated names carry the reserved `_L` prefix. No MAPL identifier can
/// start with an underscore, so generated labels collide neither with user
/// names nor with the reserved `_END`.
#[derive(Debug, Clone)]
pub struct LabelGen {
    counter: Counter,
}

#[derive(Debug, Clone)]
enum Counter {
    Process,
    Scoped(Arc<AtomicU64>),
}

impl LabelGen {
    /// Draw from the process-wide counter.
    pub fn process() -> Self {
        Self {
            counter: Counter::Process,
        }
    }

    /// Draw from a private counter with a known starting point. The
    /// process-wide counter cannot be rewound; this is the interface for
    /// callers that need reproducible names.
    pub fn scoped_from(start: u64) -> Self {
        Self {
            counter: Counter::Scoped(Arc::new(AtomicU64::new(start))),
        }
    }

    /// A name distinct from every name this generator has returned before.
    pub fn fresh(&self) -> String {
        let n = match &self.counter {
            Counter::Process => PROCESS_COUNTER.fetch_add(1, Ordering::Relaxed),
            Counter::Scoped(c) => c.fetch_add(1, Ordering::Relaxed),
        };
        format!("_L{n}")
    }
}

impl Default for LabelGen {
    fn default() -> Self {
        Self::process()
    }
}

/// Lowering context: owns the output program and the label source.
pub struct Gen {
    pub out: ProgramIR,
    labels: LabelGen,
}

impl Gen {
    pub fn new() -> Self {
        Self::with_labels(LabelGen::default())
    }

    pub fn with_labels(labels: LabelGen) -> Self {
        Self {
            out: ProgramIR::new(),
            labels,
        }
    }

    pub fn finish(self) -> ProgramIR {
        self.out
    }

    pub fn new_label(&mut self) -> String {
        self.labels.fresh()
    }

    pub fn emit(&mut self, s: Stm) {
        self.out.stms.push(s);
    }
}

impl Default for Gen {
    fn default() -> Self {
        Self::new()
    }
}
