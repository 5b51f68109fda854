//! Simulator - runs a reference string through one replacement engine.

use log::info;

use crate::common::{Page, PolicyKind, Result, SimConfig};
use crate::memory::policy::Engine;
use crate::memory::FaultStats;
use crate::report::{NullReporter, Reporter};
use crate::simulation::{SimulationResult, StepOutcome};

/// Drives one policy over a reference string.
///
/// The simulator holds only validated settings. Each call to
/// [`run`](Simulator::run) builds a fresh [`Engine`], so runs never share
/// state and the same input always produces the same steps.
///
/// # Usage
/// ```
/// use pagesim::{Page, PolicyKind, SimConfig, Simulator};
///
/// let config = SimConfig::new(PolicyKind::Fifo, 3).unwrap();
/// let refs = Page::parse_sequence("ABCABDABCD");
///
/// let result = Simulator::new(config).run(&refs).unwrap();
/// assert_eq!(result.total_faults(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SimConfig {
        self.config
    }

    /// Run without reporting.
    pub fn run(&self, references: &[Page]) -> Result<SimulationResult> {
        self.run_with(references, &mut NullReporter)
    }

    /// Run, forwarding every step and the final totals to `reporter`.
    pub fn run_with<R: Reporter + ?Sized>(
        &self,
        references: &[Page],
        reporter: &mut R,
    ) -> Result<SimulationResult> {
        let policy = self.config.policy();
        let capacity = self.config.capacity();
        info!(
            "simulating {} with {} frames over {} references",
            policy,
            capacity,
            references.len()
        );

        let mut engine = Engine::from_config(self.config);
        let mut stats = FaultStats::new();
        let mut steps = Vec::with_capacity(references.len());

        for (index, &page) in references.iter().enumerate() {
            let access = engine.step(index, references)?;
            stats.record(&access);

            let step = StepOutcome {
                index,
                page,
                fault: access.fault,
                evicted: access.evicted,
                frames: engine.snapshot(),
            };
            reporter.on_step(&step)?;
            steps.push(step);
        }

        reporter.on_finish(policy, &stats)?;
        info!("{} finished: {}", policy, stats);

        Ok(SimulationResult {
            policy,
            capacity,
            steps,
            stats,
        })
    }
}

/// Validate `capacity` and run `policy` over `references`.
pub fn run(policy: PolicyKind, capacity: i64, references: &[Page]) -> Result<SimulationResult> {
    let config = SimConfig::new(policy, capacity)?;
    Simulator::new(config).run(references)
}

/// Run every policy over the same input, in [`PolicyKind::ALL`] order.
///
/// Capacity is validated once, before any policy runs.
pub fn compare(capacity: i64, references: &[Page]) -> Result<Vec<SimulationResult>> {
    let configs = PolicyKind::ALL
        .iter()
        .map(|&policy| SimConfig::new(policy, capacity))
        .collect::<Result<Vec<_>>>()?;

    configs
        .into_iter()
        .map(|config| Simulator::new(config).run(references))
        .collect()
}
