//! System trait and frame scheduling
//!
//! Systems run strictly in phase order, then in insertion order within a
//! phase. Everything is single-threaded: a system gets exclusive access to the
//! world for the duration of its run.

use super::World;

/// System execution phases with explicit ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemPhase {
    /// Advance state by the frame's time step
    Integrate = 0,
    /// Enforce world constraints on the integrated state
    Constrain = 1,
}

/// Per-frame inputs shared by all systems
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Time step in seconds
    pub delta_time: f64,

    /// Width of the visible area
    pub screen_width: f64,

    /// Height of the visible area
    pub screen_height: f64,
}

/// System trait for processing entities and components
pub trait System {
    /// Name used in log output
    fn name(&self) -> &'static str;

    /// Which phase this system belongs to
    fn phase(&self) -> SystemPhase;

    /// Run the system
    fn run(&mut self, world: &mut World, frame: &FrameContext);
}

/// Ordered list of systems executed once per frame
#[derive(Default)]
pub struct SystemSchedule {
    systems: Vec<Box<dyn System>>,
}

impl SystemSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system; it runs after every system of an earlier phase and after
    /// systems of the same phase that were added before it
    pub fn add_system(&mut self, system: Box<dyn System>) {
        log::debug!("Scheduling system '{}' in phase {:?}", system.name(), system.phase());
        self.systems.push(system);
        // stable sort keeps insertion order within a phase
        self.systems.sort_by_key(|system| system.phase());
    }

    /// Builder-style [`Self::add_system`]
    #[must_use]
    pub fn with_system(mut self, system: Box<dyn System>) -> Self {
        self.add_system(system);
        self
    }

    /// Number of scheduled systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the schedule is empty
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Names of the scheduled systems in execution order
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    /// Run every system once
    pub fn run(&mut self, world: &mut World, frame: &FrameContext) {
        for system in &mut self.systems {
            system.run(world, frame);
        }
    }
}
