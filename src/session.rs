use std::thread;
use std::time::Duration;

use log::debug;

use crate::carver::{Carver, StepEvent};
use crate::error::MazeError;
use crate::grid::Grid;

/// Pacing and randomness for a build. The interval is the visible delay
/// between carver steps; consumers that want an instant build pass zero.
#[derive(Debug, Clone, Copy)]
pub struct BuildConfig {
    pub step_interval: Duration,
    pub seed: Option<u64>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(50),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    Step(StepEvent),
    Finished,
}

/// Orchestrates one maze build at a time: owns the grid, drives the carver
/// step by step, and tears everything down on cancellation so a fresh
/// `start_build` is always safe.
pub struct GenerationSession {
    config: BuildConfig,
    grid: Option<Grid>,
    carver: Option<Carver>,
    running: bool,
}

impl GenerationSession {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            grid: None,
            carver: None,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The current grid: in-progress while running, the finished maze after
    /// a completed build, `None` when idle. A completed grid stays readable
    /// until the next `start_build` or `cancel_build` discards it.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Begins a fresh build. A request while one is already running is
    /// dropped, not queued. An invalid-dimension failure leaves the session
    /// idle with nothing retained.
    pub fn start_build(&mut self, width: usize, height: usize) -> Result<(), MazeError> {
        if self.running {
            debug!("start_build({}, {}) ignored, build in progress", width, height);
            return Ok(());
        }

        self.grid = None;
        self.carver = None;

        let grid = Grid::new(width, height)?;
        self.grid = Some(grid);
        self.carver = Some(Carver::new(self.config.seed));
        self.running = true;
        debug!("build started: {}x{}", width, height);

        Ok(())
    }

    /// Drives exactly one carver step. Returns the step event, `Finished`
    /// exactly once when the walk completes, or `None` while idle. A carver
    /// fault tears the build down like a cancellation before surfacing.
    pub fn step(&mut self) -> Result<Option<BuildEvent>, MazeError> {
        if !self.running {
            return Ok(None);
        }

        let (grid, carver) = match (self.grid.as_mut(), self.carver.as_mut()) {
            (Some(grid), Some(carver)) => (grid, carver),
            _ => return Ok(None),
        };

        match carver.step(grid) {
            Ok(Some(event)) => Ok(Some(BuildEvent::Step(event))),
            Ok(None) => {
                self.running = false;
                self.carver = None;
                debug!("build finished");
                Ok(Some(BuildEvent::Finished))
            }
            Err(err) => {
                self.cancel_build();
                Err(err)
            }
        }
    }

    /// Drives the current build to completion, handing each event to the
    /// sink and suspending for `step_interval` between steps. Returns
    /// immediately on an idle session.
    pub fn run<F>(&mut self, mut sink: F) -> Result<(), MazeError>
    where
        F: FnMut(&BuildEvent),
    {
        while let Some(event) = self.step()? {
            sink(&event);
            if event == BuildEvent::Finished {
                break;
            }
            thread::sleep(self.config.step_interval);
        }
        Ok(())
    }

    /// Halts any in-progress build and discards all per-build state.
    /// Idempotent: safe before any build and after completion.
    pub fn cancel_build(&mut self) {
        if self.running {
            debug!("build cancelled");
        }
        self.running = false;
        self.grid = None;
        self.carver = None;
    }
}
