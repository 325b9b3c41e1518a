pub mod carver;
pub mod error;
pub mod grid;
pub mod session;

pub use carver::{Carver, StepEvent};
pub use error::MazeError;
pub use grid::{Cell, Direction, Grid, MAX_DIM, MIN_DIM};
pub use session::{BuildConfig, BuildEvent, GenerationSession};
