pub mod game_loop;
pub mod scheduler;

pub use game_loop::{FrameLogic, FrameOutcome, GameLoop};
pub use scheduler::{FrameScheduler, IntervalScheduler, ManualScheduler};
