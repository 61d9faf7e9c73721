/// Lifecycle of a renderer's frame loop.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoopState {
    Uninitialized, // Surface not seeded yet, frames are ignored
    Idle,          // Loop armed but the run flag is off
    Active,        // Loop armed and updating/drawing every frame
}

impl LoopState {
    pub fn from_run_flag(running: bool) -> Self {
        if running { LoopState::Active } else { LoopState::Idle }
    }
}
