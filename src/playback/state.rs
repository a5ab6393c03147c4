use crate::library::Track;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Read-only copy of the controller state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub state: PlayState,
    pub current: Option<Track>,
    /// Index of the last played track in the library ordering.
    pub position: usize,
}
