/// Per-episode progress.
///
/// `cursor` is the dataset row the agent is asked about next. It only moves
/// forward and saturates at the last row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeState {
    pub cursor: usize,
    pub turn_count: usize,
    pub episode_over: bool,
    pub episode_return: i64,
}
