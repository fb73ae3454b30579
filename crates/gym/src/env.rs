/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] consumes one
/// action and returns a [`Transition`] carrying the new observation, the
/// reward, whether the episode has ended, and diagnostic info.
///
/// [`step`]: Env::step
pub trait Env {
    type Action;
    type Observation;
    type Info;

    /// Advance the environment by one action.
    fn step(&mut self, action: Self::Action) -> Transition<Self::Observation, Self::Info>;

    /// Start a new episode.
    fn reset(&mut self);

    /// Number of distinct observations.
    fn obs_size(&self) -> usize;

    /// Number of distinct actions.
    fn action_size(&self) -> usize;
}

/// Result of a single [`Env::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O, I> {
    pub observation: O,
    pub reward: i32,
    pub done: bool,
    pub info: I,
}
