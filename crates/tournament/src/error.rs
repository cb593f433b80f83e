/// A draw or simulation request that cannot be played out
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDrawError {
    #[error("a draw needs at least one entrant")]
    EmptyEntrants,
    #[error("draw size {0} is not a power of two")]
    DrawSizeNotPowerOfTwo(usize),
    #[error("a simulation needs at least one trial")]
    ZeroTrials,
    #[error("batch size must be at least one trial")]
    ZeroBatchSize,
    /// Draw length that cannot form a bracket (zero or not a power of two)
    #[error("malformed draw of {0} slots")]
    MalformedDraw(usize),
    /// Field so small that some first-round pairing would be two byes
    #[error("{entrants} entrants cannot fill a draw of {draw_size} without bye-vs-bye pairings")]
    TooFewEntrants { entrants: usize, draw_size: usize },
    #[error("round {round} pairs two byes at slot {slot}")]
    DoubleBye { round: u32, slot: usize },
}

/// A season config file that could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidDrawError),
}
