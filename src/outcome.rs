//! Per-frame events and level outcomes.

/// Terminal event produced by a single physics step.
///
/// At most one is reported per frame; a collision always wins over
/// reaching the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameEvent {
    /// Nothing happened, keep playing.
    #[default]
    None,
    /// The ship touched the body at this index of `SimWorld::bodies`.
    Collision { body: usize },
    /// The ship entered the target zone.
    TargetReached,
}

impl FrameEvent {
    /// Returns true if the event ends the attempt.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FrameEvent::None)
    }
}

/// State of the current attempt at a level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Physics running.
    #[default]
    Playing,
    /// Target reached; waiting for the advance input.
    Success,
    /// Ship destroyed; waiting for restart.
    Failure,
}

impl Outcome {
    /// Whether physics and spawning are frozen.
    pub fn is_frozen(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

impl From<FrameEvent> for Outcome {
    fn from(event: FrameEvent) -> Self {
        match event {
            FrameEvent::None => Outcome::Playing,
            FrameEvent::Collision { .. } => Outcome::Failure,
            FrameEvent::TargetReached => Outcome::Success,
        }
    }
}
