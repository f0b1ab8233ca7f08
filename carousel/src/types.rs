#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Signed step applied to the track index.
    pub fn step(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Prev => -1,
        }
    }
}

/// Metadata for one entry of the padded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideItem {
    /// Position in the padded sequence.
    pub logical_index: usize,
    pub is_clone: bool,
    /// Logical index of the authentic item this entry shows. Equals `logical_index` for
    /// originals.
    pub original_index: usize,
    /// Position of the raw item in the caller's input sequence.
    pub source: usize,
}

/// A slide entry together with its content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide<T> {
    pub item: SlideItem,
    pub content: T,
}

/// Wrapper geometry shared by every item, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    /// Outer margin, applied on every side.
    pub margin: f32,
    /// Content width (item width minus both horizontal margins).
    pub width: f32,
}

/// Duration part of a track style write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Instant placement.
    None,
    Millis(u64),
}

impl Transition {
    pub fn is_instant(self) -> bool {
        matches!(self, Self::None)
    }
}

/// The continuous state of the track.
///
/// At rest, `offset == -(index as f32) * item_width`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackState {
    /// Horizontal translation in pixels (zero or negative).
    pub offset: f32,
    pub index: usize,
}

/// One offset + transition write, applied by the host in a single step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackStyle {
    pub offset: f32,
    pub transition: Transition,
}

/// Enabled state of the backward/forward controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    pub const ENABLED: Self = Self {
        prev_enabled: true,
        next_enabled: true,
    };

    pub fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.next_enabled,
            Direction::Prev => self.prev_enabled,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// What happened to an advance request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A transition session was started.
    Started,
    /// A transition was in flight; the request waits in the queue.
    Queued,
    /// A transition was in flight and the queue was full.
    Dropped,
    /// Non-looping mode and the direction is disabled at the (projected) position.
    Blocked,
}

/// The continuation the controller is waiting on while animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    /// Waiting for the next paint frame.
    Frame,
    /// Waiting for the track's transition-completion event.
    TransitionEnd,
}

/// What a host event did to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// The event did not match the pending continuation (or nothing was pending).
    Ignored,
    /// The event advanced a multi-step move; still animating.
    Continued,
    /// The session settled and the controller is idle (or a queued request started).
    Settled,
}

/// How an accepted request moves the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// One animated write to the candidate index.
    Simple,
    /// Instant jump to the authentic twin's neighbour, then an animated hop onto the twin.
    Reanchor,
}
