use crate::gate::NavigationGate;
use crate::queue::AdvanceQueue;
use crate::track::{Surface, TrackRenderer};
use crate::{
    Advance, CarouselOptions, Controls, Direction, MoveKind, Pending, Result, Settle,
    SlideModel, TrackState, Transition,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Animating(Session),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Session {
    direction: Direction,
    kind: MoveKind,
    step: Step,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    /// Animated write issued; settle on the next frame.
    SettleOnFrame,
    /// Instant jump committed; the animated hop to `anchor` goes out on the next frame.
    HopOnFrame { anchor: TrackState },
    /// Animated hop in flight; settle when the track reports the transition finished.
    SettleOnTransitionEnd,
}

impl Step {
    fn pending(self) -> Pending {
        match self {
            Self::SettleOnFrame | Self::HopOnFrame { .. } => Pending::Frame,
            Self::SettleOnTransitionEnd => Pending::TransitionEnd,
        }
    }
}

/// The carousel's transition state machine.
///
/// States are `Idle` and `Animating`. At most one transition session exists at a time; requests
/// arriving while animating wait in a bounded queue and are replayed in order once the current
/// session settles.
///
/// This type does not wait on anything itself. The host drives it by calling:
/// - `request_advance` for clicks, key presses and timer ticks
/// - `on_frame` from its next-paint-frame callback
/// - `on_transition_end` when the track's CSS (or equivalent) transition finishes
///
/// If the host never delivers the completion event of a re-anchor move, the controller stays
/// `Animating` for good and the queue fills up; this is not detected.
#[derive(Clone, Debug)]
pub struct TransitionController<T, S> {
    options: CarouselOptions,
    model: SlideModel<T>,
    renderer: TrackRenderer<T, S>,
    queue: AdvanceQueue,
    gate: NavigationGate,
    track: TrackState,
    controls: Controls,
    phase: Phase,
}

impl<T: Clone, S: Surface<T>> TransitionController<T, S> {
    /// Builds the slide model from `items`, renders it and places the track at rest on the first
    /// original item.
    ///
    /// Fails with [`crate::Error::InvalidConfiguration`] before touching the surface.
    pub fn new(
        options: CarouselOptions,
        container_width: f32,
        items: impl IntoIterator<Item = T>,
        surface: S,
    ) -> Result<Self> {
        let item_width = options.item_width(container_width)?;
        let model = SlideModel::build(items, item_width, options.margin)?;
        Ok(Self::with_model(options, model, surface))
    }
}

impl<T, S: Surface<T>> TransitionController<T, S> {
    fn with_model(options: CarouselOptions, model: SlideModel<T>, surface: S) -> Self {
        let mut renderer = TrackRenderer::new(surface);
        let track = renderer.render(&model);
        let gate = NavigationGate::new(
            options.looping,
            model.first_original(),
            model.last_original(),
        );
        let controls = gate.controls_at(track.index);
        if !options.looping {
            renderer.set_controls(controls);
        }
        cdebug!(
            looping = options.looping,
            speed = options.speed,
            slides = model.len(),
            index = track.index,
            "TransitionController::new"
        );
        Self {
            options,
            model,
            renderer,
            queue: AdvanceQueue::new(),
            gate,
            track,
            controls,
            phase: Phase::Idle,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn model(&self) -> &SlideModel<T> {
        &self.model
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.renderer.surface_mut()
    }

    pub fn into_surface(self) -> S {
        self.renderer.into_surface()
    }

    /// Logical index of the track. While animating, this is the index the session will rest on.
    pub fn index(&self) -> usize {
        self.track.index
    }

    pub fn track(&self) -> TrackState {
        self.track
    }

    /// Position (in the input sequence) of the authentic item at `index()`.
    pub fn displayed(&self) -> usize {
        self.model.position_of(self.track.index).unwrap_or(0)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// The continuation the current session waits on, if any.
    pub fn pending(&self) -> Option<Pending> {
        match self.phase {
            Phase::Idle => None,
            Phase::Animating(session) => Some(session.step.pending()),
        }
    }

    /// Direction and move kind of the session in flight.
    pub fn current_move(&self) -> Option<(Direction, MoveKind)> {
        match self.phase {
            Phase::Idle => None,
            Phase::Animating(session) => Some((session.direction, session.kind)),
        }
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn queued(&self) -> &AdvanceQueue {
        &self.queue
    }

    pub fn next(&mut self) -> Advance {
        self.request_advance(Direction::Next)
    }

    pub fn prev(&mut self) -> Advance {
        self.request_advance(Direction::Prev)
    }

    /// Single entry point for every advance source (buttons, keys, autoplay).
    pub fn request_advance(&mut self, direction: Direction) -> Advance {
        if self.is_animating() {
            return self.enqueue(direction);
        }
        self.start(direction)
    }

    /// Host callback: the next paint frame after a write.
    pub fn on_frame(&mut self) -> Settle {
        let Phase::Animating(mut session) = self.phase else {
            return Settle::Ignored;
        };
        match session.step {
            Step::SettleOnFrame => {
                self.settle();
                Settle::Settled
            }
            Step::HopOnFrame { anchor } => {
                self.track = anchor;
                self.renderer
                    .apply_offset(anchor, Transition::Millis(self.options.speed));
                session.step = Step::SettleOnTransitionEnd;
                self.phase = Phase::Animating(session);
                Settle::Continued
            }
            Step::SettleOnTransitionEnd => {
                ctrace!("on_frame ignored: waiting for transition end");
                Settle::Ignored
            }
        }
    }

    /// Host callback: the track's transition finished.
    pub fn on_transition_end(&mut self) -> Settle {
        match self.phase {
            Phase::Animating(Session {
                step: Step::SettleOnTransitionEnd,
                ..
            }) => {
                self.settle();
                Settle::Settled
            }
            _ => {
                ctrace!(pending = ?self.pending(), "on_transition_end ignored");
                Settle::Ignored
            }
        }
    }

    fn enqueue(&mut self, direction: Direction) -> Advance {
        if !self.options.looping && !self.projected_controls().allows(direction) {
            ctrace!(?direction, "request blocked at projected boundary");
            return Advance::Blocked;
        }
        if self.queue.push(direction) {
            ctrace!(?direction, queued = self.queue.len(), "request queued");
            Advance::Queued
        } else {
            cwarn!(?direction, "advance queue full, request dropped");
            Advance::Dropped
        }
    }

    /// Controls at the index the track will reach after every queued request ran.
    fn projected_controls(&self) -> Controls {
        let projected = self
            .track
            .index
            .checked_add_signed(self.queue.net_displacement());
        match projected {
            Some(index) => self.gate.controls_at(index),
            None => Controls {
                prev_enabled: false,
                next_enabled: true,
            },
        }
    }

    fn start(&mut self, direction: Direction) -> Advance {
        debug_assert!(!self.is_animating(), "start while animating");

        if !self.options.looping && !self.controls.allows(direction) {
            ctrace!(?direction, index = self.track.index, "request blocked at boundary");
            return Advance::Blocked;
        }

        let candidate = self
            .track
            .index
            .checked_add_signed(direction.step())
            .and_then(|index| self.model.get(index).copied());
        let Some(item) = candidate else {
            cwarn!(
                ?direction,
                index = self.track.index,
                "advance would leave the padded sequence"
            );
            return Advance::Blocked;
        };

        let wraps = self.options.looping && item.is_clone && self.is_wrap_edge(item.logical_index);
        if wraps {
            self.start_reanchor(direction, item.logical_index, item.original_index);
        } else {
            self.start_simple(direction, item.logical_index);
        }
        Advance::Started
    }

    /// The outermost clone slots: index 0 and the last two (the very last one only becomes
    /// reachable when a single step from the last original lands on it).
    fn is_wrap_edge(&self, index: usize) -> bool {
        index == 0 || index + 2 >= self.model.len()
    }

    fn start_simple(&mut self, direction: Direction, candidate: usize) {
        self.track = TrackState {
            offset: self.model.offset_of(candidate),
            index: candidate,
        };
        self.renderer
            .apply_offset(self.track, Transition::Millis(self.options.speed));
        self.begin(direction, MoveKind::Simple, Step::SettleOnFrame);
    }

    fn start_reanchor(&mut self, direction: Direction, candidate: usize, twin: usize) {
        // The twin's neighbour on the side we come from shows the same content as the current
        // (clone) position.
        let via = if candidate == 0 { twin + 1 } else { twin - 1 };
        let intermediate = TrackState {
            offset: self.model.offset_of(via),
            index: via,
        };
        let anchor = TrackState {
            offset: self.model.offset_of(twin),
            index: twin,
        };

        self.renderer.apply_offset(intermediate, Transition::None);
        self.track = TrackState {
            offset: intermediate.offset,
            index: twin,
        };
        self.begin(direction, MoveKind::Reanchor, Step::HopOnFrame { anchor });
    }

    fn begin(&mut self, direction: Direction, kind: MoveKind, step: Step) {
        ctrace!(?direction, ?kind, index = self.track.index, "transition started");
        self.phase = Phase::Animating(Session {
            direction,
            kind,
            step,
        });
    }

    fn settle(&mut self) {
        self.phase = Phase::Idle;
        ctrace!(index = self.track.index, "transition settled");

        if !self.options.looping {
            self.controls = self.gate.controls_at(self.track.index);
            self.renderer.set_controls(self.controls);
        }

        while let Some(direction) = self.queue.drain_one() {
            if self.start(direction) == Advance::Started {
                break;
            }
        }
    }
}
