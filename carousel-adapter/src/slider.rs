use carousel::{
    Advance, CarouselOptions, Controls, Direction, Result, Settle, Surface, TransitionController,
};

use crate::Autoplay;

/// A framework-neutral slider: a [`TransitionController`] plus the optional autoplay ticker.
///
/// This type does not hold any timers or event listeners. Adapters drive it by calling:
/// - `next` / `prev` from the forward/backward controls
/// - `on_frame` from the next-paint-frame callback after a write
/// - `on_transition_end` from the track's transition-finished event
/// - `tick(now_ms)` from a timer or frame loop (autoplay)
///
/// Autoplay requests go through the same entry point as user input: while a transition is in
/// flight they are queued (or dropped when the queue is full).
#[derive(Clone, Debug)]
pub struct Slider<T, S> {
    controller: TransitionController<T, S>,
    autoplay: Option<Autoplay>,
}

impl<T: Clone, S: Surface<T>> Slider<T, S> {
    /// Validates `options`, renders `items` onto `surface` and arms autoplay (if enabled).
    ///
    /// `container_width` is the measured width of the slider's viewport; it is read once.
    pub fn new(
        options: CarouselOptions,
        container_width: f32,
        items: impl IntoIterator<Item = T>,
        surface: S,
        now_ms: u64,
    ) -> Result<Self> {
        let controller = TransitionController::new(options, container_width, items, surface)?;
        let autoplay = options
            .autoplay
            .then(|| Autoplay::new(options.duration, now_ms));
        adebug!(
            autoplay = options.autoplay,
            duration = options.duration,
            "Slider::new"
        );
        Ok(Self {
            controller,
            autoplay,
        })
    }
}

impl<T, S: Surface<T>> Slider<T, S> {
    pub fn controller(&self) -> &TransitionController<T, S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TransitionController<T, S> {
        &mut self.controller
    }

    pub fn into_controller(self) -> TransitionController<T, S> {
        self.controller
    }

    pub fn surface(&self) -> &S {
        self.controller.surface()
    }

    pub fn index(&self) -> usize {
        self.controller.index()
    }

    /// Position (in the input sequence) of the item the track shows or is moving to.
    pub fn displayed(&self) -> usize {
        self.controller.displayed()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn controls(&self) -> Controls {
        self.controller.controls()
    }

    pub fn next(&mut self) -> Advance {
        self.advance(Direction::Next)
    }

    pub fn prev(&mut self) -> Advance {
        self.advance(Direction::Prev)
    }

    pub fn advance(&mut self, direction: Direction) -> Advance {
        self.controller.request_advance(direction)
    }

    pub fn on_frame(&mut self) -> Settle {
        self.controller.on_frame()
    }

    pub fn on_transition_end(&mut self) -> Settle {
        self.controller.on_transition_end()
    }

    pub fn autoplay(&self) -> Option<&Autoplay> {
        self.autoplay.as_ref()
    }

    pub fn pause_autoplay(&mut self) {
        if let Some(autoplay) = &mut self.autoplay {
            autoplay.pause();
        }
    }

    pub fn resume_autoplay(&mut self, now_ms: u64) {
        if let Some(autoplay) = &mut self.autoplay {
            autoplay.resume(now_ms);
        }
    }

    /// Advances the autoplay clock.
    ///
    /// Returns what happened to the issued `Next` request, or `None` when no tick was due (or
    /// autoplay is off).
    pub fn tick(&mut self, now_ms: u64) -> Option<Advance> {
        let autoplay = self.autoplay.as_mut()?;
        if !autoplay.tick(now_ms) {
            return None;
        }
        let outcome = self.controller.request_advance(Direction::Next);
        atrace!(now_ms, ?outcome, "autoplay tick");
        Some(outcome)
    }
}
