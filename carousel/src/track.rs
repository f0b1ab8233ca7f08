use core::marker::PhantomData;

use crate::{Controls, ItemLayout, Slide, SlideModel, TrackState, TrackStyle, Transition};

/// The host side of the track: whatever owns the real presentation objects (DOM nodes, a
/// TUI buffer, a scene graph).
///
/// The carousel never reads back from the surface. All writes go through
/// [`TrackRenderer`].
pub trait Surface<T> {
    /// Replaces the track's children with `slides`, in order.
    fn replace_items(&mut self, slides: &[Slide<T>], layout: ItemLayout);

    /// Writes offset and transition duration together.
    fn apply_style(&mut self, style: TrackStyle);

    /// Forces any pending style writes to be committed (a synchronous layout flush).
    fn flush_layout(&mut self);

    /// Reflects navigation availability on the host's controls.
    fn set_controls(&mut self, controls: Controls) {
        let _ = controls;
    }
}

impl<T, S: Surface<T> + ?Sized> Surface<T> for &mut S {
    fn replace_items(&mut self, slides: &[Slide<T>], layout: ItemLayout) {
        (**self).replace_items(slides, layout);
    }

    fn apply_style(&mut self, style: TrackStyle) {
        (**self).apply_style(style);
    }

    fn flush_layout(&mut self) {
        (**self).flush_layout();
    }

    fn set_controls(&mut self, controls: Controls) {
        (**self).set_controls(controls);
    }
}

/// Sole writer of the track's offset/transition pair.
pub struct TrackRenderer<T, S> {
    surface: S,
    _content: PhantomData<fn(&[Slide<T>])>,
}

impl<T, S: Surface<T>> TrackRenderer<T, S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            _content: PhantomData,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Puts the padded sequence on the track and places it at the initial index, instantly.
    ///
    /// Returns the resulting track state.
    pub fn render(&mut self, model: &SlideModel<T>) -> TrackState {
        let index = model.initial_index();
        let track = TrackState {
            offset: model.offset_of(index),
            index,
        };
        self.surface.replace_items(model.slides(), model.layout());
        self.apply_offset(track, Transition::None);
        track
    }

    /// Writes `track.offset` with `transition`.
    ///
    /// An instant write is flushed before returning, so a following animated write cannot
    /// be merged with it into a single visible motion.
    pub fn apply_offset(&mut self, track: TrackState, transition: Transition) {
        ctrace!(offset = track.offset, index = track.index, ?transition, "apply_offset");
        self.surface.apply_style(TrackStyle {
            offset: track.offset,
            transition,
        });
        if transition.is_instant() {
            self.surface.flush_layout();
        }
    }

    pub fn set_controls(&mut self, controls: Controls) {
        self.surface.set_controls(controls);
    }
}

impl<T, S: Clone> Clone for TrackRenderer<T, S> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
            _content: PhantomData,
        }
    }
}

impl<T, S: core::fmt::Debug> core::fmt::Debug for TrackRenderer<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackRenderer")
            .field("surface", &self.surface)
            .finish()
    }
}
