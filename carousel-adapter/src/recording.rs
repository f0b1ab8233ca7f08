use alloc::vec::Vec;

use carousel::{Controls, ItemLayout, Slide, SlideItem, Surface, TrackStyle};

/// One style write as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleWrite {
    pub style: TrackStyle,
    /// Whether a layout flush committed this write before the next one arrived.
    pub flushed: bool,
}

/// An in-memory [`Surface`] that keeps the latest presentation state and a full write log.
///
/// Useful as the backing store of TUI/canvas hosts (render from `items()` and `style()`), and
/// for asserting what a real DOM binding would have received.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    items: Vec<SlideItem>,
    layout: ItemLayout,
    writes: Vec<StyleWrite>,
    controls: Option<Controls>,
    flushes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The track's children, in order.
    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn layout(&self) -> ItemLayout {
        self.layout
    }

    /// The style currently applied to the track.
    pub fn style(&self) -> Option<TrackStyle> {
        self.writes.last().map(|w| w.style)
    }

    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Last controls state pushed by the carousel. `None` for looping carousels, which never
    /// touch the controls.
    pub fn controls(&self) -> Option<Controls> {
        self.controls
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Instant writes that were followed by another write without a flush in between.
    ///
    /// A browser would merge such a jump into the next animated motion. The carousel always
    /// flushes instant writes, so this is expected to stay empty.
    pub fn coalesced_jumps(&self) -> impl Iterator<Item = &StyleWrite> + '_ {
        let len = self.writes.len();
        self.writes
            .iter()
            .take(len.saturating_sub(1))
            .filter(|w| w.style.transition.is_instant() && !w.flushed)
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
        self.flushes = 0;
    }
}

impl<T> Surface<T> for RecordingSurface {
    fn replace_items(&mut self, slides: &[Slide<T>], layout: ItemLayout) {
        self.items = slides.iter().map(|s| s.item).collect();
        self.layout = layout;
    }

    fn apply_style(&mut self, style: TrackStyle) {
        self.writes.push(StyleWrite {
            style,
            flushed: false,
        });
    }

    fn flush_layout(&mut self) {
        self.flushes += 1;
        if let Some(last) = self.writes.last_mut() {
            last.flushed = true;
        }
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = Some(controls);
    }
}
