use alloc::format;
use alloc::vec::Vec;

use crate::{Error, ItemLayout, Result, Slide, SlideItem};

/// The clone-padded slide sequence.
///
/// Layout: `[clones_before, originals, clones_after]`, where each clone band holds half of
/// the clone pool. An odd number of originals doubles the pool (two full copies), so every
/// band is at least half the original set wide.
///
/// The model is immutable once built; every other component addresses slides by logical
/// index.
#[derive(Clone, Debug)]
pub struct SlideModel<T> {
    slides: Vec<Slide<T>>,
    original_count: usize,
    initial_index: usize,
    item_width: f32,
    layout: ItemLayout,
}

impl<T: Clone> SlideModel<T> {
    pub fn build(
        items: impl IntoIterator<Item = T>,
        item_width: f32,
        margin: f32,
    ) -> Result<Self> {
        let originals: Vec<T> = items.into_iter().collect();
        if originals.is_empty() {
            return Err(Error::invalid("slider needs at least one slide"));
        }
        if !item_width.is_finite() || item_width <= 0.0 {
            return Err(Error::invalid(format!(
                "item width must be positive, got {item_width}"
            )));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::invalid(format!(
                "margin must be a non-negative number, got {margin}"
            )));
        }

        let n = originals.len();
        let loop_factor = if n % 2 == 0 { 1 } else { 2 };
        let total_clones = n * loop_factor;
        let range = total_clones / 2;

        // Pool position `p` is a copy of original `p % n`. The band in front of the originals
        // takes the pool's tail so its last clone shows the last original.
        let pool_source = |p: usize| p % n;
        let before = (total_clones - range..total_clones).map(pool_source);
        let after = (0..range).map(pool_source);

        let mut slides = Vec::with_capacity(n + total_clones);
        for source in before {
            slides.push((source, true));
        }
        for source in 0..n {
            slides.push((source, false));
        }
        for source in after {
            slides.push((source, true));
        }

        let initial_index = range;
        let slides = slides
            .into_iter()
            .enumerate()
            .map(|(logical_index, (source, is_clone))| Slide {
                item: SlideItem {
                    logical_index,
                    is_clone,
                    original_index: initial_index + source,
                    source,
                },
                content: originals[source].clone(),
            })
            .collect::<Vec<_>>();

        cdebug!(
            originals = n,
            clones = total_clones,
            initial_index,
            item_width,
            "SlideModel::build"
        );

        Ok(Self {
            slides,
            original_count: n,
            initial_index,
            item_width,
            layout: ItemLayout {
                margin,
                width: (item_width - margin * 2.0).max(0.0),
            },
        })
    }
}

impl<T> SlideModel<T> {
    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&SlideItem> {
        self.slides.get(index).map(|s| &s.item)
    }

    /// Length of the padded sequence.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn clone_count(&self) -> usize {
        self.slides.len() - self.original_count
    }

    /// Logical index of the first original; the track starts here.
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    pub fn first_original(&self) -> usize {
        self.initial_index
    }

    pub fn last_original(&self) -> usize {
        self.initial_index + self.original_count - 1
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn layout(&self) -> ItemLayout {
        self.layout
    }

    /// Resting offset for a logical index.
    pub fn offset_of(&self, index: usize) -> f32 {
        -(index as f32) * self.item_width
    }

    /// 0-based position (in the caller's input) of the item shown at `index`.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.get(index).map(|item| item.source)
    }
}
