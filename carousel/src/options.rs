use alloc::format;

use crate::{Error, Result};

/// Configuration for [`crate::TransitionController`].
///
/// With `feature = "serde"`, this type deserializes from the same object shape a page would
/// pass to a slider constructor (`loop`, `speed`, `autoplay`, `margin`, `numOfItems`,
/// `duration`); every missing key falls back to its default.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselOptions {
    /// Enables infinite wraparound.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Animated transition duration in milliseconds.
    pub speed: u64,
    /// Enables the autoplay ticker (driven by the adapter).
    pub autoplay: bool,
    /// Spacing around every item, in pixels. Only affects [`crate::ItemLayout`].
    pub margin: f32,
    /// Number of items visible at once; `item_width = container_width / num_of_items`.
    pub num_of_items: usize,
    /// Autoplay tick period in milliseconds.
    pub duration: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            looping: false,
            speed: 1000,
            autoplay: false,
            margin: 30.0,
            num_of_items: 1,
            duration: 1000,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_speed(mut self, speed_ms: u64) -> Self {
        self.speed = speed_ms;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_num_of_items(mut self, num_of_items: usize) -> Self {
        self.num_of_items = num_of_items;
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration = duration_ms;
        self
    }

    /// Checks the options against a measured container width and returns the item width.
    pub fn item_width(&self, container_width: f32) -> Result<f32> {
        self.validate()?;
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(Error::invalid(format!(
                "container width must be positive, got {container_width}"
            )));
        }
        Ok(container_width / self.num_of_items as f32)
    }

    /// Checks the width-independent options.
    pub fn validate(&self) -> Result<()> {
        if self.num_of_items == 0 {
            return Err(Error::invalid("numOfItems must be at least 1"));
        }
        if self.speed == 0 {
            return Err(Error::invalid("speed must be at least 1ms"));
        }
        if self.autoplay && self.duration == 0 {
            return Err(Error::invalid("autoplay duration must be at least 1ms"));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::invalid(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}
