//! Cue entries and their validity window.

use cueforge_common::{Result, TimeUs};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of cue text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Start,
    Center,
    End,
}

/// Which part of the cue box a line or position value refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// How [`Cue::line`] is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Fraction of the viewport height.
    #[default]
    Fraction,
    /// Whole line number, negative values count from the bottom.
    Number,
}

/// Vertical writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalType {
    RightToLeft,
    LeftToRight,
}

/// A single cue entry.
///
/// The decoder treats cues as opaque values; layout fields are carried
/// through for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cue {
    /// Cue text, absent for purely positional cues
    pub text: Option<String>,
    /// Text alignment within the cue box
    pub text_alignment: Option<TextAlignment>,
    /// Line position, see [`Cue::line_type`]
    pub line: Option<f32>,
    pub line_type: LineType,
    pub line_anchor: Anchor,
    /// Horizontal position as a fraction of the viewport width
    pub position: Option<f32>,
    pub position_anchor: Anchor,
    /// Box width as a fraction of the viewport width
    pub size: Option<f32>,
    /// Window colour as 0xAARRGGBB
    pub window_color: Option<u32>,
    pub vertical_type: Option<VerticalType>,
}

impl Cue {
    /// Create a text-only cue with default layout.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// An immutable set of cues plus the window in which they are shown.
///
/// A `None` duration means the cues stay active until something replaces
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct CuesWithTiming {
    cues: Vec<Cue>,
    start_time_us: TimeUs,
    duration_us: Option<i64>,
    end_time_us: Option<TimeUs>,
}

impl CuesWithTiming {
    /// Build a cue window.
    ///
    /// # Errors
    ///
    /// Fails if `start_time_us` is unset, or if a finite duration is
    /// negative or overflows the end time.
    pub fn new(cues: Vec<Cue>, start_time_us: TimeUs, duration_us: Option<i64>) -> Result<Self> {
        if !start_time_us.is_set() {
            return Err(cueforge_common::Error::UnsetTime);
        }
        let end_time_us = duration_us
            .map(|duration| start_time_us.checked_add_duration(duration))
            .transpose()?;

        Ok(Self {
            cues,
            start_time_us,
            duration_us,
            end_time_us,
        })
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn start_time_us(&self) -> TimeUs {
        self.start_time_us
    }

    /// Window length, `None` when unbounded.
    pub fn duration_us(&self) -> Option<i64> {
        self.duration_us
    }

    /// `start + duration`, `None` when unbounded.
    pub fn end_time_us(&self) -> Option<TimeUs> {
        self.end_time_us
    }
}
