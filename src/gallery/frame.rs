//! Per-frame snapshot of a gallery for the host to draw.

use crate::constants::VISIBLE_OFFSET_MAX;
use crate::input::DragState;

use super::GalleryState;

/// Layout role of a laid-out slide, by circular distance from center.
/// Hosts map these to scale, opacity, and stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideRole {
    /// The centered slide
    Center,
    /// Directly beside the center
    Near,
    /// Outermost slide still laid out
    Edge,
}

impl SlideRole {
    fn from_offset(offset: i32) -> Option<Self> {
        match offset.abs() {
            0 => Some(Self::Center),
            1 => Some(Self::Near),
            distance if distance <= VISIBLE_OFFSET_MAX => Some(Self::Edge),
            _ => None,
        }
    }
}

/// One slide laid out this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideFrame {
    /// Which gallery image this slide shows
    pub index: usize,
    /// Signed circular distance from the centered slide
    pub offset: i32,
    pub role: SlideRole,
}

/// Everything a host needs to draw one gallery right now. Slides further
/// than [`VISIBLE_OFFSET_MAX`] from center are left out entirely.
#[derive(Clone, Debug)]
pub struct GalleryFrame {
    pub current: usize,
    pub transition_ms: u64,
    pub dragging: bool,
    /// Live pointer displacement in pixels while a drag is held, zero
    /// otherwise. Hosts add this to the centered slide's position.
    pub drag_offset_px: f32,
    pub slides: Vec<SlideFrame>,
}

impl GalleryFrame {
    /// Snapshot `gallery`, folding in the live drag displacement if a drag
    /// is in progress.
    pub fn compose(gallery: &GalleryState, drag: &DragState) -> Self {
        let slides = (0..gallery.len())
            .filter_map(|index| {
                let offset = gallery.offset_of(index);
                SlideRole::from_offset(offset).map(|role| SlideFrame {
                    index,
                    offset,
                    role,
                })
            })
            .collect();
        Self {
            current: gallery.current(),
            transition_ms: gallery.transition_ms(),
            dragging: drag.is_dragging(),
            drag_offset_px: drag.offset_px(),
            slides,
        }
    }
}
