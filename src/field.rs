use serde::{Deserialize, Serialize};

use crate::config::MapperConfig;

/// A point on the idealized 0-100 grid, before safe-margin adjustment.
/// The dynamic zones legitimately produce values outside [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealPoint {
    pub x: f32,
    pub y: f32,
}

impl IdealPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The centre of the grid, used when no zone is defined for a position.
    pub const fn centered() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

/// How the consumer should anchor a marker on its render coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerAnchor {
    /// Centre the marker horizontally on `left`; `top` is the marker's top edge.
    CenterX,
    /// Centre the marker on both axes.
    Center,
}

/// Final surface coordinate in percentage units of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderCoord {
    pub top: f32,
    pub left: f32,
    pub anchor: MarkerAnchor,
}

impl RenderCoord {
    /// Fixed fallback for players whose position has no table or zone.
    /// Deliberately bypasses the inset transform so the marker lands dead
    /// centre of the surface rather than centre of the safe zone.
    pub const fn centered() -> Self {
        Self {
            top: 50.0,
            left: 50.0,
            anchor: MarkerAnchor::Center,
        }
    }
}

/// Compresses the idealized 0-100 grid into the sub-rectangle left inside
/// the configured inset margins. Pure transform, no clamping: extreme zone
/// inputs are allowed to land outside the surface.
#[derive(Debug, Clone)]
pub struct FieldMapper {
    inset_top: f32,
    inset_left: f32,
    width_ratio: f32,
    height_ratio: f32,
}

impl FieldMapper {
    pub fn new(config: &MapperConfig) -> Self {
        Self {
            inset_top: config.inset_top,
            inset_left: config.inset_left,
            width_ratio: (100.0 - config.inset_left - config.inset_right) / 100.0,
            height_ratio: (100.0 - config.inset_top - config.inset_bottom) / 100.0,
        }
    }

    pub fn map(&self, point: IdealPoint) -> RenderCoord {
        RenderCoord {
            left: self.inset_left + point.x * self.width_ratio,
            top: self.inset_top + point.y * self.height_ratio,
            anchor: MarkerAnchor::CenterX,
        }
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(&MapperConfig::default())
    }
}
