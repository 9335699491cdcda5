//! Alignment guides and drag snapping.
//!
//! Guides are candidate snap lines (another panel's edge, a canvas edge).
//! They only influence dragging; resizing never snaps.

use finboard_common::types::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideKind {
    /// A vertical line at some x. Only affects horizontal position.
    Vertical,
    /// A horizontal line at some y. Only affects vertical position.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentGuide {
    #[serde(rename = "type")]
    pub kind: GuideKind,
    pub position: f64,
}

impl AlignmentGuide {
    pub const fn vertical(x: f64) -> Self {
        Self {
            kind: GuideKind::Vertical,
            position: x,
        }
    }

    pub const fn horizontal(y: f64) -> Self {
        Self {
            kind: GuideKind::Horizontal,
            position: y,
        }
    }
}

// =============================================================================
// SNAPPING
// =============================================================================

/// Outcome of snapping: the adjusted position and the guide that decided
/// each axis, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub position: Point,
    pub vertical: Option<AlignmentGuide>,
    pub horizontal: Option<AlignmentGuide>,
}

impl Snap {
    pub const fn unsnapped(position: Point) -> Self {
        Self {
            position,
            vertical: None,
            horizontal: None,
        }
    }

    /// The deciding guides, vertical first.
    pub fn guides(&self) -> impl Iterator<Item = AlignmentGuide> {
        self.vertical.into_iter().chain(self.horizontal)
    }
}

/// Snap a candidate drag position onto nearby guides.
///
/// For every guide, the leading edge (left/top) is checked first, then the
/// trailing edge (right/bottom). Both checks use the unsnapped candidate and
/// the last match wins, across edges and across guides.
pub fn snap(candidate: Point, size: Size, guides: &[AlignmentGuide], threshold: f64) -> Snap {
    let mut snap = Snap::unsnapped(candidate);
    for guide in guides {
        match guide.kind {
            GuideKind::Vertical => {
                if (candidate.x - guide.position).abs() < threshold {
                    snap.position.x = guide.position;
                    snap.vertical = Some(*guide);
                }
                if (candidate.x + size.width - guide.position).abs() < threshold {
                    snap.position.x = guide.position - size.width;
                    snap.vertical = Some(*guide);
                }
            }
            GuideKind::Horizontal => {
                if (candidate.y - guide.position).abs() < threshold {
                    snap.position.y = guide.position;
                    snap.horizontal = Some(*guide);
                }
                if (candidate.y + size.height - guide.position).abs() < threshold {
                    snap.position.y = guide.position - size.height;
                    snap.horizontal = Some(*guide);
                }
            }
        }
    }
    snap
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Build guides from the canvas edges and the edges of `others`.
///
/// Vertical guides sit at x = 0, x = `viewport_width` and every other
/// panel's left and right edge; horizontal guides at y = 0 and every other
/// panel's top and bottom edge. Duplicates are dropped.
pub fn derive_guides(others: impl IntoIterator<Item = Rect>, viewport_width: f64) -> Vec<AlignmentGuide> {
    let mut guides = vec![
        AlignmentGuide::vertical(0.0),
        AlignmentGuide::vertical(viewport_width),
        AlignmentGuide::horizontal(0.0),
    ];
    for rect in others {
        guides.push(AlignmentGuide::vertical(rect.x));
        guides.push(AlignmentGuide::vertical(rect.right()));
        guides.push(AlignmentGuide::horizontal(rect.y));
        guides.push(AlignmentGuide::horizontal(rect.bottom()));
    }
    guides.retain(|g| g.position.is_finite());
    guides.sort_by(|a, b| {
        (a.kind as u8)
            .cmp(&(b.kind as u8))
            .then(a.position.total_cmp(&b.position))
    });
    guides.dedup();
    guides
}

// =============================================================================
// TESTS
// =============================================================================
