//! Scroll-pinned horizontal carousel.
//!
//! A tall spacer reserves `viewport + overflow` pixels of vertical scroll and a
//! sticky frame inside it stays pinned while the page scrolls through the
//! spacer. Progress through that travel maps linearly onto the track's
//! horizontal scroll offset.

use super::geometry::Rect;
use crate::motion::Easing;

/// Pixel measurements that the mapping depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    pub viewport_height: f64,
    /// `scrollWidth` of the track.
    pub track_width: f64,
    /// `clientWidth` of the track.
    pub frame_width: f64,
}

impl TrackLayout {
    pub fn overflow(&self) -> f64 {
        let overflow = self.track_width - self.frame_width;
        if overflow.is_finite() {
            overflow.max(0.0)
        } else {
            0.0
        }
    }

    pub fn spacer_height(&self) -> f64 {
        self.viewport_height.max(0.0) + self.overflow()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinnedTrack {
    layout: Option<TrackLayout>,
}

impl PinnedTrack {
    /// Stores fresh measurements. Returns true when the reserved spacer height
    /// changed by at least a pixel and therefore needs re-rendering.
    pub fn relayout(&mut self, layout: TrackLayout) -> bool {
        let changed = match self.layout {
            Some(previous) => (previous.spacer_height() - layout.spacer_height()).abs() >= 1.0,
            None => true,
        };
        self.layout = Some(layout);
        changed
    }

    pub fn spacer_height(&self) -> Option<f64> {
        self.layout.map(|layout| layout.spacer_height())
    }

    /// Progress through the pinned travel, or `None` while the spacer has no
    /// usable height yet (first paint, nothing overflowing).
    pub fn progress(&self, spacer: Rect) -> Option<f64> {
        let layout = self.layout?;
        let travel = spacer.height - layout.viewport_height;
        if !(travel > 0.0) || !spacer.top.is_finite() {
            return None;
        }
        Some((-spacer.top / travel).clamp(0.0, 1.0))
    }

    /// Horizontal scroll offset for the track.
    pub fn offset(&self, spacer: Rect) -> Option<f64> {
        let progress = self.progress(spacer)?;
        let overflow = self.layout?.overflow();
        if overflow <= 0.0 {
            return None;
        }
        Some(progress * overflow)
    }

    /// Document scroll position at which the track reaches `progress`.
    pub fn scroll_y_for(&self, spacer_document_top: f64, spacer_height: f64, progress: f64) -> Option<f64> {
        let layout = self.layout?;
        let travel = spacer_height - layout.viewport_height;
        if !(travel > 0.0) {
            return None;
        }
        Some(spacer_document_top + travel * progress.clamp(0.0, 1.0))
    }
}

/// Which card the carousel is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselIndex {
    count: usize,
    active: usize,
}

impl CarouselIndex {
    pub fn new(count: usize) -> Self {
        CarouselIndex { count, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Nearest valid index, or `None` for an empty carousel.
    pub fn clamp(&self, requested: isize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = (self.count - 1) as isize;
        Some(requested.clamp(0, last) as usize)
    }

    pub fn go_to(&mut self, requested: isize) -> Option<usize> {
        let index = self.clamp(requested)?;
        self.active = index;
        Some(index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.active as isize + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.active as isize - 1)
    }

    pub fn progress_of(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        index.min(self.count - 1) as f64 / (self.count - 1) as f64
    }

    pub fn index_at(&self, progress: f64) -> usize {
        if self.count <= 1 || !progress.is_finite() {
            return 0;
        }
        (progress.clamp(0.0, 1.0) * (self.count - 1) as f64).round() as usize
    }

    /// Follows scroll progress. Returns true when the active card changed.
    pub fn sync(&mut self, progress: f64) -> bool {
        let index = self.index_at(progress);
        let changed = index != self.active;
        self.active = index;
        changed
    }
}

/// Emphasis in [0,1] for a card whose centre sits `distance` px from the
/// frame's centre: 1 when centred, easing down to 0 one card-width away.
pub fn focus_weight(distance: f64, card_width: f64) -> f64 {
    if !(card_width > 0.0) || !distance.is_finite() {
        return 1.0;
    }
    let closeness = 1.0 - (distance.abs() / card_width).min(1.0);
    Easing::QuartOut.sample(closeness)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TrackLayout {
        TrackLayout { viewport_height: 800.0, track_width: 3000.0, frame_width: 1000.0 }
    }

    #[test]
    fn spacer_reserves_viewport_plus_overflow() {
        assert_eq!(layout().overflow(), 2000.0);
        assert_eq!(layout().spacer_height(), 2800.0);

        let narrow = TrackLayout { track_width: 600.0, ..layout() };
        assert_eq!(narrow.overflow(), 0.0);
        assert_eq!(narrow.spacer_height(), 800.0);
    }

    #[test]
    fn unknown_spacer_height_is_a_no_op() {
        let mut track = PinnedTrack::default();
        assert_eq!(track.offset(Rect::new(-100.0, 2800.0)), None);

        track.relayout(layout());
        // First paint: the spacer has not been given its height yet.
        assert_eq!(track.offset(Rect::new(0.0, 0.0)), None);
        assert_eq!(track.offset(Rect::new(-50.0, 800.0)), None);
    }

    #[test]
    fn vertical_travel_maps_linearly_to_horizontal_offset() {
        let mut track = PinnedTrack::default();
        track.relayout(layout());
        let height = layout().spacer_height();

        assert_eq!(track.offset(Rect::new(300.0, height)), Some(0.0));
        assert_eq!(track.offset(Rect::new(0.0, height)), Some(0.0));
        assert_eq!(track.offset(Rect::new(-500.0, height)), Some(500.0));
        assert_eq!(track.offset(Rect::new(-2000.0, height)), Some(2000.0));
        assert_eq!(track.offset(Rect::new(-9000.0, height)), Some(2000.0));
    }

    #[test]
    fn relayout_reports_height_changes_only() {
        let mut track = PinnedTrack::default();
        assert!(track.relayout(layout()));
        assert!(!track.relayout(layout()));
        assert!(!track.relayout(TrackLayout { track_width: 3000.4, ..layout() }));
        assert!(track.relayout(TrackLayout { viewport_height: 700.0, ..layout() }));
        assert_eq!(track.spacer_height(), Some(2700.0));
    }

    #[test]
    fn content_reflow_regrows_spacer_at_same_viewport() {
        let mut track = PinnedTrack::default();
        track.relayout(layout());

        // Cards reflowed wider; the window itself never changed.
        let reflowed = TrackLayout { track_width: 3400.0, ..layout() };
        assert!(track.relayout(reflowed));
        assert_eq!(track.spacer_height(), Some(3200.0));
        assert_eq!(track.offset(Rect::new(-1200.0, 3200.0)), Some(1200.0));
    }

    #[test]
    fn scroll_target_inverts_the_mapping() {
        let mut track = PinnedTrack::default();
        track.relayout(layout());
        let height = layout().spacer_height();

        assert_eq!(track.scroll_y_for(1200.0, height, 0.0), Some(1200.0));
        assert_eq!(track.scroll_y_for(1200.0, height, 0.5), Some(2200.0));
        assert_eq!(track.scroll_y_for(1200.0, height, 3.0), Some(3200.0));
        assert_eq!(track.scroll_y_for(1200.0, 0.0, 0.5), None);
    }

    #[test]
    fn index_requests_clamp_into_range() {
        let mut index = CarouselIndex::new(4);
        assert_eq!(index.go_to(-3), Some(0));
        assert_eq!(index.go_to(4), Some(3));
        assert_eq!(index.go_to(99), Some(3));
        assert_eq!(index.active(), 3);
        assert_eq!(index.next(), Some(3));
        assert_eq!(index.prev(), Some(2));
    }

    #[test]
    fn empty_carousel_has_no_index() {
        let mut index = CarouselIndex::new(0);
        assert_eq!(index.go_to(0), None);
        assert_eq!(index.next(), None);
        assert_eq!(index.active(), 0);
    }

    #[test]
    fn progress_and_index_agree() {
        let mut index = CarouselIndex::new(3);
        assert_eq!(index.progress_of(1), 0.5);
        assert_eq!(index.index_at(0.2), 0);
        assert_eq!(index.index_at(0.3), 1);
        assert_eq!(index.index_at(1.0), 2);
        assert!(index.sync(0.9));
        assert!(!index.sync(0.95));
        assert_eq!(index.active(), 2);
        assert_eq!(CarouselIndex::new(1).progress_of(0), 0.0);
    }

    #[test]
    fn focus_peaks_at_centre() {
        assert_eq!(focus_weight(0.0, 400.0), 1.0);
        assert_eq!(focus_weight(400.0, 400.0), 0.0);
        assert_eq!(focus_weight(-900.0, 400.0), 0.0);
        let near = focus_weight(100.0, 400.0);
        assert!(near > 0.75 && near < 1.0);
    }
}
