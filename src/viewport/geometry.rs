//! Pure scroll geometry. All rectangles are measured relative to the top of
//! the viewport, the way `getBoundingClientRect` reports them.

pub const DEFAULT_PARALLAX_SPEED: f64 = -0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Rect { top, height }
    }
}

/// How far `rect` has travelled through the viewport: 0 while its bottom is
/// just entering from below, 1 once its top has left above.
pub fn scroll_progress(rect: Rect, viewport_height: f64) -> f64 {
    let span = viewport_height + rect.height;
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let raw = (viewport_height - rect.top) / span;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Vertical offset in px for a layer drifting at `speed` relative to scroll.
/// Negative speeds lag behind (background feel), positive ones lead.
pub fn parallax_offset(progress: f64, speed: f64) -> f64 {
    (progress - 0.5) * speed * 200.0
}

/// How far the sticky hero has receded into the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recession {
    pub scale: f64,
    pub brightness: f64,
    /// Corner radius in px.
    pub radius: f64,
}

pub fn recession(scroll_y: f64, viewport_height: f64) -> Recession {
    let progress = if viewport_height > 0.0 && scroll_y.is_finite() {
        (scroll_y / viewport_height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Recession {
        scale: 1.0 - progress * 0.12,
        brightness: 1.0 - progress * 0.25,
        radius: progress * 24.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_entering_to_leaving() {
        let vh = 800.0;
        assert_eq!(scroll_progress(Rect::new(800.0, 400.0), vh), 0.0);
        assert_eq!(scroll_progress(Rect::new(-400.0, 400.0), vh), 1.0);
        assert_eq!(scroll_progress(Rect::new(200.0, 400.0), vh), 0.5);
    }

    #[test]
    fn progress_is_clamped_far_outside_viewport() {
        assert_eq!(scroll_progress(Rect::new(10_000.0, 300.0), 900.0), 0.0);
        assert_eq!(scroll_progress(Rect::new(-10_000.0, 300.0), 900.0), 1.0);
    }

    #[test]
    fn progress_is_idempotent() {
        let rect = Rect::new(123.0, 456.0);
        let first = scroll_progress(rect, 789.0);
        for _ in 0..10 {
            assert_eq!(scroll_progress(rect, 789.0), first);
        }
    }

    #[test]
    fn progress_guards_degenerate_geometry() {
        assert_eq!(scroll_progress(Rect::new(0.0, 0.0), 0.0), 0.0);
        assert_eq!(scroll_progress(Rect::new(50.0, 0.0), 0.0), 0.0);
        assert_eq!(scroll_progress(Rect::new(f64::NAN, 10.0), 500.0), 0.0);
        // A zero-height element still progresses against the viewport alone.
        assert_eq!(scroll_progress(Rect::new(400.0, 0.0), 800.0), 0.5);
    }

    #[test]
    fn parallax_is_centred_on_mid_progress() {
        assert_eq!(parallax_offset(0.5, DEFAULT_PARALLAX_SPEED), 0.0);
        assert!((parallax_offset(1.0, DEFAULT_PARALLAX_SPEED) + 15.0).abs() < 1e-9);
        assert!((parallax_offset(0.0, DEFAULT_PARALLAX_SPEED) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn hero_recedes_over_one_viewport() {
        assert_eq!(recession(0.0, 800.0), Recession { scale: 1.0, brightness: 1.0, radius: 0.0 });

        let half = recession(400.0, 800.0);
        assert!((half.scale - 0.94).abs() < 1e-9);
        assert!((half.brightness - 0.875).abs() < 1e-9);
        assert!((half.radius - 12.0).abs() < 1e-9);

        let past = recession(5_000.0, 800.0);
        assert!((past.scale - 0.88).abs() < 1e-9);
        assert!((past.radius - 24.0).abs() < 1e-9);
    }

    #[test]
    fn recession_without_viewport_stays_at_rest() {
        assert_eq!(recession(300.0, 0.0), recession(0.0, 800.0));
    }
}
