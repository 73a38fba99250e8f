/// Length of the crossfade between two background clips.
pub const REEL_FADE_MS: u32 = 1000;

/// Background clip rotation. The active clip plays to its end, then the next
/// one fades in over it for [`REEL_FADE_MS`] and takes its place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reel {
    len: usize,
    pub active: usize,
    pub fading: bool,
}

impl Reel {
    pub fn new(len: usize) -> Self {
        Reel { len, active: 0, fading: false }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clip waiting underneath the active one, wrapping at the end.
    pub fn next(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.active + 1) % self.len
        }
    }

    /// The active clip finished. A single clip never fades, and an ending
    /// that arrives mid-fade is ignored.
    pub fn ended(self) -> Self {
        if self.len < 2 || self.fading {
            return self;
        }
        Reel { fading: true, ..self }
    }

    /// The crossfade ran its course; the next clip becomes the active one.
    pub fn faded(self) -> Self {
        if !self.fading {
            return self;
        }
        Reel { active: self.next(), fading: false, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_rotate_and_wrap() {
        let mut reel = Reel::new(3);
        let mut shown = vec![reel.active];
        for _ in 0..3 {
            reel = reel.ended();
            assert!(reel.fading);
            reel = reel.faded();
            assert!(!reel.fading);
            shown.push(reel.active);
        }
        assert_eq!(shown, vec![0, 1, 2, 0]);
    }

    #[test]
    fn next_clip_sits_under_the_active_one() {
        let reel = Reel { active: 3, ..Reel::new(4) };
        assert_eq!(reel.next(), 0);
        assert_eq!(Reel::new(4).next(), 1);
    }

    #[test]
    fn a_lone_clip_just_loops() {
        let reel = Reel::new(1);
        assert_eq!(reel.ended(), reel);
        assert_eq!(reel.next(), 0);
    }

    #[test]
    fn no_clips_means_no_rotation() {
        let reel = Reel::new(0);
        assert!(reel.is_empty());
        assert_eq!(reel.ended(), reel);
        assert_eq!(reel.next(), 0);
    }

    #[test]
    fn ending_twice_mid_fade_does_not_skip_a_clip() {
        let reel = Reel::new(4).ended().ended();
        assert_eq!(reel.faded().active, 1);
    }

    #[test]
    fn stray_fade_timer_is_ignored() {
        let reel = Reel::new(4);
        assert_eq!(reel.faded(), reel);
    }
}
