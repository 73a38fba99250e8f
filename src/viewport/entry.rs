/// One report from the browser's intersection machinery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[cfg(test)]
impl IntersectionSample {
    pub fn from_ratio(ratio: f64) -> Self {
        IntersectionSample { ratio, is_intersecting: ratio > 0.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The sample did not change anything.
    Unchanged,
    /// First qualifying sample: the target is now permanently seen.
    Entered,
}

/// Latches "seen" the first time a target is visible by at least `threshold`
/// of its area. Never resets, so content does not flicker on scroll-back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryDetector {
    threshold: f64,
    seen: bool,
}

impl EntryDetector {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() { threshold.clamp(0.0, 1.0) } else { 0.0 };
        EntryDetector { threshold, seen: false }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> Transition {
        if self.seen {
            return Transition::Unchanged;
        }
        if sample.is_intersecting && sample.ratio >= self.threshold {
            self.seen = true;
            Transition::Entered
        } else {
            Transition::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_qualifying_sample() {
        let mut detector = EntryDetector::new(0.1);
        let transitions: Vec<Transition> = [0.0, 0.05, 0.12, 0.02]
            .into_iter()
            .map(|ratio| detector.observe(IntersectionSample::from_ratio(ratio)))
            .collect();

        assert_eq!(
            transitions,
            vec![Transition::Unchanged, Transition::Unchanged, Transition::Entered, Transition::Unchanged]
        );
        assert!(detector.is_seen());
    }

    #[test]
    fn exact_threshold_counts() {
        let mut detector = EntryDetector::new(0.25);
        assert_eq!(detector.observe(IntersectionSample::from_ratio(0.25)), Transition::Entered);
    }

    #[test]
    fn zero_threshold_needs_actual_intersection() {
        let mut detector = EntryDetector::new(0.0);
        let edge = IntersectionSample { ratio: 0.0, is_intersecting: false };
        assert_eq!(detector.observe(edge), Transition::Unchanged);

        let touching = IntersectionSample { ratio: 0.0, is_intersecting: true };
        assert_eq!(detector.observe(touching), Transition::Entered);
    }

    #[test]
    fn never_observed_stays_unseen() {
        let detector = EntryDetector::new(0.08);
        assert!(!detector.is_seen());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(EntryDetector::new(4.0).threshold(), 1.0);
        assert_eq!(EntryDetector::new(-1.0).threshold(), 0.0);
        assert_eq!(EntryDetector::new(f64::NAN).threshold(), 0.0);
    }
}
