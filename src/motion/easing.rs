/// Named timing curves shared by every transition on the page.
///
/// Each curve is a CSS `cubic-bezier` and can also be evaluated numerically,
/// so frame-driven effects use exactly the same shape as declarative ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Dramatic deceleration, used for hero reveals.
    ExpoOut,
    /// Smooth deceleration for general content.
    QuartOut,
    /// Slight overshoot.
    Spring,
    /// Symmetric ease used by looping keyframes.
    Smooth,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::ExpoOut
    }
}

impl Easing {
    pub const fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::ExpoOut => (0.16, 1.0, 0.3, 1.0),
            Easing::QuartOut => (0.25, 1.0, 0.5, 1.0),
            Easing::Spring => (0.34, 1.56, 0.64, 1.0),
            Easing::Smooth => (0.4, 0.0, 0.2, 1.0),
        }
    }

    pub fn css(self) -> String {
        let (x1, y1, x2, y2) = self.control_points();
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }

    /// Evaluates the curve at time fraction `x` (clamped to [0,1]).
    pub fn sample(self, x: f64) -> f64 {
        if !x.is_finite() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let t = solve_t(x, x1, x2);
        bezier(t, y1, y2)
    }
}

fn bezier(t: f64, a1: f64, a2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
}

fn bezier_slope(t: f64, a1: f64, a2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

// x(t) is monotonic for x1, x2 in [0,1], so Newton with a bisection
// fallback always converges.
fn solve_t(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut t = x;
    for _ in 0..8 {
        let err = bezier(t, x1, x2) - x;
        if err.abs() < EPSILON {
            return t;
        }
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..40 {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [Easing::ExpoOut, Easing::QuartOut, Easing::Spring, Easing::Smooth];

    #[test]
    fn css_matches_control_points() {
        assert_eq!(Easing::ExpoOut.css(), "cubic-bezier(0.16, 1, 0.3, 1)");
        assert_eq!(Easing::QuartOut.css(), "cubic-bezier(0.25, 1, 0.5, 1)");
        assert_eq!(Easing::Spring.css(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
        assert_eq!(Easing::Smooth.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn curves_start_and_end_at_rest() {
        for easing in ALL {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
            assert_eq!(easing.sample(-3.0), 0.0);
            assert_eq!(easing.sample(7.0), 1.0);
            assert_eq!(easing.sample(f64::NAN), 0.0);
        }
    }

    #[test]
    fn expo_out_front_loads_motion() {
        let mid = Easing::ExpoOut.sample(0.5);
        assert!(mid > 0.85, "expected most of the motion done at half time, got {mid}");

        let mut previous = 0.0;
        for step in 1..=50 {
            let value = Easing::ExpoOut.sample(step as f64 / 50.0);
            assert!(value + 1e-9 >= previous);
            previous = value;
        }
    }

    #[test]
    fn spring_overshoots_before_settling() {
        let peak = (1..100)
            .map(|step| Easing::Spring.sample(step as f64 / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "spring should overshoot, peak was {peak}");
    }

    #[test]
    fn smooth_eases_in_before_catching_up() {
        assert!(Easing::Smooth.sample(0.25) < 0.25);
        assert!(Easing::Smooth.sample(0.75) > 0.9);
    }
}
