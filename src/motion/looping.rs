use super::easing::Easing;
use super::variant::transition;

/// How long after entering the viewport a section hands its cards over to
/// their infinite loops. Covers the longest entrance cascade on the page.
pub const SETTLE_AFTER_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    Idle,
    Entering,
    Looping,
}

impl Default for LoopPhase {
    fn default() -> Self {
        LoopPhase::Idle
    }
}

impl LoopPhase {
    pub fn entered(self) -> Self {
        match self {
            LoopPhase::Idle => LoopPhase::Entering,
            other => other,
        }
    }

    pub fn settled(self) -> Self {
        match self {
            LoopPhase::Entering => LoopPhase::Looping,
            other => other,
        }
    }

    pub fn is_shown(self) -> bool {
        self != LoopPhase::Idle
    }
}

/// A one-shot entrance for a card detail, expressed as raw declarations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub properties: &'static [&'static str],
    pub hidden: &'static str,
    pub shown: &'static str,
    pub duration: f64,
    pub delay: f64,
}

/// The keyframe loop that replaces an entrance once the section settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub keyframes: &'static str,
    pub period: f64,
    pub offset: f64,
}

impl Cue {
    pub const fn new(keyframes: &'static str, period: f64) -> Self {
        Cue { keyframes, period, offset: 0.0 }
    }

    pub fn offset(mut self, seconds: f64) -> Self {
        self.offset = seconds;
        self
    }
}

pub fn phased_css(phase: LoopPhase, entrance: &Entrance, cue: Option<Cue>) -> String {
    match (phase, cue) {
        (LoopPhase::Looping, Some(cue)) => format!(
            "{} animation: {} {}s {} {}s infinite;",
            entrance.shown,
            cue.keyframes,
            cue.period,
            Easing::Smooth.css(),
            cue.offset
        ),
        _ => format!(
            "{} transition: {};",
            if phase.is_shown() { entrance.shown } else { entrance.hidden },
            transition(entrance.properties, entrance.duration, Easing::ExpoOut, entrance.delay)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUE: Entrance = Entrance {
        properties: &["opacity", "transform"],
        hidden: "opacity: 0; transform: translateY(8px);",
        shown: "opacity: 1; transform: translateY(0);",
        duration: 0.7,
        delay: 0.9,
    };

    #[test]
    fn phase_only_moves_forward() {
        let phase = LoopPhase::default();
        assert_eq!(phase.settled(), LoopPhase::Idle);

        let phase = phase.entered();
        assert_eq!(phase, LoopPhase::Entering);
        assert_eq!(phase.entered(), LoopPhase::Entering);

        let phase = phase.settled();
        assert_eq!(phase, LoopPhase::Looping);
        assert_eq!(phase.entered(), LoopPhase::Looping);
        assert_eq!(phase.settled(), LoopPhase::Looping);
    }

    #[test]
    fn entrance_styles_follow_phase() {
        let hidden = phased_css(LoopPhase::Idle, &VALUE, None);
        assert!(hidden.starts_with(VALUE.hidden));
        assert!(hidden.contains("transform 0.7s cubic-bezier(0.16, 1, 0.3, 1) 0.9s"));

        let shown = phased_css(LoopPhase::Entering, &VALUE, Some(Cue::new("labs-value-reveal", 7.5)));
        assert!(shown.starts_with(VALUE.shown));
        assert!(!shown.contains("animation"));
    }

    #[test]
    fn looping_swaps_transition_for_keyframes() {
        let css = phased_css(LoopPhase::Looping, &VALUE, Some(Cue::new("labs-value-reveal", 7.5).offset(0.15)));
        assert_eq!(
            css,
            "opacity: 1; transform: translateY(0); animation: labs-value-reveal 7.5s cubic-bezier(0.4, 0, 0.2, 1) 0.15s infinite;"
        );
    }

    #[test]
    fn looping_without_cue_keeps_shown_state() {
        let css = phased_css(LoopPhase::Looping, &VALUE, None);
        assert!(css.starts_with(VALUE.shown));
    }
}
