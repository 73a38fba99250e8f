//! Line-by-line text reveals.
//!
//! Copy is written as plain strings: `\n` starts a new clipped line and
//! `*...*` marks an accent run, e.g. `"Know your health.\n*Not just your data.*"`.

use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Accent(&'a str),
}

pub fn lines(text: &str) -> Vec<&str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty()).collect()
}

pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let pieces: Vec<&str> = line.split('*').collect();
    // An unmatched marker leaves its tail as plain text.
    let balanced = pieces.len() % 2 == 1;
    let last = pieces.len() - 1;

    pieces
        .iter()
        .enumerate()
        .filter(|(_, piece)| !piece.is_empty())
        .map(|(i, piece)| {
            if i % 2 == 1 && (balanced || i != last) {
                Segment::Accent(piece)
            } else {
                Segment::Plain(piece)
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub delay: f64,
    pub stagger: f64,
    pub duration: f64,
    pub blur: bool,
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming { delay: 0.0, stagger: 0.12, duration: 0.8, blur: false }
    }
}

impl RevealTiming {
    pub fn line_delay(&self, index: usize) -> f64 {
        ((self.delay + index as f64 * self.stagger) * 1000.0).round() / 1000.0
    }

    pub fn line_css(&self, index: usize, visible: bool) -> String {
        let delay = self.line_delay(index);
        let curve = Easing::ExpoOut.css();
        let mut transitions = vec![
            format!("transform {}s {} {}s", self.duration, curve, delay),
            format!("opacity {}s {} {}s", self.duration * 0.6, curve, delay),
        ];

        let mut css = if visible {
            "transform: translateY(0); opacity: 1;".to_string()
        } else {
            "transform: translateY(110%); opacity: 0;".to_string()
        };
        if self.blur {
            css.push_str(if visible { " filter: blur(0px);" } else { " filter: blur(8px);" });
            transitions.push(format!("filter {}s {} {}s", self.duration, curve, delay));
        }

        css.push_str(&format!(" transition: {};", transitions.join(", ")));
        css.push_str(if visible { " will-change: auto;" } else { " will-change: transform, opacity;" });
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines_and_skips_blank_lines() {
        assert_eq!(lines("Know your health.\n\n  Not just your data. "), vec!["Know your health.", "Not just your data."]);
        assert_eq!(lines("single"), vec!["single"]);
    }

    #[test]
    fn accent_runs_are_marked() {
        assert_eq!(
            segments("70 markers, *interpreted with care*"),
            vec![Segment::Plain("70 markers, "), Segment::Accent("interpreted with care")]
        );
        assert_eq!(segments("*Built on trust,*"), vec![Segment::Accent("Built on trust,")]);
    }

    #[test]
    fn unmatched_marker_stays_plain() {
        assert_eq!(segments("a *b"), vec![Segment::Plain("a "), Segment::Plain("b")]);
    }

    #[test]
    fn lines_cascade_by_stagger() {
        let timing = RevealTiming { delay: 0.2, stagger: 0.15, ..Default::default() };
        assert_eq!(timing.line_delay(0), 0.2);
        assert_eq!(timing.line_delay(1), 0.35);
        let css = timing.line_css(1, false);
        assert!(css.starts_with("transform: translateY(110%); opacity: 0;"));
        assert!(css.contains("opacity 0.48s"));
        assert!(css.contains("0.35s"));
    }

    #[test]
    fn blur_adds_filter_transition() {
        let timing = RevealTiming { blur: true, ..Default::default() };
        assert!(timing.line_css(0, false).contains("filter: blur(8px)"));
        assert!(timing.line_css(0, true).contains("filter 0.8s"));
    }
}
