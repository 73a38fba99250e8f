use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
}

impl Transform {
    pub fn css(&self) -> String {
        match self {
            Transform::TranslateX(px) => format!("translateX({}px)", px),
            Transform::TranslateY(px) => format!("translateY({}px)", px),
            Transform::Scale(factor) => format!("scale({})", factor),
        }
    }
}

/// One end of an entrance transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub opacity: f64,
    pub transform: Option<Transform>,
    /// Blur radius in px, emitted as a `filter`.
    pub blur: Option<f64>,
}

impl Style {
    fn opaque() -> Self {
        Style { opacity: 1.0, transform: None, blur: None }
    }

    fn hidden_with(transform: Transform) -> Self {
        Style { opacity: 0.0, transform: Some(transform), blur: None }
    }

    fn shown_with(transform: Transform) -> Self {
        Style { opacity: 1.0, transform: Some(transform), blur: None }
    }

    fn blurred(mut self, px: f64) -> Self {
        self.blur = Some(px);
        self
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        if let Some(transform) = &self.transform {
            css.push_str(&format!(" transform: {};", transform.css()));
        }
        if let Some(px) = self.blur {
            css.push_str(&format!(" filter: blur({}px);", px));
        }
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    FadeUp,
    FadeDown,
    ScaleUp,
    BlurUp,
    BlurIn,
    /// Enters moving leftwards, from `+x`.
    SlideLeft,
    /// Enters moving rightwards, from `-x`.
    SlideRight,
    None,
}

impl Variant {
    pub fn hidden(self, y: f64, x: f64) -> Style {
        match self {
            Variant::FadeUp => Style::hidden_with(Transform::TranslateY(y)),
            Variant::FadeDown => Style::hidden_with(Transform::TranslateY(-y)),
            Variant::ScaleUp => Style::hidden_with(Transform::Scale(0.92)),
            Variant::BlurUp => Style::hidden_with(Transform::TranslateY(y)).blurred(12.0),
            Variant::BlurIn => Style::hidden_with(Transform::Scale(0.95)).blurred(16.0),
            Variant::SlideLeft => Style::hidden_with(Transform::TranslateX(x)),
            Variant::SlideRight => Style::hidden_with(Transform::TranslateX(-x)),
            Variant::None => Style::opaque(),
        }
    }

    pub fn visible(self) -> Style {
        match self {
            Variant::FadeUp | Variant::FadeDown => Style::shown_with(Transform::TranslateY(0.0)),
            Variant::ScaleUp => Style::shown_with(Transform::Scale(1.0)),
            Variant::BlurUp => Style::shown_with(Transform::TranslateY(0.0)).blurred(0.0),
            Variant::BlurIn => Style::shown_with(Transform::Scale(1.0)).blurred(0.0),
            Variant::SlideLeft | Variant::SlideRight => Style::shown_with(Transform::TranslateX(0.0)),
            Variant::None => Style::opaque(),
        }
    }

    pub fn transition_properties(self) -> &'static [&'static str] {
        match self {
            Variant::BlurUp | Variant::BlurIn => &["opacity", "transform", "filter"],
            _ => &["opacity", "transform"],
        }
    }
}

/// `"<prop> <duration>s <easing> <delay>s"` for each property, comma-joined.
pub fn transition(properties: &[&str], duration: f64, easing: Easing, delay: f64) -> String {
    let curve = easing.css();
    properties
        .iter()
        .map(|prop| format!("{} {}s {} {}s", prop, duration, curve, delay))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything an entrance wrapper needs to style itself.
#[derive(Clone, Debug, PartialEq)]
pub struct EnterAnimation {
    pub variant: Variant,
    /// Seconds before the transition starts.
    pub delay: f64,
    /// Seconds.
    pub duration: f64,
    /// Vertical travel in px for the fade/blur variants.
    pub y: f64,
    /// Horizontal travel in px for the slide variants.
    pub x: f64,
    pub easing: Easing,
    /// Emit a `will-change` hint while hidden.
    pub gpu: bool,
}

impl Default for EnterAnimation {
    fn default() -> Self {
        EnterAnimation {
            variant: Variant::FadeUp,
            delay: 0.0,
            duration: 0.9,
            y: 32.0,
            x: 60.0,
            easing: Easing::ExpoOut,
            gpu: true,
        }
    }
}

impl EnterAnimation {
    #[cfg(test)]
    pub fn new(variant: Variant) -> Self {
        EnterAnimation { variant, ..Default::default() }
    }

    #[cfg(test)]
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn style(&self, visible: bool) -> Style {
        if visible {
            self.variant.visible()
        } else {
            self.variant.hidden(self.y, self.x)
        }
    }

    pub fn transition(&self) -> String {
        transition(self.variant.transition_properties(), self.duration, self.easing, self.delay)
    }

    pub fn will_change(&self, visible: bool) -> String {
        if self.gpu && !visible {
            self.variant.transition_properties().join(", ")
        } else {
            "auto".to_string()
        }
    }

    /// Inline style for the wrapper in the given state.
    pub fn css(&self, visible: bool) -> String {
        format!(
            "{} transition: {}; will-change: {};",
            self.style(visible).to_css(),
            self.transition(),
            self.will_change(visible)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_up_moves_from_below() {
        let anim = EnterAnimation::new(Variant::FadeUp);
        assert_eq!(anim.style(false).to_css(), "opacity: 0; transform: translateY(32px);");
        assert_eq!(anim.style(true).to_css(), "opacity: 1; transform: translateY(0px);");
    }

    #[test]
    fn directional_variants_mirror_each_other() {
        assert_eq!(Variant::FadeDown.hidden(20.0, 0.0).transform, Some(Transform::TranslateY(-20.0)));
        assert_eq!(Variant::SlideLeft.hidden(0.0, 30.0).transform, Some(Transform::TranslateX(30.0)));
        assert_eq!(Variant::SlideRight.hidden(0.0, 30.0).transform, Some(Transform::TranslateX(-30.0)));
    }

    #[test]
    fn blur_variants_animate_filter_too() {
        let hidden = Variant::BlurIn.hidden(32.0, 60.0);
        assert_eq!(hidden.blur, Some(16.0));
        assert_eq!(hidden.transform, Some(Transform::Scale(0.95)));
        assert_eq!(Variant::BlurUp.hidden(16.0, 60.0).blur, Some(12.0));
        assert_eq!(Variant::BlurUp.visible().blur, Some(0.0));
        assert_eq!(Variant::BlurUp.transition_properties(), &["opacity", "transform", "filter"]);
        assert_eq!(Variant::ScaleUp.transition_properties(), &["opacity", "transform"]);
    }

    #[test]
    fn none_variant_is_visible_in_both_states() {
        assert_eq!(Variant::None.hidden(32.0, 60.0), Variant::None.visible());
        assert_eq!(Variant::None.visible().opacity, 1.0);
    }

    #[test]
    fn transition_lists_every_property_with_timing() {
        let anim = EnterAnimation { duration: 1.0, ..EnterAnimation::new(Variant::BlurUp).delay(0.3) };
        let curve = "cubic-bezier(0.16, 1, 0.3, 1)";
        assert_eq!(
            anim.transition(),
            format!("opacity 1s {curve} 0.3s, transform 1s {curve} 0.3s, filter 1s {curve} 0.3s")
        );
    }

    #[test]
    fn will_change_is_dropped_once_visible() {
        let anim = EnterAnimation::new(Variant::ScaleUp);
        assert_eq!(anim.will_change(false), "opacity, transform");
        assert_eq!(anim.will_change(true), "auto");

        let no_gpu = EnterAnimation { gpu: false, ..anim };
        assert_eq!(no_gpu.will_change(false), "auto");
    }
}
