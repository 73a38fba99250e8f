use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::{EnterAnimation, Easing, Variant};

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Variant::FadeUp)]
    pub variant: Variant,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    /// Seconds.
    #[prop_or(0.9)]
    pub duration: f64,
    #[prop_or(32.0)]
    pub y: f64,
    #[prop_or(60.0)]
    pub x: f64,
    #[prop_or_default]
    pub easing: Easing,
    #[prop_or(0.08)]
    pub threshold: f64,
    #[prop_or(true)]
    pub gpu: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Plays a one-time entrance the first time its content scrolls into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let (node, visible) = use_in_view(props.threshold);

    let animation = EnterAnimation {
        variant: props.variant,
        delay: props.delay,
        duration: props.duration,
        y: props.y,
        x: props.x,
        easing: props.easing,
        gpu: props.gpu,
    };

    html! {
        <div ref={node} class={props.class.clone()} style={animation.css(visible)}>
            { for props.children.iter() }
        </div>
    }
}
