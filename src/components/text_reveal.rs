use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::reveal::{lines, segments, Segment};
use crate::motion::RevealTiming;

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    /// Lines separated by `\n`; `*...*` marks accent text.
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.12)]
    pub stagger: f64,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or(false)]
    pub blur: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let (node, visible) = use_in_view(0.1);
    let timing = RevealTiming {
        delay: props.delay,
        stagger: props.stagger,
        duration: props.duration,
        blur: props.blur,
    };

    let rendered = lines(&props.text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            html! {
                <span class="reveal-clip">
                    <span class="reveal-line" style={timing.line_css(i, visible)}>
                        { for segments(line).into_iter().map(|segment| match segment {
                            Segment::Plain(text) => html! { <>{ text }</> },
                            Segment::Accent(text) => html! { <span class="accent">{text}</span> },
                        }) }
                    </span>
                </span>
            }
        })
        .collect::<Html>();

    html! {
        <@{props.tag.to_string()} ref={node} class={props.class.clone()}>
            { rendered }
        </@>
    }
}
