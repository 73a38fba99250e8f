use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverlineProps {
    pub children: Children,
    #[prop_or(false)]
    pub light: bool,
}

/// Small uppercase label above a section heading.
#[function_component(Overline)]
pub fn overline(props: &OverlineProps) -> Html {
    html! {
        <p class={classes!("overline", props.light.then(|| "light"))}>
            { for props.children.iter() }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillLinkProps {
    pub href: AttrValue,
    pub children: Children,
    #[prop_or(false)]
    pub ghost: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(PillLink)]
pub fn pill_link(props: &PillLinkProps) -> Html {
    let onclick = props.onclick.clone();
    html! {
        <a
            href={props.href.clone()}
            class={classes!("pill-link", props.ghost.then(|| "ghost"))}
            onclick={move |e: MouseEvent| if let Some(cb) = &onclick { cb.emit(e) }}
        >
            { for props.children.iter() }
        </a>
    }
}
