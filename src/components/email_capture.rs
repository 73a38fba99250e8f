use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::EmailForm;
use crate::waitlist::{self, Placement};

#[derive(Properties, PartialEq)]
pub struct EmailCaptureProps {
    pub placement: Placement,
    /// Styling for dark backgrounds.
    #[prop_or(false)]
    pub light: bool,
    #[prop_or(AttrValue::Static("Email for early access"))]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("Get updates"))]
    pub button_text: AttrValue,
}

#[function_component(EmailCapture)]
pub fn email_capture(props: &EmailCaptureProps) -> Html {
    let form = use_state(EmailForm::default);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.input(input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let placement = props.placement;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let Some(address) = next.submit() else {
                form.set(next);
                return;
            };
            form.set(next.clone());

            let form = form.clone();
            spawn_local(async move {
                let outcome = waitlist::subscribe(&address, placement).await;
                if let Err(err) = &outcome {
                    log::warn!("Waitlist sign-up failed: {}", err);
                }
                let mut resolved = next;
                resolved.resolve(outcome);
                form.set(resolved);
            });
        })
    };

    if form.is_confirmed() {
        return html! {
            <div class={classes!("email-confirmed", props.light.then(|| "light"))}>
                <span class="check">{"✓"}</span>
                {"You're on the list. We'll be in touch."}
            </div>
        };
    }

    html! {
        <>
            <form class={classes!("email-capture", props.light.then(|| "light"))} {onsubmit}>
                <input
                    type="email"
                    required={true}
                    placeholder={props.placeholder.clone()}
                    value={form.value().to_string()}
                    disabled={form.is_submitting()}
                    {oninput}
                />
                <button type="submit" disabled={form.is_submitting()}>
                    {props.button_text.clone()}{" "}<span>{"→"}</span>
                </button>
            </form>
            {
                if let Some(message) = form.message() {
                    html! { <p class="email-error">{message}</p> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
