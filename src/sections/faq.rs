use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::{Faq, FAQS};
use crate::motion::Stagger;
use crate::state::Accordion;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: Faq,
    open: bool,
    ontoggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ontoggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} {onclick}>
                <span>{props.faq.question}</span>
                <span class="toggle-icon">{"+"}</span>
            </button>
            <div class="faq-answer">
                <div>
                    <p>{props.faq.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(Accordion::default);
    let rows = Stagger::new(0.0, 0.06);

    html! {
        <section id="faq" class="faq">
            <style>
                {r#"
                    .faq {
                        position: relative;
                        z-index: 1;
                        background: #F0EBE3;
                        padding: 8rem 2rem;
                    }

                    .faq .inner {
                        max-width: 820px;
                        margin: 0 auto;
                    }

                    .faq h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        margin: 1rem 0 3rem;
                    }

                    .faq-item {
                        border-bottom: 1px solid #D4CEC4;
                    }

                    .faq-question {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        width: 100%;
                        padding: 1.5rem 0;
                        background: none;
                        border: none;
                        font: inherit;
                        font-size: 1.1rem;
                        text-align: left;
                        color: #111111;
                        cursor: pointer;
                    }

                    .faq-question .toggle-icon {
                        font-size: 1.5rem;
                        transition: transform 0.4s cubic-bezier(0.16, 1, 0.3, 1);
                    }

                    .faq-item.open .toggle-icon {
                        transform: rotate(45deg);
                    }

                    .faq-answer {
                        display: grid;
                        grid-template-rows: 0fr;
                        transition: grid-template-rows 0.5s cubic-bezier(0.16, 1, 0.3, 1);
                    }

                    .faq-item.open .faq-answer {
                        grid-template-rows: 1fr;
                    }

                    .faq-answer > div {
                        overflow: hidden;
                    }

                    .faq-answer p {
                        margin: 0 0 1.5rem;
                        color: #666666;
                        line-height: 1.65;
                    }
                "#}
            </style>
            <div class="inner">
                <FadeIn>
                    <Overline>{"FAQs"}</Overline>
                </FadeIn>
                <TextReveal tag="h2" text={"Questions, *answered*."} />
                { for FAQS.iter().enumerate().map(|(i, faq)| {
                    let ontoggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: ()| {
                            let mut next = (*accordion).clone();
                            next.toggle(i);
                            accordion.set(next);
                        })
                    };
                    html! {
                        <FadeIn delay={rows.delay(i)} y={20.0}>
                            <FaqItem faq={*faq} open={accordion.is_open(i)} {ontoggle} />
                        </FadeIn>
                    }
                }) }
            </div>
        </section>
    }
}
