use yew::prelude::*;

use crate::components::{FadeIn, TextReveal};
use crate::content::SIGNAL_TAGS;
use crate::motion::{Easing, Stagger, Variant};

#[function_component(Signal)]
pub fn signal() -> Html {
    let tags = Stagger::new(0.4, 0.08);

    html! {
        <section id="signal" class="signal">
            <style>
                {r#"
                    .signal {
                        position: relative;
                        z-index: 1;
                        background: #F0EBE3;
                        padding: 8rem 2rem;
                    }

                    .signal-card {
                        max-width: 960px;
                        margin: 0 auto;
                        padding: 4.5rem 3rem;
                        border-radius: 2rem;
                        background: #FAF7F2;
                        text-align: center;
                    }

                    .signal-card .quote {
                        font-size: clamp(1.75rem, 3.5vw, 2.75rem);
                        letter-spacing: -0.025em;
                        line-height: 1.2;
                        font-weight: 500;
                    }

                    .signal-card .tags {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2.5rem;
                    }

                    .signal-card .tag {
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid #D4CEC4;
                        font-size: 0.85rem;
                        color: #666666;
                    }
                "#}
            </style>
            <FadeIn variant={Variant::ScaleUp} duration={1.0} easing={Easing::Spring}>
                <div class="signal-card">
                    <TextReveal
                        class={classes!("quote")}
                        text={"Less noise.\nMore *signal*."}
                        blur={true}
                    />
                    <div class="tags">
                        { for SIGNAL_TAGS.iter().enumerate().map(|(i, tag)| html! {
                            <FadeIn variant={Variant::FadeUp} y={12.0} delay={tags.delay(i)}>
                                <span class="tag">{*tag}</span>
                            </FadeIn>
                        }) }
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}
