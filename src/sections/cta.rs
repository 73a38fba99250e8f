use yew::prelude::*;

use crate::components::{EmailCapture, FadeIn, Overline, TextReveal};
use crate::motion::Variant;
use crate::waitlist::Placement;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="waitlist" class="cta">
            <style>
                {r#"
                    .cta {
                        position: relative;
                        z-index: 1;
                        background: #FAF7F2;
                        padding: 8rem 2rem;
                    }

                    .cta-panel {
                        max-width: 1000px;
                        margin: 0 auto;
                        padding: 5rem 3rem;
                        border-radius: 2rem;
                        text-align: center;
                        color: #FAF7F2;
                        background:
                            radial-gradient(ellipse at 50% 0%, rgba(26, 155, 107, 0.4), transparent 60%),
                            #1B3A4B;
                    }

                    .cta-panel h2 {
                        font-size: clamp(2rem, 4.5vw, 3.5rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.08;
                        margin: 1rem 0 1.25rem;
                    }

                    .cta-panel .sub {
                        color: rgba(250, 247, 242, 0.7);
                        margin: 0 auto 2.5rem;
                        max-width: 30rem;
                        line-height: 1.6;
                    }

                    .cta-panel .email-capture {
                        margin: 0 auto;
                    }
                "#}
            </style>
            <FadeIn variant={Variant::ScaleUp} duration={1.0}>
                <div class="cta-panel">
                    <Overline light={true}>{"Early access"}</Overline>
                    <TextReveal tag="h2" text={"Start with a *clear* baseline."} delay={0.2} />
                    <FadeIn variant={Variant::BlurUp} delay={0.35} y={16.0}>
                        <p class="sub">{"Join the waitlist and be first in line when Aeviti Baseline opens in your area."}</p>
                    </FadeIn>
                    <FadeIn delay={0.5} y={16.0}>
                        <EmailCapture
                            placement={Placement::Waitlist}
                            light={true}
                            placeholder="Your email"
                            button_text="Join waitlist"
                        />
                    </FadeIn>
                </div>
            </FadeIn>
        </section>
    }
}
