use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::PRINCIPLES;
use crate::motion::{Stagger, Variant};

#[function_component(Principles)]
pub fn principles() -> Html {
    let cascade = Stagger::new(0.1, 0.12);

    html! {
        <section id="principles" class="principles">
            <style>
                {r#"
                    .principles {
                        position: relative;
                        z-index: 1;
                        background: #0F2530;
                        color: #FAF7F2;
                        padding: 8rem 2rem;
                    }

                    .principles .inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .principles h2 {
                        font-size: clamp(2rem, 4vw, 3.25rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.1;
                        margin: 1rem 0 4rem;
                    }

                    .principles .list {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                    }

                    .principle .icon {
                        font-size: 1.8rem;
                    }

                    .principle h3 {
                        font-size: 1.25rem;
                        margin: 1rem 0 0.6rem;
                    }

                    .principle p {
                        color: rgba(250, 247, 242, 0.65);
                        line-height: 1.6;
                    }

                    @media (max-width: 900px) {
                        .principles .list {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="inner">
                <FadeIn>
                    <Overline light={true}>{"Principles"}</Overline>
                </FadeIn>
                <TextReveal tag="h2" text={"What we *won't* compromise on."} blur={true} />
                <div class="list">
                    { for PRINCIPLES.iter().enumerate().map(|(i, principle)| html! {
                        <FadeIn variant={Variant::BlurUp} delay={cascade.delay(i)}>
                            <div class="principle">
                                <span class="icon" style={format!("color: {};", principle.color)}>{principle.icon}</span>
                                <h3>{principle.title}</h3>
                                <p>{principle.desc}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>
        </section>
    }
}
