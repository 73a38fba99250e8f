use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::{palette, BASELINE_COLUMNS};
use crate::motion::{Stagger, Variant};

const TREND: &[u32] = &[38, 44, 41, 52, 58, 63, 71];

fn column_visual(index: usize) -> Html {
    match index {
        0 => html! {
            <div class="visual result">
                <span class="label">{"hs-CRP"}</span>
                <span class="value">{"0.8"}<small>{" mg/L"}</small></span>
                <span class="note">{"Low inflammation. Keep doing what you're doing."}</span>
            </div>
        },
        1 => html! {
            <ol class="visual protocol">
                <li>{"Sleep: lights out by 23:00"}</li>
                <li>{"Nutrition: 30g fibre daily"}</li>
                <li>{"Follow-up: recheck ferritin in 12 weeks"}</li>
            </ol>
        },
        _ => html! {
            <div class="visual timeline">
                { for TREND.iter().map(|height| html! {
                    <span style={format!("height: {}%;", height)} />
                }) }
            </div>
        },
    }
}

#[function_component(Baseline)]
pub fn baseline() -> Html {
    let columns = Stagger::new(0.0, 0.1);

    html! {
        <section id="baseline" class="baseline">
            <style>
                {r#"
                    .baseline {
                        position: relative;
                        z-index: 1;
                        background: #FAF7F2;
                        padding: 9rem 2rem;
                    }

                    .baseline .inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .baseline h2 {
                        font-size: clamp(2rem, 4vw, 3.25rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.1;
                        max-width: 44rem;
                        margin: 1rem 0 4rem;
                    }

                    .baseline .columns {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .baseline .column {
                        height: 100%;
                        border-radius: 1.5rem;
                        background: #F0EBE3;
                        padding: 2rem;
                    }

                    .baseline .num {
                        font-size: 0.8rem;
                        color: #666666;
                    }

                    .baseline .column h3 {
                        margin: 0.75rem 0 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }

                    .baseline .column p {
                        color: #666666;
                        line-height: 1.55;
                        margin: 0 0 1.75rem;
                    }

                    .baseline .visual {
                        border-radius: 1rem;
                        background: #FAF7F2;
                        padding: 1.25rem;
                        min-height: 8rem;
                    }

                    .baseline .result {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                    }

                    .baseline .result .value {
                        font-size: 2rem;
                        font-weight: 600;
                    }

                    .baseline .result .note {
                        font-size: 0.85rem;
                        color: #666666;
                    }

                    .baseline .protocol {
                        margin: 0;
                        padding-left: 1.2rem;
                        line-height: 2;
                        font-size: 0.9rem;
                    }

                    .baseline .timeline {
                        display: flex;
                        align-items: flex-end;
                        gap: 0.5rem;
                        height: 8rem;
                    }

                    .baseline .timeline span {
                        flex: 1;
                        border-radius: 0.35rem 0.35rem 0 0;
                        background: #00774D;
                        opacity: 0.8;
                    }

                    .baseline .trend {
                        margin-top: 3rem;
                        font-size: 0.95rem;
                        color: #666666;
                    }

                    @media (max-width: 900px) {
                        .baseline .columns {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="inner">
                <FadeIn>
                    <Overline>{"Aeviti Baseline"}</Overline>
                </FadeIn>
                <TextReveal
                    tag="h2"
                    text={"Your results, *explained*.\nYour next steps, prioritized."}
                />
                <div class="columns">
                    { for BASELINE_COLUMNS.iter().enumerate().map(|(i, column)| html! {
                        <FadeIn delay={columns.delay(i)} y={40.0}>
                            <div class="column">
                                <span class="num">{column.num}</span>
                                <h3>{column.title}</h3>
                                <p>{column.desc}</p>
                                { column_visual(i) }
                            </div>
                        </FadeIn>
                    }) }
                </div>
                <FadeIn variant={Variant::FadeUp} delay={0.5}>
                    <p class="trend">
                        <span style={format!("color: {};", palette::TERRA)}>{"↗ "}</span>
                        {"Steady trends over weeks and months, not daily noise."}
                    </p>
                </FadeIn>
            </div>
        </section>
    }
}
