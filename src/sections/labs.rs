use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::{palette, ACTION_PLAN};
use crate::hooks::{use_in_view, use_loop_phase, use_parallax};
use crate::motion::{phased_css, Cue, Entrance, LoopPhase, Variant};
use crate::viewport::geometry::DEFAULT_PARALLAX_SPEED;

const CARD: Entrance = Entrance {
    properties: &["opacity", "transform"],
    hidden: "opacity: 0; transform: translateY(24px) scale(0.96);",
    shown: "opacity: 1; transform: translateY(0) scale(1);",
    duration: 0.9,
    delay: 0.0,
};

const SCORE_BAR: Entrance = Entrance {
    properties: &["width"],
    hidden: "width: 0%;",
    shown: "width: 78%;",
    duration: 1.4,
    delay: 0.5,
};

const RING: Entrance = Entrance {
    properties: &["stroke-dashoffset"],
    hidden: "stroke-dashoffset: 176;",
    shown: "stroke-dashoffset: 44;",
    duration: 1.6,
    delay: 0.7,
};

const SPARKLINE: Entrance = Entrance {
    properties: &["stroke-dashoffset"],
    hidden: "stroke-dashoffset: 240;",
    shown: "stroke-dashoffset: 0;",
    duration: 1.8,
    delay: 0.9,
};

const FLOAT: Cue = Cue::new("labs-float", 6.0);
const BREATHE: Cue = Cue::new("labs-breathe", 4.0);

fn card_css(phase: LoopPhase, index: usize) -> String {
    let entrance = Entrance { delay: 0.15 * index as f64, ..CARD };
    phased_css(phase, &entrance, Some(FLOAT.offset(0.8 * index as f64)))
}

#[function_component(Labs)]
pub fn labs() -> Html {
    let (stage, visible) = use_in_view(0.1);
    let phase = use_loop_phase(visible);
    let (photo, drift) = use_parallax(DEFAULT_PARALLAX_SPEED);

    html! {
        <section id="labs" class="labs">
            <style>
                {r#"
                    .labs {
                        position: relative;
                        z-index: 1;
                        background: #FAF7F2;
                        padding: 8rem 2rem;
                        overflow: hidden;
                    }

                    .labs .inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1.2fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    .labs h2 {
                        font-size: clamp(2rem, 4vw, 3.25rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.1;
                        margin: 1rem 0 1.5rem;
                    }

                    .labs .copy p {
                        color: #666666;
                        line-height: 1.6;
                        max-width: 28rem;
                    }

                    .labs-stage {
                        position: relative;
                        min-height: 560px;
                    }

                    .labs-photo {
                        position: absolute;
                        inset: 8% 12%;
                        border-radius: 2rem;
                        overflow: hidden;
                    }

                    .labs-photo .fill {
                        width: 100%;
                        height: 120%;
                        margin-top: -10%;
                        background:
                            radial-gradient(circle at 30% 30%, rgba(137, 180, 200, 0.6), transparent 60%),
                            linear-gradient(135deg, #7A9E8E, #1B3A4B);
                    }

                    .labs-card {
                        position: absolute;
                        z-index: 2;
                        padding: 1rem 1.25rem;
                        border-radius: 1rem;
                        background: rgba(250, 247, 242, 0.92);
                        box-shadow: 0 18px 40px rgba(15, 37, 48, 0.14);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        font-size: 0.85rem;
                        min-width: 11rem;
                    }

                    .labs-card .label {
                        color: #666666;
                        font-size: 0.75rem;
                    }

                    .labs-card .big {
                        display: block;
                        font-size: 1.6rem;
                        font-weight: 600;
                        margin-top: 0.2rem;
                    }

                    .labs-card.score { top: 2%; left: 0; }
                    .labs-card.metabolic { top: 30%; right: 0; }
                    .labs-card.plan { bottom: 4%; left: 4%; }
                    .labs-card.inflammation { bottom: 14%; right: 6%; }

                    .labs-card .track {
                        height: 6px;
                        margin-top: 0.6rem;
                        border-radius: 999px;
                        background: #F0EBE3;
                        overflow: hidden;
                    }

                    .labs-card .track span {
                        display: block;
                        height: 100%;
                        border-radius: inherit;
                        background: #00774D;
                    }

                    .labs-card ul {
                        list-style: none;
                        margin: 0.5rem 0 0;
                        padding: 0;
                    }

                    .labs-card li {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.2rem 0;
                        opacity: 0.45;
                    }

                    .labs-card li.active {
                        opacity: 1;
                    }

                    @keyframes labs-float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }

                    @keyframes labs-breathe {
                        0%, 100% { width: 78%; }
                        50% { width: 84%; }
                    }

                    @media (max-width: 900px) {
                        .labs .inner {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="inner">
                <div class="copy">
                    <FadeIn>
                        <Overline>{"Labs"}</Overline>
                    </FadeIn>
                    <TextReveal tag="h2" text={"One draw.\nA *whole-body* read."} />
                    <FadeIn variant={Variant::BlurUp} delay={0.3}>
                        <p>
                            {"A single blood draw at a certified lab near you. Results arrive on a calm dashboard that shows where you stand and what to do next."}
                        </p>
                    </FadeIn>
                </div>
                <div ref={stage} class="labs-stage">
                    <FadeIn variant={Variant::BlurIn} duration={1.2} class={classes!("labs-photo")}>
                        <div ref={photo} class="fill" style={drift} />
                    </FadeIn>

                    <div class="labs-card score" style={card_css(phase, 0)}>
                        <span class="label">{"Wellness score"}</span>
                        <span class="big">{"78"}</span>
                        <div class="track">
                            <span style={phased_css(phase, &SCORE_BAR, Some(BREATHE))} />
                        </div>
                    </div>

                    <div class="labs-card metabolic" style={card_css(phase, 1)}>
                        <span class="label">{"Metabolic health"}</span>
                        <svg width="72" height="72" viewBox="0 0 72 72">
                            <circle cx="36" cy="36" r="28" fill="none" stroke={palette::CREAM} stroke-width="8" />
                            <circle
                                cx="36" cy="36" r="28"
                                fill="none"
                                stroke={palette::SAND}
                                stroke-width="8"
                                stroke-linecap="round"
                                stroke-dasharray="176"
                                transform="rotate(-90 36 36)"
                                style={phased_css(phase, &RING, None)}
                            />
                        </svg>
                    </div>

                    <div class="labs-card plan" style={card_css(phase, 2)}>
                        <span class="label">{"Action plan"}</span>
                        <ul>
                            { for ACTION_PLAN.iter().map(|item| html! {
                                <li class={classes!(item.active.then(|| "active"))}>
                                    <span>{item.icon}</span>{item.label}
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="labs-card inflammation" style={card_css(phase, 3)}>
                        <span class="label">{"Inflammation"}</span>
                        <svg width="140" height="40" viewBox="0 0 140 40">
                            <polyline
                                points="0,30 20,26 40,28 60,18 80,20 100,12 120,14 140,8"
                                fill="none"
                                stroke={palette::SAGE}
                                stroke-width="2.5"
                                stroke-dasharray="240"
                                style={phased_css(phase, &SPARKLINE, None)}
                            />
                        </svg>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_enter_in_sequence_then_float_out_of_step() {
        assert!(card_css(LoopPhase::Idle, 0).starts_with("opacity: 0;"));
        assert!(card_css(LoopPhase::Entering, 2).contains("0.3s"));

        let first = card_css(LoopPhase::Looping, 0);
        let second = card_css(LoopPhase::Looping, 1);
        assert!(first.contains("labs-float 6s"));
        assert_ne!(first, second);
    }
}
