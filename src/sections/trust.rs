use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::{TRUST_BADGES, TRUST_BARS};
use crate::hooks::{use_in_view, use_loop_phase};
use crate::motion::{phased_css, Cue, Entrance, LoopPhase, Stagger, Variant};

const BAR_PROPERTIES: &[&str] = &["transform", "opacity"];
const PULSE: Cue = Cue::new("trust-pulse", 3.0);

/// Lab sites plotted on the coverage map, as percentages of its box.
const SITES: &[(f64, f64)] = &[
    (18.0, 34.0),
    (27.0, 58.0),
    (41.0, 42.0),
    (52.0, 66.0),
    (63.0, 38.0),
    (71.0, 54.0),
    (84.0, 46.0),
];

fn bar_css(phase: LoopPhase, index: usize) -> String {
    let entrance = Entrance {
        properties: BAR_PROPERTIES,
        hidden: "transform: scaleY(0); opacity: 0.4;",
        shown: "transform: scaleY(1); opacity: 1;",
        duration: 1.0,
        delay: Stagger::new(0.3, 0.06).delay(index),
    };
    phased_css(phase, &entrance, None)
}

fn site_css(phase: LoopPhase, index: usize) -> String {
    let entrance = Entrance {
        properties: &["transform", "opacity"],
        hidden: "transform: scale(0); opacity: 0;",
        shown: "transform: scale(1); opacity: 1;",
        duration: 0.6,
        delay: Stagger::new(0.5, 0.1).delay(index),
    };
    phased_css(phase, &entrance, Some(PULSE.offset(0.4 * index as f64)))
}

#[function_component(Trust)]
pub fn trust() -> Html {
    let (board, visible) = use_in_view(0.15);
    let phase = use_loop_phase(visible);
    let peak = TRUST_BARS.iter().copied().max().unwrap_or(1).max(1);

    html! {
        <section id="trust" class="trust">
            <style>
                {r#"
                    .trust {
                        position: relative;
                        z-index: 1;
                        background: #FAF7F2;
                        padding: 8rem 2rem;
                    }

                    .trust .inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .trust h2 {
                        font-size: clamp(2rem, 4vw, 3.25rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.1;
                        margin: 1rem 0 3.5rem;
                    }

                    .trust-board {
                        display: grid;
                        grid-template-columns: 1fr 1.3fr 1fr;
                        gap: 1.25rem;
                    }

                    .trust-panel {
                        height: 100%;
                        box-sizing: border-box;
                        border-radius: 1.5rem;
                        background: #F0EBE3;
                        padding: 2rem;
                    }

                    .trust-panel h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.1rem;
                    }

                    .trust-panel p {
                        margin: 0;
                        color: #666666;
                        line-height: 1.55;
                        font-size: 0.92rem;
                    }

                    .trust-badges {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }

                    .trust-badges span {
                        padding: 0.35rem 0.8rem;
                        border-radius: 999px;
                        background: #FAF7F2;
                        font-size: 0.78rem;
                        font-weight: 600;
                    }

                    .trust-map {
                        position: relative;
                        height: 200px;
                        margin-top: 1.5rem;
                        border-radius: 1rem;
                        background:
                            radial-gradient(circle, rgba(27, 58, 75, 0.12) 1px, transparent 1.5px) 0 0 / 12px 12px,
                            #FAF7F2;
                    }

                    .trust-map .site {
                        position: absolute;
                        width: 10px;
                        height: 10px;
                        margin: -5px 0 0 -5px;
                        border-radius: 50%;
                        background: #00774D;
                        box-shadow: 0 0 0 4px rgba(0, 119, 77, 0.18);
                    }

                    .trust-chart {
                        display: flex;
                        align-items: flex-end;
                        gap: 0.4rem;
                        height: 160px;
                        margin-top: 1.5rem;
                    }

                    .trust-chart span {
                        flex: 1;
                        border-radius: 0.3rem 0.3rem 0 0;
                        background: linear-gradient(180deg, #1A9B6B, #00774D);
                        transform-origin: bottom;
                    }

                    @keyframes trust-pulse {
                        0%, 100% { box-shadow: 0 0 0 4px rgba(0, 119, 77, 0.18); }
                        50% { box-shadow: 0 0 0 10px rgba(0, 119, 77, 0); }
                    }

                    @media (max-width: 900px) {
                        .trust-board {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="inner">
                <FadeIn>
                    <Overline>{"Built on trust"}</Overline>
                </FadeIn>
                <TextReveal tag="h2" text={"Certified labs.\n*Careful* guidance."} />
                <div ref={board} class="trust-board">
                    <FadeIn variant={Variant::FadeUp}>
                        <div class="trust-panel">
                            <h3>{"Accredited partners"}</h3>
                            <p>{"Every sample is processed by licensed, accredited laboratories."}</p>
                            <div class="trust-badges">
                                { for TRUST_BADGES.iter().map(|badge| html! { <span>{*badge}</span> }) }
                            </div>
                        </div>
                    </FadeIn>
                    <FadeIn variant={Variant::FadeUp} delay={0.1}>
                        <div class="trust-panel">
                            <h3>{"Draw sites near you"}</h3>
                            <p>{"Thousands of partner locations. Walk in, get drawn, get on with your day."}</p>
                            <div class="trust-map">
                                { for SITES.iter().enumerate().map(|(i, (x, y))| html! {
                                    <span
                                        class="site"
                                        style={format!("left: {}%; top: {}%; {}", x, y, site_css(phase, i))}
                                    />
                                }) }
                            </div>
                        </div>
                    </FadeIn>
                    <FadeIn variant={Variant::FadeUp} delay={0.2}>
                        <div class="trust-panel">
                            <h3>{"Progress you can see"}</h3>
                            <p>{"Month over month, not minute by minute."}</p>
                            <div class="trust-chart">
                                { for TRUST_BARS.iter().enumerate().map(|(i, value)| html! {
                                    <span style={format!(
                                        "height: {:.1}%; {}",
                                        *value as f64 * 100.0 / peak as f64,
                                        bar_css(phase, i)
                                    )} />
                                }) }
                            </div>
                        </div>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_grow_in_order_and_hold() {
        assert!(bar_css(LoopPhase::Idle, 0).contains("scaleY(0)"));
        assert!(bar_css(LoopPhase::Entering, 3).contains("0.48s"));
        // Bars have no loop; they stay grown once the board settles.
        assert!(!bar_css(LoopPhase::Looping, 0).contains("animation"));
    }

    #[test]
    fn sites_pulse_once_settled() {
        assert!(site_css(LoopPhase::Looping, 2).contains("trust-pulse 3s"));
        assert!(!site_css(LoopPhase::Entering, 2).contains("animation"));
    }
}
