use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::{FadeIn, Overline, TextReveal};
use crate::content::{palette, APPROACH_STEPS, PROTOCOL_ITEMS};
use crate::hooks::{client_rect, use_frame_layout, viewport_height};
use crate::motion::{Easing, Stagger, Variant};
use crate::viewport::{focus_weight, CarouselIndex, PinnedTrack, TrackLayout};

const SLOT_DAYS: &[(&str, u32)] = &[("MON", 10), ("TUE", 11), ("WED", 12), ("THU", 13), ("FRI", 14)];
const SLOT_TIMES: &[&str] = &["8:30", "9:00", "9:15", "9:30", "9:45"];
const BOOKED_DAY: usize = 2;
const BOOKED_TIME: usize = 1;

/// `(x, y, label)` points of the marker trend drawn inside the range band.
const TREND_POINTS: &[(u32, u32, &str)] = &[(20, 8, "16.7"), (70, 32, ""), (120, 36, "10.0"), (160, 28, "12.5")];
const RANGE_BANDS: &[&str] = &["ABOVE RANGE", "IN RANGE", "BELOW RANGE"];

fn trend_polyline() -> String {
    TREND_POINTS
        .iter()
        .map(|(x, y, _)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn scheduling_visual() -> Html {
    html! {
        <div class="visual scheduling">
            <div class="days">
                { for SLOT_DAYS.iter().enumerate().map(|(i, (day, date))| html! {
                    <div class={classes!("day", (i == BOOKED_DAY).then(|| "booked"))}>
                        <span>{*day}</span>
                        <strong>{date.to_string()}</strong>
                    </div>
                }) }
            </div>
            <div class="times">
                { for SLOT_TIMES.iter().enumerate().map(|(i, time)| html! {
                    <span class={classes!("time", (i == BOOKED_TIME).then(|| "booked"))}>{*time}</span>
                }) }
            </div>
        </div>
    }
}

fn chart_visual() -> Html {
    html! {
        <div class="visual chart">
            { for RANGE_BANDS.iter().enumerate().map(|(i, band)| html! {
                <div class={classes!("band", (i == 1).then(|| "in-range"))}>
                    <span class="band-label">{*band}</span>
                    if i == 1 {
                        <svg viewBox="0 0 180 44" preserveAspectRatio="none">
                            <polyline
                                points={trend_polyline()}
                                fill="none"
                                stroke={palette::TERRA}
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                            { for TREND_POINTS.iter().map(|(x, y, label)| html! {
                                <g>
                                    <circle cx={x.to_string()} cy={y.to_string()} r="4" fill={palette::TERRA} />
                                    if !label.is_empty() {
                                        <text x={x.to_string()} y={(*y as i32 - 10).to_string()} text-anchor="middle">{*label}</text>
                                    }
                                </g>
                            }) }
                        </svg>
                    }
                </div>
            }) }
        </div>
    }
}

fn protocol_visual() -> Html {
    let rows = Stagger::new(0.0, 0.12);
    html! {
        <div class="visual protocol">
            { for PROTOCOL_ITEMS.iter().enumerate().map(|(i, item)| html! {
                <FadeIn y={14.0} delay={rows.delay(i)} duration={0.7} threshold={0.15}>
                    <div class="protocol-row">
                        <FadeIn variant={Variant::ScaleUp} easing={Easing::Spring} delay={rows.delay(i) + 0.08} duration={0.5}>
                            <span class="icon" style={format!("background: {}26;", item.color)}>{item.icon}</span>
                        </FadeIn>
                        <div>
                            <strong>{item.title}</strong>
                            <p>{item.desc}</p>
                        </div>
                    </div>
                </FadeIn>
            }) }
        </div>
    }
}

fn step_visual(index: usize) -> Html {
    match index {
        0 => scheduling_visual(),
        1 => chart_visual(),
        _ => protocol_visual(),
    }
}

/// Dims and shrinks each card by its distance from the frame centre.
fn apply_focus(track: &Element) {
    let frame = track.get_bounding_client_rect();
    let centre = frame.left() + frame.width() / 2.0;

    let mut card = track.first_element_child();
    while let Some(element) = card {
        let rect = element.get_bounding_client_rect();
        let weight = focus_weight(rect.left() + rect.width() / 2.0 - centre, rect.width());
        if let Ok(html) = element.clone().dyn_into::<HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("opacity", &format!("{:.3}", 0.35 + 0.65 * weight));
            let _ = style.set_property("transform", &format!("scale({:.4})", 0.94 + 0.06 * weight));
        }
        card = element.next_element_sibling();
    }
}

/// Scrolls the window so the pinned track lands on card `requested`
/// (clamped). No-op for an empty carousel or before the first layout pass.
fn scroll_to_card(spacer: &NodeRef, pinned: &PinnedTrack, carousel: &mut CarouselIndex, requested: isize) -> Option<usize> {
    let index = carousel.clamp(requested)?;
    let window = web_sys::window()?;
    let element = spacer.cast::<Element>()?;
    let rect = client_rect(&element);
    let document_top = rect.top + window.scroll_y().ok()?;
    let target = pinned.scroll_y_for(document_top, rect.height, carousel.progress_of(index))?;
    carousel.go_to(index as isize);
    window.scroll_to_with_x_and_y(0.0, target);
    Some(index)
}

#[function_component(Approach)]
pub fn approach() -> Html {
    let spacer = use_node_ref();
    let track = use_node_ref();
    let spacer_height = use_state_eq(|| None::<f64>);
    let active = use_state_eq(|| 0_usize);
    let pinned = use_mut_ref(PinnedTrack::default);
    let carousel: Rc<RefCell<CarouselIndex>> = use_mut_ref(|| CarouselIndex::new(APPROACH_STEPS.len()));

    {
        let spacer = spacer.clone();
        let track = track.clone();
        let set_height = spacer_height.setter();
        let set_active = active.setter();
        let pinned = pinned.clone();
        let carousel = carousel.clone();
        let watch = vec![track.clone(), spacer.clone()];
        use_frame_layout(watch, Box::new(move || {
            let Some(vh) = web_sys::window().as_ref().and_then(viewport_height) else {
                return;
            };
            let (Some(spacer), Some(track)) = (spacer.cast::<Element>(), track.cast::<Element>()) else {
                return;
            };

            let mut pinned = pinned.borrow_mut();
            let layout = TrackLayout {
                viewport_height: vh,
                track_width: track.scroll_width() as f64,
                frame_width: track.client_width() as f64,
            };
            if pinned.relayout(layout) {
                set_height.set(pinned.spacer_height());
            }

            let rect = client_rect(&spacer);
            if let Some(offset) = pinned.offset(rect) {
                track.set_scroll_left(offset.round() as i32);
            }
            apply_focus(&track);

            if let Some(progress) = pinned.progress(rect) {
                let mut carousel = carousel.borrow_mut();
                if carousel.sync(progress) {
                    set_active.set(carousel.active());
                }
            }
        }));
    }

    let step_to = {
        let spacer = spacer.clone();
        let pinned = pinned.clone();
        let carousel = carousel.clone();
        let set_active = active.setter();
        move |requested: isize| {
            let pinned = pinned.borrow();
            let mut carousel = carousel.borrow_mut();
            if let Some(index) = scroll_to_card(&spacer, &pinned, &mut carousel, requested) {
                set_active.set(index);
            }
        }
    };

    // Step a copy so the real index only moves once the scroll is issued.
    let onprev = {
        let step_to = step_to.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut candidate = *carousel.borrow();
            if let Some(index) = candidate.prev() {
                step_to(index as isize);
            }
        })
    };
    let onnext = {
        let step_to = step_to.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut candidate = *carousel.borrow();
            if let Some(index) = candidate.next() {
                step_to(index as isize);
            }
        })
    };

    let spacer_style = spacer_height
        .map(|height| format!("height: {}px;", height.round()))
        .unwrap_or_default();

    html! {
        <section id="approach" class="approach">
            <style>
                {r#"
                    .approach {
                        position: relative;
                        z-index: 1;
                        background: #1B3A4B;
                        color: #FAF7F2;
                    }

                    .approach-spacer {
                        position: relative;
                        min-height: 100vh;
                    }

                    .approach-frame {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        overflow: hidden;
                        padding: 0 2rem;
                        box-sizing: border-box;
                    }

                    .approach .head {
                        max-width: 1200px;
                        width: 100%;
                        margin: 0 auto 3rem;
                    }

                    .approach h2 {
                        font-size: clamp(2rem, 4vw, 3.25rem);
                        letter-spacing: -0.03em;
                        font-weight: 500;
                        line-height: 1.1;
                        margin: 1rem 0 0;
                    }

                    .approach-track {
                        display: flex;
                        gap: 2rem;
                        overflow: hidden;
                        padding: 0 calc(50% - 190px);
                    }

                    .approach-card {
                        flex: 0 0 380px;
                        min-height: 320px;
                        box-sizing: border-box;
                        padding: 2.25rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.06);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        transform-origin: center;
                    }

                    .approach-card .num {
                        font-size: 0.8rem;
                        font-weight: 700;
                        color: #C9A87C;
                    }

                    .approach .subtext {
                        max-width: 32rem;
                        margin: 1rem 0 0;
                        color: rgba(250, 247, 242, 0.7);
                        line-height: 1.6;
                    }

                    .approach-card .visual {
                        margin-top: 1.75rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        padding: 1rem;
                    }

                    .scheduling .days,
                    .scheduling .times {
                        display: flex;
                        gap: 0.4rem;
                    }

                    .scheduling .times {
                        margin-top: 0.75rem;
                        flex-wrap: wrap;
                    }

                    .scheduling .day {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 0.5rem 0;
                        border-radius: 0.6rem;
                        border: 1px solid rgba(250, 247, 242, 0.2);
                        font-size: 0.65rem;
                    }

                    .scheduling .time {
                        padding: 0.3rem 0.6rem;
                        border-radius: 999px;
                        border: 1px solid rgba(250, 247, 242, 0.2);
                        font-size: 0.75rem;
                    }

                    .scheduling .booked {
                        background: #00774D;
                        border-color: #00774D;
                        color: #FFFFFF;
                    }

                    .chart .band {
                        display: flex;
                        align-items: center;
                        height: 28px;
                        border-bottom: 1px dashed rgba(250, 247, 242, 0.15);
                    }

                    .chart .band.in-range {
                        height: 56px;
                        background: rgba(138, 154, 120, 0.15);
                    }

                    .chart .band-label {
                        flex: 0 0 5.5rem;
                        font-size: 0.6rem;
                        letter-spacing: 0.08em;
                        color: rgba(250, 247, 242, 0.5);
                    }

                    .chart svg {
                        flex: 1;
                        height: 44px;
                        overflow: visible;
                    }

                    .chart text {
                        font-size: 9px;
                        fill: #FAF7F2;
                    }

                    .protocol-row {
                        display: flex;
                        gap: 0.75rem;
                        align-items: center;
                        padding: 0.4rem 0;
                    }

                    .protocol-row .icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.2rem;
                        height: 2.2rem;
                        border-radius: 0.6rem;
                    }

                    .protocol-row p {
                        margin: 0.1rem 0 0;
                        font-size: 0.8rem;
                    }

                    .approach-card h3 {
                        font-size: 1.4rem;
                        margin: 1.5rem 0 0.75rem;
                    }

                    .approach-card p {
                        color: rgba(250, 247, 242, 0.7);
                        line-height: 1.6;
                    }

                    .approach-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.25rem;
                        margin-top: 2.5rem;
                    }

                    .approach-controls button {
                        background: none;
                        border: 1px solid rgba(250, 247, 242, 0.3);
                        color: inherit;
                        border-radius: 999px;
                        cursor: pointer;
                    }

                    .approach-controls .arrow {
                        width: 2.5rem;
                        height: 2.5rem;
                    }

                    .approach-controls .arrow:disabled {
                        opacity: 0.3;
                        cursor: default;
                    }

                    .approach-controls .dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        padding: 0;
                        background: rgba(250, 247, 242, 0.3);
                        border: none;
                        transition: width 0.4s cubic-bezier(0.16, 1, 0.3, 1), background 0.3s ease;
                    }

                    .approach-controls .dot.active {
                        width: 1.8rem;
                        background: #C9A87C;
                    }

                    @media (max-width: 600px) {
                        .approach-card {
                            flex-basis: 80vw;
                        }

                        .approach-track {
                            padding: 0 10vw;
                        }
                    }
                "#}
            </style>
            <div ref={spacer} class="approach-spacer" style={spacer_style}>
                <div class="approach-frame">
                    <div class="head">
                        <FadeIn>
                            <Overline light={true}>{"Approach"}</Overline>
                        </FadeIn>
                        <TextReveal tag="h2" text={"Designed for safety, steadiness,\n*and follow-through*"} delay={0.1} />
                        <FadeIn variant={Variant::BlurUp} delay={0.3} y={16.0}>
                            <p class="subtext">
                                {"Aeviti's tone is calm on purpose: interpret carefully, act sustainably, then reassess over time."}
                            </p>
                        </FadeIn>
                    </div>
                    <div ref={track} class="approach-track">
                        { for APPROACH_STEPS.iter().enumerate().map(|(i, step)| html! {
                            <article class="approach-card" key={step.num}>
                                <span class="num">{format!("Step {}", step.num)}</span>
                                <h3>{step.title}</h3>
                                <p>{step.desc}</p>
                                { step_visual(i) }
                            </article>
                        }) }
                    </div>
                    <div class="approach-controls">
                        <button
                            class="arrow"
                            aria-label="Previous step"
                            disabled={*active == 0}
                            onclick={onprev}
                        >
                            {"←"}
                        </button>
                        { for (0..APPROACH_STEPS.len()).map(|i| {
                            let step_to = step_to.clone();
                            html! {
                                <button
                                    class={classes!("dot", (i == *active).then(|| "active"))}
                                    aria-label={format!("Go to step {}", i + 1)}
                                    onclick={Callback::from(move |_: MouseEvent| step_to(i as isize))}
                                />
                            }
                        }) }
                        <button
                            class="arrow"
                            aria-label="Next step"
                            disabled={*active + 1 >= APPROACH_STEPS.len()}
                            onclick={onnext}
                        >
                            {"→"}
                        </button>
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
    fn every_step_has_its_own_visual() {
        assert_eq!(APPROACH_STEPS.len(), 3);
        let titles: Vec<&str> = APPROACH_STEPS.iter().map(|step| step.title).collect();
        assert_eq!(titles, vec!["Establish your baseline", "Translate into actions", "Recheck with intention"]);
    }

    #[test]
    fn trend_line_passes_through_every_point() {
        assert_eq!(trend_polyline(), "20,8 70,32 120,36 160,28");
    }

    #[test]
    fn one_slot_is_booked() {
        assert_eq!(SLOT_DAYS[BOOKED_DAY], ("WED", 12));
        assert_eq!(SLOT_TIMES[BOOKED_TIME], "9:00");
    }
}
