use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlVideoElement};
use yew::prelude::*;

use crate::components::{EmailCapture, FadeIn, Overline, PillLink, TextReveal};
use crate::content::{HERO_HIGHLIGHTS, HERO_REEL};
use crate::hooks::{use_frame_scroll, viewport_height};
use crate::motion::{Stagger, Variant};
use crate::state::{Reel, REEL_FADE_MS};
use crate::viewport::recession;
use crate::waitlist::Placement;

pub enum ReelAction {
    Ended,
    Faded,
}

impl Reducible for Reel {
    type Action = ReelAction;

    fn reduce(self: Rc<Self>, action: ReelAction) -> Rc<Self> {
        let next = match action {
            ReelAction::Ended => self.ended(),
            ReelAction::Faded => self.faded(),
        };
        Rc::new(next)
    }
}

fn play(video: &HtmlVideoElement) {
    match video.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            // Autoplay can be refused; the gradient underneath stays.
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("Background clip did not start: {:?}", err);
            }
        }),
        Err(err) => log::debug!("Background clip did not start: {:?}", err),
    }
}

#[derive(Properties, PartialEq)]
struct ReelLayerProps {
    src: &'static str,
    shown: bool,
    playing: bool,
    #[prop_or_default]
    onended: Option<Callback<()>>,
}

/// One of the two stacked clips. Rewinds whenever its source or play state
/// changes.
#[function_component(ReelLayer)]
fn reel_layer(props: &ReelLayerProps) -> Html {
    let video = use_node_ref();

    {
        let video = video.clone();
        use_effect_with_deps(
            move |(_, playing)| {
                if let Some(video) = video.cast::<HtmlVideoElement>() {
                    // The attribute alone does not mute a script-created element.
                    video.set_muted(true);
                    video.set_current_time(0.0);
                    if *playing {
                        play(&video);
                    } else {
                        let _ = video.pause();
                    }
                }
                || ()
            },
            (props.src, props.playing),
        );
    }

    let onended = props
        .onended
        .clone()
        .map(|ended| Callback::from(move |_: Event| ended.emit(())));

    html! {
        <video
            ref={video}
            class={classes!("reel-clip", props.shown.then(|| "shown"))}
            src={props.src}
            muted=true
            playsinline=true
            preload="auto"
            {onended}
        />
    }
}

/// Full-bleed dark opener over a crossfading clip reel. While the page
/// scrolls past it the inner frame shrinks, dims and rounds off as if
/// receding under the next section.
#[function_component(Hero)]
pub fn hero() -> Html {
    let frame = use_node_ref();
    let reel = use_reducer_eq(|| Reel::new(HERO_REEL.len()));

    {
        let dispatcher = reel.dispatcher();
        use_effect_with_deps(
            move |fading| {
                let timer = (*fading).then(|| Timeout::new(REEL_FADE_MS, move || dispatcher.dispatch(ReelAction::Faded)));
                move || drop(timer)
            },
            reel.fading,
        );
    }

    {
        let frame = frame.clone();
        use_frame_scroll(Box::new(move || {
            let Some(element) = frame.cast::<HtmlElement>() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let (Ok(scroll_y), Some(vh)) = (window.scroll_y(), viewport_height(&window)) else {
                return;
            };
            let recede = recession(scroll_y, vh);
            let style = element.style();
            let _ = style.set_property("transform", &format!("scale({:.4})", recede.scale));
            let _ = style.set_property("filter", &format!("brightness({:.4})", recede.brightness));
            let _ = style.set_property("border-radius", &format!("{:.2}px", recede.radius));
        }));
    }

    let highlights = Stagger::new(0.9, 0.1);

    let background = if reel.is_empty() {
        html! {}
    } else {
        let onended = {
            let dispatcher = reel.dispatcher();
            Callback::from(move |_: ()| dispatcher.dispatch(ReelAction::Ended))
        };
        html! {
            <div class="hero-reel" aria-hidden="true">
                <ReelLayer src={HERO_REEL[reel.active]} shown={!reel.fading} playing={true} {onended} />
                if reel.len() > 1 {
                    <ReelLayer src={HERO_REEL[reel.next()]} shown={reel.fading} playing={reel.fading} />
                }
                <div class="hero-reel-shade" />
            </div>
        }
    };

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        min-height: 640px;
                        background: #0F2530;
                    }

                    .hero-frame {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        min-height: 640px;
                        overflow: hidden;
                        transform-origin: center top;
                        will-change: transform, filter, border-radius;
                        background:
                            radial-gradient(ellipse at 20% 10%, rgba(26, 155, 107, 0.35), transparent 55%),
                            radial-gradient(ellipse at 80% 90%, rgba(201, 168, 124, 0.25), transparent 50%),
                            linear-gradient(160deg, #1B3A4B 0%, #0F2530 100%);
                        color: #FAF7F2;
                    }

                    .hero-reel,
                    .hero-reel-shade,
                    .reel-clip {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }

                    .reel-clip {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0;
                        transition: opacity 1s ease-out;
                    }

                    .reel-clip.shown {
                        opacity: 1;
                    }

                    .hero-reel-shade {
                        background: rgba(10, 10, 10, 0.65);
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        align-items: center;
                        gap: 4rem;
                        max-width: 1200px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 7rem 2rem 4rem;
                    }

                    .hero h1 {
                        font-size: clamp(2.6rem, 6vw, 4.75rem);
                        line-height: 1.02;
                        letter-spacing: -0.035em;
                        font-weight: 500;
                        margin: 1rem 0 1.5rem;
                    }

                    .hero .lede {
                        font-size: 1.15rem;
                        line-height: 1.6;
                        max-width: 34rem;
                        color: rgba(250, 247, 242, 0.75);
                        margin-bottom: 2rem;
                    }

                    .hero .secondary {
                        margin-top: 1.25rem;
                    }

                    .hero .disclaimer {
                        margin-top: 0.9rem;
                        font-size: 0.78rem;
                        color: rgba(250, 247, 242, 0.5);
                    }

                    .hero-card {
                        border-radius: 1.5rem;
                        padding: 1.75rem;
                        background: rgba(255, 255, 255, 0.06);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        backdrop-filter: blur(20px);
                        -webkit-backdrop-filter: blur(20px);
                    }

                    .hero-card .row {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }

                    .hero-card .row:last-child {
                        border-bottom: none;
                    }

                    .hero-card .icon {
                        font-size: 1.3rem;
                        line-height: 1.4;
                    }

                    .hero-card h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1rem;
                        font-weight: 600;
                    }

                    .hero-card p {
                        margin: 0;
                        font-size: 0.9rem;
                        color: rgba(250, 247, 242, 0.65);
                    }

                    .scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: rgba(250, 247, 242, 0.5);
                        z-index: 1;
                    }

                    @media (max-width: 900px) {
                        .hero {
                            height: auto;
                        }

                        .hero-frame {
                            position: relative;
                            height: auto;
                        }

                        .hero-inner {
                            grid-template-columns: 1fr;
                            gap: 2.5rem;
                        }
                    }
                "#}
            </style>
            <div ref={frame} class="hero-frame">
                { background }
                <div class="hero-inner">
                    <div>
                        <FadeIn variant={Variant::None}>
                            <Overline light={true}>{"Aeviti Baseline · Early access"}</Overline>
                        </FadeIn>
                        <TextReveal
                            tag="h1"
                            text={"Know your baseline.\nMove with *intention*."}
                            delay={0.2}
                            stagger={0.15}
                            duration={0.9}
                        />
                        <FadeIn variant={Variant::BlurUp} delay={0.55} y={20.0}>
                            <p class="lede">
                                {"82 biomarkers across five categories, interpreted in plain language and turned into a steady plan you can actually keep."}
                            </p>
                        </FadeIn>
                        <FadeIn delay={0.75} y={20.0}>
                            <EmailCapture placement={Placement::Hero} light={true} />
                            <div class="secondary">
                                <PillLink href="#approach" ghost={true}>{"How it works"}</PillLink>
                            </div>
                            <p class="disclaimer">
                                {"Wellness interpretation, not medical care. No spam, unsubscribe anytime."}
                            </p>
                        </FadeIn>
                    </div>
                    <FadeIn variant={Variant::BlurIn} delay={0.6} duration={1.1}>
                        <div class="hero-card">
                            { for HERO_HIGHLIGHTS.iter().enumerate().map(|(i, item)| html! {
                                <FadeIn variant={Variant::SlideLeft} x={24.0} delay={highlights.delay(i)} duration={0.7}>
                                    <div class="row">
                                        <span class="icon" style={format!("color: {};", item.color)}>{item.icon}</span>
                                        <div>
                                            <h3>{item.title}</h3>
                                            <p>{item.desc}</p>
                                        </div>
                                    </div>
                                </FadeIn>
                            }) }
                        </div>
                    </FadeIn>
                </div>
                <FadeIn variant={Variant::None} class={classes!("scroll-cue")}>
                    {"Scroll"}
                </FadeIn>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reel_actions_drive_the_crossfade() {
        let reel = Rc::new(Reel::new(HERO_REEL.len()));
        let fading = reel.reduce(ReelAction::Ended);
        assert!(fading.fading);
        assert_eq!(fading.active, 0);

        let settled = fading.reduce(ReelAction::Faded);
        assert_eq!(settled.active, 1);
        assert!(!settled.fading);
        assert_eq!(settled.len(), HERO_REEL.len());
    }
}
