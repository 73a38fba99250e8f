use log::info;
use yew::prelude::*;

mod components;
mod config;
mod content;
mod hooks;
mod motion;
mod sections;
mod state;
mod viewport;
mod waitlist;

use sections::{Approach, Baseline, Coverage, Cta, FaqSection, Footer, Hero, Labs, Nav, Principles, Signal, Trust};

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: #FAF7F2;
                        color: #111111;
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                        -webkit-font-smoothing: antialiased;
                        overflow-x: hidden;
                    }

                    *, *::before, *::after {
                        box-sizing: border-box;
                    }

                    .reveal-clip {
                        display: block;
                        overflow: hidden;
                        padding-bottom: 0.08em;
                    }

                    .reveal-line {
                        display: inline-block;
                    }

                    .accent {
                        font-family: "Instrument Serif", Georgia, serif;
                        font-style: italic;
                        font-weight: 400;
                        color: #00774D;
                    }

                    #hero .accent,
                    .approach .accent,
                    .principles .accent,
                    .cta .accent {
                        color: #C9A87C;
                    }

                    .overline {
                        margin: 0;
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.18em;
                        text-transform: uppercase;
                        color: #00774D;
                    }

                    .overline.light {
                        color: #C9A87C;
                    }

                    .pill-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.4rem;
                        padding: 0.6rem 1.2rem;
                        border-radius: 999px;
                        background: #00774D;
                        color: #FAF7F2;
                        font-size: 0.88rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }

                    .pill-link:hover {
                        background: #1A9B6B;
                    }

                    .pill-link.ghost {
                        background: transparent;
                        color: inherit;
                        border: 1px solid currentColor;
                    }

                    .email-capture {
                        display: flex;
                        gap: 0.5rem;
                        max-width: 30rem;
                        padding: 0.35rem;
                        border-radius: 999px;
                        background: #FFFFFF;
                        border: 1px solid #D4CEC4;
                    }

                    .email-capture.light {
                        background: rgba(255, 255, 255, 0.08);
                        border-color: rgba(255, 255, 255, 0.2);
                    }

                    .email-capture input {
                        flex: 1;
                        min-width: 0;
                        padding: 0.75rem 1rem;
                        border: none;
                        background: transparent;
                        font: inherit;
                        color: inherit;
                        outline: none;
                    }

                    .email-capture.light input::placeholder {
                        color: rgba(250, 247, 242, 0.55);
                    }

                    .email-capture button {
                        padding: 0.75rem 1.4rem;
                        border: none;
                        border-radius: 999px;
                        background: #00774D;
                        color: #FAF7F2;
                        font: inherit;
                        font-weight: 500;
                        cursor: pointer;
                        white-space: nowrap;
                    }

                    .email-capture button:disabled {
                        opacity: 0.6;
                        cursor: progress;
                    }

                    .email-error {
                        margin: 0.6rem 0 0 1rem;
                        font-size: 0.85rem;
                        color: #B3261E;
                    }

                    .email-confirmed {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.6rem;
                        padding: 0.9rem 1.4rem;
                        border-radius: 999px;
                        background: rgba(0, 119, 77, 0.1);
                        color: #00774D;
                        font-weight: 500;
                    }

                    .email-confirmed.light {
                        background: rgba(255, 255, 255, 0.1);
                        color: #FAF7F2;
                    }

                    @media (prefers-reduced-motion: reduce) {
                        html {
                            scroll-behavior: auto;
                        }
                    }
                "#}
            </style>
            <Nav />
            <main>
                <Hero />
                <Baseline />
                <Coverage />
                <Labs />
                <Approach />
                <Signal />
                <Trust />
                <Principles />
                <Cta />
                <FaqSection />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::motion::{EnterAnimation, Variant};

    /// Markup of the whole page before any effect has run: no observer has
    /// reported, no frame has been measured.
    async fn first_paint() -> String {
        yew::LocalServerRenderer::<App>::new().render().await
    }

    /// Markup from the section with `from` up to the one with `to`.
    fn between<'a>(html: &'a str, from: &str, to: &str) -> &'a str {
        let start = html.find(&format!("id=\"{}\"", from)).expect("start section rendered");
        let end = html.find(&format!("id=\"{}\"", to)).expect("end section rendered");
        assert!(start < end, "{} renders before {}", from, to);
        &html[start..end]
    }

    /// Inline `style` values in document order.
    fn inline_styles(html: &str) -> Vec<&str> {
        html.split("style=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[tokio::test]
    async fn hero_static_elements_are_visible_on_first_paint() {
        let html = first_paint().await;
        let hero = between(&html, "hero", "baseline");
        let resting = EnterAnimation { variant: Variant::None, ..Default::default() }.css(false);

        let shown: Vec<&str> = inline_styles(hero)
            .into_iter()
            .filter(|style| style.starts_with("opacity: 1;"))
            .collect();
        // The overline and the scroll cue.
        assert_eq!(shown, vec![resting.as_str(), resting.as_str()]);
        assert!(!resting.contains("translate"));
        assert!(!resting.contains("scale("));
    }

    #[tokio::test]
    async fn below_the_fold_content_starts_hidden() {
        let html = first_paint().await;
        let below = between(&html, "baseline", "labs");

        let wrappers: Vec<&str> = inline_styles(below)
            .into_iter()
            .filter(|style| style.starts_with("opacity:"))
            .collect();
        assert!(wrappers.len() >= 8, "only {} entrance wrappers", wrappers.len());
        for style in &wrappers {
            assert!(style.starts_with("opacity: 0;"), "{}", style);
        }
        assert!(wrappers.iter().any(|style| style.contains("translateY(32px)")));
    }

    #[tokio::test]
    async fn headline_lines_wait_below_their_clip() {
        let html = first_paint().await;
        let hero = between(&html, "hero", "baseline");

        let lines: Vec<&str> = inline_styles(hero)
            .into_iter()
            .filter(|style| style.starts_with("transform: translateY(110%)"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|style| style.contains("opacity: 0;")));
    }
}
