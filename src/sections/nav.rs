use std::rc::Rc;

use web_sys::{Element, HtmlElement, Window};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::PillLink;
use crate::content::NAV_ITEMS;
use crate::hooks::use_frame_scroll;
use crate::state::nav::backdrop_is_dark;
use crate::state::NavState;

pub enum NavAction {
    Measured { scroll_y: f64, on_dark: Option<bool> },
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = match action {
            NavAction::Measured { scroll_y, on_dark } => {
                let next = self.on_scroll(scroll_y);
                match on_dark {
                    Some(dark) => next.with_backdrop(dark),
                    None => next,
                }
            }
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::CloseMenu => self.close_menu(),
        };
        Rc::new(next)
    }
}

/// Walks up from whatever is painted just below the nav until an element
/// decides the question. `None` when nothing is under the sample point.
fn sample_backdrop(window: &Window, header: &HtmlElement) -> Option<bool> {
    let document = window.document()?;
    let rect = header.get_bounding_client_rect();
    let x = rect.left() + rect.width() / 2.0;
    let y = rect.bottom() + 4.0;

    // Hide the nav itself so the hit test lands on the page behind it.
    let style = header.style();
    let _ = style.set_property("visibility", "hidden");
    let hit = document.element_from_point(x as f32, y as f32);
    let _ = style.remove_property("visibility");

    let mut node: Option<Element> = Some(hit?);
    while let Some(element) = node {
        if element.tag_name().eq_ignore_ascii_case("body") {
            break;
        }
        let background = window
            .get_computed_style(&element)
            .ok()
            .flatten()
            .and_then(|computed| computed.get_property_value("background-color").ok())
            .unwrap_or_default();
        if let Some(dark) = backdrop_is_dark(&element.id(), &background) {
            return Some(dark);
        }
        node = element.parent_element();
    }
    Some(false)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer_eq(NavState::default);
    let header = use_node_ref();

    {
        let header = header.clone();
        let dispatcher = state.dispatcher();
        use_frame_scroll(Box::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let on_dark = header
                .cast::<HtmlElement>()
                .and_then(|header| sample_backdrop(&window, &header));
            dispatcher.dispatch(NavAction::Measured { scroll_y, on_dark });
        }));
    }

    {
        let dispatcher = state.dispatcher();
        use_event_with_window("scroll", move |_: Event| dispatcher.dispatch(NavAction::CloseMenu));
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::CloseMenu))
    };

    let nav = *state;

    html! {
        <header ref={header} class={classes!(
            "site-nav",
            nav.scrolled.then(|| "scrolled"),
            if nav.on_dark { "on-dark" } else { "on-light" }
        )}>
            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 100;
                        width: min(1120px, calc(100% - 2rem));
                        transition: width 0.6s cubic-bezier(0.16, 1, 0.3, 1),
                                    background-color 0.4s ease,
                                    color 0.4s ease;
                    }

                    .site-nav.scrolled {
                        width: min(860px, calc(100% - 2rem));
                    }

                    .site-nav .bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                        padding: 0.6rem 0.75rem 0.6rem 1.25rem;
                        border-radius: 999px;
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                    }

                    .site-nav.on-dark .bar {
                        background: rgba(255, 255, 255, 0.08);
                        border: 1px solid rgba(255, 255, 255, 0.14);
                        color: #FAF7F2;
                    }

                    .site-nav.on-light .bar {
                        background: rgba(250, 247, 242, 0.85);
                        border: 1px solid rgba(17, 17, 17, 0.08);
                        color: #111111;
                    }

                    .site-nav .logo {
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        font-size: 1.15rem;
                        color: inherit;
                        text-decoration: none;
                    }

                    .site-nav .links {
                        display: flex;
                        gap: 1.75rem;
                    }

                    .site-nav .links a {
                        color: inherit;
                        opacity: 0.75;
                        text-decoration: none;
                        font-size: 0.9rem;
                        transition: opacity 0.2s ease;
                    }

                    .site-nav .links a:hover {
                        opacity: 1;
                    }

                    .site-nav .burger {
                        display: none;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.4rem;
                        cursor: pointer;
                    }

                    .site-nav .mobile-menu {
                        display: none;
                    }

                    @media (max-width: 768px) {
                        .site-nav .links,
                        .site-nav .bar > .pill-link {
                            display: none;
                        }

                        .site-nav .burger {
                            display: block;
                        }

                        .site-nav .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            margin-top: 0.5rem;
                            padding: 1.25rem 1.5rem;
                            border-radius: 1.25rem;
                            background: rgba(250, 247, 242, 0.97);
                            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                        }

                        .site-nav .mobile-menu a {
                            color: #111111;
                            text-decoration: none;
                        }
                    }
                "#}
            </style>
            <nav class="bar">
                <a class="logo" href="#hero">{"aeviti"}</a>
                <div class="links">
                    { for NAV_ITEMS.iter().map(|link| html! {
                        <a href={link.href}>{link.label}</a>
                    }) }
                </div>
                <PillLink href="#waitlist">{"Join waitlist"}</PillLink>
                <button
                    class="burger"
                    aria-label="Toggle menu"
                    aria-expanded={nav.menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if nav.menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            <div class={classes!("mobile-menu", nav.menu_open.then(|| "open"))}>
                { for NAV_ITEMS.iter().map(|link| html! {
                    <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                }) }
                <a href="#waitlist" onclick={close_menu.clone()}>{"Join waitlist"}</a>
            </div>
        </header>
    }
}
