//! Floating nav state: width shrink, light/dark treatment, mobile menu.

/// Scroll distance in px after which the nav shrinks to its compact width.
pub const SHRINK_THRESHOLD: f64 = 100.0;

/// Ids of sections that are dark regardless of their computed background.
pub const DARK_SECTIONS: &[&str] = &["hero"];

const DARK_LUMINANCE: f64 = 0.45;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub on_dark: bool,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        // The page opens on the dark hero.
        NavState { scrolled: false, on_dark: true, menu_open: false }
    }
}

impl NavState {
    pub fn on_scroll(mut self, scroll_y: f64) -> Self {
        self.scrolled = scroll_y > SHRINK_THRESHOLD;
        self
    }

    pub fn with_backdrop(mut self, on_dark: bool) -> Self {
        self.on_dark = on_dark;
        self
    }

    pub fn toggle_menu(mut self) -> Self {
        self.menu_open = !self.menu_open;
        self
    }

    pub fn close_menu(mut self) -> Self {
        self.menu_open = false;
        self
    }
}

/// Parses the channels of an `rgb(...)`/`rgba(...)` computed colour.
/// `None` for fully transparent or unparseable values.
pub fn parse_rgb(css: &str) -> Option<(u8, u8, u8)> {
    let css = css.trim();
    if css.is_empty() || css == "transparent" {
        return None;
    }
    let open = css.find('(')?;
    let close = css.rfind(')')?;
    let channels: Vec<&str> = css
        .get(open + 1..close)?
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if channels.len() < 3 {
        return None;
    }
    if let Some(alpha) = channels.get(3) {
        if alpha.trim().parse::<f64>().ok()? == 0.0 {
            return None;
        }
    }
    let channel = |raw: &str| raw.trim().parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8);
    Some((channel(channels[0])?, channel(channels[1])?, channel(channels[2])?))
}

pub fn luminance((r, g, b): (u8, u8, u8)) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

/// Verdict for one node while walking up from the point behind the nav.
/// `None` means "transparent, keep walking".
pub fn backdrop_is_dark(id: &str, background: &str) -> Option<bool> {
    if DARK_SECTIONS.contains(&id) {
        return Some(true);
    }
    parse_rgb(background).map(|rgb| luminance(rgb) < DARK_LUMINANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinks_past_threshold() {
        let nav = NavState::default();
        assert!(!nav.on_scroll(100.0).scrolled);
        assert!(nav.on_scroll(101.0).scrolled);
        assert!(!nav.on_scroll(101.0).on_scroll(20.0).scrolled);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let open = NavState::default().toggle_menu();
        assert!(open.menu_open);
        assert!(!open.toggle_menu().menu_open);
        assert!(!open.close_menu().menu_open);
        // Shrinking alone leaves the menu to the scroll listener.
        assert!(open.on_scroll(500.0).menu_open);
    }

    #[test]
    fn backdrop_updates_keep_other_flags() {
        let nav = NavState::default().on_scroll(300.0).with_backdrop(false);
        assert_eq!(nav, NavState { scrolled: true, on_dark: false, menu_open: false });
    }

    #[test]
    fn parses_computed_colours() {
        assert_eq!(parse_rgb("rgb(250, 247, 242)"), Some((250, 247, 242)));
        assert_eq!(parse_rgb("rgba(27, 58, 75, 0.9)"), Some((27, 58, 75)));
        assert_eq!(parse_rgb("rgb(27 58 75 / 0.5)"), Some((27, 58, 75)));
        assert_eq!(parse_rgb("rgba(0, 0, 0, 0)"), None);
        assert_eq!(parse_rgb("transparent"), None);
        assert_eq!(parse_rgb("not a colour"), None);
    }

    #[test]
    fn classifies_page_backgrounds() {
        // ivory
        assert_eq!(backdrop_is_dark("", "rgb(250, 247, 242)"), Some(false));
        // petrol
        assert_eq!(backdrop_is_dark("", "rgb(27, 58, 75)"), Some(true));
        assert_eq!(backdrop_is_dark("hero", "rgba(0, 0, 0, 0)"), Some(true));
        assert_eq!(backdrop_is_dark("baseline", "rgba(0, 0, 0, 0)"), None);
    }
}
