/// Ascending delays for sibling entrances. Each sibling still animates on its
/// own; the cascade comes purely from the offsets handed out here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Stagger { base, step }
    }

    /// Delay in seconds for the sibling at `index`, rounded to whole milliseconds.
    pub fn delay(&self, index: usize) -> f64 {
        ((self.base + index as f64 * self.step) * 1000.0).round() / 1000.0
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Stagger::new(0.0, 0.08)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_ascend_from_base() {
        let stagger = Stagger::new(0.2, 0.06);
        let delays: Vec<f64> = (0..4).map(|i| stagger.delay(i)).collect();
        assert_eq!(delays, vec![0.2, 0.26, 0.32, 0.38]);
    }

    #[test]
    fn delays_print_cleanly_in_css() {
        assert_eq!(format!("{}s", Stagger::new(0.0, 0.06).delay(3)), "0.18s");
        assert_eq!(Stagger::default().delay(0), 0.0);
    }
}
