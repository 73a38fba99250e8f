use std::collections::BTreeSet;

/// FAQ expansion state. Items open and close independently, so several
/// answers can be read side by side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: BTreeSet<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Opens a closed item or closes an open one, leaving the rest alone.
    /// Returns the item's new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_collapsed() {
        let accordion = Accordion::default();
        assert!((0..4).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn opening_keeps_other_items_open() {
        let mut accordion = Accordion::default();
        assert!(accordion.toggle(0));
        assert!(accordion.toggle(2));
        assert!(accordion.is_open(0));
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn closing_only_affects_the_clicked_item() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        accordion.toggle(3);

        assert!(!accordion.toggle(1));
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(3));
    }
}
