use crate::app::domain::items::DisplayItem;

/// Which display items are visible. Every tracked item sits in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemLists {
    enabled: Vec<DisplayItem>,
    disabled: Vec<DisplayItem>,
}

impl ItemLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.enabled.clear();
        self.disabled.clear();
    }

    /// Start tracking `item` in the list matching `enabled`.
    /// An item that is already tracked is moved instead of duplicated.
    pub fn seed(&mut self, item: DisplayItem, enabled: bool) {
        self.enabled.retain(|i| *i != item);
        self.disabled.retain(|i| *i != item);
        if enabled {
            self.enabled.push(item);
        } else {
            self.disabled.push(item);
        }
    }

    /// Move `item` into the enabled (or disabled) list.
    ///
    /// Does nothing and returns `false` when the item isn't in the source list,
    /// e.g. when it is toggled on twice in a row.
    pub fn toggle(&mut self, item: DisplayItem, enabled: bool) -> bool {
        let (from, to) = if enabled {
            (&mut self.disabled, &mut self.enabled)
        } else {
            (&mut self.enabled, &mut self.disabled)
        };

        match from.iter().position(|i| *i == item) {
            Some(index) => {
                from.remove(index);
                to.push(item);
                tracing::debug!("Moved '{}' to the {} list", item, if enabled { "enabled" } else { "disabled" });
                true
            }
            None => {
                tracing::debug!("'{}' is not in the expected list, toggle ignored", item);
                false
            }
        }
    }

    pub fn enabled(&self) -> &[DisplayItem] {
        &self.enabled
    }

    pub fn disabled(&self) -> &[DisplayItem] {
        &self.disabled
    }

    pub fn is_enabled(&self, item: DisplayItem) -> bool {
        self.enabled.contains(&item)
    }

    pub fn is_disabled(&self, item: DisplayItem) -> bool {
        self.disabled.contains(&item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed() {
        let mut lists = ItemLists::new();
        lists.seed(DisplayItem::Distance, true);
        lists.seed(DisplayItem::Oat, false);
        assert_eq!(lists.enabled(), &[DisplayItem::Distance]);
        assert_eq!(lists.disabled(), &[DisplayItem::Oat]);

        lists.seed(DisplayItem::Oat, true);
        assert_eq!(lists.enabled(), &[DisplayItem::Distance, DisplayItem::Oat]);
        assert!(lists.disabled().is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut lists = ItemLists::new();
        lists.seed(DisplayItem::Wind, false);
        lists.seed(DisplayItem::Heading, true);
        let original = lists.clone();

        assert!(lists.toggle(DisplayItem::Wind, true));
        assert!(lists.is_enabled(DisplayItem::Wind));
        assert!(lists.toggle(DisplayItem::Wind, false));
        assert!(lists.is_disabled(DisplayItem::Wind));

        assert_eq!(lists.enabled(), original.enabled());
        assert_eq!(lists.disabled(), original.disabled());
    }

    #[test]
    fn test_double_toggle_is_a_no_op() {
        let mut lists = ItemLists::new();
        lists.seed(DisplayItem::Wind, false);
        lists.seed(DisplayItem::Heading, true);

        assert!(lists.toggle(DisplayItem::Wind, true));
        assert!(!lists.toggle(DisplayItem::Wind, true));
        assert_eq!(lists.enabled(), &[DisplayItem::Heading, DisplayItem::Wind]);
        assert!(lists.disabled().is_empty());
    }

    #[test]
    fn test_untracked_item_is_ignored() {
        let mut lists = ItemLists::new();
        lists.seed(DisplayItem::Heading, true);

        assert!(!lists.toggle(DisplayItem::Logo, false));
        assert!(!lists.is_enabled(DisplayItem::Logo));
        assert!(!lists.is_disabled(DisplayItem::Logo));
        assert_eq!(lists.enabled(), &[DisplayItem::Heading]);
    }

    fn any_item() -> impl Strategy<Value = DisplayItem> {
        (0..DisplayItem::ALL.len()).prop_map(|i| DisplayItem::ALL[i])
    }

    proptest! {
        #[test]
        fn test_every_item_stays_in_exactly_one_list(
            seeds in proptest::collection::vec(any::<bool>(), DisplayItem::ALL.len()),
            toggles in proptest::collection::vec((any_item(), any::<bool>()), 0..64),
        ) {
            let mut lists = ItemLists::new();
            for (item, on) in DisplayItem::ALL.iter().zip(seeds) {
                lists.seed(*item, on);
            }
            for (item, on) in toggles {
                lists.toggle(item, on);
            }
            for item in DisplayItem::ALL {
                prop_assert!(lists.is_enabled(item) ^ lists.is_disabled(item));
            }
            prop_assert_eq!(lists.enabled().len() + lists.disabled().len(), DisplayItem::ALL.len());
        }
    }
}
