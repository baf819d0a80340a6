//! The sequence a renderer lays out: optional leading slot, the caller's
//! items, optional trailing slot.

/// Which synthetic content slots surround the caller's items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPresence {
    pub leading: bool,
    pub trailing: bool,
}

impl SlotPresence {
    pub const NONE: SlotPresence = SlotPresence {
        leading: false,
        trailing: false,
    };

    pub const fn new(leading: bool, trailing: bool) -> Self {
        Self { leading, trailing }
    }

    /// Length of the display sequence for `item_count` caller items.
    pub const fn display_len(&self, item_count: usize) -> usize {
        item_count + self.leading as usize + self.trailing as usize
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DisplaySlot<'a, T> {
    Leading,
    /// A caller item. `index` is its position in the caller's collection,
    /// not in the display sequence.
    Item { index: usize, item: &'a T },
    Trailing,
}

impl<T> Clone for DisplaySlot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DisplaySlot<'_, T> {}

impl<'a, T> DisplaySlot<'a, T> {
    pub fn item(&self) -> Option<&'a T> {
        match *self {
            DisplaySlot::Item { item, .. } => Some(item),
            DisplaySlot::Leading | DisplaySlot::Trailing => None,
        }
    }
}

/// Build the display sequence for `items`.
pub fn display_sequence<T>(
    items: &[T],
    slots: SlotPresence,
) -> Vec<DisplaySlot<'_, T>> {
    let mut sequence = Vec::with_capacity(slots.display_len(items.len()));
    if slots.leading {
        sequence.push(DisplaySlot::Leading);
    }
    sequence.extend(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| DisplaySlot::Item { index, item }),
    );
    if slots.trailing {
        sequence.push(DisplaySlot::Trailing);
    }
    sequence
}
