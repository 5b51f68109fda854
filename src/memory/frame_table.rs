//! FrameTable - the fixed set of physical frames.
//!
//! A [`FrameTable`] records which page (if any) occupies each slot:
//! - Slot contents, in slot order
//! - A page → slot index for O(1) residency checks
//! - The number of occupied slots

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;

use crate::common::config::{EMPTY_SLOT_LABEL, REFERENCED_MARKER};
use crate::common::{Error, FrameId, Page, Result};

/// The frame table shared by every replacement engine.
///
/// The table only checks slot bounds. Engines are responsible for keeping
/// each page in at most one slot and never exceeding capacity.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │                  FrameTable                  │
/// │  ┌──────────────┐  ┌──────────────────────┐  │
/// │  │ page_table   │  │ slots: Vec<Option>   │  │
/// │  │ Page → Fid   │─▶│ [A] [B] [null] ...   │  │
/// │  └──────────────┘  └──────────────────────┘  │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    /// Slot contents, `None` meaning empty.
    slots: Vec<Option<Page>>,

    /// Maps each resident page to its slot.
    page_table: HashMap<Page, FrameId>,
}

impl FrameTable {
    /// Create a table of `capacity` empty frames.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![None; capacity.get()],
            page_table: HashMap::with_capacity(capacity.get()),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.page_table.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.capacity()
    }

    #[inline]
    pub fn is_resident(&self, page: Page) -> bool {
        self.page_table.contains_key(&page)
    }

    /// Slot currently holding `page`, if resident.
    #[inline]
    pub fn slot_of(&self, page: Page) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Lowest-index empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Page held by `slot`.
    pub fn get(&self, slot: FrameId) -> Result<Option<Page>> {
        self.check_bounds(slot)?;
        Ok(self.slots[slot.0])
    }

    /// Put `page` into `slot`, returning whatever was there before.
    ///
    /// The previous occupant stops being resident.
    pub fn place(&mut self, slot: FrameId, page: Page) -> Result<Option<Page>> {
        self.check_bounds(slot)?;
        let displaced = self.slots[slot.0].replace(page);
        if let Some(old) = displaced {
            self.page_table.remove(&old);
        }
        self.page_table.insert(page, slot);
        Ok(displaced)
    }

    /// Iterate `(slot, contents)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<Page>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, page)| (FrameId::new(i), *page))
    }

    /// Slot contents in slot order.
    #[inline]
    pub fn pages(&self) -> &[Option<Page>] {
        &self.slots
    }

    /// Snapshot every slot, without reference flags.
    pub fn snapshot(&self) -> Vec<SlotState> {
        self.slots.iter().map(|page| SlotState::new(*page)).collect()
    }

    fn check_bounds(&self, slot: FrameId) -> Result<()> {
        if slot.0 < self.capacity() {
            Ok(())
        } else {
            Err(Error::SlotOutOfBounds {
                slot: slot.0,
                capacity: self.capacity(),
            })
        }
    }
}

/// One slot of a frame-table snapshot.
///
/// `referenced` is only populated by the Clock engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotState {
    pub page: Option<Page>,
    pub referenced: Option<bool>,
}

impl SlotState {
    pub fn new(page: Option<Page>) -> Self {
        Self {
            page,
            referenced: None,
        }
    }

    pub fn with_flag(page: Option<Page>, referenced: bool) -> Self {
        Self {
            page,
            referenced: Some(referenced),
        }
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            None => f.write_str(EMPTY_SLOT_LABEL),
            Some(page) if self.referenced == Some(true) => {
                write!(f, "{}{}", page, REFERENCED_MARKER)
            }
            Some(page) => write!(f, "{}", page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(c: char) -> Page {
        Page::new(c)
    }

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = FrameTable::new(cap(3));
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.occupied_count(), 0);
        assert!(!table.is_full());
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
        assert!(table.pages().iter().all(Option::is_none));
    }

    #[test]
    fn test_capacity_comes_from_validated_config() {
        let config = crate::SimConfig::new(crate::PolicyKind::Fifo, 2).unwrap();
        let table = FrameTable::new(config.frames());
        assert_eq!(table.capacity(), 2);
        assert!(crate::SimConfig::new(crate::PolicyKind::Fifo, 0).is_err());
    }

    #[test]
    fn test_place_and_lookup() {
        let mut table = FrameTable::new(cap(2));
        assert_eq!(table.place(FrameId::new(1), p('A')).unwrap(), None);

        assert!(table.is_resident(p('A')));
        assert_eq!(table.slot_of(p('A')), Some(FrameId::new(1)));
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
        assert_eq!(table.get(FrameId::new(1)).unwrap(), Some(p('A')));
        assert_eq!(table.occupied_count(), 1);
    }

    #[test]
    fn test_place_overwrites_unconditionally() {
        let mut table = FrameTable::new(cap(1));
        table.place(FrameId::new(0), p('A')).unwrap();

        let displaced = table.place(FrameId::new(0), p('B')).unwrap();

        assert_eq!(displaced, Some(p('A')));
        assert!(!table.is_resident(p('A')));
        assert!(table.is_resident(p('B')));
        assert_eq!(table.occupied_count(), 1);
        assert!(table.is_full());
        assert_eq!(table.first_empty(), None);
    }

    #[test]
    fn test_out_of_bounds_slot() {
        let mut table = FrameTable::new(cap(2));
        let err = table.place(FrameId::new(2), p('A')).unwrap_err();
        assert!(matches!(
            err,
            Error::SlotOutOfBounds {
                slot: 2,
                capacity: 2
            }
        ));
        assert!(table.get(FrameId::new(5)).is_err());
    }

    #[test]
    fn test_slot_state_display() {
        assert_eq!(SlotState::new(None).to_string(), "null");
        assert_eq!(SlotState::new(Some(p('A'))).to_string(), "A");
        assert_eq!(SlotState::with_flag(Some(p('A')), true).to_string(), "A*");
        assert_eq!(SlotState::with_flag(Some(p('A')), false).to_string(), "A");
        assert_eq!(SlotState::with_flag(None, false).to_string(), "null");
    }
}
