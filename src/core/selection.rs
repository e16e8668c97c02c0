use crate::core::slots::SlotGenerator;
use crate::models::TimeSlot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slots picked for a tournament, kept sorted by start time with no duplicates
///
/// Deserializing goes through `From<Vec<TimeSlot>>`, so a client-supplied list is
/// normalised on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TimeSlot>", into = "Vec<TimeSlot>")]
pub struct SelectionSet {
    slots: Vec<TimeSlot>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.slots.iter()
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.binary_search(slot).is_ok()
    }

    pub fn slots_for_day(&self, day: NaiveDate) -> impl Iterator<Item = &TimeSlot> + '_ {
        self.slots.iter().filter(move |slot| slot.day() == day)
    }

    /// Remove the slot if selected, otherwise add it
    ///
    /// Returns whether the slot is selected afterwards.
    pub fn toggle(&mut self, slot: TimeSlot) -> bool {
        match self.slots.binary_search(&slot) {
            Ok(index) => {
                self.slots.remove(index);
                false
            }
            Err(index) => {
                self.slots.insert(index, slot);
                true
            }
        }
    }

    /// Replace the selection for `day` with every slot the generator offers that day
    ///
    /// Returns the number of slots now selected on `day`.
    pub fn select_all_for_day(&mut self, day: NaiveDate, generator: &SlotGenerator) -> usize {
        let day_slots = generator.day_slots(day);
        let selected = day_slots.len();

        self.slots.retain(|slot| slot.day() != day);
        self.slots.extend(day_slots);
        self.normalise();

        selected
    }

    /// Drop every selected slot starting on `day`
    ///
    /// Returns the number of slots removed.
    pub fn deselect_all_for_day(&mut self, day: NaiveDate) -> usize {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.day() != day);
        before - self.slots.len()
    }

    fn normalise(&mut self) {
        self.slots.sort();
        self.slots.dedup();
    }
}

impl From<Vec<TimeSlot>> for SelectionSet {
    fn from(slots: Vec<TimeSlot>) -> Self {
        let mut selection = Self { slots };
        selection.normalise();
        selection
    }
}

impl From<SelectionSet> for Vec<TimeSlot> {
    fn from(selection: SelectionSet) -> Self {
        selection.slots
    }
}

impl FromIterator<TimeSlot> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
