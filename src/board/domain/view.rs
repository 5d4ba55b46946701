//! Rendered board contents.

use super::{CardRecord, Lane, lane_id_for_column};

/// Cards placed into lanes, in insertion order within each lane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    todo: Vec<CardRecord>,
    in_progress: Vec<CardRecord>,
    done: Vec<CardRecord>,
    unplaced: Vec<CardRecord>,
}

impl BoardView {
    /// Places each record into the lane its column maps to.
    ///
    /// Records whose lane identifier names no lane are kept aside in
    /// [`BoardView::unplaced`].
    #[must_use]
    pub fn render(records: impl IntoIterator<Item = CardRecord>) -> Self {
        let mut view = Self::default();
        for record in records {
            match Lane::from_id(&lane_id_for_column(&record.column)) {
                Some(lane) => view.lane_mut(lane).push(record),
                None => view.unplaced.push(record),
            }
        }
        view
    }

    /// Returns the cards in `lane`.
    #[must_use]
    pub fn lane(&self, lane: Lane) -> &[CardRecord] {
        match lane {
            Lane::Todo => &self.todo,
            Lane::InProgress => &self.in_progress,
            Lane::Done => &self.done,
        }
    }

    /// Returns records that could not be placed in any lane.
    #[must_use]
    pub fn unplaced(&self) -> &[CardRecord] {
        &self.unplaced
    }

    /// Returns the lane currently holding the card `id`.
    #[must_use]
    pub fn lane_of(&self, id: &str) -> Option<Lane> {
        Lane::ALL
            .into_iter()
            .find(|lane| self.lane(*lane).iter().any(|card| card.id == id))
    }

    /// Returns the card `id`, if placed.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&CardRecord> {
        Lane::ALL
            .into_iter()
            .find_map(|lane| self.lane(lane).iter().find(|card| card.id == id))
    }

    /// Appends a card to the end of `lane`.
    pub fn push(&mut self, lane: Lane, card: CardRecord) {
        self.lane_mut(lane).push(card);
    }

    /// Removes the card `id` from whichever lane holds it.
    pub fn remove(&mut self, id: &str) -> Option<CardRecord> {
        let lane = self.lane_of(id)?;
        let cards = self.lane_mut(lane);
        let index = cards.iter().position(|card| card.id == id)?;
        Some(cards.remove(index))
    }

    /// Moves the card `id` to the end of `lane` and rewrites its column.
    ///
    /// Returns `false` when no such card is placed.
    pub fn relocate(&mut self, id: &str, lane: Lane) -> bool {
        let Some(mut card) = self.remove(id) else {
            return false;
        };
        lane.column().as_str().clone_into(&mut card.column);
        self.lane_mut(lane).push(card);
        true
    }

    /// Total number of placed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        Lane::ALL.into_iter().map(|lane| self.lane(lane).len()).sum()
    }

    /// Returns `true` when no card is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut Vec<CardRecord> {
        match lane {
            Lane::Todo => &mut self.todo,
            Lane::InProgress => &mut self.in_progress,
            Lane::Done => &mut self.done,
        }
    }
}
