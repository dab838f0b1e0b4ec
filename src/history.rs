//! Drop history log
//!
//! Newest entry first, cleared on reset.

use std::collections::VecDeque;
use std::fmt;

use crate::sim::{PlacedObject, Side};

/// One line of the drop log
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// 1-based drop number since the last reset
    pub sequence: u32,
    pub weight_kg: u32,
    pub side: Side,
    /// Distance from the pivot (pixels)
    pub distance_px: f32,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}kg dropped on the {} side, {:.0}px from center",
            self.sequence,
            self.weight_kg,
            self.side.as_str(),
            self.distance_px
        )
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_sequence: u32,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            next_sequence: 1,
        }
    }

    /// Prepend an entry for a freshly placed object
    pub fn record(&mut self, obj: &PlacedObject) -> &HistoryEntry {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.entries.push_front(HistoryEntry {
            sequence,
            weight_kg: obj.weight_kg,
            side: obj.side(),
            distance_px: obj.distance_px(),
        });
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_sequence = 1;
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent drop (if any)
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }
}
