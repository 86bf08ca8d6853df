//! Grid placement.

use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

use super::GridLayout;
use crate::models::{DayCode, Meeting, SubjectRef, TimeOfDay};
use crate::parser::{FallbackOnly, ScheduleParser, SegmentGrammar};

/// One grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// Row position (0-based).
    pub index: usize,
    /// Row start.
    pub start: TimeOfDay,
    /// Zero-padded 24-hour key (`"07:00"`).
    pub key: String,
    /// 12-hour display label (`"7:00 AM"`).
    pub label: String,
}

impl TimeSlot {
    /// Creates a row starting at `start`.
    pub fn new(index: usize, start: TimeOfDay) -> Self {
        Self {
            index,
            start,
            key: start.to_twenty_four_hour(),
            label: start.to_twelve_hour(),
        }
    }
}

/// Grid coordinate: a weekday column and a row start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellKey {
    /// Column.
    pub day: DayCode,
    /// Row start.
    pub slot: TimeOfDay,
}

impl CellKey {
    /// Creates a key.
    pub fn new(day: DayCode, slot: TimeOfDay) -> Self {
        Self { day, slot }
    }
}

/// A meeting placed on the grid.
///
/// Every row the meeting occupies gets its own `GridCell` carrying the
/// same `origin_slot_index` and `row_span`; only the cell at the origin
/// row is drawn, spanning `row_span` rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    /// The subject the meeting belongs to.
    pub subject: SubjectRef,
    /// The placed meeting.
    pub meeting: Meeting,
    /// Row of the meeting's first occupied slot.
    pub origin_slot_index: usize,
    /// Rows the drawn cell spans (at least 1).
    pub row_span: usize,
}

impl GridCell {
    /// Last row covered by the drawn cell.
    #[inline]
    pub fn last_slot_index(&self) -> usize {
        self.origin_slot_index + self.row_span - 1
    }

    /// Whether `slot_index` lies in `(origin, origin + row_span - 1]`.
    #[inline]
    pub fn covers(&self, slot_index: usize) -> bool {
        slot_index > self.origin_slot_index && slot_index <= self.last_slot_index()
    }
}

/// What a renderer draws at one `(day, row)` position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellView<'a> {
    /// A meeting's drawn cell, spanning `row_span` rows.
    Origin(&'a GridCell),
    /// Merged into an origin cell above; draw nothing.
    Covered,
    /// Free.
    Empty,
}

/// One rendered row: the slot and a view per weekday.
#[derive(Debug, Clone)]
pub struct GridRow<'a> {
    /// The row's slot.
    pub slot: &'a TimeSlot,
    /// Views indexed by weekday (Mon=0 .. Sun=6).
    pub cells: [CellView<'a>; DayCode::COUNT],
}

/// Builds weekly timetables from subjects.
///
/// The slot sequence is generated once per builder and shared by every
/// timetable it builds.
///
/// # Placement
/// Subjects are processed in input order and their meetings in parser
/// order. A meeting claims every slot whose start lies in
/// `[meeting.start, meeting.end)` on its day. The first claim of a
/// `(day, slot)` wins; later claims for that key are discarded.
#[derive(Debug, Clone)]
pub struct TimetableBuilder<G = FallbackOnly> {
    layout: GridLayout,
    slots: Arc<[TimeSlot]>,
    parser: ScheduleParser<G>,
}

impl Default for TimetableBuilder<FallbackOnly> {
    fn default() -> Self {
        Self::new(GridLayout::default())
    }
}

impl TimetableBuilder<FallbackOnly> {
    /// Creates a builder for `layout` with the built-in grammar.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            slots: layout.slots().into(),
            parser: ScheduleParser::new(),
        }
    }
}

impl<G: SegmentGrammar> TimetableBuilder<G> {
    /// Replaces the schedule parser.
    pub fn with_parser<H: SegmentGrammar>(self, parser: ScheduleParser<H>) -> TimetableBuilder<H> {
        TimetableBuilder {
            layout: self.layout,
            slots: self.slots,
            parser,
        }
    }

    /// The layout rows were generated from.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The shared slot sequence.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Lays out `subjects` on the grid.
    pub fn build<'a, I>(&self, subjects: I) -> Timetable
    where
        I: IntoIterator<Item = &'a SubjectRef>,
    {
        let mut cells = BTreeMap::new();
        for subject in subjects {
            for meeting in self.parser.parse(&subject.schedule) {
                self.place(&mut cells, subject, meeting);
            }
        }
        Timetable {
            slots: Arc::clone(&self.slots),
            cells,
        }
    }

    fn place(&self, cells: &mut BTreeMap<CellKey, GridCell>, subject: &SubjectRef, meeting: Meeting) {
        let occupied: Vec<&TimeSlot> = self
            .slots
            .iter()
            .filter(|slot| meeting.contains(slot.start))
            .collect();
        let Some(origin) = occupied.first().map(|slot| slot.index) else {
            trace!(
                subject = %subject.subject_code,
                meeting = %meeting,
                "meeting falls outside the grid"
            );
            return;
        };
        let row_span = self.layout.row_span(&meeting);

        for slot in occupied {
            match cells.entry(CellKey::new(meeting.day, slot.start)) {
                Entry::Vacant(entry) => {
                    entry.insert(GridCell {
                        subject: subject.clone(),
                        meeting: meeting.clone(),
                        origin_slot_index: origin,
                        row_span,
                    });
                }
                Entry::Occupied(entry) => {
                    trace!(
                        subject = %subject.subject_code,
                        holder = %entry.get().subject.subject_code,
                        day = %meeting.day,
                        slot = %slot.key,
                        "slot already claimed, discarding placement"
                    );
                }
            }
        }
    }
}

/// A laid-out weekly timetable.
#[derive(Debug, Clone)]
pub struct Timetable {
    slots: Arc<[TimeSlot]>,
    cells: BTreeMap<CellKey, GridCell>,
}

impl Timetable {
    /// Rows, in time order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Cell claimed at a key.
    pub fn get(&self, key: &CellKey) -> Option<&GridCell> {
        self.cells.get(key)
    }

    /// Cell claimed at `(day, row)`, origin or not.
    pub fn cell(&self, day: DayCode, slot_index: usize) -> Option<&GridCell> {
        let slot = self.slots.get(slot_index)?;
        self.cells.get(&CellKey::new(day, slot.start))
    }

    /// Cell at `(day, row)` if it is that meeting's origin.
    pub fn origin_at(&self, day: DayCode, slot_index: usize) -> Option<&GridCell> {
        self.cell(day, slot_index)
            .filter(|cell| cell.origin_slot_index == slot_index)
    }

    /// Whether `(day, row)` is merged into an origin cell above it.
    pub fn is_covered(&self, day: DayCode, slot_index: usize) -> bool {
        (0..slot_index.min(self.slots.len())).any(|row| {
            self.origin_at(day, row)
                .is_some_and(|cell| cell.covers(slot_index))
        })
    }

    /// What to draw at `(day, row)`.
    pub fn view(&self, day: DayCode, slot_index: usize) -> CellView<'_> {
        if self.is_covered(day, slot_index) {
            return CellView::Covered;
        }
        match self.origin_at(day, slot_index) {
            Some(cell) => CellView::Origin(cell),
            None => CellView::Empty,
        }
    }

    /// Every row with a view per weekday.
    pub fn rows(&self) -> Vec<GridRow<'_>> {
        self.slots
            .iter()
            .map(|slot| GridRow {
                slot,
                cells: DayCode::ALL.map(|day| self.view(day, slot.index)),
            })
            .collect()
    }

    /// Origin cells, ordered by day then time.
    pub fn origins(&self) -> Vec<&GridCell> {
        self.cells
            .iter()
            .filter(|(key, cell)| {
                self.slots
                    .get(cell.origin_slot_index)
                    .is_some_and(|slot| slot.start == key.slot)
            })
            .map(|(_, cell)| cell)
            .collect()
    }

    /// All claimed cells with their keys.
    pub fn cells(&self) -> impl Iterator<Item = (&CellKey, &GridCell)> {
        self.cells.iter()
    }

    /// Number of claimed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
