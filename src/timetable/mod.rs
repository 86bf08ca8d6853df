//! Weekly timetable layout.
//!
//! Projects subjects' meetings onto a fixed weekly grid: seven weekday
//! columns by half-hour rows from 07:00 to 21:30.
//!
//! # Merged Cells
//!
//! A meeting is drawn once, at its origin row, spanning `row_span` rows.
//! For a given weekday, row `r` is covered (not drawn independently) iff
//! some origin cell at row `o < r` has `r <= o + row_span - 1`. This is
//! computable from `(origin_slot_index, row_span)` alone; see
//! [`Timetable::view`].
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{DayCode, SubjectRef};
//! use u_timetable::timetable::{CellView, TimetableBuilder};
//!
//! let subjects = vec![
//!     SubjectRef::new("CS101").with_section("A").with_schedule("M 9:00 AM - 10:30 AM Room 301"),
//! ];
//! let timetable = TimetableBuilder::default().build(&subjects);
//!
//! let nine = timetable.slots().iter().position(|s| s.key == "09:00").unwrap();
//! match timetable.view(DayCode::Mon, nine) {
//!     CellView::Origin(cell) => assert_eq!(cell.row_span, 3),
//!     other => panic!("expected origin, got {other:?}"),
//! }
//! assert_eq!(timetable.view(DayCode::Mon, nine + 1), CellView::Covered);
//! ```

mod grid;
mod layout;

pub use grid::{CellKey, CellView, GridCell, GridRow, Timetable, TimetableBuilder, TimeSlot};
pub use layout::{GridLayout, DEFAULT_FIRST_SLOT, DEFAULT_LAST_SLOT, DEFAULT_SLOT_MINUTES};
