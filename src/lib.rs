//! Weekly class timetable engine.
//!
//! Interprets human-readable course schedule strings
//! (`"M W F 9:00 AM - 10:30 AM Room 301"`), detects time conflicts between
//! course sections, and lays meetings out on a half-hour weekly grid with
//! merged cells.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeOfDay`, `DayCode`, `Meeting`, `SubjectRef`
//! - **`parser`**: Schedule-string grammar and the external-grammar seam
//! - **`conflict`**: Pairwise time-overlap detection
//! - **`timetable`**: Grid layout, placement, and merged-cell views
//! - **`plan`**: Add-to-plan rules (duplicate subject, schedule conflict)
//!
//! # Data Flow
//!
//! ```text
//! schedule text ──► parser ──► meetings ──┬──► conflict  (pairwise, on add)
//!                                         └──► timetable (batch, on view)
//! ```
//!
//! Every operation is a pure, synchronous transform over its inputs.
//! Parsing is best-effort: malformed pieces are dropped and logged through
//! `tracing`, never raised.

pub mod conflict;
pub mod error;
pub mod models;
pub mod parser;
pub mod plan;
pub mod timetable;

pub use error::{ParseError, ParseResult};
