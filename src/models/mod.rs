//! Timetable domain models.
//!
//! Value types derived from a subject's raw schedule text. None of them
//! are persisted; they are recomputed from the text whenever needed.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `TimeOfDay` | Minutes since midnight, `0..=1439` |
//! | `DayCode` | Monday..Sunday, weekday index 0..6 |
//! | `Meeting` | One day + `[start, end)` + optional room |
//! | `SubjectRef` | Catalog section: code, section, identity, schedule |

mod day;
mod meeting;
mod subject;
mod time;

pub use day::DayCode;
pub use meeting::Meeting;
pub use subject::SubjectRef;
pub use time::TimeOfDay;
