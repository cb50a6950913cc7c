//! Reusable UI components.

mod calendar;
mod header;
mod layout;
mod loading;
mod progress_ring;

pub use calendar::AttendanceCalendar;
pub use header::Header;
pub use layout::RootLayout;
pub use loading::Loading;
pub use progress_ring::ProgressRing;
