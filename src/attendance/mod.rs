pub mod error;
pub mod recorder;
pub mod settings;
pub mod summary;

pub use error::PunchError;
pub use recorder::AttendanceRecorder;
pub use settings::{DuplicateClockInPolicy, Settings};
pub use summary::MonthlyAggregator;
