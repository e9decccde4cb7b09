pub mod date;
pub mod timestamp;

pub use date::{Date, DateError};
pub use timestamp::{Timestamp, TimestampError};

// Decimal and Ulid are re-exported wholesale; the engine attaches its
// conversion semantics through the value layer rather than wrapping them.
pub use rust_decimal::Decimal;
pub use ulid::Ulid;
