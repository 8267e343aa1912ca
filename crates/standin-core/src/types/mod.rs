mod decimal;
mod timestamp;

pub use decimal::{Decimal, DecimalParts};
pub use timestamp::Timestamp;
