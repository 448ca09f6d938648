//! Fail-soft helpers grouped by the type they extend
//!
//! Parsing and formatting helpers never return an error: each takes or
//! implies a fallback (zero, an empty string, the nil UUID, the minimum
//! date-time). File and stream readers treat a missing source as empty.

pub mod bool;
pub mod datetime;
pub mod decimal;
pub mod enums;
pub mod float;
pub mod fs;
pub mod int;
pub mod iter;
pub mod stream;
pub mod string;

pub use self::bool::BoolExt;
pub use datetime::DateTimeExt;
pub use decimal::DecimalExt;
pub use enums::{EnumExt, EnumMeta};
pub use float::FloatExt;
pub use int::IntExt;
pub use iter::{IterExt, NumericAggregate, OptionSliceExt, VecExt};
pub use stream::{ByteStreamExt, StreamWriteExt};
pub use string::{OptionStrExt, StrExt};
