pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::{DateNormalizer, NormalizedTimestamp};
pub(crate) use timezone::{ReferenceClock, Zone};
