/// Characters billed per "K" unit of context size
pub(crate) const CHARS_PER_K: u32 = 4;

/// Input sizes strictly above this many K units use the large-context price
pub(crate) const LARGE_CONTEXT_THRESHOLD_K: u32 = 128;

/// Storage prices are quoted per hour
pub(crate) const MINUTES_PER_HOUR: f64 = 60.0;
