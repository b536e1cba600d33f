//! The core implementation of `temporal_instant`'s builtins.

mod instant;
mod now;

#[doc(inline)]
pub use instant::Instant;
#[doc(inline)]
pub use now::Now;
