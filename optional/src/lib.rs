//! A present-or-absent container with fluent combinators.
//!
//! [`Optional`] wraps zero or one value and offers `map`, `flat_map`, `filter`
//! and fallback extraction without reaching for a sentinel. The crate does no
//! IO. With the default `async` feature it can also adapt a fallible future into
//! a future of [`Optional`] via [`Optional::of_completion`].
//!
//! ```
//! use fluent_optional::Optional;
//!
//! let tripled = Optional::of_nullable(Some(1)).map(|n| n * 3);
//! assert_eq!(tripled.get(), Ok(3));
//!
//! let even = |n: i32| if n % 2 == 0 { Optional::of(n) } else { Optional::empty() };
//! assert!(Optional::of(4).flat_map(even).is_present());
//! assert!(Optional::of(3).flat_map(even).is_empty());
//!
//! assert_eq!(Optional::<i32>::empty().or_else(0), 0);
//! ```

#[cfg(feature = "async")]
mod completion;
mod optional;

pub use optional::{NoSuchElementError, Optional};
