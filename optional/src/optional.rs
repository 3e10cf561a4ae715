//! The present-or-absent container and its synchronous combinators.
//!
//! An [`Optional`] is fixed at construction: it either holds exactly one value or
//! holds nothing, and no method can move it between those states. Every
//! combinator consumes the receiver and hands back a fresh container (or a plain
//! value), so a caller that needs to keep the original borrows it first with
//! [`Optional::as_ref`].

use std::fmt;

use thiserror::Error;

/// Returned by [`Optional::get`] when the container holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("no value present")]
pub struct NoSuchElementError;

/// A container holding at most one value of type `T`.
///
/// # Invariants
///
/// - Exactly one of present-with-a-value or absent holds, for the whole life of
///   the container. The discriminant and the stored value share one `Option`,
///   so they cannot disagree, and an absent container retains nothing.
/// - No method takes `&mut self`.
///
/// # Absence marker
///
/// Rust has no null, so `None` plays the marker. [`Optional::of`] wraps any
/// value unconditionally, which means `Optional::of(None::<u8>)` is a *present*
/// container whose value happens to be the marker. [`Optional::of_nullable`]
/// never produces that shape, and [`Optional::flat_nullable`] collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// An absent container.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// A present container wrapping exactly `value`.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Absent for `None`, present otherwise.
    #[must_use]
    pub fn of_nullable(value: Option<T>) -> Self {
        Self(value)
    }

    /// Whether the container holds a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the container holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Take the wrapped value.
    ///
    /// This and [`Optional::expect_present`] are the only accessors that can
    /// fail; everything else on the type is total.
    pub fn get(self) -> Result<T, NoSuchElementError> {
        self.0.ok_or(NoSuchElementError)
    }

    /// Take the wrapped value, panicking if there is none.
    ///
    /// # Panics
    ///
    /// Panics with the [`NoSuchElementError`] message if the container is
    /// absent. Use [`Optional::get`] to handle that case as an error instead.
    #[must_use]
    #[track_caller]
    pub fn expect_present(self) -> T {
        match self.0 {
            Some(value) => value,
            None => panic!("{}", NoSuchElementError),
        }
    }

    /// Borrowing form of [`Optional::get`].
    pub fn get_ref(&self) -> Result<&T, NoSuchElementError> {
        self.0.as_ref().ok_or(NoSuchElementError)
    }

    /// Borrow the contents, yielding a container of references.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Unwrap into the underlying `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Run `consumer` on the value if present, then hand the container back.
    pub fn if_present<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            consumer(value);
        }
        self
    }

    /// Run `action` if absent, then hand the container back.
    pub fn if_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.0.is_none() {
            action();
        }
        self
    }

    /// Apply `mapper` to the value if present. `mapper` runs at most once.
    #[must_use]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.0 {
            Some(value) => Optional::of(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Returns the mapper's container as-is; an absent result is not nested.
    #[must_use]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Keep the value only if `predicate` holds for it. `predicate` runs at
    /// most once, and only when present.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.0 {
            Some(value) if predicate(&value) => Self::of(value),
            _ => Self::empty(),
        }
    }

    /// The value if present, else `other`.
    ///
    /// `other` is an ordinary argument and is evaluated before the call either
    /// way. Use [`Optional::or_else_get`] when building the fallback costs
    /// something or has side effects.
    #[must_use]
    pub fn or_else(self, other: T) -> T {
        match self.0 {
            Some(value) => value,
            None => other,
        }
    }

    /// The value if present, else whatever `supplier` returns. `supplier` only
    /// runs when absent.
    #[must_use]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.0 {
            Some(value) => value,
            None => supplier(),
        }
    }

    /// The value if present, else `Err` carrying exactly the error `supplier`
    /// builds. `supplier` only runs when absent.
    pub fn or_else_throw<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.0 {
            Some(value) => Ok(value),
            None => Err(supplier()),
        }
    }
}

impl<T> Optional<Option<T>> {
    /// Collapse a present-but-`None` value into an absent container.
    ///
    /// Same as `flat_map(Optional::of_nullable)`.
    #[must_use]
    pub fn flat_nullable(self) -> Optional<T> {
        self.flat_map(Optional::of_nullable)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Optional[{value}]"),
            None => f.write_str("Optional.empty"),
        }
    }
}
