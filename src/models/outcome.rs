//! Three-way result of a provider lookup

/// What a provider produced for one request.
///
/// `NotFound` means the place itself could not be resolved, `Unavailable`
/// means the provider failed (transport, timeout, bad payload). An empty but
/// successful answer is `Success` with an empty value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    NotFound,
    Unavailable,
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The value, dropping the failure distinction
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::NotFound | Outcome::Unavailable => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Unavailable => Outcome::Unavailable,
        }
    }
}
