/// A field in a partial update.
///
/// - `Absent`: not mentioned; the previous value is kept.
/// - `Cleared`: explicitly null; the field returns to its default.
/// - `Set`: a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Cleared,
    Set(T),
}

impl<T> Patch<T> {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Field-wise coalescing: a present `newer` replaces `self`.
    #[inline]
    pub fn merge(self, newer: Patch<T>) -> Patch<T> {
        if newer.is_absent() { self } else { newer }
    }

    /// `None` when absent, otherwise the new optional value.
    #[inline]
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Absent => None,
            Patch::Cleared => Some(None),
            Patch::Set(v) => Some(Some(v)),
        }
    }

    /// `None` when absent, otherwise the new value with `Cleared` mapped to `default()`.
    #[inline]
    pub fn resolve_with(self, default: impl FnOnce() -> T) -> Option<T> {
        self.into_change().map(|v| v.unwrap_or_else(default))
    }

    #[inline]
    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Cleared => Patch::Cleared,
            Patch::Set(v) => Patch::Set(v),
        }
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Cleared => Patch::Cleared,
            Patch::Set(v) => Patch::Set(f(v)),
        }
    }
}

/// Host-side optional where `None` means "explicitly null".
impl<T> From<Option<T>> for Patch<T> {
    #[inline]
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Patch::Set(v),
            None => Patch::Cleared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_present_newer() {
        assert_eq!(Patch::Set(1).merge(Patch::Absent), Patch::Set(1));
        assert_eq!(Patch::Set(1).merge(Patch::Set(2)), Patch::Set(2));
        assert_eq!(Patch::Set(1).merge(Patch::Cleared), Patch::Cleared);
        assert_eq!(Patch::<i32>::Cleared.merge(Patch::Absent), Patch::Cleared);
    }

    #[test]
    fn resolve_with_maps_cleared_to_default() {
        assert_eq!(Patch::<i32>::Absent.resolve_with(|| 7), None);
        assert_eq!(Patch::<i32>::Cleared.resolve_with(|| 7), Some(7));
        assert_eq!(Patch::Set(3).resolve_with(|| 7), Some(3));
    }

    #[test]
    fn from_option_is_explicit() {
        assert_eq!(Patch::from(Some(1.5)), Patch::Set(1.5));
        assert_eq!(Patch::<f64>::from(None), Patch::Cleared);
    }
}
