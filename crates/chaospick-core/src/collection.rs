//! Borrowed container shapes accepted by [`ChaosEngine::pick`](crate::ChaosEngine::pick).
//!
//! The shape is fixed once, at the boundary, and the engine dispatches on it
//! with a single `match`. Nested input must be declared with
//! [`Collection::nested`]; a plain slice of rows picks a whole row.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Sized, single-pass view over an unordered pool of values.
pub type Pool<'a, T> = Box<dyn ExactSizeIterator<Item = &'a T> + 'a>;

/// A collection to pick from.
pub enum Collection<'a, T> {
    /// Nothing to pick from.
    Absent,
    /// A non-collection value; picking it yields itself.
    Scalar(&'a T),
    /// An ordered sequence.
    Sequence(&'a [T]),
    /// Rows of a virtual matrix. Rows may be ragged.
    Nested(Vec<&'a [T]>),
    /// Values of a mapping. Keys are never selected.
    Mapping(Pool<'a, T>),
    /// An unordered set, in the container's iteration order.
    Set(Pool<'a, T>),
}

impl<'a, T> Collection<'a, T> {
    pub fn absent() -> Self {
        Self::Absent
    }

    pub fn scalar(value: &'a T) -> Self {
        Self::Scalar(value)
    }

    pub fn sequence(items: &'a [T]) -> Self {
        Self::Sequence(items)
    }

    /// Treat `rows` as a 2-D grid. Accepts anything row-like: `Vec<Vec<T>>`,
    /// `[[T; N]; M]`, `Vec<&[T]>`.
    pub fn nested<R: AsRef<[T]>>(rows: &'a [R]) -> Self {
        Self::Nested(rows.iter().map(AsRef::as_ref).collect())
    }

    /// The values of any map whose borrowed iterator knows its length.
    pub fn mapping<K, I>(map: I) -> Self
    where
        K: 'a,
        I: IntoIterator<Item = (&'a K, &'a T)>,
        I::IntoIter: ExactSizeIterator + 'a,
    {
        Self::Mapping(Box::new(map.into_iter().map(|(_, v)| v)))
    }

    /// Any set whose borrowed iterator knows its length.
    pub fn set<I>(set: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator + 'a,
    {
        Self::Set(Box::new(set.into_iter()))
    }

    /// Short name of the shape. [`ChaosEngine::pick`](crate::ChaosEngine::pick)
    /// traces it on every call.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Scalar(_) => "scalar",
            Self::Sequence(_) => "sequence",
            Self::Nested(_) => "nested",
            Self::Mapping(_) => "mapping",
            Self::Set(_) => "set",
        }
    }
}

impl<'a, T> From<Option<&'a T>> for Collection<'a, T> {
    fn from(value: Option<&'a T>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }
}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::Sequence(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::Sequence(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<'a, K, T, S> From<&'a HashMap<K, T, S>> for Collection<'a, T> {
    fn from(map: &'a HashMap<K, T, S>) -> Self {
        Self::Mapping(Box::new(map.values()))
    }
}

impl<'a, K, T> From<&'a BTreeMap<K, T>> for Collection<'a, T> {
    fn from(map: &'a BTreeMap<K, T>) -> Self {
        Self::Mapping(Box::new(map.values()))
    }
}

impl<'a, T, S> From<&'a HashSet<T, S>> for Collection<'a, T> {
    fn from(set: &'a HashSet<T, S>) -> Self {
        Self::Set(Box::new(set.iter()))
    }
}

impl<'a, T> From<&'a BTreeSet<T>> for Collection<'a, T> {
    fn from(set: &'a BTreeSet<T>) -> Self {
        Self::Set(Box::new(set.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_maps_to_scalar_or_absent() {
        let x = 42;
        assert_eq!(Collection::from(Some(&x)).kind(), "scalar");
        assert_eq!(Collection::<i32>::from(None).kind(), "absent");
    }

    #[test]
    fn conversions_pick_the_right_shape() {
        let v = vec![1, 2, 3];
        let arr = [1, 2];
        let map: HashMap<&str, i32> = HashMap::from([("a", 1)]);
        let bmap: BTreeMap<&str, i32> = BTreeMap::from([("a", 1)]);
        let set: HashSet<i32> = HashSet::from([1]);
        let bset: BTreeSet<i32> = BTreeSet::from([1]);

        assert_eq!(Collection::from(&v).kind(), "sequence");
        assert_eq!(Collection::from(&v[..]).kind(), "sequence");
        assert_eq!(Collection::from(&arr).kind(), "sequence");
        assert_eq!(Collection::from(&map).kind(), "mapping");
        assert_eq!(Collection::from(&bmap).kind(), "mapping");
        assert_eq!(Collection::from(&set).kind(), "set");
        assert_eq!(Collection::from(&bset).kind(), "set");
    }

    #[test]
    fn nested_keeps_ragged_rows() {
        let rows = vec![vec![1, 2, 3], vec![4, 5]];
        match Collection::nested(&rows) {
            Collection::Nested(r) => {
                assert_eq!(r.len(), 2);
                assert_eq!(r[0], &[1, 2, 3]);
                assert_eq!(r[1], &[4, 5]);
            }
            other => panic!("expected nested, got {}", other.kind()),
        }
    }

    #[test]
    fn mapping_exposes_values_only() {
        let map: BTreeMap<&str, i32> = BTreeMap::from([("a", 10), ("b", 20)]);
        match Collection::mapping(&map) {
            Collection::Mapping(pool) => {
                assert_eq!(pool.len(), 2);
                let values: Vec<i32> = pool.copied().collect();
                assert_eq!(values, vec![10, 20]);
            }
            other => panic!("expected mapping, got {}", other.kind()),
        }
    }

    #[test]
    fn set_constructor_accepts_any_sized_iterable() {
        let set: BTreeSet<char> = "abc".chars().collect();
        match Collection::set(&set) {
            Collection::Set(pool) => assert_eq!(pool.len(), 3),
            other => panic!("expected set, got {}", other.kind()),
        }
    }
}
