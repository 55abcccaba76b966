//! Resting place for [OrderedMap]

use std::borrow::Borrow;


/// A small map remembering the order in which its keys were first inserted.\
/// Rankings & leaderboards break ties by the "discovery order" of players and means of death,
/// hence the need for something other than `HashMap` / `BTreeMap`.
///
/// IMPLEMENTATION NOTE: lookups are linear -- this is meant for the few dozens of players / means of death
/// of a Quake 3 match, for which a `Vec` beats any hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
                 where K: Borrow<Q>,
                       Q: PartialEq + ?Sized {
        self.position(key)
            .map(|index| &self.entries[index].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
                          where K: Borrow<Q>,
                                Q: PartialEq + ?Sized {
        self.position(key).is_some()
    }

    /// Returns the value for `key`, inserting `V::default()` at the end if `key` wasn't there yet.\
    /// The owned key is only built on insertion.
    pub fn get_or_default_mut<Q>(&mut self, key: &Q) -> &mut V
                                where K: Borrow<Q>,
                                      Q: PartialEq + ToOwned<Owned=K> + ?Sized,
                                      V: Default {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_owned(), V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Sets the `value` for `key`, returning the previous value -- which keeps its original position
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter().position(|(existing_key, _)| existing_key == &key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=(&K, &V)> {
        self.entries.iter()
            .map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item=&K> {
        self.entries.iter()
            .map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item=&V> {
        self.entries.iter()
            .map(|(_, value)| value)
    }

    /// Reorders the entries by value, greatest first. The sort is stable: ties keep their discovery order.
    pub fn sort_by_value_desc(&mut self)
                             where V: Ord {
        self.entries.sort_by(|(_, a), (_, b)| b.cmp(a));
    }

    /// Consuming version of [Self::sort_by_value_desc()]
    pub fn sorted_by_value_desc(mut self) -> Self
                               where V: Ord {
        self.sort_by_value_desc();
        self
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
                  where K: Borrow<Q>,
                        Q: PartialEq + ?Sized {
        self.entries.iter()
            .position(|(existing_key, _)| existing_key.borrow() == key)
    }

}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
