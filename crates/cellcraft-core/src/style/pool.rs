//! Structured deduplication keys and id tables
//!
//! A mirror's key is the element it exports. Elements are typed, compare by
//! value and hash floats by bit pattern, so two mirrors that would write the
//! same XML share one key without any string encoding.

use std::hash::Hash;

use ahash::AHashMap;

use super::palette::Palette;

/// A mirror that can be reduced to, and rebuilt from, a dedup key
pub trait StyleKeyed: Sized {
    /// Canonical key; equal keys mean identical exported XML
    type Key: Clone + Eq + Hash;

    fn to_key(&self) -> Self::Key;

    /// Rebuild a mirror from a key, resolving colors against `palette`
    fn from_key(key: &Self::Key, palette: &Palette) -> Self;
}

/// Assigns stable 0-based ids to distinct keys in insertion order
///
/// This is the shape of the font/fill/border/xf/dxf tables in a styles part:
/// cells refer to entries by position.
#[derive(Debug, Clone)]
pub struct KeyTable<K> {
    entries: Vec<K>,
    index_map: AHashMap<K, u32>,
}

impl<K: Clone + Eq + Hash> KeyTable<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(16),
            index_map: AHashMap::with_capacity(16),
        }
    }

    /// Get the id of a key, inserting it if unseen
    pub fn get_or_insert(&mut self, key: K) -> u32 {
        if let Some(&idx) = self.index_map.get(&key) {
            return idx;
        }
        let idx = self.entries.len() as u32;
        self.index_map.insert(key.clone(), idx);
        self.entries.push(key);
        idx
    }

    /// Id of a mirror's key, inserting it if unseen
    pub fn insert_mirror<M>(&mut self, mirror: &M) -> u32
    where
        M: StyleKeyed<Key = K>,
    {
        self.get_or_insert(mirror.to_key())
    }

    /// Id of an already-inserted key
    pub fn id_of(&self, key: &K) -> Option<u32> {
        self.index_map.get(key).copied()
    }

    pub fn get(&self, id: u32) -> Option<&K> {
        self.entries.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys with their ids
    pub fn iter(&self) -> impl Iterator<Item = (u32, &K)> {
        self.entries.iter().enumerate().map(|(i, k)| (i as u32, k))
    }
}

impl<K: Clone + Eq + Hash> Default for KeyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
