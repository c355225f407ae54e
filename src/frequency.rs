use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::error::{Error, Result};


/// Occurrence count of every distinct symbol of an input.
///
/// Entries are kept in order of first occurrence, so two tables counted from
/// the same input always iterate identically.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<T>
where
    T: Eq + Hash
{

    entries: Vec<(T, usize)>,
    /// Position of each symbol in `entries`
    index: HashMap<T, usize>,
    total: usize

}

impl<T> FrequencyTable<T>
where
    T: Eq + Hash + Clone
{

    /// Counts the symbols of `data`.
    pub fn count(data: impl IntoIterator<Item = T>) -> Result<Self> {

        let mut entries: Vec<(T, usize)> = Vec::new();
        let mut index: HashMap<T, usize> = HashMap::new();
        let mut total = 0;

        for symbol in data {

            match index.entry(symbol) {

                Entry::Occupied(slot) => {
                    entries[*slot.get()].1 += 1;
                },

                Entry::Vacant(slot) => {
                    entries.push((slot.key().clone(), 1));
                    slot.insert(entries.len() - 1);
                },
            }

            total += 1;
        }

        if entries.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self { entries, index, total })
    }


    /// Rebuilds a table from persisted `(symbol, count)` pairs, keeping their order.
    pub fn from_entries(pairs: impl IntoIterator<Item = (T, u64)>) -> Result<Self> {

        let mut entries: Vec<(T, usize)> = Vec::new();
        let mut index: HashMap<T, usize> = HashMap::new();
        let mut total: usize = 0;

        for (symbol, count) in pairs {

            let count = usize::try_from(count)
                .ok()
                .filter(|&count| count > 0)
                .ok_or_else(|| Error::InvalidTable(format!("symbol #{} has count {count}", entries.len())))?;

            total = total.checked_add(count)
                .ok_or_else(|| Error::InvalidTable("total count overflows".to_string()))?;

            match index.entry(symbol) {

                Entry::Occupied(_) => {
                    return Err(Error::InvalidTable(format!("symbol #{} is a duplicate", entries.len())));
                },

                Entry::Vacant(slot) => {
                    entries.push((slot.key().clone(), count));
                    slot.insert(entries.len() - 1);
                },
            }
        }

        if entries.is_empty() {
            return Err(Error::InvalidTable("no symbols".to_string()));
        }

        Ok(Self { entries, index, total })
    }

}

impl<T> FrequencyTable<T>
where
    T: Eq + Hash
{

    pub fn get(&self, symbol: &T) -> Option<usize> {
        self.index.get(symbol)
            .map(|&i| self.entries[i].1)
    }


    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Always false: a table holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Sum of all counts, equal to the length of the counted input.
    pub const fn total(&self) -> usize {
        self.total
    }


    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.entries.iter()
            .map(|(symbol, count)| (symbol, *count))
    }

}
