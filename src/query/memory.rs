//! In-memory query adapter.

use std::convert::Infallible;

use crate::query::{OrderableQuery, SortKey};

/// An [`OrderableQuery`] over records held in memory.
///
/// Ordering is a stable sort, so records that compare equal keep their
/// previous relative order. `skip`/`take` are recorded as a window and
/// only applied when the query is counted, reordered, filtered or fetched.
///
/// # Example
/// ```
/// use pagekit::query::{MemoryQuery, OrderableQuery};
///
/// let q = MemoryQuery::new(vec![1, 2, 3, 4, 5]).filter(|n| n % 2 == 1).skip(1);
/// assert_eq!(q.count().unwrap(), 2);
/// assert_eq!(q.fetch().unwrap(), vec![3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryQuery<T> {
    items: Vec<T>,
    offset: usize,
    limit: Option<usize>,
}

impl<T> MemoryQuery<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            offset: 0,
            limit: None,
        }
    }

    /// Keep only records matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut items = self.into_window();
        items.retain(predicate);
        Self::new(items)
    }

    fn window_len(&self) -> usize {
        let remaining = self.items.len().saturating_sub(self.offset);
        match self.limit {
            Some(limit) => remaining.min(limit),
            None => remaining,
        }
    }

    /// Apply the pending window and return the records in it.
    fn into_window(self) -> Vec<T> {
        let len = self.window_len();
        self.items.into_iter().skip(self.offset).take(len).collect()
    }
}

impl<T> OrderableQuery for MemoryQuery<T> {
    type Item = T;
    type Error = Infallible;

    fn count(&self) -> Result<usize, Infallible> {
        Ok(self.window_len())
    }

    fn order_by(self, key: SortKey<T>) -> Result<Self, Infallible> {
        let mut items = self.into_window();
        items.sort_by(|a, b| key.compare(a, b));
        Ok(Self::new(items))
    }

    fn skip(mut self, n: usize) -> Self {
        self.offset = self.offset.saturating_add(n);
        if let Some(limit) = self.limit.as_mut() {
            *limit = limit.saturating_sub(n);
        }
        self
    }

    fn take(mut self, n: usize) -> Self {
        self.limit = Some(self.limit.map_or(n, |limit| limit.min(n)));
        self
    }

    fn fetch(self) -> Result<Vec<T>, Infallible> {
        Ok(self.into_window())
    }
}

impl<T> From<Vec<T>> for MemoryQuery<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for MemoryQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Lift any finite sequence into a [`MemoryQuery`].
pub trait IntoMemoryQuery: IntoIterator + Sized {
    fn into_query(self) -> MemoryQuery<Self::Item> {
        self.into_iter().collect()
    }
}

impl<I: IntoIterator> IntoMemoryQuery for I {}
