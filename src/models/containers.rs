/// A page of items returned by the read API's list and search calls.
///
/// Item order is the server's order; for playlists and searches it is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCollection<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    /// `-1` unless the call asked for the total.
    pub total_count: i64,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_number: 0,
            page_size: 0,
            total_count: -1,
        }
    }
}

impl<T> ItemCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ItemCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Envelope around the single payload of a write call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultContainer<T> {
    pub result: T,
}

impl<T> ResultContainer<T> {
    pub fn into_inner(self) -> T {
        self.result
    }
}
