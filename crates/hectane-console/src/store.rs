use hectane_types::Identified;

/// Handle to a record that has not been saved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TentativeKey(u64);

#[derive(Debug, Clone)]
enum Entry<D, T> {
    Tentative { key: TentativeKey, draft: D },
    Saved(T),
}

/// Client-side records of one resource: the ones the backend returned plus
/// drafts whose create request is still in flight.
#[derive(Debug, Clone)]
pub struct RecordStore<D, T> {
    entries: Vec<Entry<D, T>>,
    next_key: u64,
}

impl<D, T> Default for RecordStore<D, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 0,
        }
    }
}

impl<D, T: Identified> RecordStore<D, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_tentative(&mut self, draft: D) -> TentativeKey {
        let key = TentativeKey(self.next_key);
        self.next_key += 1;
        self.entries.push(Entry::Tentative { key, draft });
        key
    }

    /// Replace the draft behind `key` with the record the backend created.
    /// Returns false if the key is unknown.
    pub fn commit(&mut self, key: TentativeKey, record: T) -> bool {
        match self.position(key) {
            Some(i) => {
                self.entries[i] = Entry::Saved(record);
                true
            }
            None => false,
        }
    }

    /// Drop a draft whose save failed.
    pub fn discard(&mut self, key: TentativeKey) -> Option<D> {
        let i = self.position(key)?;
        match self.entries.remove(i) {
            Entry::Tentative { draft, .. } => Some(draft),
            Entry::Saved(_) => None,
        }
    }

    /// Swap in a freshly loaded collection. Drafts still in flight are kept.
    pub fn replace_saved(&mut self, records: Vec<T>) {
        self.entries.retain(|e| matches!(e, Entry::Tentative { .. }));
        self.entries.extend(records.into_iter().map(Entry::Saved));
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        let i = self
            .entries
            .iter()
            .position(|e| matches!(e, Entry::Saved(r) if r.id() == id))?;
        match self.entries.remove(i) {
            Entry::Saved(record) => Some(record),
            Entry::Tentative { .. } => None,
        }
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.saved().find(|r| r.id() == id)
    }

    pub fn saved(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Saved(record) => Some(record),
            Entry::Tentative { .. } => None,
        })
    }

    pub fn tentative(&self) -> impl Iterator<Item = &D> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Tentative { draft, .. } => Some(draft),
            Entry::Saved(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push `draft` for the duration of one request. The draft is discarded
    /// unless the returned guard is committed.
    pub(crate) fn hold(&mut self, draft: D) -> Held<'_, D, T> {
        let key = self.push_tentative(draft);
        Held {
            store: self,
            key: Some(key),
        }
    }

    fn position(&self, key: TentativeKey) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(e, Entry::Tentative { key: k, .. } if *k == key))
    }
}

pub(crate) struct Held<'a, D, T: Identified> {
    store: &'a mut RecordStore<D, T>,
    key: Option<TentativeKey>,
}

impl<D, T: Identified> Held<'_, D, T> {
    pub(crate) fn commit(mut self, record: T) {
        if let Some(key) = self.key.take() {
            self.store.commit(key, record);
        }
    }
}

impl<D, T: Identified> Drop for Held<'_, D, T> {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.store.discard(key);
        }
    }
}
