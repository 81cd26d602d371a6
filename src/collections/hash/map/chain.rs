use std::fmt::{self, Debug, Formatter};

pub(crate) type Link = Option<Box<Entry>>;

pub(crate) struct Entry {
    pub key: i32,
    pub value: i32,
    pub next: Link,
}

/// The entries of a single bucket, most recently inserted first. Each entry owns the one after it.
#[derive(Default)]
pub(crate) struct Chain {
    pub head: Link,
}

impl Chain {
    pub fn get(&self, key: i32) -> Option<&Entry> {
        self.iter().find(|entry| entry.key == key)
    }

    pub fn get_mut(&mut self, key: i32) -> Option<&mut Entry> {
        let mut link = &mut self.head;
        while let Some(entry) = link {
            if entry.key == key {
                return Some(&mut **entry);
            }
            link = &mut entry.next;
        }
        None
    }

    /// Adds a new entry at the front of the chain, without checking for an existing key.
    pub fn push_front(&mut self, key: i32, value: i32) {
        self.push_entry(Box::new(Entry {
            key,
            value,
            next: None,
        }));
    }

    /// Relinks an existing entry at the front of the chain.
    pub fn push_entry(&mut self, mut entry: Box<Entry>) {
        entry.next = self.head.take();
        self.head = Some(entry);
    }

    /// Unlinks the first entry of the chain, if there is one.
    pub fn pop_entry(&mut self) -> Option<Box<Entry>> {
        let mut entry = self.head.take()?;
        self.head = entry.next.take();
        Some(entry)
    }

    /// Unlinks the entry for `key`, returning its value.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|entry| entry.key != key) {
            if let Some(entry) = link {
                link = &mut entry.next;
            }
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        Some(removed.value)
    }

    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        while self.pop_entry().is_some() {}
    }
}

pub(crate) struct ChainIter<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

impl Clone for Chain {
    fn clone(&self) -> Self {
        let entries: Vec<_> = self.iter().map(|entry| (entry.key, entry.value)).collect();

        let mut chain = Chain::default();
        for (key, value) in entries.into_iter().rev() {
            chain.push_front(key, value);
        }
        chain
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Unlink one entry at a time so that long chains don't drop recursively.
        self.clear();
    }
}

impl Debug for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.head.is_none() {
            return write!(f, "-");
        }

        for (index, entry) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({:?}: {:?})", entry.key, entry.value)?;
        }
        Ok(())
    }
}
