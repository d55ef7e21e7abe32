//! # Buffered Store
//!
//! Write buffer over a parent store. Reads see buffered writes first;
//! nothing reaches the parent until `commit`, which applies every pending
//! write as one atomic batch. Dropping or discarding applies nothing.
//!
//! This is how the in-memory host gives each transaction all-or-nothing
//! semantics.

use crate::domain::errors::StoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, KvIter, KvPair};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::ops::Bound;
use tracing::debug;

/// Pending writes. `None` marks a deletion.
type WriteSet = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

pub struct BufferedKVStore<'p, P: KeyValueStore + ?Sized> {
    parent: &'p mut P,
    writes: WriteSet,
}

impl<'p, P: KeyValueStore + ?Sized> BufferedKVStore<'p, P> {
    pub fn new(parent: &'p mut P) -> Self {
        Self {
            parent,
            writes: BTreeMap::new(),
        }
    }

    /// Number of buffered puts and deletes.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Apply all buffered writes to the parent atomically.
    pub fn commit(self) -> Result<(), StoreError> {
        let operations: Vec<BatchOperation> = self
            .writes
            .into_iter()
            .map(|(key, value)| match value {
                Some(value) => BatchOperation::Put { key, value },
                None => BatchOperation::Delete { key },
            })
            .collect();

        debug!(operations = operations.len(), "[qc-18] Committing buffered writes");
        self.parent.atomic_batch_write(operations)
    }

    /// Drop all buffered writes.
    pub fn discard(self) {
        debug!(operations = self.writes.len(), "[qc-18] Discarding buffered writes");
    }
}

impl<'p, P: KeyValueStore + ?Sized> KeyValueStore for BufferedKVStore<'p, P> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        match self.writes.get(key) {
            Some(entry) => Ok(entry.clone()),
            None => self.parent.get(key),
        }
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.writes.insert(key.to_vec(), None);
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.writes.insert(key, Some(value));
                }
                BatchOperation::Delete { key } => {
                    self.writes.insert(key, None);
                }
            }
        }
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StoreError> {
        match self.writes.get(key) {
            Some(entry) => Ok(entry.is_some()),
            None => self.parent.exists(key),
        }
    }

    fn range_from<'a>(&'a self, prefix: &[u8], start: &[u8]) -> Result<KvIter<'a>, StoreError> {
        let parent = self.parent.range_from(prefix, start)?;

        let bounded = prefix.to_vec();
        let from = start.max(prefix).to_vec();
        let buffered: BufferedIter<'a> = Box::new(
            self.writes
                .range::<Vec<u8>, _>((Bound::Included(from), Bound::Unbounded))
                .take_while(move |(k, _)| k.starts_with(&bounded)),
        );

        Ok(Box::new(MergeIter {
            parent: parent.peekable(),
            buffered: buffered.peekable(),
        }))
    }
}

type BufferedIter<'a> = Box<dyn Iterator<Item = (&'a Vec<u8>, &'a Option<Vec<u8>>)> + 'a>;

/// Ordered merge of parent pairs with buffered writes.
///
/// On equal keys the buffered entry wins; buffered deletions hide the
/// parent's pair. A parent error is passed through as soon as it is next.
struct MergeIter<'a> {
    parent: Peekable<KvIter<'a>>,
    buffered: Peekable<BufferedIter<'a>>,
}

enum Source {
    Parent,
    Buffered,
    Shadowing,
}

impl<'a> Iterator for MergeIter<'a> {
    type Item = Result<KvPair, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let source = match (self.parent.peek(), self.buffered.peek()) {
                (None, None) => return None,
                (Some(Err(_)), _) | (Some(_), None) => Source::Parent,
                (None, Some(_)) => Source::Buffered,
                (Some(Ok((pk, _))), Some((bk, _))) => match pk.as_slice().cmp(bk.as_slice()) {
                    Ordering::Less => Source::Parent,
                    Ordering::Greater => Source::Buffered,
                    Ordering::Equal => Source::Shadowing,
                },
            };

            match source {
                Source::Parent => return self.parent.next(),
                Source::Shadowing => {
                    self.parent.next();
                }
                Source::Buffered => {}
            }

            if let Some((key, Some(value))) = self.buffered.next() {
                return Some(Ok((key.clone(), value.clone())));
            }
        }
    }
}
