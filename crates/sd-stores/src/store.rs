//! Generic record store
//!
//! One `RecordStore<T>` owns the authoritative in-memory collection for
//! one entity type. All mutations run synchronously under a write lock;
//! `load()` is the only async boundary.

use std::sync::Arc;

use parking_lot::RwLock;
use sd_core::{new_entity_id, ChildRecord, EntityId, Record, SharedClock, StoreError, StoreResult};
use tracing::debug;
use validator::Validate;

use crate::source::DataSource;

struct State<T> {
    items: Vec<T>,
    loading: bool,
}

/// In-memory collection of one entity type with uniform access and
/// mutation operations.
pub struct RecordStore<T: Record> {
    state: RwLock<State<T>>,
    source: Arc<dyn DataSource<T>>,
    clock: SharedClock,
}

impl<T: Record> RecordStore<T> {
    pub fn new(source: Arc<dyn DataSource<T>>, clock: SharedClock) -> Self {
        Self {
            state: RwLock::new(State {
                items: Vec::new(),
                loading: false,
            }),
            source,
            clock,
        }
    }

    /// (Re)populate the collection from the data source. The collection
    /// is replaced wholesale; overlapping loads each apply their own
    /// replacement and the last to resolve wins.
    pub async fn load(&self) {
        self.state.write().loading = true;
        let records = self.source.fetch().await;
        debug!(entity = T::TYPE_NAME, count = records.len(), "loaded");
        let mut state = self.state.write();
        state.items = records;
        state.loading = false;
    }

    /// Validate a draft, assign identity and timestamps, append.
    pub fn add(&self, draft: T::Draft) -> StoreResult<T> {
        draft.validate()?;
        let record = T::from_draft(draft, new_entity_id(), self.clock.now());
        debug!(entity = T::TYPE_NAME, id = %record.id(), "added");
        self.state.write().items.push(record.clone());
        Ok(record)
    }

    /// Merge a patch into the record with `id` and refresh `updated_at`.
    /// The collection is untouched when `id` is unknown.
    pub fn update(&self, id: EntityId, patch: T::Patch) -> StoreResult<T> {
        let mut state = self.state.write();
        let record = state
            .items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::TYPE_NAME, id))?;
        record.apply_patch(patch);
        record.touch(self.clock.now());
        debug!(entity = T::TYPE_NAME, %id, "updated");
        Ok(record.clone())
    }

    /// Remove the record with `id`.
    pub fn remove(&self, id: EntityId) -> StoreResult<()> {
        let mut state = self.state.write();
        let before = state.items.len();
        state.items.retain(|r| r.id() != id);
        if state.items.len() == before {
            return Err(StoreError::not_found(T::TYPE_NAME, id));
        }
        debug!(entity = T::TYPE_NAME, %id, "removed");
        Ok(())
    }

    pub fn get(&self, id: EntityId) -> Option<T> {
        self.state.read().items.iter().find(|r| r.id() == id).cloned()
    }

    /// Snapshot of the collection in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.state.read().items.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Run a closure against the record with `id` under the write lock,
    /// refreshing the parent's `updated_at`. Backs the nested-child
    /// operations of the aggregate stores.
    pub(crate) fn with_record<R>(
        &self,
        id: EntityId,
        f: impl FnOnce(&mut T) -> StoreResult<R>,
    ) -> StoreResult<R> {
        let mut state = self.state.write();
        let record = state
            .items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::TYPE_NAME, id))?;
        let out = f(record)?;
        record.touch(self.clock.now());
        Ok(out)
    }

    /// Append a child to a nested list of the record with `id`.
    pub(crate) fn add_child<C: ChildRecord>(
        &self,
        id: EntityId,
        list: impl FnOnce(&mut T) -> &mut Vec<C>,
        draft: C::Draft,
    ) -> StoreResult<C> {
        self.with_record(id, |record| {
            let child = C::from_draft(draft, new_entity_id());
            list(record).push(child.clone());
            debug!(entity = T::TYPE_NAME, child = C::TYPE_NAME, parent = %id, "child added");
            Ok(child)
        })
    }

    /// Merge a patch into one child of the record with `id`.
    pub(crate) fn update_child<C: ChildRecord>(
        &self,
        id: EntityId,
        list: impl FnOnce(&mut T) -> &mut Vec<C>,
        child_id: EntityId,
        patch: C::Patch,
    ) -> StoreResult<C> {
        self.with_record(id, |record| {
            let child = list(record)
                .iter_mut()
                .find(|c| c.id() == child_id)
                .ok_or_else(|| StoreError::not_found(C::TYPE_NAME, child_id))?;
            child.apply_patch(patch);
            Ok(child.clone())
        })
    }

    /// Remove one child of the record with `id`. Removing the last child
    /// leaves an empty list.
    pub(crate) fn remove_child<C: ChildRecord>(
        &self,
        id: EntityId,
        list: impl FnOnce(&mut T) -> &mut Vec<C>,
        child_id: EntityId,
    ) -> StoreResult<()> {
        self.with_record(id, |record| {
            let children = list(record);
            let before = children.len();
            children.retain(|c| c.id() != child_id);
            if children.len() == before {
                return Err(StoreError::not_found(C::TYPE_NAME, child_id));
            }
            Ok(())
        })
    }
}
