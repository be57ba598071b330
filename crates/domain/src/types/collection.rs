//! Owner-tracked relationship collections
//!
//! Every child record of a profile carries a back-reference to its owning
//! [`ProfileId`]. [`OwnedCollection`] is the only place that writes that
//! back-reference: mutation goes through the owning profile, which passes its
//! own id, so a record inside a collection always points at the profile that
//! holds it.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::ids::{ProfileId, RecordId};

/// A child record with a stable identity
pub trait Record {
    /// Identity used for removal and equality within a collection
    fn record_id(&self) -> RecordId;
}

/// A one-to-many relationship from a profile to a child record type
///
/// The relation decides which back-reference slot of the item it manages, so
/// one record type can take part in several relations (a review is both
/// written by one profile and received by another).
pub trait Relation {
    /// Child record type
    type Item: Record + Clone + Debug + PartialEq;

    /// Relation name used in logs and storage
    const NAME: &'static str;

    /// Current back-reference of `item` for this relation
    fn owner(item: &Self::Item) -> Option<ProfileId>;

    /// Overwrite the back-reference of `item` for this relation
    fn set_owner(item: &mut Self::Item, owner: Option<ProfileId>);
}

/// Ordered collection of child records owned by one profile
///
/// Read access is available through [`Deref`] to a slice; mutation is
/// crate-private and always maintains the back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "R::Item: Serialize", deserialize = "R::Item: Deserialize<'de>")
)]
pub struct OwnedCollection<R: Relation> {
    items: Vec<R::Item>,
    #[serde(skip)]
    relation: PhantomData<R>,
}

impl<R: Relation> Default for OwnedCollection<R> {
    fn default() -> Self {
        Self { items: Vec::new(), relation: PhantomData }
    }
}

impl<R: Relation> OwnedCollection<R> {
    /// Relation name
    pub const fn name(&self) -> &'static str {
        R::NAME
    }

    /// Records in stored order
    pub fn as_slice(&self) -> &[R::Item] {
        &self.items
    }

    /// First record with the given id
    pub fn get(&self, id: RecordId) -> Option<&R::Item> {
        self.items.iter().find(|item| item.record_id() == id)
    }

    /// Whether a record with the given id is present
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Whether every record points back at `owner`
    pub fn is_owned_by(&self, owner: ProfileId) -> bool {
        self.items.iter().all(|item| R::owner(item) == Some(owner))
    }

    /// Append `item` after pointing it at `owner`. Duplicates are kept.
    pub(crate) fn push_owned(&mut self, owner: ProfileId, mut item: R::Item) {
        R::set_owner(&mut item, Some(owner));
        self.items.push(item);
    }

    /// Remove the first record sharing `id` and hand it back detached
    pub(crate) fn remove_first(&mut self, id: RecordId) -> Option<R::Item> {
        let index = self.items.iter().position(|item| item.record_id() == id)?;
        let mut removed = self.items.remove(index);
        R::set_owner(&mut removed, None);
        Some(removed)
    }

    /// Replace the whole collection, returning the previous records detached
    pub(crate) fn replace_owned<I>(&mut self, owner: ProfileId, items: I) -> Vec<R::Item>
    where
        I: IntoIterator<Item = R::Item>,
    {
        let incoming = items
            .into_iter()
            .map(|mut item| {
                R::set_owner(&mut item, Some(owner));
                item
            })
            .collect();
        let mut previous = std::mem::replace(&mut self.items, incoming);
        for item in &mut previous {
            R::set_owner(item, None);
        }
        previous
    }

    /// Reorder records in place; used by persistence to apply load order
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&R::Item, &R::Item) -> std::cmp::Ordering,
    {
        self.items.sort_by(compare);
    }
}

impl<R: Relation> Deref for OwnedCollection<R> {
    type Target = [R::Item];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a, R: Relation> IntoIterator for &'a OwnedCollection<R> {
    type Item = &'a R::Item;
    type IntoIter = std::slice::Iter<'a, R::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
