use crate::{model::EntityModel, value::Value};
use std::{fmt, iter};

///
/// EmptyRelation
///
/// Queryable collection of zero records of one model. Chained refinements
/// keep it empty, so callers can filter, order and page it the same way
/// they would a real collection.
///

#[derive(Clone, Copy)]
pub struct EmptyRelation {
    model: &'static EntityModel,
}

impl EmptyRelation {
    #[must_use]
    pub const fn none(model: &'static EntityModel) -> Self {
        Self { model }
    }

    /// Model of the records this collection would hold.
    #[must_use]
    pub const fn model(&self) -> &'static EntityModel {
        self.model
    }

    #[must_use]
    pub const fn filter(self, _clause: &str) -> Self {
        self
    }

    #[must_use]
    pub const fn order_by(self, _column: &str) -> Self {
        self
    }

    #[must_use]
    pub const fn limit(self, _n: usize) -> Self {
        self
    }

    #[must_use]
    pub const fn offset(self, _n: usize) -> Self {
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        true
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        0
    }

    #[must_use]
    pub const fn exists(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn first(&self) -> Option<Value> {
        None
    }

    #[must_use]
    pub const fn last(&self) -> Option<Value> {
        None
    }

    pub fn iter(&self) -> iter::Empty<Value> {
        iter::empty()
    }

    #[must_use]
    pub const fn to_vec(&self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoIterator for EmptyRelation {
    type Item = Value;
    type IntoIter = iter::Empty<Value>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl IntoIterator for &EmptyRelation {
    type Item = Value;
    type IntoIter = iter::Empty<Value>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl PartialEq for EmptyRelation {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model
    }
}

impl fmt::Debug for EmptyRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EmptyRelation").field(&self.model.path).finish()
    }
}
