//! String tags and the caller-supplied entity id.
//!
//! Every entity created through the [`Engine`](crate::engine::Engine) carries
//! both components: [`EntityId`] maps the bevy entity back to its string id,
//! [`Tags`] backs `entities_with_tag` queries.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashSet;

/// Caller-supplied unique id of an entity.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Set of string tags grouping entities by role (`"player"`, `"ground"`, ...).
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags {
    pub tags: FxHashSet<String>,
}

impl Tags {
    /// Adds a tag. Adding an existing tag is a no-op.
    pub fn add(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Removes a tag, returning whether it was present.
    pub fn remove(&mut self, tag: impl AsRef<str>) -> bool {
        self.tags.remove(tag.as_ref())
    }

    pub fn contains(&self, tag: impl AsRef<str>) -> bool {
        self.tags.contains(tag.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
