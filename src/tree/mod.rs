// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Flat tree of named children with name lookup.
//!
//! Children are stored in insertion order and addressed by [`NodeId`].
//! Names are indexed when a child is added or renamed, so lookups do
//! not walk the children.

use ahash::AHashMap;

/// Handle to a child in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the position of the child in its parent.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    name: String,
    value: T,
}

/// An ordered container of named children.
#[derive(Debug)]
pub struct Tree<T> {
    children: Vec<Entry<T>>,
    by_name: AHashMap<String, NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            by_name: AHashMap::new(),
        }
    }

    /// Appends a child and returns its handle.
    ///
    /// When several children share a name, lookups resolve to the first one.
    pub fn add_child(&mut self, name: impl Into<String>, value: T) -> NodeId {
        let id = NodeId(self.children.len());
        let name = name.into();
        self.by_name.entry(name.clone()).or_insert(id);
        self.children.push(Entry { name, value });
        id
    }

    /// Returns the first child named `name` at or after `start_index`.
    pub fn child_by_name(&self, name: &str, start_index: usize) -> Option<NodeId> {
        match self.by_name.get(name) {
            Some(&id) if id.0 >= start_index => Some(id),
            Some(_) => self.children[start_index.min(self.children.len())..]
                .iter()
                .position(|entry| entry.name == name)
                .map(|offset| NodeId(start_index + offset)),
            None => None,
        }
    }

    /// Renames a child, keeping the name index in sync.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        let Some(entry) = self.children.get_mut(id.0) else {
            return;
        };
        let old = std::mem::replace(&mut entry.name, name.into());
        if self.by_name.get(&old) == Some(&id) {
            self.by_name.remove(&old);
            if let Some(pos) = self.children.iter().position(|e| e.name == old) {
                self.by_name.insert(old, NodeId(pos));
            }
        }
        let new = self.children[id.0].name.clone();
        let slot = self.by_name.entry(new).or_insert(id);
        if slot.0 > id.0 {
            *slot = id;
        }
    }

    /// Returns the name of a child.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.children.get(id.0).map(|entry| entry.name.as_str())
    }

    /// Returns a reference to a child.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.children.get(id.0).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to a child.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.children.get_mut(id.0).map(|entry| &mut entry.value)
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over children with their handles and names.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str, &T)> {
        self.children
            .iter()
            .enumerate()
            .map(|(i, entry)| (NodeId(i), entry.name.as_str(), &entry.value))
    }
}
