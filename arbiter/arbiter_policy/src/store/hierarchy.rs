//! Hierarchy graph.
//!
//! Stores, for every registered node, its direct parents. Role graphs also
//! keep a reverse index of direct children so that changes can be pushed
//! down to descendants.
//!
//! Parents may be named before they are registered themselves. Such a name
//! takes part in traversals but [`Hierarchy::contains`] reports it as
//! unregistered until it is added explicitly.

use arbiter_core::types::NodeKind;
use std::collections::{HashMap, HashSet};

/// A parent/child graph of named nodes.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    /// Which kind of node this graph holds.
    kind: NodeKind,

    /// Registered node -> direct parents.
    parents: HashMap<String, HashSet<String>>,

    /// Node -> direct children, present only for child-indexed graphs.
    children: Option<HashMap<String, HashSet<String>>>,
}

impl Hierarchy {
    /// Create an empty graph without a child index.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parents: HashMap::new(),
            children: None,
        }
    }

    /// Create an empty graph that maintains a child index.
    pub fn with_child_index(kind: NodeKind) -> Self {
        Self {
            kind,
            parents: HashMap::new(),
            children: Some(HashMap::new()),
        }
    }

    /// The kind of node this graph holds.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Register `id`, or append `parents` to it if it is already registered.
    ///
    /// Returns `true` if `id` was not registered before.
    pub fn add_node<S: AsRef<str>>(&mut self, id: &str, parents: &[S]) -> bool {
        let is_new = !self.parents.contains_key(id);
        let entry = self.parents.entry(id.to_string()).or_default();

        for parent in parents {
            let parent = parent.as_ref();
            entry.insert(parent.to_string());

            if let Some(children) = self.children.as_mut() {
                children
                    .entry(parent.to_string())
                    .or_default()
                    .insert(id.to_string());
            }
        }

        is_new
    }

    /// Whether `id` has been registered.
    pub fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id)
    }

    /// Direct parents of a registered node.
    pub fn parents(&self, id: &str) -> Option<&HashSet<String>> {
        self.parents.get(id)
    }

    /// Registered node names.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.parents.keys().map(String::as_str)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether no node has been registered.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// `id` together with every node reachable through parent edges.
    pub fn ancestors<'a>(&'a self, id: &'a str) -> HashSet<&'a str> {
        closure(id, |node| self.parents.get(node))
    }

    /// `id` together with every node reachable through child edges.
    ///
    /// Graphs without a child index only ever return `{id}`.
    pub fn descendants<'a>(&'a self, id: &'a str) -> HashSet<&'a str> {
        match &self.children {
            Some(children) => closure(id, |node| children.get(node)),
            None => HashSet::from([id]),
        }
    }

    /// Whether recording `parent` as a parent of `id` would close a cycle.
    pub fn would_create_cycle(&self, id: &str, parent: &str) -> bool {
        parent == id || self.ancestors(parent).contains(id)
    }
}

/// Depth-first closure over `edges`, guarded by a visited set so that
/// cyclic graphs still terminate.
fn closure<'a, F>(start: &'a str, edges: F) -> HashSet<&'a str>
where
    F: Fn(&str) -> Option<&'a HashSet<String>>,
{
    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        for next in edges(node).into_iter().flatten() {
            if visited.insert(next.as_str()) {
                stack.push(next.as_str());
            }
        }
    }

    visited
}
