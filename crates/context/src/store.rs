//! Context field store: attach field sets to an immutable context tree.
//!
//! Every node stores the fully merged view of its own fields over its
//! parent's, computed once at [`ExecutionContext::attach`]. Extraction is then
//! a single lookup regardless of how deep the node sits, and a context handed
//! far down a call chain still resolves to the same set.
//!
//! Nodes are never mutated after construction. Clones share the node through
//! an `Arc`, so any number of threads can read or attach to the same parent.

use logctx_ports::LogFields;
use serde_json::Value;
use std::sync::Arc;

/// Immutable, inheritable carrier of a logging field set.
///
/// A root context carries no fields. Each [`attach`](Self::attach) returns a
/// child whose resolved set is the parent's set overlaid with the new fields.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    node: Option<Arc<Node>>,
}

#[derive(Debug)]
struct Node {
    fields: LogFields,
    parent: ExecutionContext,
}

impl Drop for Node {
    // Unlink uniquely owned ancestors one at a time so dropping a long chain
    // does not recurse once per node.
    fn drop(&mut self) {
        let mut next = self.parent.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut owned) => next = owned.parent.node.take(),
                Err(_) => break,
            }
        }
    }
}

impl ExecutionContext {
    /// A context with no field set attached.
    #[must_use]
    pub const fn root() -> Self {
        Self { node: None }
    }

    /// Derive a child context carrying `fields` merged over this context's set.
    ///
    /// On key collision the value in `fields` wins. `self` is left untouched.
    #[must_use]
    pub fn attach(&self, fields: &LogFields) -> Self {
        let merged = match &self.node {
            None => fields.clone(),
            Some(parent) => {
                let mut merged = parent.fields.clone();
                merged.extend(
                    fields
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone())),
                );
                merged
            },
        };

        Self {
            node: Some(Arc::new(Node {
                fields: merged,
                parent: self.clone(),
            })),
        }
    }

    /// Resolve the field set visible at this context.
    ///
    /// A context without an attached set resolves to an empty set.
    #[must_use]
    pub fn extract(&self) -> ResolvedFields {
        self.node
            .as_ref()
            .map_or_else(ResolvedFields::default, |node| {
                ResolvedFields(node.fields.clone())
            })
    }

    /// Returns true when a field set has been attached at or above this node.
    #[must_use]
    pub const fn has_fields(&self) -> bool {
        self.node.is_some()
    }

    /// The context this one was derived from, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.node.as_ref().map(|node| &node.parent)
    }

    /// Number of attachments between this context and the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Returns true when both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// Attach `fields` to `parent`, returning the child context.
#[must_use]
pub fn attach(parent: &ExecutionContext, fields: &LogFields) -> ExecutionContext {
    parent.attach(fields)
}

/// Resolve the field set visible at `ctx`.
#[must_use]
pub fn extract(ctx: &ExecutionContext) -> ResolvedFields {
    ctx.extract()
}

/// Owned copy of the fields resolved at a context node.
///
/// Mutating it never affects the context it was extracted from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedFields(LogFields);

impl ResolvedFields {
    /// Wrap an already-merged field set.
    #[must_use]
    pub const fn new(fields: LogFields) -> Self {
        Self(fields)
    }

    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a field holding a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_ref(), value))
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_fields(&self) -> &LogFields {
        &self.0
    }

    /// Unwrap into the underlying map.
    #[must_use]
    pub fn into_inner(self) -> LogFields {
        self.0
    }
}

impl From<LogFields> for ResolvedFields {
    fn from(fields: LogFields) -> Self {
        Self(fields)
    }
}

impl From<ResolvedFields> for LogFields {
    fn from(fields: ResolvedFields) -> Self {
        fields.0
    }
}
