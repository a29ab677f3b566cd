//! Declarative tree descriptions.
//!
//! A description is plain data: one or more named trees, each a nested list of
//! typed nodes. It is parsed from text here, before it ever reaches the
//! [`TreeBuilder`](crate::TreeBuilder), which only consumes the structured
//! value.
//!
//! RON is the primary format:
//!
//! ```ron
//! #![enable(implicit_some)]
//! (
//!     main_tree: "MainTree",
//!     trees: [
//!         (
//!             id: "MainTree",
//!             root: (
//!                 kind: "Sequence",
//!                 name: "Mission",
//!                 children: [
//!                     (kind: "MoveToRoomDoor"),
//!                     (
//!                         kind: "Fallback",
//!                         name: "EnsureRoomDoorOpen",
//!                         children: [
//!                             (kind: "IsDoorOpen", attributes: {"door": "room"}),
//!                             (kind: "OpenDoor", attributes: {"door": "room"}),
//!                         ],
//!                     ),
//!                 ],
//!             ),
//!         ),
//!     ],
//! )
//! ```
//!
//! The same structure is accepted as JSON.

use std::collections::BTreeMap;
use std::path::Path;

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StructuralError};

/// A set of named trees and the selector of the one to build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDescription {
    /// Id of the tree to build. Optional when only one tree is defined.
    #[serde(default)]
    pub main_tree: Option<String>,

    pub trees: Vec<TreeDefinition>,
}

/// One named tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDefinition {
    pub id: String,
    pub root: NodeDescription,
}

/// One node: a registered type name plus its configuration and children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDescription {
    /// Registered node type, e.g. `"Sequence"` or `"OpenDoor"`.
    pub kind: String,

    /// Display name; defaults to `kind`.
    #[serde(default)]
    pub name: Option<String>,

    /// Opaque key/value configuration handed to the node factory.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

impl TreeDescription {
    /// A description holding a single tree, which is therefore the main tree.
    pub fn single(id: impl Into<String>, root: NodeDescription) -> Self {
        Self {
            main_tree: None,
            trees: vec![TreeDefinition {
                id: id.into(),
                root,
            }],
        }
    }

    /// Parses a RON description.
    ///
    /// `implicit_some` is always on, so `name: "X"` works with or without the
    /// `#![enable(implicit_some)]` header.
    pub fn from_ron(text: &str) -> Result<Self> {
        let description = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
            .map_err(StructuralError::Ron)?;
        Ok(description)
    }

    /// Parses a JSON description.
    pub fn from_json(text: &str) -> Result<Self> {
        let description = serde_json::from_str(text).map_err(StructuralError::Json)?;
        Ok(description)
    }

    /// Reads a description file. `.json` files are parsed as JSON, anything
    /// else as RON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StructuralError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loading tree description from {:?}", path);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_ron(&content)
        }
    }

    /// Looks up a tree by id.
    pub fn tree(&self, id: &str) -> Option<&TreeDefinition> {
        self.trees.iter().find(|tree| tree.id == id)
    }

    /// Picks the tree to build.
    ///
    /// `override_id` takes precedence over `main_tree`. With neither, the
    /// description must contain exactly one tree.
    pub fn select_main(&self, override_id: Option<&str>) -> Result<&TreeDefinition> {
        self.check_unique_ids()?;

        match override_id.or(self.main_tree.as_deref()) {
            Some(id) => self
                .tree(id)
                .ok_or_else(|| StructuralError::UnknownTree { id: id.to_string() }.into()),
            None => match self.trees.as_slice() {
                [] => Err(StructuralError::MissingRoot.into()),
                [only] => Ok(only),
                many => Err(StructuralError::AmbiguousRoot { count: many.len() }.into()),
            },
        }
    }

    fn check_unique_ids(&self) -> Result<()> {
        for (i, tree) in self.trees.iter().enumerate() {
            if self.trees[..i].iter().any(|earlier| earlier.id == tree.id) {
                return Err(StructuralError::DuplicateTree {
                    id: tree.id.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl NodeDescription {
    /// A node of the given type with no name, attributes or children.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<NodeDescription>) -> Self {
        self.children = children;
        self
    }

    /// The display name, falling back to the node type.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.kind)
    }
}
