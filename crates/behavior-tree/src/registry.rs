//! Node type registry.
//!
//! Maps node type names, as they appear in a [`TreeDescription`], to the code
//! that instantiates them. The registry is an ordinary value: fill it once at
//! startup, then hand it by reference to a [`TreeBuilder`] as often as needed.
//!
//! [`TreeDescription`]: crate::TreeDescription
//! [`TreeBuilder`]: crate::TreeBuilder

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::error::{BuildError, Result, StructuralError};
use crate::{Action, AlwaysFailure, AlwaysSuccess, Behavior, Condition, Status};

/// Built-in composite that ticks children until one fails.
pub const SEQUENCE: &str = "Sequence";
/// Built-in composite that ticks children until one succeeds.
pub const FALLBACK: &str = "Fallback";
/// Reserved node type that inlines another tree of the same description.
pub const SUBTREE: &str = "SubTree";
/// Attribute of a [`SUBTREE`] node naming the tree to inline.
pub const SUBTREE_ID: &str = "id";
/// Built-in leaf that always succeeds.
pub const ALWAYS_SUCCESS: &str = "AlwaysSuccess";
/// Built-in leaf that always fails.
pub const ALWAYS_FAILURE: &str = "AlwaysFailure";

/// Creates a fresh leaf behavior for one occurrence of its type name.
pub type LeafFactory<C> =
    Box<dyn Fn(&str, &NodeConfig) -> Result<Box<dyn Behavior<C>>> + Send + Sync>;

/// How the builder turns a type name into a node.
pub(crate) enum Entry<C> {
    Sequence,
    Fallback,
    SubTree,
    Leaf(LeafFactory<C>),
}

/// Configuration handed to a leaf factory: the node's attributes from the
/// description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeConfig {
    node_name: String,
    attributes: BTreeMap<String, String>,
}

impl NodeConfig {
    pub fn new(node_name: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        Self {
            node_name: node_name.into(),
            attributes,
        }
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns the attribute or a [`StructuralError::MissingAttribute`].
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            StructuralError::MissingAttribute {
                name: self.node_name.clone(),
                attribute: key.to_string(),
            }
            .into()
        })
    }

    /// Parses a required attribute.
    pub fn require_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.require(key)?;
        raw.parse().map_err(|e: T::Err| {
            StructuralError::InvalidAttribute {
                name: self.node_name.clone(),
                attribute: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parses an optional attribute, falling back to `default` when absent.
    pub fn parsed_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(_) => self.require_parsed(key),
            None => Ok(default),
        }
    }
}

/// Registry of node types known to a [`TreeBuilder`](crate::TreeBuilder).
///
/// A new registry already knows:
/// - `Sequence` and `Fallback` (composites)
/// - `AlwaysSuccess` and `AlwaysFailure` (leaves)
/// - `SubTree` (reserved, inlines another tree)
///
/// Registering any name twice, built-ins included, is an error.
pub struct Registry<C> {
    entries: HashMap<String, Entry<C>>,
}

impl<C: 'static> Registry<C> {
    /// Creates a registry holding only the built-in node types.
    pub fn new() -> Self {
        let mut entries: HashMap<String, Entry<C>> = HashMap::new();
        entries.insert(SEQUENCE.to_string(), Entry::Sequence);
        entries.insert(FALLBACK.to_string(), Entry::Fallback);
        entries.insert(SUBTREE.to_string(), Entry::SubTree);
        entries.insert(
            ALWAYS_SUCCESS.to_string(),
            Entry::Leaf(Box::new(always_success::<C>)),
        );
        entries.insert(
            ALWAYS_FAILURE.to_string(),
            Entry::Leaf(Box::new(always_failure::<C>)),
        );
        Self { entries }
    }

    /// Registers a leaf type.
    ///
    /// The factory is called once per occurrence of `type_name` in a
    /// description, with the node's name and configuration, and must return a
    /// fresh behavior each time.
    ///
    /// # Errors
    ///
    /// [`BuildError::DuplicateRegistration`] if `type_name` is already known.
    pub fn register<F>(&mut self, type_name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(&str, &NodeConfig) -> Result<Box<dyn Behavior<C>>> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        if self.entries.contains_key(&type_name) {
            return Err(BuildError::DuplicateRegistration { type_name });
        }

        tracing::debug!("Registered node type `{}`", type_name);
        self.entries.insert(type_name, Entry::Leaf(Box::new(factory)));
        Ok(())
    }

    /// Registers an action backed by a closure.
    ///
    /// Every occurrence in a description gets its own clone of `action`.
    pub fn register_action<F>(&mut self, type_name: impl Into<String>, action: F) -> Result<()>
    where
        F: FnMut(&mut C) -> Status + Clone + Send + Sync + 'static,
    {
        self.register(type_name, move |_, _| {
            Ok(Box::new(Action::new(action.clone())) as Box<dyn Behavior<C>>)
        })
    }

    /// Registers a condition backed by a predicate.
    pub fn register_condition<F>(&mut self, type_name: impl Into<String>, check: F) -> Result<()>
    where
        F: Fn(&C) -> bool + Clone + Send + Sync + 'static,
    {
        self.register(type_name, move |_, _| {
            Ok(Box::new(Condition::new(check.clone())) as Box<dyn Behavior<C>>)
        })
    }

    /// Returns `true` if `type_name` resolves to a node type.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// All known type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn entry(&self, type_name: &str) -> Option<&Entry<C>> {
        self.entries.get(type_name)
    }
}

fn always_success<C>(_name: &str, _config: &NodeConfig) -> Result<Box<dyn Behavior<C>>> {
    Ok(Box::new(AlwaysSuccess))
}

fn always_failure<C>(_name: &str, _config: &NodeConfig) -> Result<Box<dyn Behavior<C>>> {
    Ok(Box::new(AlwaysFailure))
}

impl<C: 'static> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_knows_builtins() {
        let registry = Registry::<()>::new();
        assert_eq!(
            registry.type_names(),
            vec![ALWAYS_FAILURE, ALWAYS_SUCCESS, FALLBACK, SEQUENCE, SUBTREE]
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = Registry::<u32>::new();
        registry
            .register_action("Bump", |n: &mut u32| {
                *n += 1;
                Status::Success
            })
            .unwrap();

        let err = registry
            .register_condition("Bump", |n: &u32| *n > 0)
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateRegistration { ref type_name } if type_name == "Bump"
        ));
    }

    #[test]
    fn builtin_names_are_reserved() {
        let mut registry = Registry::<()>::new();
        for name in [SEQUENCE, FALLBACK, SUBTREE, ALWAYS_SUCCESS] {
            let err = registry
                .register(name, |_, _| Ok(Box::new(AlwaysSuccess) as Box<dyn Behavior<()>>))
                .unwrap_err();
            assert!(matches!(err, BuildError::DuplicateRegistration { .. }));
        }
    }

    #[test]
    fn factory_yields_fresh_instances() {
        let mut registry = Registry::<u32>::new();
        registry
            .register_action("Bump", |n: &mut u32| {
                *n += 1;
                Status::Success
            })
            .unwrap();

        let Some(Entry::Leaf(factory)) = registry.entry("Bump") else {
            panic!("Bump should be a leaf");
        };

        let config = NodeConfig::default();
        let mut first = factory("a", &config).unwrap();
        let mut second = factory("b", &config).unwrap();

        let mut n = 0;
        assert_eq!(first.tick(&mut n), Status::Success);
        assert_eq!(second.tick(&mut n), Status::Success);
        assert_eq!(n, 2);
    }

    #[test]
    fn node_config_attribute_access() {
        let mut attributes = BTreeMap::new();
        attributes.insert("speed".to_string(), "3".to_string());
        attributes.insert("door".to_string(), "room".to_string());
        let config = NodeConfig::new("Walk", attributes);

        assert_eq!(config.get("door"), Some("room"));
        assert_eq!(config.require_parsed::<u32>("speed").unwrap(), 3);
        assert_eq!(config.parsed_or::<u32>("limit", 7).unwrap(), 7);

        assert!(matches!(
            config.require("target"),
            Err(BuildError::Structural(StructuralError::MissingAttribute { .. }))
        ));
        assert!(matches!(
            config.require_parsed::<u32>("door"),
            Err(BuildError::Structural(StructuralError::InvalidAttribute { .. }))
        ));
    }
}
