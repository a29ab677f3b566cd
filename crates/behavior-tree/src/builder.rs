//! Tree construction.
//!
//! Two ways to get a [`Tree`]:
//!
//! - **Programmatically**, with the helper functions in this module. Instead
//!   of writing `Node::Sequence(Sequence::new(name, vec![...])?)` you can use
//!   `sequence(name, vec![...])?`.
//! - **Declaratively**, by handing a [`TreeDescription`] to a [`TreeBuilder`],
//!   which resolves every node type against a [`Registry`].

use crate::description::{NodeDescription, TreeDescription};
use crate::error::{BuildError, Result, StructuralError};
use crate::registry::{Entry, NodeConfig, Registry, SUBTREE_ID};
use crate::{Action, Behavior, Condition, Fallback, Leaf, Node, Sequence, Status, Tree};

/// Creates a sequence node.
///
/// Shorthand for `Node::Sequence(Sequence::new(name, children)?)`.
#[inline]
pub fn sequence<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Result<Node<C>> {
    Sequence::new(name, children).map(Node::Sequence)
}

/// Creates a fallback node.
///
/// Shorthand for `Node::Fallback(Fallback::new(name, children)?)`.
#[inline]
pub fn fallback<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Result<Node<C>> {
    Fallback::new(name, children).map(Node::Fallback)
}

/// Creates a leaf node from any behavior.
#[inline]
pub fn leaf<C: 'static, B>(name: impl Into<String>, behavior: B) -> Node<C>
where
    B: Behavior<C> + 'static,
{
    Node::Leaf(Leaf::new(name, Box::new(behavior)))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C: 'static, F>(name: impl Into<String>, run: F) -> Node<C>
where
    F: FnMut(&mut C) -> Status + Send + 'static,
{
    leaf(name, Action::new(run))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static, F>(name: impl Into<String>, check: F) -> Node<C>
where
    F: Fn(&C) -> bool + Send + 'static,
{
    leaf(name, Condition::new(check))
}

/// Builds trees from descriptions using the node types of a [`Registry`].
///
/// Nodes are instantiated bottom-up: every composite receives its children
/// already built. Any error aborts the whole build.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{NodeDescription, Registry, Status, TreeBuilder, TreeDescription};
///
/// let mut registry = Registry::<u32>::new();
/// registry.register_action("Bump", |n: &mut u32| {
///     *n += 1;
///     Status::Success
/// })?;
///
/// let description = TreeDescription::single(
///     "Main",
///     NodeDescription::new("Sequence")
///         .with_children(vec![NodeDescription::new("Bump"), NodeDescription::new("Bump")]),
/// );
///
/// let mut tree = TreeBuilder::new(&registry).build(&description)?;
/// let mut n = 0;
/// assert_eq!(tree.tick_root(&mut n), Status::Success);
/// assert_eq!(n, 2);
/// # Ok::<(), behavior_tree::BuildError>(())
/// ```
pub struct TreeBuilder<'r, C> {
    registry: &'r Registry<C>,
    main_tree: Option<String>,
}

impl<'r, C: 'static> TreeBuilder<'r, C> {
    pub fn new(registry: &'r Registry<C>) -> Self {
        Self {
            registry,
            main_tree: None,
        }
    }

    /// Builds the tree with this id instead of the description's `main_tree`.
    pub fn main_tree(mut self, id: impl Into<String>) -> Self {
        self.main_tree = Some(id.into());
        self
    }

    /// Builds the main tree of `description`.
    pub fn build(&self, description: &TreeDescription) -> Result<Tree<C>> {
        let main = description.select_main(self.main_tree.as_deref())?;
        tracing::debug!("Building behavior tree `{}`", main.id);

        let mut stack = vec![main.id.as_str()];
        let root = self.build_node(description, &main.root, &mut stack)?;
        let tree = Tree::new(root);

        tracing::debug!(
            "Built behavior tree `{}`: {} nodes, depth {}",
            main.id,
            tree.node_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// `stack` holds the ids of the trees currently being inlined, outermost
    /// first.
    fn build_node<'d>(
        &self,
        description: &'d TreeDescription,
        node: &'d NodeDescription,
        stack: &mut Vec<&'d str>,
    ) -> Result<Node<C>> {
        if node.kind.trim().is_empty() {
            return Err(StructuralError::Malformed(format!(
                "node `{}` has an empty type name",
                node.display_name()
            ))
            .into());
        }

        let name = node.display_name();
        let entry = self
            .registry
            .entry(&node.kind)
            .ok_or_else(|| BuildError::UnknownNodeType {
                type_name: node.kind.clone(),
            })?;

        match entry {
            Entry::Sequence => {
                let children = self.build_children(description, node, stack)?;
                sequence(name, children)
            }
            Entry::Fallback => {
                let children = self.build_children(description, node, stack)?;
                fallback(name, children)
            }
            Entry::SubTree => {
                ensure_no_children(node)?;
                let id = node
                    .attributes
                    .get(SUBTREE_ID)
                    .ok_or_else(|| StructuralError::MissingAttribute {
                        name: name.to_string(),
                        attribute: SUBTREE_ID.to_string(),
                    })?;

                if stack.contains(&id.as_str()) {
                    let path = stack.join(" -> ");
                    return Err(StructuralError::SubTreeCycle {
                        id: id.clone(),
                        path,
                    }
                    .into());
                }

                let subtree = description
                    .tree(id)
                    .ok_or_else(|| StructuralError::UnknownTree { id: id.clone() })?;

                tracing::trace!("Inlining subtree `{}` at `{}`", id, name);
                stack.push(subtree.id.as_str());
                let built = self.build_node(description, &subtree.root, stack);
                stack.pop();
                built
            }
            Entry::Leaf(factory) => {
                ensure_no_children(node)?;
                let config = NodeConfig::new(name, node.attributes.clone());
                let behavior = factory(name, &config)?;
                Ok(Node::Leaf(Leaf::new(name, behavior)))
            }
        }
    }

    fn build_children<'d>(
        &self,
        description: &'d TreeDescription,
        node: &'d NodeDescription,
        stack: &mut Vec<&'d str>,
    ) -> Result<Vec<Node<C>>> {
        let mut children = Vec::with_capacity(node.children.len());
        for child in &node.children {
            children.push(self.build_node(description, child, stack)?);
        }
        Ok(children)
    }
}

fn ensure_no_children(node: &NodeDescription) -> Result<()> {
    if node.children.is_empty() {
        Ok(())
    } else {
        Err(StructuralError::LeafWithChildren {
            name: node.display_name().to_string(),
            type_name: node.kind.clone(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;
    use crate::registry::SUBTREE;

    /// Context recording the order in which leaves ran.
    type Trace = Vec<String>;

    fn registry() -> Registry<Trace> {
        let mut registry = Registry::new();
        registry
            .register("Record", |name, config| {
                let name = name.to_string();
                let status = match config.get("status") {
                    Some("failure") => Status::Failure,
                    _ => Status::Success,
                };
                Ok(Box::new(Action::new(move |trace: &mut Trace| {
                    trace.push(name.clone());
                    status
                })) as Box<dyn Behavior<Trace>>)
            })
            .unwrap();
        registry
    }

    fn record(name: &str) -> NodeDescription {
        NodeDescription::new("Record").named(name)
    }

    fn failing(name: &str) -> NodeDescription {
        record(name).with_attribute("status", "failure")
    }

    #[test]
    fn builds_nested_composites_bottom_up() {
        let description = TreeDescription::single(
            "Main",
            NodeDescription::new("Sequence").named("Root").with_children(vec![
                NodeDescription::new("Fallback")
                    .named("Guard")
                    .with_children(vec![failing("check"), record("fix")]),
                record("finish"),
            ]),
        );

        let registry = registry();
        let mut tree = TreeBuilder::new(&registry).build(&description).unwrap();

        assert_eq!(tree.root().kind(), NodeKind::Sequence);
        assert_eq!(tree.root().children()[0].name(), "Guard");
        assert_eq!(tree.node_count(), 5);

        let mut trace = Trace::new();
        assert_eq!(tree.tick_root(&mut trace), Status::Success);
        assert_eq!(trace, ["check", "fix", "finish"]);
    }

    #[test]
    fn unknown_type_aborts_build() {
        let description = TreeDescription::single(
            "Main",
            NodeDescription::new("Sequence").with_children(vec![record("a"), NodeDescription::new("Fly")]),
        );

        let registry = registry();
        let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
        assert!(matches!(err, BuildError::UnknownNodeType { ref type_name } if type_name == "Fly"));
    }

    #[test]
    fn empty_composite_is_structural_error() {
        let description = TreeDescription::single(
            "Main",
            NodeDescription::new("Sequence").with_children(vec![
                record("a"),
                NodeDescription::new("Fallback").named("Hollow"),
            ]),
        );

        let registry = registry();
        let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Structural(StructuralError::EmptyComposite { ref name }) if name == "Hollow"
        ));
    }

    #[test]
    fn leaf_with_children_is_structural_error() {
        let description = TreeDescription::single(
            "Main",
            record("parent").with_children(vec![record("child")]),
        );

        let registry = registry();
        let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Structural(StructuralError::LeafWithChildren { .. })
        ));
    }

    #[test]
    fn empty_type_name_is_malformed() {
        let description = TreeDescription::single("Main", NodeDescription::new("  "));

        let registry = registry();
        let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Structural(StructuralError::Malformed(_))
        ));
    }

    #[test]
    fn subtree_is_inlined() {
        let description = TreeDescription {
            main_tree: Some("Main".into()),
            trees: vec![
                crate::TreeDefinition {
                    id: "Main".into(),
                    root: NodeDescription::new("Sequence").with_children(vec![
                        NodeDescription::new(SUBTREE).with_attribute(SUBTREE_ID, "Door"),
                        record("enter"),
                    ]),
                },
                crate::TreeDefinition {
                    id: "Door".into(),
                    root: NodeDescription::new("Fallback")
                        .named("EnsureDoorOpen")
                        .with_children(vec![failing("is_open"), record("open")]),
                },
            ],
        };

        let registry = registry();
        let mut tree = TreeBuilder::new(&registry).build(&description).unwrap();
        assert_eq!(tree.root().children()[0].name(), "EnsureDoorOpen");

        let mut trace = Trace::new();
        assert_eq!(tree.tick_root(&mut trace), Status::Success);
        assert_eq!(trace, ["is_open", "open", "enter"]);
    }

    #[test]
    fn subtree_cycle_is_rejected() {
        let description = TreeDescription {
            main_tree: Some("A".into()),
            trees: vec![
                crate::TreeDefinition {
                    id: "A".into(),
                    root: NodeDescription::new("Sequence").with_children(vec![
                        NodeDescription::new(SUBTREE).with_attribute(SUBTREE_ID, "B"),
                    ]),
                },
                crate::TreeDefinition {
                    id: "B".into(),
                    root: NodeDescription::new(SUBTREE).with_attribute(SUBTREE_ID, "A"),
                },
            ],
        };

        let registry = registry();
        let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Structural(StructuralError::SubTreeCycle { ref id, ref path })
                if id == "A" && path == "A -> B"
        ));
    }

    #[test]
    fn subtree_requires_id() {
        let description = TreeDescription::single("Main", NodeDescription::new(SUBTREE));

        let registry = registry();
        let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Structural(StructuralError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn main_tree_override() {
        let description = TreeDescription {
            main_tree: Some("Main".into()),
            trees: vec![
                crate::TreeDefinition {
                    id: "Main".into(),
                    root: record("main"),
                },
                crate::TreeDefinition {
                    id: "Alt".into(),
                    root: record("alt"),
                },
            ],
        };

        let registry = registry();
        let mut tree = TreeBuilder::new(&registry)
            .main_tree("Alt")
            .build(&description)
            .unwrap();

        let mut trace = Trace::new();
        tree.tick_root(&mut trace);
        assert_eq!(trace, ["alt"]);
    }

    #[test]
    fn each_occurrence_gets_its_own_instance() {
        let description = TreeDescription::single(
            "Main",
            NodeDescription::new("Sequence").with_children(vec![record("one"), record("two")]),
        );

        let registry = registry();
        let mut first = TreeBuilder::new(&registry).build(&description).unwrap();
        let mut second = TreeBuilder::new(&registry).build(&description).unwrap();

        let mut trace = Trace::new();
        first.tick_root(&mut trace);
        second.tick_root(&mut trace);
        assert_eq!(trace, ["one", "two", "one", "two"]);
    }

    #[test]
    fn programmatic_helpers_reject_empty_composites() {
        assert!(sequence::<Trace>("empty", Vec::new()).is_err());
        assert!(fallback::<Trace>("empty", Vec::new()).is_err());
    }
}
