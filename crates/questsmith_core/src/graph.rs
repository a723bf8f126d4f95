//! The quest graph: metadata plus an ordered node sequence.

use crate::{Choice, Direction, Node, NodeDefaults, QuestMeta, is_reserved_anchor, sanitize};
use questsmith_error::{GraphError, GraphErrorKind, GraphResult};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument, warn};

/// Id of the node synthesized for an otherwise empty graph.
pub const START_ID: &str = "start";

/// A choice whose target matches no node and no reserved anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters, derive_new::new)]
pub struct DanglingTarget {
    /// Node owning the choice
    node_id: String,
    /// Position of the choice within the node
    choice_index: usize,
    /// The unresolved target
    target: String,
}

/// Metadata and an ordered sequence of nodes.
///
/// Node order is the reading and navigation order. Every mutation keeps at
/// least one node in the graph and keeps node ids unique; a failed mutation
/// leaves the graph untouched. Choice targets are never validated against
/// existing nodes.
///
/// # Examples
///
/// ```
/// use questsmith_core::{NodeDefaults, QuestGraph};
///
/// let mut graph = QuestGraph::default();
/// let defaults = NodeDefaults::default();
///
/// let id = graph.add_node(&defaults, None).id().clone();
/// assert_eq!(id, "node-1");
/// assert_eq!(graph.len(), 2);
///
/// graph.rename_node(&id, "Old Mill").unwrap();
/// assert!(graph.contains("old-mill"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct QuestGraph {
    /// Descriptive metadata
    meta: QuestMeta,
    /// Nodes in reading order
    #[getter(skip)]
    nodes: Vec<Node>,
}

impl Default for QuestGraph {
    /// Placeholder metadata and a single `start` node.
    fn default() -> Self {
        Self::new(QuestMeta::default())
    }
}

impl QuestGraph {
    /// Creates a graph holding only a `start` node.
    pub fn new(meta: QuestMeta) -> Self {
        Self {
            meta,
            nodes: vec![Self::start_node()],
        }
    }

    /// Assembles a graph from loaded parts.
    ///
    /// An empty node list is replaced by a single `start` node. Duplicate ids
    /// are kept as loaded so they can be reported; see [`duplicate_ids`](Self::duplicate_ids).
    pub fn from_parts(meta: QuestMeta, nodes: Vec<Node>) -> Self {
        let mut graph = Self { meta, nodes };
        if graph.nodes.is_empty() {
            warn!("Graph has no nodes, synthesizing '{}'", START_ID);
            graph.nodes.push(Self::start_node());
        }
        let duplicates = graph.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(?duplicates, "Graph loaded with duplicate node ids");
        }
        graph
    }

    fn start_node() -> Node {
        Node::new(START_ID, "Start")
    }

    /// Replaces the metadata.
    pub fn set_meta(&mut self, meta: QuestMeta) {
        self.meta = meta;
    }

    /// Nodes in reading order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a graph holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in reading order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.id().as_str()).collect()
    }

    /// Position of the node with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    /// Returns true if a node with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Looks up a node.
    pub fn node(&self, id: &str) -> GraphResult<&Node> {
        self.nodes
            .iter()
            .find(|node| node.id() == id)
            .ok_or_else(|| not_found(id))
    }

    /// Looks up a node for editing its content. The id stays fixed.
    pub fn node_mut(&mut self, id: &str) -> GraphResult<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|node| node.id() == id)
            .ok_or_else(|| not_found(id))
    }

    /// Returns true if `target` resolves to a node or a reserved anchor.
    pub fn is_known_target(&self, target: &str) -> bool {
        is_reserved_anchor(target) || self.contains(target)
    }

    /// Creates a node with a fresh `{base}-{n}` id.
    ///
    /// The node is inserted right after position `after`, or appended when
    /// `after` is `None` or past the end.
    #[instrument(skip(self, defaults), fields(base = %defaults.id_base()))]
    pub fn add_node(&mut self, defaults: &NodeDefaults, after: Option<usize>) -> &Node {
        let base = sanitize(defaults.id_base());
        let taken: HashSet<&str> = self.nodes.iter().map(|node| node.id().as_str()).collect();
        let mut n: usize = 1;
        while taken.contains(format!("{}-{}", base, n).as_str()) {
            n += 1;
        }

        let mut node = Node::new(
            &format!("{}-{}", base, n),
            format!("{} {}", defaults.title_prefix(), n),
        );
        node.push_choice(Choice::new(
            defaults.choice_label().as_str(),
            defaults.choice_target(),
        ));

        let index = match after {
            Some(after) if after < self.nodes.len() => after + 1,
            _ => self.nodes.len(),
        };
        debug!(id = %node.id(), index, "Adding node");
        self.nodes.insert(index, node);
        &self.nodes[index]
    }

    /// Inserts a prepared node at the end.
    ///
    /// Fails with `DuplicateIdentifier` if its id is taken or is a reserved anchor.
    pub fn push_node(&mut self, node: Node) -> GraphResult<()> {
        if self.contains(node.id()) || is_reserved_anchor(node.id()) {
            return Err(GraphError::new(GraphErrorKind::DuplicateIdentifier(
                node.id().clone(),
            )));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node. Choices elsewhere that pointed at it are left dangling.
    ///
    /// Fails with `InvariantViolation` when it is the last node.
    #[instrument(skip(self))]
    pub fn remove_node(&mut self, id: &str) -> GraphResult<Node> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        if self.nodes.len() <= 1 {
            return Err(GraphError::new(GraphErrorKind::InvariantViolation(
                "a quest must keep at least one node".to_string(),
            )));
        }
        debug!(index, "Removing node");
        Ok(self.nodes.remove(index))
    }

    /// Renames a node to the sanitized form of `new_raw_id`.
    ///
    /// Choices referencing the old id are not updated. Fails with
    /// `DuplicateIdentifier` if a different node already uses the new id or
    /// the new id is `top` or `end`. Returns the id now in effect.
    #[instrument(skip(self))]
    pub fn rename_node(&mut self, id: &str, new_raw_id: &str) -> GraphResult<String> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let new_id = sanitize(new_raw_id);
        let collides = self
            .nodes
            .iter()
            .enumerate()
            .any(|(i, node)| i != index && *node.id() == new_id);
        if collides || is_reserved_anchor(&new_id) {
            return Err(GraphError::new(GraphErrorKind::DuplicateIdentifier(new_id)));
        }
        debug!(new_id = %new_id, "Renaming node");
        self.nodes[index].assign_id(new_id.clone());
        Ok(new_id)
    }

    /// Renames a node and rewrites every choice that targeted the old id.
    ///
    /// Returns the new id and the number of rewritten choices.
    #[instrument(skip(self))]
    pub fn rename_and_relink(&mut self, id: &str, new_raw_id: &str) -> GraphResult<(String, usize)> {
        let old_id = id.to_string();
        let new_id = self.rename_node(id, new_raw_id)?;
        if new_id == old_id {
            return Ok((new_id, 0));
        }

        let mut relinked = 0;
        for node in &mut self.nodes {
            for choice in node.choices_mut() {
                if *choice.target() == old_id {
                    choice.retarget(&new_id);
                    relinked += 1;
                }
            }
        }
        debug!(relinked, "Relinked choices");
        Ok((new_id, relinked))
    }

    /// Swaps a node with its neighbour. No-op at either boundary.
    ///
    /// Returns the node's position after the move.
    #[instrument(skip(self))]
    pub fn move_node(&mut self, id: &str, direction: Direction) -> GraphResult<usize> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let Some(target) = index.checked_add_signed(direction.offset()) else {
            return Ok(index);
        };
        if target >= self.nodes.len() {
            return Ok(index);
        }
        self.nodes.swap(index, target);
        Ok(target)
    }

    /// Replaces a node's choices wholesale. Targets are not checked against
    /// existing nodes.
    #[instrument(skip(self, choices), fields(count = choices.len()))]
    pub fn set_choices(&mut self, id: &str, choices: Vec<Choice>) -> GraphResult<()> {
        self.node_mut(id)?.set_choices(choices);
        Ok(())
    }

    /// Appends one choice to a node.
    pub fn push_choice(&mut self, id: &str, choice: Choice) -> GraphResult<()> {
        self.node_mut(id)?.push_choice(choice);
        Ok(())
    }

    /// Removes the choice at `index` from a node.
    pub fn remove_choice(&mut self, id: &str, index: usize) -> GraphResult<Choice> {
        self.node_mut(id)?.remove_choice(index).ok_or_else(|| {
            GraphError::new(GraphErrorKind::NotFound(format!("{}#choice-{}", id, index)))
        })
    }

    /// Ids used by more than one node, sorted.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let duplicates: BTreeSet<&str> = self
            .nodes
            .iter()
            .map(|node| node.id().as_str())
            .filter(|id| !seen.insert(*id))
            .collect();
        duplicates.into_iter().map(str::to_string).collect()
    }

    /// Node ids whose anchor would clash in a rendered document, sorted.
    ///
    /// Covers ids used by more than one node and ids equal to `top` or `end`,
    /// which the overview and closing sections already own.
    pub fn anchor_collisions(&self) -> Vec<String> {
        let mut collisions: BTreeSet<String> = self.duplicate_ids().into_iter().collect();
        collisions.extend(
            self.nodes
                .iter()
                .map(|node| node.id())
                .filter(|id| is_reserved_anchor(id))
                .cloned(),
        );
        collisions.into_iter().collect()
    }

    /// Every choice whose target resolves to nothing, in reading order.
    pub fn dangling_targets(&self) -> Vec<DanglingTarget> {
        let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id().as_str()).collect();
        let mut dangling = Vec::new();
        for node in &self.nodes {
            for (index, target) in node.targets().enumerate() {
                if !is_reserved_anchor(target) && !ids.contains(target) {
                    dangling.push(DanglingTarget::new(
                        node.id().clone(),
                        index,
                        target.to_string(),
                    ));
                }
            }
        }
        dangling
    }
}

#[track_caller]
fn not_found(id: &str) -> GraphError {
    GraphError::new(GraphErrorKind::NotFound(id.to_string()))
}
