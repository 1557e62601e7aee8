use crate::constants::INDENT;
use crate::data::{Dataset, DatasetView, Schema};
use crate::entropy::{best_attribute, plurality, single_label};
use crate::node::{Node, NodeId};
use std::fmt::{self, Display};

/// Arena holding the nodes of every tree grown during a run.
///
/// A tree is named by the id of its root. Growing appends nodes and never
/// moves existing ones, so ids stay valid for the lifetime of the arena.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Tree { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.nodes[id].terminal
    }

    pub fn set_terminal(&mut self, id: NodeId, terminal: bool) {
        self.nodes[id].terminal = terminal;
    }

    /// Grow a fresh, unpruned tree on `data` and return its root.
    pub fn grow(&mut self, data: &Dataset) -> NodeId {
        let view = DatasetView::full(data);
        let default_label = plurality(&view);
        self.grow_node(view, default_label, None, 0)
    }

    fn grow_node(
        &mut self,
        view: DatasetView,
        default_label: usize,
        incoming_value: Option<usize>,
        depth: usize,
    ) -> NodeId {
        let num = self.nodes.len();
        if view.is_empty() {
            self.nodes.push(Node::leaf(default_label, incoming_value, depth));
            return num;
        }
        if let Some(label) = single_label(&view) {
            self.nodes.push(Node::leaf(label, incoming_value, depth));
            return num;
        }
        let attribute = match best_attribute(&view) {
            Some(a) => a,
            None => {
                self.nodes.push(Node::leaf(plurality(&view), incoming_value, depth));
                return num;
            }
        };
        let label = plurality(&view);
        self.nodes.push(Node::split(label, attribute, incoming_value, depth));
        let active = view.without(attribute);
        let n_values = view.schema().values(attribute).len();
        let mut children = Vec::with_capacity(n_values);
        for value in 0..n_values {
            let subset = view.filter(attribute, value, active.clone());
            children.push(self.grow_node(subset, label, Some(value), depth + 1));
        }
        self.nodes[num].children = children;
        num
    }

    /// Nodes a classification can reach from `root`, in pre-order.
    pub fn reachable(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            order.push(n);
            let node = &self.nodes[n];
            if !node.terminal {
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }

    /// Number of reachable nodes.
    pub fn n_nodes(&self, root: NodeId) -> usize {
        self.reachable(root).len()
    }

    /// Number of reachable terminal nodes.
    pub fn n_leaves(&self, root: NodeId) -> usize {
        self.reachable(root)
            .into_iter()
            .filter(|&n| self.nodes[n].terminal)
            .count()
    }

    /// Deepest reachable level below `root`.
    pub fn depth(&self, root: NodeId) -> usize {
        let base = self.nodes[root].depth;
        self.reachable(root)
            .into_iter()
            .map(|n| self.nodes[n].depth - base)
            .max()
            .unwrap_or(0)
    }

    /// Printable view of the tree rooted at `root`.
    pub fn display<'a>(&'a self, root: NodeId, schema: &'a Schema) -> TreeDisplay<'a> {
        TreeDisplay {
            tree: self,
            root,
            schema,
        }
    }
}

/// One line per reachable node, pre-order, children in schema value order.
pub struct TreeDisplay<'a> {
    tree: &'a Tree,
    root: NodeId,
    schema: &'a Schema,
}

impl Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(NodeId, usize, Option<usize>)> = vec![(self.root, 0, None)];
        while let Some((idx, depth, parent_attribute)) = print_buffer.pop() {
            let node = self.tree.node(idx);
            writeln!(
                f,
                "{}{}",
                INDENT.repeat(depth),
                node.display(self.schema, parent_attribute)
            )?;
            if !node.terminal {
                for &c in node.children.iter().rev() {
                    print_buffer.push((c, depth + 1, node.test_attribute));
                }
            }
        }
        Ok(())
    }
}
