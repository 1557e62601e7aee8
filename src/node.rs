use crate::constants::ROOT_EDGE;
use crate::data::Schema;
use std::fmt;

/// Position of a node in the node arena.
pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Majority label of the training subset that created this node.
    pub default_label: usize,
    /// Attribute tested here, `None` for nodes built as leaves.
    pub test_attribute: Option<usize>,
    /// Value of the parent's test attribute leading here, `None` at the root.
    pub incoming_value: Option<usize>,
    pub terminal: bool,
    /// One child per legal value of `test_attribute`, in schema order.
    pub children: Vec<NodeId>,
    pub depth: usize,
}

impl Node {
    /// A node built as a leaf.
    pub fn leaf(label: usize, incoming_value: Option<usize>, depth: usize) -> Self {
        Node {
            default_label: label,
            test_attribute: None,
            incoming_value,
            terminal: true,
            children: Vec::new(),
            depth,
        }
    }

    /// A node that tests `attribute`. Children are attached once they are built.
    pub fn split(default_label: usize, attribute: usize, incoming_value: Option<usize>, depth: usize) -> Self {
        Node {
            default_label,
            test_attribute: Some(attribute),
            incoming_value,
            terminal: false,
            children: Vec::new(),
            depth,
        }
    }

    /// True if the node was built with children, whether or not it is pruned now.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Render this node as a single line given its schema.
    pub fn display<'a>(&'a self, schema: &'a Schema, parent_attribute: Option<usize>) -> NodeDisplay<'a> {
        NodeDisplay {
            node: self,
            schema,
            parent_attribute,
        }
    }
}

/// Printable view of a node, resolving positions to schema names.
pub struct NodeDisplay<'a> {
    node: &'a Node,
    schema: &'a Schema,
    parent_attribute: Option<usize>,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.parent_attribute, self.node.incoming_value) {
            (Some(a), Some(v)) => write!(f, "{}", self.schema.value(a, v))?,
            _ => write!(f, "{}", ROOT_EDGE)?,
        }
        match (self.node.terminal, self.node.test_attribute) {
            (false, Some(a)) => write!(f, " {{{}?}}", self.schema.attribute(a)),
            _ => write!(f, " ({})", self.schema.label(self.node.default_label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::to_strings;
    use std::error::Error;

    #[test]
    fn test_node_display() -> Result<(), Box<dyn Error>> {
        let schema = Schema::new(
            to_strings(&["colour"]),
            vec![to_strings(&["red", "blue"])],
            to_strings(&["no", "yes"]),
        )?;
        let mut root = Node::split(1, 0, None, 0);
        root.children = vec![1, 2];
        assert_eq!(root.display(&schema, None).to_string(), "ROOT {colour?}");
        root.terminal = true;
        assert_eq!(root.display(&schema, None).to_string(), "ROOT (yes)");

        let leaf = Node::leaf(0, Some(1), 1);
        assert_eq!(leaf.display(&schema, Some(0)).to_string(), "blue (no)");
        assert!(!leaf.has_children());
        Ok(())
    }
}
