use super::tree::Tree;
use crate::data::Dataset;
use crate::node::NodeId;

impl Tree {
    /// Label position predicted for an encoded row.
    ///
    /// Descends while nodes are non-terminal. When no child carries the
    /// row's value, the current node's default label is returned.
    pub fn classify_row(&self, root: NodeId, values: &[Option<usize>]) -> usize {
        let mut node = self.node(root);
        while !node.terminal {
            let Some(attribute) = node.test_attribute else {
                break;
            };
            let value = values[attribute];
            let next = node
                .children
                .iter()
                .map(|&c| self.node(c))
                .find(|c| value.is_some() && c.incoming_value == value);
            match next {
                Some(child) => node = child,
                None => break,
            }
        }
        node.default_label
    }

    /// Number of rows of `data` classified correctly.
    pub fn n_correct(&self, root: NodeId, data: &Dataset) -> usize {
        data.rows()
            .iter()
            .filter(|r| self.classify_row(root, &r.values) == r.label)
            .count()
    }

    /// Fraction of rows of `data` classified correctly, 0 when `data` is empty.
    pub fn accuracy(&self, root: NodeId, data: &Dataset) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        self.n_correct(root, data) as f64 / data.len() as f64
    }
}
