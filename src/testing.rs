//! Fixtures shared by the unit tests.
use crate::data::{Dataset, Instance, Schema};
use crate::errors::DecisionTreeError;
use crate::node::Node;
use crate::tree::tree::Tree;
use crate::utils::to_strings;
use std::error::Error;
use std::sync::Arc;

/// Attributes `A` and `B` over `{0, 1}`, labels `X` and `Y`.
pub fn ab_schema() -> Result<Arc<Schema>, DecisionTreeError> {
    Ok(Arc::new(Schema::new(
        to_strings(&["A", "B"]),
        vec![to_strings(&["0", "1"]), to_strings(&["0", "1"])],
        to_strings(&["X", "Y"]),
    )?))
}

/// Attributes `A`, `B` and `C` over `{0, 1}`, labels `X` and `Y`.
pub fn abc_schema() -> Result<Arc<Schema>, DecisionTreeError> {
    Ok(Arc::new(Schema::new(
        to_strings(&["A", "B", "C"]),
        vec![to_strings(&["0", "1"]); 3],
        to_strings(&["X", "Y"]),
    )?))
}

/// Rows given as `(label, values)`.
pub fn dataset(schema: &Arc<Schema>, rows: &[(&str, &[&str])]) -> Result<Dataset, DecisionTreeError> {
    let instances = rows.iter().map(|(l, v)| Instance::new(l, v)).collect();
    Dataset::new(schema.clone(), instances)
}

/// Grows to `ROOT {A?}` with a `B` split under `A = 0` and a `Y` leaf under `A = 1`.
pub fn two_level_train(schema: &Arc<Schema>) -> Result<Dataset, DecisionTreeError> {
    dataset(
        schema,
        &[
            ("X", &["0", "0"]),
            ("Y", &["0", "1"]),
            ("Y", &["1", "0"]),
            ("Y", &["1", "1"]),
        ],
    )
}

/// A tree over [`abc_schema`] with internal nodes 0, 1, 4 and 5, built by hand
/// so the pruning orders can be told apart.
///
/// ```text
/// ROOT {A?}
///     0 {B?}
///         0 (X)
///         1 (Y)
///     1 {C?}
///         0 {B?}
///             0 (Y)
///             1 (X)
///         1 (X)
/// ```
pub fn three_level_tree() -> Tree {
    let (a, b, c) = (0, 1, 2);
    let (x, y) = (0, 1);
    let mut tree = Tree {
        nodes: vec![
            Node::split(x, a, None, 0),
            Node::split(x, b, Some(0), 1),
            Node::leaf(x, Some(0), 2),
            Node::leaf(y, Some(1), 2),
            Node::split(y, c, Some(1), 1),
            Node::split(y, b, Some(0), 2),
            Node::leaf(y, Some(0), 3),
            Node::leaf(x, Some(1), 3),
            Node::leaf(x, Some(1), 2),
        ],
    };
    for (parent, children) in [(0, [1, 4]), (1, [2, 3]), (4, [5, 8]), (5, [6, 7])] {
        tree.nodes[parent].children = children.to_vec();
    }
    tree
}

/// Read a `resources/` csv whose first column is the label and whose
/// remaining columns are attributes, in `schema` order.
pub fn load_csv(path: &str, schema: &Arc<Schema>) -> Result<Dataset, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut instances = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let label = fields.next().ok_or("empty record")?.to_string();
        let values = fields.map(|f| f.to_string()).collect();
        instances.push(Instance { label, values });
    }
    Ok(Dataset::new(schema.clone(), instances)?)
}

/// Schema of the `resources/votes_*.csv` files.
pub fn votes_schema() -> Result<Arc<Schema>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path("resources/votes_train.csv")?;
    let attributes: Vec<String> = reader.headers()?.iter().skip(1).map(|h| h.to_string()).collect();
    let values = vec![to_strings(&["y", "n", "?"]); attributes.len()];
    Ok(Arc::new(Schema::new(
        attributes,
        values,
        to_strings(&["democrat", "republican"]),
    )?))
}
