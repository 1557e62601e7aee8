//! Data
//!
//! Categorical schema, labelled instances and the filtered views
//! used during recursive tree induction.
use crate::constants::N_LABELS;
use crate::errors::DecisionTreeError;
use hashbrown::HashMap;
use std::sync::Arc;

/// Ordered attribute names, the legal values of each attribute
/// and the two class labels.
///
/// Positions are fixed at construction; every other structure in the
/// crate addresses attributes, values and labels by position.
#[derive(Debug, Clone)]
pub struct Schema {
    attributes: Vec<String>,
    values: Vec<Vec<String>>,
    labels: Vec<String>,
    value_index: Vec<HashMap<String, usize>>,
    label_index: HashMap<String, usize>,
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.values == other.values && self.labels == other.labels
    }
}

fn index_names(kind: &str, names: &[String]) -> Result<HashMap<String, usize>, DecisionTreeError> {
    let mut index = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if index.insert(name.clone(), i).is_some() {
            return Err(DecisionTreeError::DuplicateName(kind.to_string(), name.clone()));
        }
    }
    Ok(index)
}

impl Schema {
    /// Create a new schema.
    ///
    /// * `attributes` - Attribute names, in instance value order.
    /// * `values` - Legal values of each attribute, in the same order as `attributes`.
    /// * `labels` - The class labels. Exactly two are required.
    pub fn new(
        attributes: Vec<String>,
        values: Vec<Vec<String>>,
        labels: Vec<String>,
    ) -> Result<Self, DecisionTreeError> {
        if labels.len() != N_LABELS {
            return Err(DecisionTreeError::LabelCount(labels.len()));
        }
        if attributes.len() != values.len() {
            return Err(DecisionTreeError::DomainCount(attributes.len(), values.len()));
        }
        index_names("attribute", &attributes)?;
        let label_index = index_names("label", &labels)?;
        let mut value_index = Vec::with_capacity(values.len());
        for (name, domain) in attributes.iter().zip(values.iter()) {
            if domain.is_empty() {
                return Err(DecisionTreeError::EmptyDomain(name.clone()));
            }
            value_index.push(index_names(&format!("value of {}", name), domain)?);
        }
        Ok(Schema {
            attributes,
            values,
            labels,
            value_index,
            label_index,
        })
    }

    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn attribute(&self, attribute: usize) -> &str {
        &self.attributes[attribute]
    }

    /// Legal values of an attribute, in schema order.
    pub fn values(&self, attribute: usize) -> &[String] {
        &self.values[attribute]
    }

    pub fn value(&self, attribute: usize, value: usize) -> &str {
        &self.values[attribute][value]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, label: usize) -> &str {
        &self.labels[label]
    }

    /// Position of `value` in the domain of `attribute`, `None` if it is out of domain.
    pub fn value_position(&self, attribute: usize, value: &str) -> Option<usize> {
        self.value_index.get(attribute).and_then(|m| m.get(value).copied())
    }

    pub fn label_position(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Encode the attribute values of an instance into value positions.
    pub fn encode_values(&self, values: &[String]) -> Vec<Option<usize>> {
        values
            .iter()
            .enumerate()
            .map(|(a, v)| self.value_position(a, v))
            .collect()
    }
}

/// A labelled example. Values are positional, one per schema attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub label: String,
    pub values: Vec<String>,
}

impl Instance {
    pub fn new(label: &str, values: &[&str]) -> Self {
        Instance {
            label: label.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// An instance encoded against a schema.
#[derive(Debug, Clone)]
pub struct Row {
    pub label: usize,
    /// Value position per attribute, `None` for a value outside the attribute's domain.
    pub values: Vec<Option<usize>>,
}

/// A schema plus the instances drawn from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Arc<Schema>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Encode `instances` against `schema`.
    ///
    /// Out-of-domain attribute values are accepted; unknown labels
    /// and instances of the wrong width are not.
    pub fn new(schema: Arc<Schema>, instances: Vec<Instance>) -> Result<Self, DecisionTreeError> {
        let mut rows = Vec::with_capacity(instances.len());
        for (i, instance) in instances.iter().enumerate() {
            if instance.values.len() != schema.n_attributes() {
                return Err(DecisionTreeError::ShapeMismatch(
                    i,
                    instance.values.len(),
                    schema.n_attributes(),
                ));
            }
            let label = schema
                .label_position(&instance.label)
                .ok_or_else(|| DecisionTreeError::UnknownLabel(instance.label.clone()))?;
            rows.push(Row {
                label,
                values: schema.encode_values(&instance.values),
            });
        }
        Ok(Dataset { schema, rows })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows of a dataset selected by index, with a mask of the attributes
/// still available for splitting.
///
/// Consumed attributes are switched off in the mask, never removed,
/// so row values keep their positions through the whole recursion.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    pub data: &'a Dataset,
    pub index: Vec<usize>,
    pub active: Vec<bool>,
}

impl<'a> DatasetView<'a> {
    /// All rows, all attributes active.
    pub fn full(data: &'a Dataset) -> Self {
        DatasetView {
            data,
            index: (0..data.len()).collect(),
            active: vec![true; data.schema().n_attributes()],
        }
    }

    pub fn schema(&self) -> &Schema {
        self.data.schema()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a Row> + '_ {
        let rows = self.data.rows();
        self.index.iter().map(move |&i| &rows[i])
    }

    pub fn active_attributes(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i)
    }

    /// Copy of the active mask with `attribute` switched off.
    pub fn without(&self, attribute: usize) -> Vec<bool> {
        let mut active = self.active.clone();
        active[attribute] = false;
        active
    }

    /// Rows whose `attribute` takes `value`, carrying the given active mask.
    pub fn filter(&self, attribute: usize, value: usize, active: Vec<bool>) -> DatasetView<'a> {
        let rows = self.data.rows();
        let index = self
            .index
            .iter()
            .copied()
            .filter(|&i| rows[i].values[attribute] == Some(value))
            .collect();
        DatasetView {
            data: self.data,
            index,
            active,
        }
    }

    /// Count of rows per label position.
    pub fn label_counts(&self) -> [usize; N_LABELS] {
        let mut counts = [0; N_LABELS];
        for row in self.rows() {
            counts[row.label] += 1;
        }
        counts
    }
}
