use crate::data::{Dataset, Instance};
use crate::entropy::root_info_gain;
use crate::errors::DecisionTreeError;
use crate::learner::core::DecisionTreeLearner;
use crate::utils::fmt_report;

impl DecisionTreeLearner {
    /// Predicted label of an instance.
    ///
    /// Values outside an attribute's domain stop the descent; the label
    /// stored on the node reached so far is returned.
    pub fn classify(&self, instance: &Instance) -> Result<&str, DecisionTreeError> {
        let (schema, root) = self.fitted()?;
        if instance.values.len() != schema.n_attributes() {
            return Err(DecisionTreeError::ShapeMismatch(
                0,
                instance.values.len(),
                schema.n_attributes(),
            ));
        }
        let label = self.tree.classify_row(root, &schema.encode_values(&instance.values));
        Ok(schema.label(label))
    }

    /// Fraction of `data` classified correctly.
    pub fn accuracy(&self, data: &Dataset) -> Result<f64, DecisionTreeError> {
        let (schema, root) = self.fitted()?;
        if schema != data.schema() {
            return Err(DecisionTreeError::SchemaMismatch);
        }
        Ok(self.tree.accuracy(root, data))
    }

    /// Accuracy on `data` with five decimals.
    pub fn format_accuracy(&self, data: &Dataset) -> Result<String, DecisionTreeError> {
        Ok(fmt_report(self.accuracy(data)?))
    }

    /// Print the accuracy on `data` with five decimals.
    pub fn print_accuracy(&self, data: &Dataset) -> Result<(), DecisionTreeError> {
        print!("{}", self.format_accuracy(data)?);
        Ok(())
    }

    /// The fitted tree, one line per reachable node.
    pub fn render(&self) -> Result<String, DecisionTreeError> {
        let (schema, root) = self.fitted()?;
        Ok(self.tree.display(root, schema).to_string())
    }

    /// Print the fitted tree.
    pub fn print(&self) -> Result<(), DecisionTreeError> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// `<attribute> <gain>` lines for every attribute of `data`.
    pub fn info_gain_report(&self, data: &Dataset) -> String {
        root_info_gain(data)
            .into_iter()
            .map(|(name, gain)| format!("{} {}\n", name, fmt_report(gain)))
            .collect()
    }

    /// Print the information gain of every attribute on `data`.
    pub fn root_info_gain(&self, data: &Dataset) {
        print!("{}", self.info_gain_report(data));
    }
}
