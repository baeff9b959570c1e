use crate::engine::{EvaluationResult, Evaluator};
use crate::model::{ConditionNode, VariableBindings};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for EvaluationResult {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("matched", self.matched)?;

        match self.output {
            Some(output) => {
                let selected = PyDict::new(py);
                selected.set_item("index", output.index)?;
                selected.set_item("id", output.id)?;
                selected.set_item("label", output.label)?;
                selected.set_item("value", output.value)?;
                dict.set_item("output", selected)?;
            }
            None => dict.set_item("output", py.None())?,
        }

        dict.set_item("reason", self.reason)?;
        Ok(dict)
    }
}

/// A condition node ready for repeated evaluation.
///
/// The node is decoded once on construction; `evaluate` can then be called
/// with any number of bindings snapshots.
#[pyclass(name = "Condition")]
struct ConditionPy {
    evaluator: Evaluator,
}

#[pymethods]
impl ConditionPy {
    /// Decodes a condition node.
    ///
    /// Args:
    ///     node_json (str): The JSON form of the node, including its `mode`.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or missing required fields.
    #[new]
    fn new(node_json: &str) -> PyResult<Self> {
        let node = ConditionNode::from_json_str(node_json)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(ConditionPy {
            evaluator: Evaluator::new(node),
        })
    }

    /// Evaluates the node.
    ///
    /// Args:
    ///     bindings_json (str): A JSON object of variable name to value.
    ///
    /// Returns:
    ///     dict: `matched` (bool), `output` (dict | None) and `reason` (str).
    ///
    /// Raises:
    ///     ValueError: If the bindings are not a JSON object.
    fn evaluate(&self, bindings_json: &str) -> PyResult<EvaluationResult> {
        let bindings = VariableBindings::from_json_str(bindings_json)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(self.evaluator.eval(&bindings))
    }

    /// The variable names the node reads, sorted.
    fn required_fields(&self) -> Vec<String> {
        self.evaluator.required_fields()
    }
}

/// Python bindings to the bunki condition engine.
#[pymodule]
fn bunki(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ConditionPy>()?;
    Ok(())
}
