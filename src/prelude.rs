//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the bunki crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use bunki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let node = ConditionNode::from_file("path/to/node.json")?;
//! let bindings = VariableBindings::from_file("path/to/bindings.json")?;
//!
//! let evaluator = Evaluator::new(node);
//! let result = evaluator.eval(&bindings);
//!
//! println!("Matched: {} ({})", result.matched, result.reason);
//! # Ok(())
//! # }
//! ```

// Evaluation
pub use crate::engine::{
    EvaluationResult, Evaluator, OutputSelection, evaluate_condition, evaluate_rule,
    evaluate_rule_set,
};

// Data model
pub use crate::model::{
    BindingValue, Combinator, ConditionMode, ConditionNode, IntoCondition, OperatorKind, Output,
    Rule, RuleSet, VariableBindings,
};

// Editing
pub use crate::edit::{Edit, EditorSession, OutputPatch, RulePatch};

// Error types
pub use crate::error::{ConversionError, DecodeError, EditError};

// Trace formatting
pub use crate::trace::{RuleSetTrace, RuleTrace, TraceFormatter};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
