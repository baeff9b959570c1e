//! # Bunki - Condition Engine for Branching Flow Nodes
//!
//! **Bunki** owns the data model and evaluation of decision nodes in a visual
//! flow editor. A node holds either a single rule-set that yields a boolean
//! (simple mode) or an ordered list of named output paths with their own rules
//! (multi-output mode). Evaluation is a pure function of the node and a
//! snapshot of variable bindings collected by upstream input nodes.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Node**: Decode a `ConditionNode` from JSON, or convert your own
//!     payload by implementing the `IntoCondition` trait.
//! 2.  **Edit**: Apply pure editing operations (`add_rule`, `switch_mode`, ...) that
//!     take the current node and return the next one.
//! 3.  **Evaluate**: Call `evaluate_condition`, or wrap the node in an `Evaluator`
//!     and run it against many bindings snapshots.
//!
//! Evaluation never fails. Missing variables, unparseable numbers, unknown
//! operators and empty rule-sets all resolve to a non-matching rule.
//!
//! ## Quick Start
//!
//! ```rust
//! use bunki::prelude::*;
//!
//! let node = ConditionNode::multi_output(vec![
//!     Output::new("o1", "Adults", "A").with_rules(vec![Rule::new(
//!         "r1",
//!         "age",
//!         OperatorKind::GreaterThan,
//!         "17",
//!     )]),
//!     Output::new("o2", "Everyone else", "B").with_rules(vec![Rule::new(
//!         "r2",
//!         "age",
//!         OperatorKind::IsNotEmpty,
//!         "",
//!     )]),
//! ]);
//!
//! let bindings = VariableBindings::new().with("age", "25");
//! let result = evaluate_condition(&node, &bindings);
//!
//! assert!(result.matched);
//! assert_eq!(result.output.map(|o| o.value).as_deref(), Some("A"));
//! ```

pub mod edit;
pub mod engine;
pub mod error;
pub mod model;
pub mod prelude;
pub mod trace;
pub mod ui;

#[cfg(feature = "python-bindings")]
mod python;
