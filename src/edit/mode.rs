use crate::model::{ConditionMode, ConditionNode, Output};

const SEED_OUTPUT_ID: &str = "output-1";

impl ConditionNode {
    /// Switches the node between simple and multi-output mode.
    ///
    /// The conversion is lossy and cannot be undone:
    /// * simple to multi-output seeds one output holding the simple rules, but
    ///   only when the node has no outputs yet;
    /// * multi-output to simple replaces the flat rules with the first output's
    ///   rules. The remaining outputs are no longer evaluated. Without outputs
    ///   the flat rules are kept.
    ///
    /// Switching to the current mode returns the node unchanged.
    pub fn switch_mode(mut self, mode: ConditionMode) -> Self {
        if self.mode == mode {
            return self;
        }
        match mode {
            ConditionMode::MultiOutput => {
                if self.outputs.is_empty() {
                    self.outputs.push(
                        Output::new(SEED_OUTPUT_ID, "Output A", "A")
                            .with_rules(self.rule_set.rules.clone()),
                    );
                }
            }
            ConditionMode::Simple => {
                if let Some(first) = self.outputs.first() {
                    self.rule_set.rules = first.rules.clone();
                }
            }
        }
        self.mode = mode;
        self
    }
}
