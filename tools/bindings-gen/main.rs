use bunki::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate bindings snapshots that exercise a condition node
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the condition node JSON file
    #[arg(short, long)]
    node: String,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_bindings.json")]
    output: String,

    /// The number of snapshots to generate
    #[arg(short, long, default_value_t = 20)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let node = ConditionNode::from_file(&cli.node)?;
    let field_rules = rules_by_field(&node);
    if field_rules.is_empty() {
        eprintln!("Error: node '{}' does not reference any variables", cli.node);
        std::process::exit(1);
    }

    println!(
        "Generating {} snapshot(s) over {} variable(s)...",
        cli.count,
        field_rules.len()
    );

    let snapshots: Vec<VariableBindings> = (0..cli.count)
        .map(|_| generate_snapshot(&mut rng, &field_rules))
        .collect();

    let json_output = serde_json::to_string_pretty(&snapshots)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved bindings to '{}'",
        cli.output
    );

    Ok(())
}

/// Groups the rules of the active mode by the variable they read.
fn rules_by_field(node: &ConditionNode) -> Vec<(String, Vec<Rule>)> {
    let rules: Vec<&Rule> = match node.mode {
        ConditionMode::Simple => node.rule_set.rules.iter().collect(),
        ConditionMode::MultiOutput => node.outputs.iter().flat_map(|o| o.rules.iter()).collect(),
    };
    node.referenced_fields()
        .into_iter()
        .map(|field| {
            let for_field = rules
                .iter()
                .filter(|r| r.field == field)
                .map(|r| (*r).clone())
                .collect();
            (field, for_field)
        })
        .collect()
}

fn generate_snapshot(rng: &mut StdRng, field_rules: &[(String, Vec<Rule>)]) -> VariableBindings {
    let mut bindings = VariableBindings::new();
    for (field, rules) in field_rules {
        // Leave roughly one in ten variables unbound.
        if rng.random_bool(0.1) {
            continue;
        }
        let Some(rule) = rules.choose(rng) else {
            continue;
        };
        bindings.insert(field.clone(), generate_value(rng, rule));
    }
    bindings
}

/// Produces a value near the rule's decision boundary, so both outcomes show up.
fn generate_value(rng: &mut StdRng, rule: &Rule) -> BindingValue {
    match rule.operator {
        OperatorKind::GreaterThan | OperatorKind::LessThan => {
            let threshold = rule.value.trim().parse::<f64>().unwrap_or(0.0);
            let offset = rng.random_range(-10.0..10.0_f64).round();
            BindingValue::Text(format!("{}", threshold + offset))
        }
        OperatorKind::InList | OperatorKind::NotInList => {
            let tokens: Vec<&str> = rule.value.split(',').map(str::trim).collect();
            match tokens.choose(rng) {
                Some(token) if rng.random_bool(0.7) => BindingValue::Text(token.to_string()),
                _ => BindingValue::Text("other".to_string()),
            }
        }
        OperatorKind::IsEmpty | OperatorKind::IsNotEmpty => {
            if rng.random_bool(0.5) {
                BindingValue::Text(String::new())
            } else {
                BindingValue::Text("filled".to_string())
            }
        }
        OperatorKind::Contains
        | OperatorKind::NotContains
        | OperatorKind::StartsWith
        | OperatorKind::EndsWith => {
            if rng.random_bool(0.5) {
                BindingValue::Text(format!("{}-{}", rule.value, rule.value))
            } else {
                BindingValue::Text("unrelated".to_string())
            }
        }
        OperatorKind::Equals | OperatorKind::NotEquals | OperatorKind::Unknown => {
            if rng.random_bool(0.5) {
                BindingValue::Text(rule.value.clone())
            } else {
                BindingValue::Text(format!("not {}", rule.value))
            }
        }
    }
}
