use bunki::engine::trace_rule_set;
use bunki::prelude::*;
use bunki::ui::UiConditionData;
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// The shape of the node file on disk.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum NodeFormat {
    /// The engine's own `ConditionNode` JSON.
    Node,
    /// The flow editor's condition `data` payload.
    Editor,
}

/// Evaluate a flow condition node against variable bindings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the condition node JSON file
    node_path: Option<String>,
    /// Path to the bindings JSON file (an object of variable name to value)
    bindings_path: Option<String>,

    /// The format of the node file
    #[arg(short, long, value_enum, default_value_t = NodeFormat::Node)]
    format: NodeFormat,

    /// Print the trace of every rule-set that was evaluated
    #[arg(short, long)]
    verbose: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.human {
        run_interactive(cli.format, cli.verbose);
    } else {
        run_non_interactive(cli);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_node(path: &str, format: NodeFormat) -> ConditionNode {
    match format {
        NodeFormat::Node => ConditionNode::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load node '{}': {}", path, e))),
        NodeFormat::Editor => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read node file '{}': {}", path, e))
            });
            UiConditionData::parse_condition(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to convert editor node '{}': {}", path, e))
            })
        }
    }
}

fn run_evaluation(node: ConditionNode, bindings: VariableBindings, verbose: bool) {
    let evaluator = Evaluator::new(node);

    println!("\nEvaluating {} condition...", evaluator.node().mode);
    let eval_start = Instant::now();
    let result = evaluator.eval(&bindings);
    let eval_duration = eval_start.elapsed();

    println!("\nEvaluation Finished!");
    match (&result.output, result.matched) {
        (Some(output), _) => println!(
            "  -> Selected Output: {} (value {}, position {})",
            output.label,
            output.value,
            output.index + 1
        ),
        (None, true) => println!("  -> Condition passed"),
        (None, false) => println!("  -> Nothing matched"),
    }
    println!("  -> Reason: {}", result.reason);

    if verbose {
        print_traces(evaluator.node(), &bindings);
    }

    let required = evaluator.required_fields();
    let missing: Vec<&String> = required
        .iter()
        .filter(|name| bindings.get(name).is_none())
        .collect();

    println!("\n--- Bindings Summary ---");
    println!("Bound Variables:      {}", bindings.len());
    println!("Referenced Variables: {}", required.len());
    if !missing.is_empty() {
        println!("Unbound Variables:    {:?}", missing);
    }
    println!("Evaluation:           {:?}", eval_duration);
    println!();
}

fn print_traces(node: &ConditionNode, bindings: &VariableBindings) {
    println!("\n--- Trace ---");
    match node.mode {
        ConditionMode::Simple => {
            let trace = trace_rule_set(&node.rule_set, bindings);
            println!(
                "[{}] {}",
                trace.outcome,
                TraceFormatter::format_rule_set(&trace)
            );
        }
        ConditionMode::MultiOutput => {
            for output in &node.outputs {
                let rule_set = RuleSet::new(Combinator::And, output.rules.clone());
                let trace = trace_rule_set(&rule_set, bindings);
                println!(
                    "{} [{}] {}",
                    output.label,
                    trace.outcome,
                    TraceFormatter::format_rule_set(&trace)
                );
            }
        }
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let node_path = cli.node_path.unwrap_or_else(|| {
        exit_with_error("Node path is required in non-interactive mode.");
    });
    let node = load_node(&node_path, cli.format);

    let bindings = match cli.bindings_path {
        Some(path) => VariableBindings::from_file(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load bindings from '{}': {}", path, e))
        }),
        None => {
            println!("No bindings file provided. Evaluating with every variable unbound.");
            VariableBindings::new()
        }
    };

    run_evaluation(node, bindings, cli.verbose);
}

/// Runs the CLI in an interactive mode, prompting for each variable the node reads.
fn run_interactive(format: NodeFormat, verbose: bool) {
    println!("--- Bunki Interactive Mode ---");

    let node_path = prompt_for_input("Enter condition node path", Some("data/condition.json"));
    let node = load_node(&node_path, format);

    println!("\nEnter a value for each variable. Leave empty to keep it unbound,");
    println!("separate list items with '|'.");
    let mut bindings = VariableBindings::new();
    for field in node.referenced_fields() {
        let raw = prompt_for_input(&field, None);
        if raw.is_empty() {
            continue;
        }
        if raw.contains('|') {
            let items: Vec<String> = raw.split('|').map(|s| s.trim().to_string()).collect();
            bindings.insert(field, items);
        } else {
            bindings.insert(field, raw);
        }
    }

    run_evaluation(node, bindings, verbose);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
