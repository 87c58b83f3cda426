use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use automata::{Determinizer, FiniteAutomaton};
use clap::Parser;
use log::{info, warn, LevelFilter};

mod machines;

use machines::{Built, Machine};

/// Runs one of the built-in automata against test strings.
#[derive(Debug, Parser)]
#[command(name = "automata-demo", version)]
struct Args {
    /// Which automaton to run
    #[arg(value_enum)]
    machine: Machine,

    /// Convert an NFA machine to a DFA before running it
    #[arg(long)]
    determinize: bool,

    /// Give up if determinizing would create more DFA states than this
    #[arg(long, requires = "determinize")]
    state_limit: Option<usize>,

    /// Print the automaton in Graphviz dot format and exit
    #[arg(long)]
    dot: bool,

    /// Test strings; when none are given, lines are read from stdin until "quit"
    #[arg(short, long = "input")]
    inputs: Vec<String>,

    /// More output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build(args: &Args) -> Result<Box<dyn FiniteAutomaton>> {
    let built = args
        .machine
        .build()
        .with_context(|| format!("failed to build {:?}", args.machine))?;

    let automaton: Box<dyn FiniteAutomaton> = match built {
        Built::NFA(nfa) if args.determinize => {
            let determinizer = match args.state_limit {
                Some(limit) => Determinizer::new().state_limit(limit),
                None => Determinizer::new(),
            };
            let result = determinizer
                .determinize(&nfa)
                .context("failed to determinize")?;
            info!("{} NFA states became {} DFA states", nfa.size(), result.dfa().size());
            for (i, configuration) in result.configurations().iter().enumerate() {
                info!("q{} = {}", i, configuration);
            }
            Box::new(result.into_dfa())
        }
        Built::DFA(_) if args.determinize => {
            warn!("{:?} is already deterministic", args.machine);
            built.into_automaton()
        }
        built => built.into_automaton(),
    };
    Ok(automaton)
}

fn verdict(automaton: &mut dyn FiniteAutomaton, input: &str) -> String {
    automaton.reset();
    match automaton.execute(input) {
        Ok(true) => format!("{} is accepted", input),
        Ok(false) => format!("{} is not accepted", input),
        Err(err) => format!("{} is rejected: {}", input, err),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut automaton = build(&args)?;

    if args.dot {
        println!("{}", automata::to_dot(automaton.as_ref()));
        return Ok(());
    }

    if !args.inputs.is_empty() {
        for input in &args.inputs {
            println!("{}", verdict(automaton.as_mut(), input));
        }
        return Ok(());
    }

    println!("{}", args.machine.description());
    println!("Enter quit to exit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Test: ");
        stdout.flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input == "quit" {
            break;
        }

        println!("{}", verdict(automaton.as_mut(), input));
    }

    Ok(())
}
