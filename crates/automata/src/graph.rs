use std::collections::BTreeMap;

use petgraph::dot::Dot;
use petgraph::graph::{Graph, NodeIndex};

use crate::automaton::FiniteAutomaton;
use crate::symbol_set::SymbolSet;

/// Builds a graph with one node per state (`q0`, `q1`, ..., accepting states
/// suffixed with `*`) and one edge per (src, dst) pair, labelled with every
/// symbol that leads from src to dst.
pub fn to_graph(automaton: &dyn FiniteAutomaton) -> Graph<String, String> {
    let mut graph: Graph<String, String> = Graph::new();

    let nodes: Vec<NodeIndex> = (0..automaton.size())
        .map(|i| {
            let accepting = automaton.get_accepting(i).unwrap_or(false);
            let label = if accepting { format!("q{}*", i) } else { format!("q{}", i) };
            graph.add_node(label)
        })
        .collect();

    // (src, dst) -> labels, ordered so the output is stable
    let mut labels: BTreeMap<(usize, usize), SymbolSet> = BTreeMap::new();
    for (src, symbol, dst) in automaton.edges() {
        labels.entry((src, dst)).or_default().insert(symbol);
    }

    for ((src, dst), symbols) in labels {
        graph.add_edge(nodes[src], nodes[dst], symbols.to_string());
    }

    graph
}

/// Graphviz dot text for [`to_graph`].
pub fn to_dot(automaton: &dyn FiniteAutomaton) -> String {
    format!("{:?}", Dot::new(&to_graph(automaton)))
}

#[cfg(test)]
mod tests {
    use crate::{DFA, NFA};

    #[test]
    fn dfa_edges_are_merged_per_destination() {
        let mut dfa = DFA::new(2).unwrap();
        dfa.set_transition_str(0, "abc", 1).unwrap();
        dfa.set_transition_all(1, 1).unwrap();
        dfa.set_accepting(1, true).unwrap();

        let graph = dfa.to_graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);

        let labels: Vec<&String> = graph.edge_weights().collect();
        assert_eq!(labels, vec!["[a-c]", "ANY"]);
        let names: Vec<&String> = graph.node_weights().collect();
        assert_eq!(names, vec!["q0", "q1*"]);
    }

    #[test]
    fn nfa_renders_to_dot() {
        let mut nfa = NFA::new(2).unwrap();
        nfa.add_transition_all(0, 0).unwrap();
        nfa.add_transition(0, 'x', 1).unwrap();
        nfa.set_accepting(1, true).unwrap();

        let graph = nfa.to_graph();
        assert_eq!(graph.edge_count(), 2);
        let dot = nfa.to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("ANY"));
        assert!(dot.contains("q1*"));
        assert_eq!(dot, super::to_dot(&nfa));
    }

    #[test]
    fn dfa_renders_to_dot() {
        let mut dfa = DFA::new(2).unwrap();
        dfa.set_transition_str(0, "^-", 1).unwrap();
        dfa.set_accepting(1, true).unwrap();

        // literal caret and dash stay distinguishable from a negated class
        let labels: Vec<String> = dfa.to_graph().edge_weights().cloned().collect();
        assert_eq!(labels, vec![r"[\-\^]".to_string()]);

        let dot = dfa.to_dot();
        assert!(dot.contains("q0"));
        assert!(dot.contains("q1*"));
        assert!(!dot.contains("[^"), "{}", dot);
    }
}
