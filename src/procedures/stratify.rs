/*!
Stratification of a program.

The dependency graph has an edge from `p` to `q` when `p` occurs in the body of a clause defining `q`, marked negative when the occurrence is negated.
A valid stratification assigns each predicate a stratum such that positive edges are non-decreasing and negative edges strictly increasing.

Equivalently: no negative edge may sit inside a strongly connected component of the graph.
The check runs [tarjan_scc] over the graph and rejects any such edge with [UnstratifiedNegation](crate::types::err::StratifyError::UnstratifiedNegation); strata are then the longest negative-edge path over the condensation.

Stratification is computed per query, as the program may change between queries.
*/

use std::collections::HashMap;

use petgraph::{
    algo::tarjan_scc,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
    Direction,
};

use crate::{
    db::clause::ClauseDB,
    misc::log::targets::{self},
    structures::literal::Signature,
    types::err::{self},
};

/// A layer assignment to the predicates of a program.
#[derive(Debug, Default)]
pub struct Stratification {
    strata: HashMap<Signature, usize>,
}

impl Stratification {
    /// The stratum of a signature.
    ///
    /// A signature without clauses sits in the bottom stratum.
    pub fn stratum(&self, signature: &Signature) -> usize {
        self.strata.get(signature).copied().unwrap_or(0)
    }
}

/// A valid stratification of the program, or the negative cycle which prevents one.
pub fn stratify(db: &ClauseDB) -> Result<Stratification, err::StratifyError> {
    let mut graph: DiGraph<Signature, bool> = DiGraph::new();
    let mut nodes: HashMap<Signature, NodeIndex> = HashMap::default();

    let mut node_for = |graph: &mut DiGraph<Signature, bool>, signature: Signature| match nodes
        .get(&signature)
    {
        Some(index) => *index,
        None => {
            let index = graph.add_node(signature.clone());
            nodes.insert(signature, index);
            index
        }
    };

    for clause in db.clauses() {
        let head = node_for(&mut graph, clause.head.signature());
        for literal in &clause.body {
            let dependency = node_for(&mut graph, literal.signature());
            graph.add_edge(dependency, head, !literal.polarity);
        }
    }

    // Components in reverse topological order.
    let components = tarjan_scc(&graph);

    let mut component_of = vec![0; graph.node_count()];
    for (component, members) in components.iter().enumerate() {
        for member in members {
            component_of[member.index()] = component;
        }
    }

    for edge in graph.edge_references() {
        if *edge.weight() && component_of[edge.source().index()] == component_of[edge.target().index()] {
            let signature = graph[edge.target()].clone();
            log::info!(target: targets::STRATIFY, "Negative cycle through {signature}");
            return Err(err::StratifyError::UnstratifiedNegation(signature));
        }
    }

    // In topological order each component sits above its dependencies, one up for a negative edge.
    let mut component_stratum = vec![0_usize; components.len()];
    for component in (0..components.len()).rev() {
        let mut stratum = 0;
        for member in &components[component] {
            for edge in graph.edges_directed(*member, Direction::Incoming) {
                let source = component_of[edge.source().index()];
                if source == component {
                    continue;
                }
                let candidate = component_stratum[source] + *edge.weight() as usize;
                stratum = stratum.max(candidate);
            }
        }
        component_stratum[component] = stratum;
    }

    let mut strata = HashMap::default();
    for (signature, index) in nodes {
        strata.insert(signature, component_stratum[component_of[index.index()]]);
    }

    log::debug!(target: targets::STRATIFY, "Stratified {} predicates", strata.len());
    Ok(Stratification { strata })
}

#[cfg(test)]
mod stratify_tests {
    use super::*;
    use crate::structures::{clause::Clause, literal::Literal, term::Term};

    fn sig(symbol: &str, arity: usize) -> Signature {
        Signature {
            symbol: symbol.to_owned(),
            arity,
        }
    }

    #[test]
    fn negation_raises_stratum() {
        let mut db = ClauseDB::default();
        db.assert(Clause::fact(Literal::positive("p", vec![Term::Const("1".to_owned())])));
        db.assert(Clause::fact(Literal::positive("r", vec![Term::Const("1".to_owned())])));
        db.assert(Clause::rule(
            Literal::positive("q", vec![Term::Var("X".to_owned())]),
            vec![
                Literal::positive("p", vec![Term::Var("X".to_owned())]),
                Literal::negative("r", vec![Term::Var("X".to_owned())]),
            ],
        ));

        let stratification = stratify(&db).expect("stratifiable");
        assert_eq!(stratification.stratum(&sig("p", 1)), 0);
        assert_eq!(stratification.stratum(&sig("r", 1)), 0);
        assert_eq!(stratification.stratum(&sig("q", 1)), 1);
    }

    #[test]
    fn negative_cycle_rejected() {
        let mut db = ClauseDB::default();
        db.assert(Clause::rule(
            Literal::positive("win", vec![Term::Var("X".to_owned())]),
            vec![
                Literal::positive("move", vec![Term::Var("X".to_owned()), Term::Var("Y".to_owned())]),
                Literal::negative("win", vec![Term::Var("Y".to_owned())]),
            ],
        ));

        assert!(matches!(
            stratify(&db),
            Err(err::StratifyError::UnstratifiedNegation(_))
        ));
    }

    #[test]
    fn positive_recursion_shares_a_stratum() {
        let mut db = ClauseDB::default();
        db.assert(Clause::rule(
            Literal::positive("anc", vec![Term::Var("X".to_owned()), Term::Var("Y".to_owned())]),
            vec![Literal::positive("parent", vec![Term::Var("X".to_owned()), Term::Var("Y".to_owned())])],
        ));
        db.assert(Clause::rule(
            Literal::positive("anc", vec![Term::Var("X".to_owned()), Term::Var("Y".to_owned())]),
            vec![
                Literal::positive("parent", vec![Term::Var("X".to_owned()), Term::Var("Z".to_owned())]),
                Literal::positive("anc", vec![Term::Var("Z".to_owned()), Term::Var("Y".to_owned())]),
            ],
        ));

        let stratification = stratify(&db).expect("stratifiable");
        assert_eq!(stratification.stratum(&sig("anc", 2)), 0);
        assert_eq!(stratification.stratum(&sig("parent", 2)), 0);
    }
}
