//! Boolean formula arena and CNF transform
//!
//! Formulas are trees of expression nodes stored in an arena and referenced
//! by index; the tree is acyclic and built bottom-up in one pass. Cardinality
//! predicates are expanded into plain and/or structure by direct subset
//! enumeration, which is small at this grid size (at most 8 variables per
//! neighborhood, 5 per line).

use super::variables::VariableManager;
use itertools::Itertools;

/// Index of a node in a [`Formula`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    True,
    False,
    Var(i32),
    Not(NodeId),
    And(Vec<NodeId>),
    Or(Vec<NodeId>),
}

/// A CNF clause: disjunction of literals, positive for a variable and
/// negative for its negation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals)
    pub fn binary(first: i32, second: i32) -> Self {
        Self {
            literals: vec![first, second],
        }
    }

    /// Check if the clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if the clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// Arena of boolean expression nodes
#[derive(Debug, Default)]
pub struct Formula {
    nodes: Vec<Node>,
}

impl Formula {
    /// Create an empty formula arena
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Number of nodes in the arena
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The constant true formula
    pub fn always_true(&mut self) -> NodeId {
        self.push(Node::True)
    }

    /// The constant false formula
    pub fn always_false(&mut self) -> NodeId {
        self.push(Node::False)
    }

    /// A leaf referencing a decision variable
    pub fn var(&mut self, variable: i32) -> NodeId {
        self.push(Node::Var(variable))
    }

    /// Negation, with double negation and constants folded
    pub fn not(&mut self, child: NodeId) -> NodeId {
        match self.nodes[child.0] {
            Node::True => self.always_false(),
            Node::False => self.always_true(),
            Node::Not(inner) => inner,
            _ => self.push(Node::Not(child)),
        }
    }

    /// Conjunction; constant children are folded away
    pub fn and(&mut self, children: Vec<NodeId>) -> NodeId {
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            match self.nodes[child.0] {
                Node::True => {}
                Node::False => return self.always_false(),
                _ => kept.push(child),
            }
        }
        match kept.len() {
            0 => self.always_true(),
            1 => kept[0],
            _ => self.push(Node::And(kept)),
        }
    }

    /// Disjunction; constant children are folded away
    pub fn or(&mut self, children: Vec<NodeId>) -> NodeId {
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            match self.nodes[child.0] {
                Node::False => {}
                Node::True => return self.always_true(),
                _ => kept.push(child),
            }
        }
        match kept.len() {
            0 => self.always_false(),
            1 => kept[0],
            _ => self.push(Node::Or(kept)),
        }
    }

    /// Implication `antecedent -> consequent`
    pub fn implies(&mut self, antecedent: NodeId, consequent: NodeId) -> NodeId {
        let negated = self.not(antecedent);
        self.or(vec![negated, consequent])
    }

    /// Exactly `count` of `variables` are true: a disjunction over all
    /// count-subsets, each fixing the full sign pattern of the variables.
    ///
    /// A count larger than the variable set yields no subsets and therefore
    /// the constant false, which is how out-of-range disjuncts of the parity
    /// rules fall away.
    pub fn exactly(&mut self, variables: &[i32], count: usize) -> NodeId {
        let mut disjuncts = Vec::new();
        for chosen in (0..variables.len()).combinations(count) {
            let mut conjuncts = Vec::with_capacity(variables.len());
            for (index, &variable) in variables.iter().enumerate() {
                let leaf = self.var(variable);
                if chosen.contains(&index) {
                    conjuncts.push(leaf);
                } else {
                    let negated = self.not(leaf);
                    conjuncts.push(negated);
                }
            }
            let conjunct = self.and(conjuncts);
            disjuncts.push(conjunct);
        }
        self.or(disjuncts)
    }

    /// At most `bound` of `variables` are true: for every (bound+1)-subset,
    /// at least one member is false. A bound at or above the set size is the
    /// constant true.
    pub fn at_most(&mut self, variables: &[i32], bound: usize) -> NodeId {
        let mut conjuncts = Vec::new();
        for chosen in (0..variables.len()).combinations(bound + 1) {
            let mut disjuncts = Vec::with_capacity(bound + 1);
            for index in chosen {
                let leaf = self.var(variables[index]);
                let negated = self.not(leaf);
                disjuncts.push(negated);
            }
            let disjunct = self.or(disjuncts);
            conjuncts.push(disjunct);
        }
        self.and(conjuncts)
    }

    /// Tseitin transform: emit clauses asserting that `root` holds.
    ///
    /// Each internal node gets an auxiliary variable constrained to be
    /// equivalent to its subformula; the root's literal is asserted as a unit
    /// clause.
    pub fn to_clauses(&self, root: NodeId, variables: &mut VariableManager) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let mut memo: Vec<Option<i32>> = vec![None; self.nodes.len()];
        let mut constant = None;

        let root_literal = self.literal(root, variables, &mut clauses, &mut memo, &mut constant);
        clauses.push(Clause::unit(root_literal));
        clauses
    }

    fn literal(
        &self,
        id: NodeId,
        variables: &mut VariableManager,
        clauses: &mut Vec<Clause>,
        memo: &mut [Option<i32>],
        constant: &mut Option<i32>,
    ) -> i32 {
        if let Some(literal) = memo[id.0] {
            return literal;
        }

        let literal = match &self.nodes[id.0] {
            Node::Var(variable) => *variable,
            Node::True => Self::constant_literal(variables, clauses, constant),
            Node::False => -Self::constant_literal(variables, clauses, constant),
            Node::Not(child) => -self.literal(*child, variables, clauses, memo, constant),
            Node::And(children) => {
                let mut child_literals = Vec::with_capacity(children.len());
                for &child in children {
                    child_literals.push(self.literal(child, variables, clauses, memo, constant));
                }

                let gate = variables.fresh_variable();
                for &child_literal in &child_literals {
                    clauses.push(Clause::binary(-gate, child_literal));
                }
                let mut reverse = Vec::with_capacity(child_literals.len() + 1);
                reverse.push(gate);
                reverse.extend(child_literals.iter().map(|&literal| -literal));
                clauses.push(Clause::new(reverse));
                gate
            }
            Node::Or(children) => {
                let mut child_literals = Vec::with_capacity(children.len());
                for &child in children {
                    child_literals.push(self.literal(child, variables, clauses, memo, constant));
                }

                let gate = variables.fresh_variable();
                for &child_literal in &child_literals {
                    clauses.push(Clause::binary(-child_literal, gate));
                }
                let mut forward = Vec::with_capacity(child_literals.len() + 1);
                forward.push(-gate);
                forward.extend(child_literals.iter().copied());
                clauses.push(Clause::new(forward));
                gate
            }
        };

        memo[id.0] = Some(literal);
        literal
    }

    /// Variable pinned true, standing in for constant nodes that survive to
    /// clause emission
    fn constant_literal(
        variables: &mut VariableManager,
        clauses: &mut Vec<Clause>,
        constant: &mut Option<i32>,
    ) -> i32 {
        if let Some(variable) = *constant {
            return variable;
        }
        let variable = variables.fresh_variable();
        clauses.push(Clause::unit(variable));
        *constant = Some(variable);
        variable
    }
}
