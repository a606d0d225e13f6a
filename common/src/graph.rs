use std::ops::Index;

/// Handle of a state stored in a [`StateGraph`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node<S> {
    state: S,
    predecessors: Vec<StateId>,
}

/// Arena of states with their predecessor edges.
///
/// Edges always point from a state with more pegs to one with fewer pegs,
/// so the graph is acyclic. Nothing is ever removed.
#[derive(Clone, Debug)]
pub struct StateGraph<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for StateGraph<S> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S> StateGraph<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: S) -> StateId {
        self.nodes.push(Node {
            state,
            predecessors: Vec::new(),
        });
        StateId(self.nodes.len() - 1)
    }

    pub fn state(&self, id: StateId) -> &S {
        &self.nodes[id.0].state
    }

    pub fn predecessors(&self, id: StateId) -> &[StateId] {
        &self.nodes[id.0].predecessors
    }

    /// Record `predecessor` as a way into `id`. Returns false if the edge was
    /// already known; repeated edges are not stored again, so several
    /// equivalent moves from one state into the same class leave a single
    /// edge and do not multiply the paths through it.
    pub fn add_predecessor(&mut self, id: StateId, predecessor: StateId) -> bool {
        let predecessors = &mut self.nodes[id.0].predecessors;
        if predecessors.contains(&predecessor) {
            return false;
        }
        predecessors.push(predecessor);
        true
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S> Index<StateId> for StateGraph<S> {
    type Output = S;

    fn index(&self, id: StateId) -> &S {
        self.state(id)
    }
}
