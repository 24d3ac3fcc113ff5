use super::*;

/// Adjacency list with a weight on every arc. Undirected edges are stored as two arcs;
/// the list of inserted edges is kept for algorithms working on edge lists (Kruskal).
#[derive(Clone, Debug)]
pub struct WeightedGraph<W> {
    adj: Vec<Vec<(Node, W)>>,
    edges: Vec<WeightedEdge<W>>,
}

impl<W> GraphNodeOrder for WeightedGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl<W> GraphEdgeOrder for WeightedGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<W: Copy> WeightedGraph<W> {
    pub fn new(n: NumNodes) -> Self {
        Self {
            adj: (0..n).map(|_| Vec::new()).collect(),
            edges: Vec::new(),
        }
    }

    /// Appends an isolated node and returns it
    pub fn add_node(&mut self) -> Node {
        self.adj.push(Vec::new());
        (self.adj.len() - 1) as Node
    }

    /// Adds the undirected edge *{u,v}* with weight `w`
    pub fn add_edge(&mut self, u: Node, v: Node, w: W) {
        self.adj[u as usize].push((v, w));
        if u != v {
            self.adj[v as usize].push((u, w));
        }
        self.edges.push(WeightedEdge(w, u, v));
    }

    /// Adds the directed arc *(u,v)* with weight `w`
    pub fn add_arc(&mut self, u: Node, v: Node, w: W) {
        self.adj[u as usize].push((v, w));
        self.edges.push(WeightedEdge(w, u, v));
    }

    /// Out-going arcs of `u` with their weights
    pub fn arcs_of(&self, u: Node) -> &[(Node, W)] {
        &self.adj[u as usize]
    }

    /// All edges/arcs in insertion order
    pub fn weighted_edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// Returns the graph with every arc reversed. Only meaningful for graphs built with
    /// [`WeightedGraph::add_arc`].
    pub fn reversed(&self) -> Self {
        let mut result = Self::new(self.number_of_nodes());
        for &WeightedEdge(w, u, v) in &self.edges {
            result.add_arc(v, u, w);
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arcs_and_edges() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 1, 5u64);
        graph.add_arc(1, 2, 7);

        assert_eq!(graph.arcs_of(0), &[(1, 5)]);
        assert_eq!(graph.arcs_of(1), &[(0, 5), (2, 7)]);
        assert!(graph.arcs_of(2).is_empty());
        assert_eq!(graph.number_of_edges(), 2);

        let rev = graph.reversed();
        assert_eq!(rev.arcs_of(2), &[(1, 7)]);

        let x = graph.add_node();
        assert_eq!(x, 3);
        assert_eq!(graph.number_of_nodes(), 4);
    }
}
