use super::*;
use std::fmt;

/// Undirected graph stored as one neighbor vector per node
#[derive(Clone, Default)]
pub struct AdjArray {
    adj: Vec<Vec<Node>>,
    number_of_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.adj[u as usize]
    }
}

impl GraphNew for AdjArray {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.adj[u as usize].push(v);
        if u != v {
            self.adj[v as usize].push(u);
        }
        self.number_of_edges += 1;
    }
}

impl AdjArray {
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj[u as usize].contains(&v)
    }

    pub fn test_only_from(edges: impl Clone + IntoIterator<Item = impl Into<Edge>>) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| {
                let Edge(u, v) = e.into();
                u.max(v) + 1
            })
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort();
        write!(f, "AdjArray(n={}, {:?})", self.number_of_nodes(), edges)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn add_and_query() {
        let mut graph = AdjArray::new(4);
        graph.add_edges([(0, 1), (2, 1), (3, 3)]);

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degrees().collect_vec(), vec![1, 2, 1, 1]);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(0, 2));
        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(3, 3)]
        );
    }
}
