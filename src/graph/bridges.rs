use super::*;

pub trait Bridges {
    /// Returns all bridges, each normalized and reported once. Parallel edges are never
    /// bridges.
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G: AdjacencyList> Bridges for G {
    fn compute_bridges(&self) -> Vec<Edge> {
        BridgeSearch::new(self).compute()
    }
}

struct BridgeSearch<'a, G> {
    graph: &'a G,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge>,
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

/// Explicit DFS frame; recursion would overflow the stack on long paths
struct Frame {
    node: Node,
    parent: Option<Node>,
    next_neighbor: usize,
    skipped_parent: bool,
}

impl<'a, G: AdjacencyList> BridgeSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn is_visited(&self, u: Node) -> bool {
        self.nodes_info[u as usize].discovery > 0
    }

    fn discover(&mut self, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };
    }

    fn compute(mut self) -> Vec<Edge> {
        let graph = self.graph;
        for root in graph.vertices() {
            if graph.degree_of(root) == 0 || self.is_visited(root) {
                continue;
            }

            self.discover(root);
            let mut stack = vec![Frame {
                node: root,
                parent: None,
                next_neighbor: 0,
                skipped_parent: false,
            }];

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                let neighbors = graph.neighbors_of(u);

                if frame.next_neighbor == neighbors.len() {
                    let finished = stack.pop().map(|f| (f.node, f.parent));
                    if let Some((v, Some(parent))) = finished {
                        let info_v = self.nodes_info[v as usize];
                        self.nodes_info[parent as usize].update_low(info_v.low);
                        if info_v.low > self.nodes_info[parent as usize].discovery {
                            self.bridges.push(Edge(parent, v).normalized());
                        }
                    }
                    continue;
                }

                let v = neighbors[frame.next_neighbor];
                frame.next_neighbor += 1;

                if Some(v) == frame.parent && !frame.skipped_parent {
                    // only the tree edge itself is ignored, parallel copies count as back edges
                    frame.skipped_parent = true;
                    continue;
                }

                if self.is_visited(v) {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                } else {
                    self.discover(v);
                    stack.push(Frame {
                        node: v,
                        parent: Some(u),
                        next_neighbor: 0,
                        skipped_parent: false,
                    });
                }
            }
        }

        self.bridges
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn bridges_in_path() {
        for n in [0, 1, 5, 10, 15] {
            let mut graph = AdjArray::new(n);
            for u in 0..n.saturating_sub(1) {
                graph.add_edge(u, u + 1);
            }

            let mut bridges = graph.compute_bridges();
            bridges.sort();

            assert_eq!(bridges, graph.edges().sorted().collect_vec());
        }
    }

    #[test]
    fn bridge_in_example() {
        let mut graph = AdjArray::new(6);
        graph.add_edges([(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
    }

    #[test]
    fn parallel_edges_are_no_bridges() {
        let graph = AdjArray::test_only_from([(0, 1), (1, 0), (1, 2)]);
        assert_eq!(graph.compute_bridges(), vec![Edge(1, 2)]);
    }

    #[test]
    fn long_path_does_not_overflow() {
        let n = 200_000;
        let mut graph = AdjArray::new(n);
        for u in 0..n - 1 {
            graph.add_edge(u, u + 1);
        }
        assert_eq!(graph.compute_bridges().len(), (n - 1) as usize);
    }

    #[test]
    fn cross_with_removal() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x1234567);
        for _ in 0..100 {
            let n = rng.gen_range(2..12);
            let edges = (0..rng.gen_range(1..20))
                .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
                .filter(|(u, v)| u != v)
                .collect_vec();

            let mut graph = AdjArray::new(n);
            graph.add_edges(edges.iter());
            let (components, _) = graph.component_labels();

            let mut expected = Vec::new();
            for i in 0..edges.len() {
                let mut without = AdjArray::new(n);
                without.add_edges(
                    edges
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, e)| *e),
                );
                if without.component_labels().0 > components {
                    expected.push(Edge::from(edges[i]).normalized());
                }
            }
            expected.sort();

            let mut bridges = graph.compute_bridges();
            bridges.sort();
            assert_eq!(bridges, expected);
        }
    }
}
