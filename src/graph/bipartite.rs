use super::*;

pub trait BipartiteTest {
    fn is_bipartition(&self, candidate: &[bool]) -> bool;

    /// Returns a side for every node such that all edges cross sides, or `None` if the
    /// graph contains an odd cycle
    fn compute_bipartition(&self) -> Option<Vec<bool>>;

    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, candidate: &[bool]) -> bool {
        self.edges()
            .all(|Edge(u, v)| candidate[u as usize] != candidate[v as usize])
    }

    fn compute_bipartition(&self) -> Option<Vec<bool>> {
        let candidate = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&candidate).then_some(candidate)
    }
}

// Compute a bipartition of `graph` if `graph` is bipartite; otherwise an arbitrary
// partition is returned
fn propose_possibly_illegal_bipartition<G: AdjacencyList>(graph: &G) -> Vec<bool> {
    let mut bipartition = vec![false; graph.len()];
    if graph.is_empty() {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            bipartition[node as usize] = !bipartition[pred as usize];
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = AdjArray::new(n);
            for u in 0..n - 1 {
                graph.add_edge(u, u + 1);
            }

            assert!(graph.compute_bipartition().is_some());

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge(1 - (n % 2), n - 1);
                assert!(graph.compute_bipartition().is_none());
            }
        }
    }

    #[test]
    fn disconnected() {
        let graph = AdjArray::test_only_from([(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert!(!graph.is_bipartite());

        let graph = AdjArray::test_only_from([(0, 1), (2, 3), (3, 4)]);
        let sides = graph.compute_bipartition().unwrap();
        assert_ne!(sides[2], sides[3]);
        assert_eq!(sides[2], sides[4]);
    }
}
