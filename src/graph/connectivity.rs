use super::*;

pub trait Connectivity {
    /// Labels each node with the index of its connected component. Components are
    /// numbered in order of their smallest node. Returns the number of components
    /// together with the labels.
    fn component_labels(&self) -> (NumNodes, Vec<NumNodes>);
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn component_labels(&self) -> (NumNodes, Vec<NumNodes>) {
        let mut labels = vec![0; self.len()];
        if self.is_empty() {
            return (0, labels);
        }

        let mut bfs = self.bfs(0);
        let mut class = 0;
        loop {
            for u in bfs.by_ref() {
                labels[u as usize] = class;
            }
            class += 1;

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        (class, labels)
    }
}
