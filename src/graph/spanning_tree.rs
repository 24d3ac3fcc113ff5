use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;

use super::*;

pub trait SpanningTree<W> {
    /// Kruskal: a minimum spanning forest as list of edges
    fn minimum_spanning_forest(&self) -> Vec<WeightedEdge<W>>;

    /// Prim from `root`: the tree edges of the minimum spanning tree of `root`'s component
    /// in the order they are attached
    fn prim(&self, root: Node) -> Vec<WeightedEdge<W>>;
}

impl<W: Copy + Ord> SpanningTree<W> for WeightedGraph<W> {
    fn minimum_spanning_forest(&self) -> Vec<WeightedEdge<W>> {
        let mut uf = UnionFind::new(self.number_of_nodes());
        self.weighted_edges()
            .iter()
            .copied()
            .sorted()
            .filter(|e| uf.union(e.1, e.2))
            .collect()
    }

    fn prim(&self, root: Node) -> Vec<WeightedEdge<W>> {
        let mut in_tree = vec![false; self.len()];
        let mut tree = Vec::new();
        let mut heap = BinaryHeap::new();

        in_tree[root as usize] = true;
        for &(v, w) in self.arcs_of(root) {
            heap.push(Reverse(WeightedEdge(w, root, v)));
        }

        while let Some(Reverse(edge)) = heap.pop() {
            let v = edge.2;
            if in_tree[v as usize] {
                continue;
            }
            in_tree[v as usize] = true;
            tree.push(edge);

            for &(x, w) in self.arcs_of(v) {
                if !in_tree[x as usize] {
                    heap.push(Reverse(WeightedEdge(w, v, x)));
                }
            }
        }

        tree
    }
}

pub type Weight = u64;

pub trait SecondBestSpanningTree {
    /// Weight of the cheapest spanning tree that differs from one fixed minimum spanning
    /// tree in at least one edge. Equals the minimum weight if the minimum spanning tree
    /// is not unique. Returns `None` if the graph is disconnected or every spanning tree
    /// is minimal (no non-tree edge exists).
    fn second_best_spanning_tree_weight(&self) -> Option<Weight>;
}

impl SecondBestSpanningTree for WeightedGraph<Weight> {
    fn second_best_spanning_tree_weight(&self) -> Option<Weight> {
        let n = self.len();
        let forest = self.minimum_spanning_forest();
        if n == 0 || forest.len() + 1 != n {
            return None;
        }

        let mst_weight: Weight = forest.iter().map(|e| e.0).sum();
        let mut tree = WeightedGraph::new(n as NumNodes);
        for &WeightedEdge(w, u, v) in &forest {
            tree.add_edge(u, v, w);
        }

        // heaviest tree edge on the path between all pairs, one traversal per root
        let mut heaviest = vec![vec![0; n]; n];
        for root in tree.vertices() {
            let row = &mut heaviest[root as usize];
            let mut stack = vec![(root, root)];
            while let Some((u, parent)) = stack.pop() {
                for &(v, w) in tree.arcs_of(u) {
                    if v != parent {
                        row[v as usize] = row[u as usize].max(w);
                        stack.push((v, u));
                    }
                }
            }
        }

        let mut used = vec![false; self.weighted_edges().len()];
        let mut tree_edges: Vec<_> = forest.iter().map(|e| e.normalized()).collect();
        tree_edges.sort();
        for (i, e) in self.weighted_edges().iter().enumerate() {
            if let Ok(pos) = tree_edges.binary_search(&e.normalized()) {
                // parallel copies of a tree edge are non-tree edges
                tree_edges.remove(pos);
                used[i] = true;
            }
        }

        self.weighted_edges()
            .iter()
            .zip(used)
            .filter(|&(e, used)| !used && !e.is_loop())
            .map(|(&WeightedEdge(w, u, v), _)| mst_weight + w - heaviest[u as usize][v as usize])
            .min()
    }
}
