use std::collections::VecDeque;

use super::*;

const NONE: Node = Node::MAX;

pub trait Matching {
    /// Maximum cardinality matching (Edmonds' blossom algorithm). Returns the mate of
    /// every node, `None` for unmatched nodes.
    fn maximum_matching(&self) -> Vec<Option<Node>>;

    fn maximum_matching_size(&self) -> NumNodes {
        (self
            .maximum_matching()
            .iter()
            .filter(|m| m.is_some())
            .count()
            / 2) as NumNodes
    }

    fn has_perfect_matching(&self) -> bool;
}

impl<G: AdjacencyList> Matching for G {
    fn maximum_matching(&self) -> Vec<Option<Node>> {
        let mut search = BlossomSearch::new(self);
        search.compute();
        search
            .mate
            .into_iter()
            .map(|m| (m != NONE).then_some(m))
            .collect()
    }

    fn has_perfect_matching(&self) -> bool {
        self.len() % 2 == 0 && 2 * self.maximum_matching_size() as usize == self.len()
    }
}

struct BlossomSearch<'a, G> {
    graph: &'a G,
    mate: Vec<Node>,
    parent: Vec<Node>,
    base: Vec<Node>,
    used: Vec<bool>,
    in_blossom: Vec<bool>,
    queue: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> BlossomSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            mate: vec![NONE; n],
            parent: vec![NONE; n],
            base: (0..n as Node).collect(),
            used: vec![false; n],
            in_blossom: vec![false; n],
            queue: VecDeque::new(),
        }
    }

    fn compute(&mut self) {
        let graph = self.graph;

        // greedy start; the augmentations fix any suboptimal choice
        for u in graph.vertices() {
            if self.mate[u as usize] != NONE {
                continue;
            }
            if let Some(&v) = graph
                .neighbors_of(u)
                .iter()
                .find(|&&v| v != u && self.mate[v as usize] == NONE)
            {
                self.mate[u as usize] = v;
                self.mate[v as usize] = u;
            }
        }

        for root in graph.vertices() {
            if self.mate[root as usize] != NONE {
                continue;
            }

            if let Some(end) = self.find_augmenting_path(root) {
                self.augment(end);
            }
        }
    }

    fn augment(&mut self, mut u: Node) {
        while u != NONE {
            let pv = self.parent[u as usize];
            let next = self.mate[pv as usize];
            self.mate[u as usize] = pv;
            self.mate[pv as usize] = u;
            u = next;
        }
    }

    /// Lowest common ancestor of two even nodes in the alternating forest (by bases)
    fn lowest_common_base(&self, a: Node, b: Node) -> Node {
        let mut on_path = vec![false; self.graph.len()];

        let mut a = a;
        loop {
            a = self.base[a as usize];
            on_path[a as usize] = true;
            if self.mate[a as usize] == NONE {
                break;
            }
            a = self.parent[self.mate[a as usize] as usize];
        }

        let mut b = b;
        loop {
            b = self.base[b as usize];
            if on_path[b as usize] {
                return b;
            }
            b = self.parent[self.mate[b as usize] as usize];
        }
    }

    fn mark_path(&mut self, mut v: Node, blossom_base: Node, mut child: Node) {
        while self.base[v as usize] != blossom_base {
            let mate = self.mate[v as usize];
            self.in_blossom[self.base[v as usize] as usize] = true;
            self.in_blossom[self.base[mate as usize] as usize] = true;
            self.parent[v as usize] = child;
            child = mate;
            v = self.parent[mate as usize];
        }
    }

    fn find_augmenting_path(&mut self, root: Node) -> Option<Node> {
        let graph = self.graph;
        self.used.fill(false);
        self.parent.fill(NONE);
        for (i, b) in self.base.iter_mut().enumerate() {
            *b = i as Node;
        }

        self.used[root as usize] = true;
        self.queue.clear();
        self.queue.push_back(root);

        while let Some(v) = self.queue.pop_front() {
            for &to in graph.neighbors_of(v) {
                if self.base[v as usize] == self.base[to as usize] || self.mate[v as usize] == to {
                    continue;
                }

                let to_is_even = to == root
                    || (self.mate[to as usize] != NONE
                        && self.parent[self.mate[to as usize] as usize] != NONE);

                if to_is_even {
                    let blossom_base = self.lowest_common_base(v, to);
                    self.in_blossom.fill(false);
                    self.mark_path(v, blossom_base, to);
                    self.mark_path(to, blossom_base, v);

                    for i in 0..graph.len() {
                        if self.in_blossom[self.base[i] as usize] {
                            self.base[i] = blossom_base;
                            if !self.used[i] {
                                self.used[i] = true;
                                self.queue.push_back(i as Node);
                            }
                        }
                    }
                } else if self.parent[to as usize] == NONE {
                    self.parent[to as usize] = v;
                    let mate = self.mate[to as usize];
                    if mate == NONE {
                        return Some(to);
                    }
                    self.used[mate as usize] = true;
                    self.queue.push_back(mate);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn brute_force(n: usize, edges: &[(Node, Node)]) -> usize {
        // maximum number of pairwise disjoint edges
        fn rec(i: usize, edges: &[(Node, Node)], used: &mut [bool]) -> usize {
            if i == edges.len() {
                return 0;
            }
            let mut best = rec(i + 1, edges, used);
            let (u, v) = edges[i];
            if u != v && !used[u as usize] && !used[v as usize] {
                used[u as usize] = true;
                used[v as usize] = true;
                best = best.max(1 + rec(i + 1, edges, used));
                used[u as usize] = false;
                used[v as usize] = false;
            }
            best
        }
        rec(0, edges, &mut vec![false; n])
    }

    #[test]
    fn odd_cycle_with_tail() {
        // blossom 0-1-2 with stems that force the greedy start to be repaired
        let graph = AdjArray::test_only_from([(0, 1), (1, 2), (2, 0), (2, 3), (0, 4), (3, 5)]);
        let mates = graph.maximum_matching();
        assert_eq!(mates.iter().flatten().count(), 6);
        for (u, m) in mates.iter().enumerate() {
            if let Some(v) = m {
                assert_eq!(mates[*v as usize], Some(u as Node));
                assert!(graph.has_edge(u as Node, *v));
            }
        }
        assert!(graph.has_perfect_matching());
    }

    #[test]
    fn cross_with_brute_force() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xb10550);
        for _ in 0..200 {
            let n = rng.gen_range(1..11);
            let edges = (0..rng.gen_range(0..16))
                .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
                .filter(|(u, v)| u != v)
                .collect_vec();

            let mut graph = AdjArray::new(n);
            graph.add_edges(edges.iter());

            assert_eq!(
                graph.maximum_matching_size() as usize,
                brute_force(n as usize, &edges)
            );
        }
    }
}
