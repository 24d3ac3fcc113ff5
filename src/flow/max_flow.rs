use std::collections::VecDeque;

use log::trace;

use super::*;
use crate::graph::{Node, NumNodes};

#[derive(Clone, Debug)]
struct Arc {
    to: Node,
    residual: Capacity,
}

/// Directed network with integral capacities; maximum flows via Dinic's algorithm
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork {
    adj: Vec<Vec<usize>>,
    arcs: Vec<Arc>,
    capacity: Vec<Capacity>,
}

impl FlowNetwork {
    pub fn new(n: NumNodes) -> Self {
        Self {
            adj: vec![Vec::new(); n as usize],
            arcs: Vec::new(),
            capacity: Vec::new(),
        }
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    /// Appends a node and returns it
    pub fn add_node(&mut self) -> Node {
        self.adj.push(Vec::new());
        (self.adj.len() - 1) as Node
    }

    /// Adds the arc *(u,v)* with the given capacity together with its residual reverse
    pub fn add_edge(&mut self, u: Node, v: Node, capacity: Capacity) -> ArcId {
        debug_assert!(capacity >= 0);
        let id = self.arcs.len();
        self.arcs.push(Arc {
            to: v,
            residual: capacity,
        });
        self.arcs.push(Arc { to: u, residual: 0 });
        self.capacity.push(capacity);
        self.adj[u as usize].push(id);
        self.adj[v as usize].push(id + 1);
        ArcId(id)
    }

    /// Flow currently routed over the edge
    pub fn flow_on(&self, arc: ArcId) -> Capacity {
        self.arcs[arc.reverse()].residual
    }

    pub fn capacity_of(&self, arc: ArcId) -> Capacity {
        self.capacity[arc.0 / 2]
    }

    /// Changes the capacity of an edge; only valid while no flow is routed
    pub fn set_capacity(&mut self, arc: ArcId, capacity: Capacity) {
        debug_assert_eq!(self.flow_on(arc), 0);
        self.capacity[arc.0 / 2] = capacity;
        self.arcs[arc.0].residual = capacity;
    }

    /// Removes all flow
    pub fn reset_flow(&mut self) {
        for (i, &c) in self.capacity.iter().enumerate() {
            self.arcs[2 * i].residual = c;
            self.arcs[2 * i + 1].residual = 0;
        }
    }

    fn compute_levels(&self, s: Node, t: Node, level: &mut [u32]) -> bool {
        level.fill(u32::MAX);
        level[s as usize] = 0;
        let mut queue = VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            for &a in &self.adj[u as usize] {
                let arc = &self.arcs[a];
                if arc.residual > 0 && level[arc.to as usize] == u32::MAX {
                    level[arc.to as usize] = level[u as usize] + 1;
                    queue.push_back(arc.to);
                }
            }
        }
        level[t as usize] != u32::MAX
    }

    /// Augments along s-t paths of the level graph until it is blocked
    fn blocking_flow(&mut self, s: Node, t: Node, level: &mut [u32]) -> Capacity {
        let mut next_arc = vec![0; self.adj.len()];
        let mut path: Vec<usize> = Vec::new();
        let mut total = 0;
        let mut u = s;

        loop {
            if u == t {
                let bottleneck = path
                    .iter()
                    .map(|&a| self.arcs[a].residual)
                    .min()
                    .unwrap_or(0);
                for &a in &path {
                    self.arcs[a].residual -= bottleneck;
                    self.arcs[a ^ 1].residual += bottleneck;
                }
                total += bottleneck;
                path.clear();
                u = s;
                continue;
            }

            let adj = &self.adj[u as usize];
            while next_arc[u as usize] < adj.len() {
                let arc = &self.arcs[adj[next_arc[u as usize]]];
                if arc.residual > 0 && level[arc.to as usize] == level[u as usize] + 1 {
                    break;
                }
                next_arc[u as usize] += 1;
            }

            if let Some(&a) = adj.get(next_arc[u as usize]) {
                path.push(a);
                u = self.arcs[a].to;
                continue;
            }

            // dead end: retreat and never enter `u` again in this phase
            level[u as usize] = u32::MAX;
            match path.pop() {
                None => return total,
                Some(a) => {
                    u = self.arcs[a ^ 1].to;
                    next_arc[u as usize] += 1;
                }
            }
        }
    }

    /// Maximum flow from `s` to `t` on top of the flow already routed
    pub fn max_flow(&mut self, s: Node, t: Node) -> Capacity {
        if s == t {
            return 0;
        }

        let mut level = vec![0; self.adj.len()];
        let mut flow = 0;
        let mut phases = 0;
        while self.compute_levels(s, t, &mut level) {
            flow += self.blocking_flow(s, t, &mut level);
            phases += 1;
        }

        trace!("max flow {flow} from {s} to {t} after {phases} phases");
        flow
    }

    /// Nodes reachable from `s` in the residual network. After a maximum flow this is
    /// the source side of a minimum cut.
    pub fn source_side(&self, s: Node) -> Vec<bool> {
        let mut visited = vec![false; self.adj.len()];
        visited[s as usize] = true;
        let mut queue = VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            for &a in &self.adj[u as usize] {
                let arc = &self.arcs[a];
                if arc.residual > 0 && !visited[arc.to as usize] {
                    visited[arc.to as usize] = true;
                    queue.push_back(arc.to);
                }
            }
        }
        visited
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn textbook_example() {
        let mut net = FlowNetwork::new(6);
        net.add_edge(0, 1, 16);
        net.add_edge(0, 2, 13);
        net.add_edge(1, 2, 10);
        net.add_edge(2, 1, 4);
        let a13 = net.add_edge(1, 3, 12);
        net.add_edge(2, 4, 14);
        net.add_edge(3, 2, 9);
        net.add_edge(3, 5, 20);
        net.add_edge(4, 3, 7);
        net.add_edge(4, 5, 4);

        assert_eq!(net.max_flow(0, 5), 23);
        assert_eq!(net.flow_on(a13), 12);

        let side = net.source_side(0);
        assert_eq!(side, vec![true, true, true, false, true, false]);

        net.reset_flow();
        net.set_capacity(a13, 0);
        assert_eq!(net.max_flow(0, 5), 11);
    }

    fn brute_force_min_cut(n: usize, edges: &[(Node, Node, Capacity)]) -> Capacity {
        (0..1u32 << n)
            .filter(|mask| mask & 1 == 1 && mask & (1 << (n - 1)) == 0)
            .map(|mask| {
                edges
                    .iter()
                    .filter(|&&(u, v, _)| mask & (1 << u) != 0 && mask & (1 << v) == 0)
                    .map(|&(_, _, c)| c)
                    .sum()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn cross_with_min_cut() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xf10f);
        for _ in 0..200 {
            let n = rng.gen_range(2..9usize);
            let edges: Vec<_> = (0..rng.gen_range(0..25))
                .map(|_| {
                    (
                        rng.gen_range(0..n) as Node,
                        rng.gen_range(0..n) as Node,
                        rng.gen_range(0..20),
                    )
                })
                .collect();

            let mut net = FlowNetwork::new(n as NumNodes);
            for &(u, v, c) in &edges {
                net.add_edge(u, v, c);
            }

            let flow = net.max_flow(0, (n - 1) as Node);
            assert_eq!(flow, brute_force_min_cut(n, &edges));

            let side = net.source_side(0);
            let cut: Capacity = edges
                .iter()
                .filter(|&&(u, v, _)| side[u as usize] && !side[v as usize])
                .map(|&(_, _, c)| c)
                .sum();
            assert_eq!(cut, flow);
        }
    }
}
