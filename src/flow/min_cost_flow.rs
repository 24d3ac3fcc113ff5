use log::trace;

use super::*;
use crate::{
    graph::{Node, NumNodes},
    utils::radix::DistanceHeap,
};

#[derive(Clone, Debug)]
struct Arc {
    to: Node,
    residual: Capacity,
    cost: Cost,
}

/// Directed network with capacities and per-unit costs. Minimum cost maximum flows are
/// computed by successive shortest paths with Johnson potentials.
#[derive(Clone, Debug, Default)]
pub struct CostFlowNetwork {
    adj: Vec<Vec<usize>>,
    arcs: Vec<Arc>,
    capacity: Vec<Capacity>,
}

impl CostFlowNetwork {
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

    pub fn add_node(&mut self) -> Node {
        self.adj.push(Vec::new());
        (self.adj.len() - 1) as Node
    }

    pub fn add_edge(&mut self, u: Node, v: Node, capacity: Capacity, cost: Cost) -> ArcId {
        debug_assert!(capacity >= 0);
        let id = self.arcs.len();
        self.arcs.push(Arc {
            to: v,
            residual: capacity,
            cost,
        });
        self.arcs.push(Arc {
            to: u,
            residual: 0,
            cost: -cost,
        });
        self.capacity.push(capacity);
        self.adj[u as usize].push(id);
        self.adj[v as usize].push(id + 1);
        ArcId(id)
    }

    pub fn flow_on(&self, arc: ArcId) -> Capacity {
        self.arcs[arc.reverse()].residual
    }

    /// Changes the capacity of an edge; only valid while no flow is routed
    pub fn set_capacity(&mut self, arc: ArcId, capacity: Capacity) {
        debug_assert_eq!(self.flow_on(arc), 0);
        self.capacity[arc.0 / 2] = capacity;
        self.arcs[arc.0].residual = capacity;
    }

    pub fn reset_flow(&mut self) {
        for (i, &c) in self.capacity.iter().enumerate() {
            self.arcs[2 * i].residual = c;
            self.arcs[2 * i + 1].residual = 0;
        }
    }

    /// Total cost of the flow currently routed
    pub fn flow_cost(&self) -> Cost {
        self.arcs
            .iter()
            .step_by(2)
            .zip(self.capacity.iter())
            .map(|(arc, &c)| (c - arc.residual) * arc.cost)
            .sum()
    }

    /// Bellman-Ford distances from `s` over residual arcs; only needed if some arc has a
    /// negative cost. Unreachable nodes get potential 0.
    fn initial_potentials(&self, s: Node) -> Vec<Cost> {
        let n = self.adj.len();
        if self.arcs.iter().all(|a| a.residual == 0 || a.cost >= 0) {
            return vec![0; n];
        }

        let mut dist: Vec<Option<Cost>> = vec![None; n];
        dist[s as usize] = Some(0);
        for _ in 0..n {
            let mut changed = false;
            for u in 0..n {
                let Some(du) = dist[u] else { continue };
                for &a in &self.adj[u] {
                    let arc = &self.arcs[a];
                    if arc.residual > 0 && dist[arc.to as usize].is_none_or(|d| du + arc.cost < d) {
                        dist[arc.to as usize] = Some(du + arc.cost);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        dist.into_iter().map(|d| d.unwrap_or(0)).collect()
    }

    /// Routes a minimum cost flow of value at most `limit` (maximum flow if `None`) from
    /// `s` to `t`. Returns the flow value and its cost. Negative cycles are not supported.
    pub fn min_cost_flow(&mut self, s: Node, t: Node, limit: Option<Capacity>) -> (Capacity, Cost) {
        let n = self.adj.len();
        let mut potential = self.initial_potentials(s);
        let mut limit = limit.unwrap_or(Capacity::MAX);
        let (mut flow, mut cost) = (0, 0);
        let mut augmentations = 0;

        let mut heap = DistanceHeap::new(n);
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut pred_arc = vec![usize::MAX; n];

        while limit > 0 {
            heap.clear();
            dist.fill(None);
            dist[s as usize] = Some(0);
            heap.push_or_decrease(0, s);
            while let Some((d, u)) = heap.pop() {
                if dist[u as usize] != Some(d) {
                    continue;
                }
                for &a in &self.adj[u as usize] {
                    let arc = &self.arcs[a];
                    if arc.residual == 0 {
                        continue;
                    }
                    let reduced = arc.cost + potential[u as usize] - potential[arc.to as usize];
                    debug_assert!(reduced >= 0);
                    let candidate = d + reduced as u64;
                    if dist[arc.to as usize].is_none_or(|old| candidate < old) {
                        dist[arc.to as usize] = Some(candidate);
                        pred_arc[arc.to as usize] = a;
                        heap.push_or_decrease(candidate, arc.to);
                    }
                }
            }

            if dist[t as usize].is_none() {
                break;
            }

            for (p, d) in potential.iter_mut().zip(&dist) {
                if let Some(d) = d {
                    *p += *d as Cost;
                }
            }

            let mut bottleneck = limit;
            let mut v = t;
            while v != s {
                let a = pred_arc[v as usize];
                bottleneck = bottleneck.min(self.arcs[a].residual);
                v = self.arcs[a ^ 1].to;
            }

            let mut v = t;
            while v != s {
                let a = pred_arc[v as usize];
                self.arcs[a].residual -= bottleneck;
                self.arcs[a ^ 1].residual += bottleneck;
                cost += bottleneck * self.arcs[a].cost;
                v = self.arcs[a ^ 1].to;
            }

            flow += bottleneck;
            limit -= bottleneck;
            augmentations += 1;
        }

        trace!("min cost flow {flow} with cost {cost} after {augmentations} augmentations");
        (flow, cost)
    }

    pub fn min_cost_max_flow(&mut self, s: Node, t: Node) -> (Capacity, Cost) {
        self.min_cost_flow(s, t, None)
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::flow::FlowNetwork;

    #[test]
    fn prefers_cheap_paths() {
        let mut net = CostFlowNetwork::new(4);
        let cheap = net.add_edge(0, 1, 2, 1);
        net.add_edge(1, 3, 2, 1);
        net.add_edge(0, 2, 2, 5);
        net.add_edge(2, 3, 2, 5);
        net.add_edge(1, 2, 1, 0);

        assert_eq!(net.min_cost_flow(0, 3, Some(1)), (1, 2));
        net.reset_flow();
        assert_eq!(net.min_cost_max_flow(0, 3), (4, 24));
        assert_eq!(net.flow_on(cheap), 2);
        assert_eq!(net.flow_cost(), 24);
    }

    #[test]
    fn negative_costs() {
        let mut net = CostFlowNetwork::new(3);
        net.add_edge(0, 1, 1, -5);
        net.add_edge(1, 2, 1, 2);
        net.add_edge(0, 2, 1, 0);
        assert_eq!(net.min_cost_max_flow(0, 2), (2, -3));
    }

    /// Assignment problems of size k: compare against all permutations
    #[test]
    fn cross_with_assignment() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xc057);
        for _ in 0..50 {
            let k = rng.gen_range(1..6usize);
            let weights: Vec<Vec<Cost>> = (0..k)
                .map(|_| (0..k).map(|_| rng.gen_range(0..30)).collect())
                .collect();

            let mut net = CostFlowNetwork::new((2 * k + 2) as NumNodes);
            let (s, t) = ((2 * k) as Node, (2 * k + 1) as Node);
            for i in 0..k {
                net.add_edge(s, i as Node, 1, 0);
                net.add_edge((k + i) as Node, t, 1, 0);
                for j in 0..k {
                    net.add_edge(i as Node, (k + j) as Node, 1, weights[i][j]);
                }
            }

            let mut perm: Vec<usize> = (0..k).collect();
            let mut best = Cost::MAX;
            permute(&mut perm, 0, &mut |p| {
                best = best.min((0..k).map(|i| weights[i][p[i]]).sum());
            });

            assert_eq!(net.min_cost_max_flow(s, t), (k as Capacity, best));

            let mut plain = FlowNetwork::new((2 * k + 2) as NumNodes);
            for i in 0..k {
                plain.add_edge(s, i as Node, 1);
                plain.add_edge((k + i) as Node, t, 1);
                for j in 0..k {
                    plain.add_edge(i as Node, (k + j) as Node, 1);
                }
            }
            assert_eq!(plain.max_flow(s, t), k as Capacity);
        }
    }

    fn permute(perm: &mut Vec<usize>, i: usize, visit: &mut impl FnMut(&[usize])) {
        if i == perm.len() {
            visit(perm);
            return;
        }
        for j in i..perm.len() {
            perm.swap(i, j);
            permute(perm, i + 1, visit);
            perm.swap(i, j);
        }
    }
}
