use std::{cmp::Ordering, collections::BinaryHeap};

use super::*;
use crate::utils::radix::DistanceHeap;

pub type Distance = u64;

pub trait ShortestPaths {
    /// Single-source shortest path lengths; `None` for unreachable nodes
    fn dijkstra(&self, source: Node) -> Vec<Option<Distance>> {
        self.dijkstra_with_predecessors([source]).0
    }

    /// Shortest distance from the closest of several sources
    fn dijkstra_multi(&self, sources: impl IntoIterator<Item = Node>) -> Vec<Option<Distance>> {
        self.dijkstra_with_predecessors(sources).0
    }

    /// Distances and the predecessor of every node on one shortest path tree
    fn dijkstra_with_predecessors(
        &self,
        sources: impl IntoIterator<Item = Node>,
    ) -> (Vec<Option<Distance>>, Vec<Option<Node>>);
}

impl ShortestPaths for WeightedGraph<Distance> {
    fn dijkstra_with_predecessors(
        &self,
        sources: impl IntoIterator<Item = Node>,
    ) -> (Vec<Option<Distance>>, Vec<Option<Node>>) {
        let n = self.len();
        let mut dist: Vec<Option<Distance>> = vec![None; n];
        let mut pred = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = DistanceHeap::new(n);

        for s in sources {
            dist[s as usize] = Some(0);
            heap.push_or_decrease(0, s);
        }

        while let Some((d, u)) = heap.pop() {
            settled[u as usize] = true;
            for &(v, w) in self.arcs_of(u) {
                if settled[v as usize] {
                    continue;
                }
                let candidate = d + w;
                if dist[v as usize].is_none_or(|old| candidate < old) {
                    dist[v as usize] = Some(candidate);
                    pred[v as usize] = Some(u);
                    heap.push_or_decrease(candidate, v);
                }
            }
        }

        (dist, pred)
    }
}

/// f64 with a total order; NaN never occurs for widths
#[derive(Clone, Copy, PartialEq, Debug)]
struct Width(f64);

impl Eq for Width {}

impl PartialOrd for Width {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Width {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

pub trait WidestPaths {
    /// Maximum bottleneck values: every node `u` starts with `initial[u]` and the
    /// result for `v` is the maximum over all paths `u -> v` of the minimum of
    /// `initial[u]` and the weights along the path. Use `f64::NEG_INFINITY` for nodes
    /// that are no sources.
    fn widest_paths(&self, initial: &[f64]) -> Vec<f64>;
}

impl WidestPaths for WeightedGraph<f64> {
    fn widest_paths(&self, initial: &[f64]) -> Vec<f64> {
        assert_eq!(initial.len(), self.len());
        let mut width = initial.to_vec();
        let mut done = vec![false; self.len()];
        let mut heap: BinaryHeap<(Width, Node)> = self
            .vertices()
            .filter(|&u| initial[u as usize] > f64::NEG_INFINITY)
            .map(|u| (Width(initial[u as usize]), u))
            .collect();

        while let Some((Width(w), u)) = heap.pop() {
            if done[u as usize] || w < width[u as usize] {
                continue;
            }
            done[u as usize] = true;

            for &(v, edge) in self.arcs_of(u) {
                let candidate = w.min(edge);
                if !done[v as usize] && candidate > width[v as usize] {
                    width[v as usize] = candidate;
                    heap.push((Width(candidate), v));
                }
            }
        }

        width
    }
}
