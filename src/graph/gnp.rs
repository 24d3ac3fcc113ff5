use std::ops::Range;

use rand::Rng;
use rand_distr::Geometric;

use super::*;

/// Random Gilbert graphs `G(n, p)`: each of the `n(n-1)/2` node pairs is an edge
/// independently with probability `p`
pub trait GnpGenerator: Sized {
    fn random_gnp(rng: &mut impl Rng, n: NumNodes, p: f64) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GnpGenerator for G {
    fn random_gnp(rng: &mut impl Rng, n: NumNodes, p: f64) -> Self {
        let mut graph = Self::new(n);
        for (u, v) in random_pairs(rng, n, p) {
            graph.add_edge(u, v);
        }
        graph
    }
}

impl WeightedGraph<u64> {
    /// `G(n, p)` with edge weights drawn uniformly from `weights`
    pub fn random_weighted_gnp(
        rng: &mut impl Rng,
        n: NumNodes,
        p: f64,
        weights: Range<u64>,
    ) -> Self {
        let mut graph = Self::new(n);
        for (u, v) in random_pairs(rng, n, p) {
            graph.add_edge(u, v, rng.gen_range(weights.clone()));
        }
        graph
    }
}

fn random_pairs(rng: &mut impl Rng, n: NumNodes, p: f64) -> Vec<(Node, Node)> {
    let n = n as u64;
    SkipSampler::new(rng, 0..n * n, p)
        .map(|x| ((x / n) as Node, (x % n) as Node))
        .filter(|(u, v)| u < v)
        .collect()
}

/// Iterates over a range and yields each element independently with probability `p`;
/// the gaps between yielded elements are geometrically distributed, so the cost is
/// proportional to the output
pub struct SkipSampler<'a, R: Rng> {
    next: u64,
    end: u64,
    gaps: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> SkipSampler<'a, R> {
    pub fn new(rng: &'a mut R, range: Range<u64>, p: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&p));
        Self {
            next: range.start,
            end: range.end,
            gaps: Geometric::new(p).ok().filter(|_| p > 0.0),
            rng,
        }
    }
}

impl<R: Rng> Iterator for SkipSampler<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let gaps = self.gaps.as_ref()?;
        let candidate = self.next.saturating_add(self.rng.sample(gaps));
        if candidate >= self.end {
            self.next = self.end;
            return None;
        }
        self.next = candidate + 1;
        Some(candidate)
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn sampler_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert_eq!(SkipSampler::new(rng, 0..0, 1.0).count(), 0);
        assert_eq!(SkipSampler::new(rng, 5..15, 1.0).collect::<Vec<_>>(), (5..15).collect::<Vec<_>>());
        assert_eq!(SkipSampler::new(rng, 0..100, 0.0).count(), 0);
    }

    #[test]
    fn sampler_frequencies() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let mut counts = [0u32; 50];
        for _ in 0..1000 {
            for x in SkipSampler::new(rng, 10..50, 0.25) {
                counts[x as usize] += 1;
            }
        }
        assert!(counts[..10].iter().all(|&c| c == 0));
        assert!(counts[10..].iter().all(|c| (150..350).contains(c)));
    }

    #[test]
    fn expected_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let (n, p) = (100, 0.05);
        let mean = (0..50)
            .map(|_| AdjArray::random_gnp(rng, n, p).number_of_edges() as f64)
            .sum::<f64>()
            / 50.0;
        let expected = p * (n * (n - 1)) as f64 / 2.0;
        assert!((0.8 * expected..1.2 * expected).contains(&mean));

        let weighted = WeightedGraph::random_weighted_gnp(rng, n, p, 1..10);
        assert!(weighted.weighted_edges().iter().all(|e| (1..10).contains(&e.0)));
    }
}
