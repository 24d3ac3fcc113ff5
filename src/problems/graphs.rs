use super::*;

/// Weight of a minimum spanning tree and the largest shortest-path distance from node 0
pub struct Graphs;

impl Problem for Graphs {
    const NAME: &'static str = "graphs";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of nodes")?;
        let m: usize = input.next("number of edges")?;

        let mut graph = WeightedGraph::new(n);
        for _ in 0..m {
            let u = input.next("edge endpoint")?;
            let v = input.next("edge endpoint")?;
            graph.add_edge(u, v, input.next::<Distance>("edge weight")?);
        }

        let tree_weight: Distance = graph.prim(0).iter().map(|e| e.0).sum();
        let furthest = graph.dijkstra(0).into_iter().flatten().max().unwrap_or(0);

        writeln!(output, "{tree_weight} {furthest}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn tree_and_distances() {
        assert_solves(
            "graphs",
            "2\n3 3\n0 1 1\n1 2 2\n0 2 5\n4 3\n0 1 7\n0 2 1\n0 3 2\n",
            "3 3\n10 7\n",
        );
    }
}
