use super::*;
use crate::graph::ShortestPaths as _;

/// Answers shortest path queries on a directed road network; the node coordinates are
/// only needed for drawing and are skipped.
pub struct ShortestPaths;

impl Problem for ShortestPaths {
    const NAME: &'static str = "shortest_paths";
    const DRIVER: Driver = Driver::Single;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of nodes")?;
        let m: usize = input.next("number of edges")?;
        let q: usize = input.next("number of queries")?;

        for _ in 0..n {
            input.next_point("node position")?;
        }

        let mut graph = WeightedGraph::new(n);
        for _ in 0..m {
            let u = input.next("arc source")?;
            let v = input.next("arc target")?;
            graph.add_arc(u, v, input.next::<Distance>("arc weight")?);
        }

        let mut distances: Vec<Option<Vec<Option<Distance>>>> = vec![None; n as usize];
        for _ in 0..q {
            let s: Node = input.next("query source")?;
            let t: Node = input.next("query target")?;
            let from_s = distances[s as usize].get_or_insert_with(|| graph.dijkstra(s));
            match from_s[t as usize] {
                Some(d) => writeln!(output, "{d}")?,
                None => writeln!(output, "unreachable")?,
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn directed_queries() {
        assert_solves(
            "shortest_paths",
            "3 2 3\n0 0\n1 1\n2 2\n0 1 5\n1 2 4\n0 2\n2 0\n0 2\n",
            "9\nunreachable\n9\n",
        );
    }
}
