use super::*;

/// Maximum number of runners per time unit when every runner takes a shortest route from `s`
/// to `f` and streets have limited width. Only arcs on shortest paths carry flow.
pub struct Marathon;

impl Problem for Marathon {
    const NAME: &'static str = "marathon";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of intersections")?;
        let m: usize = input.next("number of streets")?;
        let s: Node = input.next("start")?;
        let f: Node = input.next("finish")?;

        let mut streets = WeightedGraph::new(n);
        let mut widths = Vec::with_capacity(m);
        for _ in 0..m {
            let a: Node = input.next("street endpoint")?;
            let b: Node = input.next("street endpoint")?;
            let width: Capacity = input.next("street width")?;
            let length: Distance = input.next("street length")?;
            if a != b {
                streets.add_edge(a, b, length);
                widths.push(width);
            }
        }

        let from_start = streets.dijkstra(s);
        let to_finish = streets.dijkstra(f);
        let Some(shortest) = from_start[f as usize].filter(|&d| d > 0) else {
            writeln!(output, "0")?;
            return Ok(Flow::Continue);
        };

        let on_shortest_path = |u: Node, v: Node, w: Distance| {
            matches!(
                (from_start[u as usize], to_finish[v as usize]),
                (Some(a), Some(b)) if a + w + b == shortest
            )
        };

        let mut network = FlowNetwork::new(n);
        for (&WeightedEdge(length, a, b), &width) in streets.weighted_edges().iter().zip(&widths) {
            if on_shortest_path(a, b, length) {
                network.add_edge(a, b, width);
            }
            if on_shortest_path(b, a, length) {
                network.add_edge(b, a, width);
            }
        }

        writeln!(output, "{}", network.max_flow(s, f))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn shortest_route_capacity() {
        assert_solves(
            "marathon",
            "3\n4 4 0 3\n0 1 2 1\n1 3 1 1\n0 2 5 1\n2 3 5 2\n\
             4 4 0 3\n0 1 2 1\n1 3 1 1\n0 2 5 1\n2 3 5 1\n\
             2 0 0 1\n",
            "1\n6\n0\n",
        );
    }
}
