use super::*;

/// Every ant species explores the forest from its hive along its own minimum spanning tree
/// (with species specific edge weights) and establishes those edges with their weight. Prints
/// the shortest route from `a` to `b` over all established edges.
pub struct AntChallenge;

impl Problem for AntChallenge {
    const NAME: &'static str = "ant_challenge";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of trees")?;
        let e: usize = input.next("number of edges")?;
        let s: usize = input.next("number of species")?;
        let a: Node = input.next("start")?;
        let b: Node = input.next("target")?;

        let mut species_graphs = vec![WeightedGraph::new(n); s];
        for _ in 0..e {
            let u = input.next("edge endpoint")?;
            let v = input.next("edge endpoint")?;
            for graph in species_graphs.iter_mut() {
                graph.add_edge(u, v, input.next::<Distance>("species weight")?);
            }
        }

        let mut network = WeightedGraph::new(n);
        for graph in &species_graphs {
            let hive = input.next("hive")?;
            for WeightedEdge(w, u, v) in graph.prim(hive) {
                network.add_edge(u, v, w);
            }
        }

        let distance = network.dijkstra(a)[b as usize].unwrap_or(0);
        writeln!(output, "{distance}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn union_of_private_networks() {
        assert_solves(
            "ant_challenge",
            "2\n3 3 2 0 2\n0 1 1 10\n1 2 1 10\n0 2 10 3\n0 2\n\
             2 1 1 0 1\n0 1 4\n1\n",
            "2\n4\n",
        );
    }
}
