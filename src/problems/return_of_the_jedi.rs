use super::*;

/// Leia connects the planets along a minimum spanning tree; the cheapest network that differs
/// from hers is a second-best spanning tree. If the minimum spanning tree is not unique, this
/// is a different minimum spanning tree of the same weight.
pub struct ReturnOfTheJedi;

impl Problem for ReturnOfTheJedi {
    const NAME: &'static str = "return_of_the_jedi";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of planets")?;
        let _tatooine: Node = input.next("index of tatooine")?;

        let mut graph = WeightedGraph::new(n);
        for u in 0..n {
            for v in u + 1..n {
                graph.add_edge(u, v, input.next("channel cost")?);
            }
        }

        let weight = match graph.second_best_spanning_tree_weight() {
            Some(weight) => weight,
            // a single spanning tree, nothing to choose from
            None => graph.minimum_spanning_forest().iter().map(|e| e.0).sum(),
        };
        writeln!(output, "{weight}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn unique_and_ambiguous_trees() {
        assert_solves(
            "return_of_the_jedi",
            "3\n3 1\n1 2\n3\n3 2\n1 1\n1\n4 1\n1 5 5\n1 5\n1\n",
            "4\n2\n7\n",
        );
    }
}
