use itertools::Itertools;

use super::*;

/// Lists the bridges of an undirected graph in lexicographic order
pub struct ImportantBridges;

impl Problem for ImportantBridges {
    const NAME: &'static str = "important_bridges";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of islands")?;
        let m: usize = input.next("number of bridges")?;

        let mut graph = AdjArray::new(n);
        for _ in 0..m {
            let u = input.next("bridge endpoint")?;
            let v = input.next("bridge endpoint")?;
            graph.add_edge(u, v);
        }

        let bridges = graph.compute_bridges().into_iter().sorted().collect_vec();
        writeln!(output, "{}", bridges.len())?;
        for Edge(u, v) in bridges {
            writeln!(output, "{u} {v}")?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn critical_edges() {
        assert_solves(
            "important_bridges",
            "3\n4 4\n0 1\n1 2\n2 0\n3 2\n2 0\n3 2\n0 1\n1 0\n",
            "1\n2 3\n0\n0\n",
        );
    }
}
