use super::*;

/// Can every store be visited on its own trip from home (node 0) without two trips sharing a
/// street? Edge-disjoint paths, one unit of flow per store.
pub struct Shopping;

impl Problem for Shopping {
    const NAME: &'static str = "shopping";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of intersections")?;
        let m: usize = input.next("number of streets")?;
        let s: usize = input.next("number of stores")?;

        let mut network = FlowNetwork::new(n);
        let target = network.add_node();
        for _ in 0..s {
            let store: Node = input.next("store")?;
            network.add_edge(store, target, 1);
        }

        for _ in 0..m {
            let u: Node = input.next("street endpoint")?;
            let v: Node = input.next("street endpoint")?;
            // a street may be used in either direction
            network.add_edge(u, v, 1);
            network.add_edge(v, u, 1);
        }

        let trips = network.max_flow(0, target);
        writeln!(output, "{}", if trips == s as Capacity { "yes" } else { "no" })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn disjoint_trips() {
        assert_solves(
            "shopping",
            "3\n3 2 2\n1 2\n0 1\n1 2\n3 3 2\n1 2\n0 1\n1 2\n0 2\n2 1 2\n1 1\n0 1\n",
            "no\nyes\nno\n",
        );
    }
}
