use super::*;

/// Boats and sailors form pairs with a spectacle coefficient; every boat and every sailor
/// joins at most one pair. Prints the largest total spectacle.
pub struct Fleetrace;

/// Upper bound on any coefficient; shifting costs by it keeps them non-negative
const MAX_SPECTACLE: Cost = 50;

impl Problem for Fleetrace {
    const NAME: &'static str = "fleetrace";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let b: NumNodes = input.next("number of boats")?;
        let s: NumNodes = input.next("number of sailors")?;
        let p: usize = input.next("number of pairs")?;

        // boats 0..b, sailors b..b+s
        let mut network = CostFlowNetwork::new(b + s);
        let source = network.add_node();
        let target = network.add_node();
        for _ in 0..p {
            let boat: Node = input.next("boat")?;
            let sailor: Node = input.next("sailor")?;
            let spectacle: Cost = input.next("spectacle")?;
            network.add_edge(boat, b + sailor, 1, MAX_SPECTACLE - spectacle);
        }
        for boat in 0..b {
            network.add_edge(source, boat, 1, 0);
        }
        // every sailor is saturated; the direct arc stands for staying ashore
        for sailor in b..b + s {
            network.add_edge(source, sailor, 1, MAX_SPECTACLE);
            network.add_edge(sailor, target, 1, 0);
        }

        let (flow, cost) = network.min_cost_max_flow(source, target);
        writeln!(output, "{}", flow * MAX_SPECTACLE - cost)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn spectacle() {
        assert_solves(
            "fleetrace",
            "3\n2 2 3\n0 0 10\n0 1 20\n1 1 15\n1 2 2\n0 0 5\n0 1 7\n2 1 2\n0 0 3\n1 0 4\n",
            "25\n7\n4",
        );
    }
}
