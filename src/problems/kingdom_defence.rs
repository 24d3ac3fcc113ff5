use super::*;

/// Soldiers move along directed paths, each carrying between `min` and `max` soldiers. Decides
/// whether every location can end up with its required number of soldiers. Lower bounds are
/// moved into the node balances; the rest is a supply/demand flow.
pub struct KingdomDefence;

impl Problem for KingdomDefence {
    const NAME: &'static str = "kingdom_defence";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let l: NumNodes = input.next("number of locations")?;
        let p: usize = input.next("number of paths")?;

        let mut balance = Vec::with_capacity(l as usize);
        for _ in 0..l {
            let stationed: Capacity = input.next("stationed soldiers")?;
            let needed: Capacity = input.next("needed soldiers")?;
            balance.push(stationed - needed);
        }

        let mut network = FlowNetwork::new(l);
        for _ in 0..p {
            let from: Node = input.next("path start")?;
            let to: Node = input.next("path end")?;
            let min: Capacity = input.next("minimum traffic")?;
            let max: Capacity = input.next("maximum traffic")?;
            balance[from as usize] -= min;
            balance[to as usize] += min;
            network.add_edge(from, to, max - min);
        }

        let source = network.add_node();
        let target = network.add_node();
        let mut demand = 0;
        for (u, &b) in (0..l).zip(&balance) {
            if b >= 0 {
                network.add_edge(source, u, b);
            } else {
                network.add_edge(u, target, -b);
                demand -= b;
            }
        }

        let feasible = network.max_flow(source, target) == demand;
        writeln!(output, "{}", if feasible { "yes" } else { "no" })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn bounded_traffic() {
        assert_solves(
            "kingdom_defence",
            "3\n2 1\n3 0\n0 2\n0 1 0 5\n2 1\n3 0\n0 2\n0 1 0 1\n2 1\n3 0\n0 2\n0 1 4 5\n",
            "yes\nno\nno\n",
        );
    }
}
