use super::*;

/// A train of `l` cars runs from the first to the last station; each car carries one agent at
/// a time. Selects the agents to transport to maximise the total priority. Travelling a unit
/// without an agent costs [`MAX_PRIORITY`], carrying agent `j` over `y - x` units costs
/// `(y - x) * MAX_PRIORITY - q_j`, which keeps all costs non-negative.
pub struct CasinoRoyale;

const MAX_PRIORITY: Cost = 1 << 7;

impl Problem for CasinoRoyale {
    const NAME: &'static str = "casino_royale";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of stations")?;
        let m: usize = input.next("number of agents")?;
        let l: Capacity = input.next("train capacity")?;

        let mut network = CostFlowNetwork::new(n);
        let source = network.add_node();
        network.add_edge(source, 0, l, 0);
        for station in 1..n {
            network.add_edge(station - 1, station, l, MAX_PRIORITY);
        }
        for _ in 0..m {
            let x: Node = input.next("boarding station")?;
            let y: Node = input.next("leaving station")?;
            let q: Cost = input.next("priority")?;
            network.add_edge(x, y, 1, (y - x) as Cost * MAX_PRIORITY - q);
        }

        let (flow, cost) = match n.checked_sub(1) {
            Some(last) if last > 0 => network.min_cost_max_flow(source, last),
            _ => (0, 0),
        };
        let profit = flow * (n as Cost - 1) * MAX_PRIORITY - cost;
        debug!("{flow} cars, profit {profit}");

        writeln!(output, "{profit}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn agents_on_board() {
        assert_solves(
            "casino_royale",
            "3\n3 3 1\n0 1 5\n1 2 6\n0 2 10\n3 3 2\n0 1 5\n1 2 6\n0 2 10\n\
             4 3 1\n0 2 100\n1 3 100\n0 3 1\n",
            "11\n21\n100\n",
        );
    }
}
