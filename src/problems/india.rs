use super::*;

/// Guides carry up to `e` suitcases from city `x` to `y` for `d` per suitcase. Prints the
/// largest number of suitcases that can travel from Kholby to Allahabad within budget `b`.
pub struct India;

impl Problem for India {
    const NAME: &'static str = "india";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let c: NumNodes = input.next("number of cities")?;
        let g: usize = input.next("number of guides")?;
        let budget: Cost = input.next("budget")?;
        let kholby: Node = input.next("start city")?;
        let allahabad: Node = input.next("target city")?;

        let mut network = CostFlowNetwork::new(c);
        for _ in 0..g {
            let x: Node = input.next("guide start")?;
            let y: Node = input.next("guide target")?;
            let d: Cost = input.next("cost per suitcase")?;
            let e: Capacity = input.next("guide capacity")?;
            network.add_edge(x, y, e, d);
        }

        writeln!(output, "{}", most_suitcases(&mut network, kholby, allahabad, budget))?;
        Ok(Flow::Continue)
    }
}

/// The cheapest way of sending `f` suitcases costs more for larger `f`, so the answer is
/// found by binary search over flow limits
fn most_suitcases(network: &mut CostFlowNetwork, s: Node, t: Node, budget: Cost) -> Capacity {
    if s == t {
        return 0;
    }

    let (max_flow, cost) = network.min_cost_max_flow(s, t);
    if cost <= budget {
        return max_flow;
    }

    // invariant: `low` suitcases are affordable, `high` are not
    let (mut low, mut high) = (0, max_flow);
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        network.reset_flow();
        let (_, cost) = network.min_cost_flow(s, t, Some(mid));
        debug!("{mid} suitcases cost {cost}");
        if cost <= budget {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn budgets() {
        let guides = "0 1 1 5\n1 2 1 3\n0 2 10 4\n";
        assert_solves(
            "india",
            &format!("3\n3 3 100 0 2\n{guides}3 3 20 0 2\n{guides}3 3 5 0 2\n{guides}"),
            "7\n4\n2",
        );
    }
}
