use super::*;

/// Sells sites to buyers (at most one site per buyer, limited sales per state) maximising
/// first the number of sales and then the revenue. Bids become costs `max_bid - bid` so the
/// minimum cost maximum flow uses non-negative costs.
pub struct RealEstate;

impl Problem for RealEstate {
    const NAME: &'static str = "real_estate";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let buyers: NumNodes = input.next("number of buyers")?;
        let sites: NumNodes = input.next("number of sites")?;
        let states: NumNodes = input.next("number of states")?;

        let site = |j: Node| buyers + j;
        let state = |k: Node| buyers + sites + k;

        let mut network = CostFlowNetwork::new(buyers + sites + states);
        let source = network.add_node();
        let target = network.add_node();

        for k in 0..states {
            network.add_edge(state(k), target, input.next("state limit")?, 0);
        }
        for j in 0..sites {
            let k: Node = input.next("state of site")?;
            network.add_edge(site(j), state(k - 1), 1, 0);
        }

        let mut bids = Vec::with_capacity((buyers * sites) as usize);
        for _ in 0..buyers * sites {
            bids.push(input.next::<Cost>("bid")?);
        }
        let max_bid = bids.iter().copied().max().unwrap_or(0);

        for i in 0..buyers {
            network.add_edge(source, i, 1, 0);
            for j in 0..sites {
                let bid = bids[(i * sites + j) as usize];
                network.add_edge(i, site(j), 1, max_bid - bid);
            }
        }

        let (sales, cost) = network.min_cost_max_flow(source, target);
        writeln!(output, "{} {}", sales, sales * max_bid - cost)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn sales_and_profit() {
        assert_solves(
            "real_estate",
            "2\n2 2 1\n1\n1 1\n5 3\n4 1\n2 2 1\n2\n1 1\n5 3\n4 1\n",
            "1 5\n2 7\n",
        );
    }
}
