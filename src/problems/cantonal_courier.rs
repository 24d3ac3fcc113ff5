use super::*;

/// Chooses jobs and buys the tickets for the zones they need to maximise the profit. A
/// maximum closure problem: the profit of all jobs minus a minimum cut between jobs (source
/// side) and zones (target side).
pub struct CantonalCourier;

impl Problem for CantonalCourier {
    const NAME: &'static str = "cantonal_courier";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let zones: NumNodes = input.next("number of zones")?;
        let jobs: NumNodes = input.next("number of jobs")?;

        let mut network = FlowNetwork::new(jobs + zones);
        let source = network.add_node();
        let target = network.add_node();
        for zone in 0..zones {
            network.add_edge(jobs + zone, target, input.next("ticket cost")?);
        }

        let rewards: Vec<Capacity> = input.next_vec(jobs as usize, "job reward")?;
        let total: Capacity = rewards.iter().sum();
        for (job, &reward) in (0..jobs).zip(&rewards) {
            network.add_edge(source, job, reward);
        }
        for job in 0..jobs {
            let needed: usize = input.next("number of zones of a job")?;
            for _ in 0..needed {
                let zone: Node = input.next("zone")?;
                network.add_edge(job, jobs + zone, total + 1);
            }
        }

        let cut = network.max_flow(source, target);
        writeln!(output, "{}", total - cut)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn maximum_closure() {
        assert_solves(
            "cantonal_courier",
            "3\n2 2\n3 5\n4 4\n1 0\n2 0 1\n2 2\n1 1\n4 4\n1 0\n2 0 1\n1 1\n9\n1\n1 0\n",
            "1\n6\n0\n",
        );
    }
}
