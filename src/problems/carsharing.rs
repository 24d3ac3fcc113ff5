use itertools::Itertools;

use super::*;

/// Assigns rental requests to cars to maximise the total profit. Every (station, time) pair
/// that occurs in a request is a node of a time-expanded network; cars wait at a station or
/// serve a request. Costs are shifted by the largest profit per time unit so that every
/// source-target path costs the same unless it serves requests, which keeps all costs
/// non-negative.
pub struct Carsharing;

struct Request {
    from: usize,
    to: usize,
    departure: i64,
    arrival: i64,
    profit: i64,
}

impl Problem for Carsharing {
    const NAME: &'static str = "carsharing";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of requests")?;
        let s: usize = input.next("number of stations")?;
        let cars: Vec<Capacity> = input.next_vec(s, "initial cars")?;
        let fleet: Capacity = cars.iter().sum();

        let mut requests = Vec::with_capacity(n);
        for _ in 0..n {
            let from: usize = input.next("start station")?;
            let to: usize = input.next("target station")?;
            requests.push(Request {
                from: from - 1,
                to: to - 1,
                departure: input.next("departure")?,
                arrival: input.next("arrival")?,
                profit: input.next("profit")?,
            });
        }

        let max_profit = requests.iter().map(|r| r.profit).max().unwrap_or(0);
        let horizon = requests.iter().map(|r| r.arrival).max().unwrap_or(0);

        let events = requests
            .iter()
            .flat_map(|r| [(r.from, r.departure), (r.to, r.arrival)])
            .sorted()
            .dedup()
            .collect_vec();
        let node_of = |event: (usize, i64)| -> Node {
            events.partition_point(|&e| e < event) as Node
        };

        let mut network = CostFlowNetwork::new(events.len() as NumNodes);
        let source = network.add_node();
        let target = network.add_node();

        for (station, timeline) in &events.iter().enumerate().chunk_by(|(_, e)| e.0) {
            let timeline = timeline.collect_vec();
            let (first, &(_, start)) = timeline[0];
            network.add_edge(source, first as Node, cars[station], start * max_profit);
            for (&(u, &(_, t)), &(v, &(_, t2))) in timeline.iter().tuple_windows() {
                network.add_edge(u as Node, v as Node, fleet, (t2 - t) * max_profit);
            }
            let (last, &(_, end)) = timeline[timeline.len() - 1];
            network.add_edge(last as Node, target, fleet, (horizon - end) * max_profit);
        }

        for r in &requests {
            let duration = r.arrival - r.departure;
            network.add_edge(
                node_of((r.from, r.departure)),
                node_of((r.to, r.arrival)),
                1,
                duration * max_profit - r.profit,
            );
        }

        let (flow, cost) = network.min_cost_max_flow(source, target);
        writeln!(output, "{}", flow * max_profit * horizon - cost)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn rentals() {
        assert_solves(
            "carsharing",
            "3\n1 2\n1 0\n1 2 0 5 10\n\
             2 2\n1 0\n1 2 0 5 10\n1 2 1 3 20\n\
             2 2\n1 0\n1 2 0 2 5\n2 1 3 4 7\n",
            "10\n20\n12\n",
        );
    }
}
