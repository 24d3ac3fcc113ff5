use super::*;

/// Smallest time until every agent sits in a shelter. A shelter takes `c` agents; the `k`-th
/// agent to enter it needs `k * d` additional seconds. For a given time limit, agents and
/// shelter places form a bipartite graph, and a perfect matching of the agents decides
/// feasibility. The limit is found by binary search.
pub struct MajestysSecretService;

impl Problem for MajestysSecretService {
    const NAME: &'static str = "majestys_secret_service";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of positions")?;
        let m: usize = input.next("number of slopes and lifts")?;
        let a: NumNodes = input.next("number of agents")?;
        let s: NumNodes = input.next("number of shelters")?;
        let c: NumNodes = input.next("shelter capacity")?;
        let d: Distance = input.next("time to enter")?;

        let mut mountain = WeightedGraph::new(n);
        for _ in 0..m {
            let kind = input.next_word("slope or lift")?;
            let x: Node = input.next("from")?;
            let y: Node = input.next("to")?;
            let z: Distance = input.next("travel time")?;
            mountain.add_arc(x, y, z);
            if kind == "L" {
                mountain.add_arc(y, x, z);
            }
        }

        let agents: Vec<Node> = input.next_vec(a as usize, "agent position")?;
        let shelters: Vec<Node> = input.next_vec(s as usize, "shelter position")?;

        let times: Vec<Vec<Option<Distance>>> = agents
            .iter()
            .map(|&agent| {
                let dist = mountain.dijkstra(agent);
                shelters.iter().map(|&j| dist[j as usize]).collect()
            })
            .collect();

        let all_hidden_by = |limit: Distance| {
            let mut graph = AdjArray::new(a + c * s);
            for (agent, row) in (0..a).zip(&times) {
                for (shelter, time) in (0..s).zip(row) {
                    let Some(time) = *time else { continue };
                    for k in 0..c {
                        if time + (k as Distance + 1) * d <= limit {
                            graph.add_edge(agent, a + k * s + shelter);
                        }
                    }
                }
            }
            graph.maximum_matching_size() == a
        };

        let longest = times.iter().flatten().flatten().copied().max().unwrap_or(0);
        let (mut low, mut high) = (0, longest + c as Distance * d);
        while low < high {
            let mid = low + (high - low) / 2;
            if all_hidden_by(mid) {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        debug!("all {a} agents hidden after {low}");

        writeln!(output, "{low}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn queueing_at_shelters() {
        assert_solves(
            "majestys_secret_service",
            "3\n2 1 2 1 2 1\nS 0 1 5\n0 0\n1\n\
             2 1 2 2 1 3\nS 0 1 5\n0 0\n1 0\n\
             2 1 1 1 1 2\nL 0 1 4\n1\n0\n",
            "7\n8\n6\n",
        );
    }
}
