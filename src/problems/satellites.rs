use itertools::Itertools;

use super::*;

/// Minimum set of ground stations and satellites covering every link (minimum vertex cover of
/// a bipartite graph, König's theorem). After a maximum matching, the cover consists of the
/// unreachable ground stations and the reachable satellites of the residual network.
pub struct Satellites;

impl Problem for Satellites {
    const NAME: &'static str = "satellites";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let g: NumNodes = input.next("number of ground stations")?;
        let s: NumNodes = input.next("number of satellites")?;
        let l: usize = input.next("number of links")?;

        let mut network = FlowNetwork::new(g + s);
        let source = network.add_node();
        let target = network.add_node();
        for _ in 0..l {
            let station: Node = input.next("ground station")?;
            let satellite: Node = input.next("satellite")?;
            network.add_edge(station, g + satellite, 1);
        }
        for station in 0..g {
            network.add_edge(source, station, 1);
        }
        for satellite in 0..s {
            network.add_edge(g + satellite, target, 1);
        }

        network.max_flow(source, target);
        let reachable = network.source_side(source);

        let stations = (0..g).filter(|&u| !reachable[u as usize]).collect_vec();
        let satellites = (0..s).filter(|&u| reachable[(g + u) as usize]).collect_vec();

        writeln!(output, "{} {}", stations.len(), satellites.len())?;
        if !stations.is_empty() || !satellites.is_empty() {
            writeln!(output, "{}", stations.iter().chain(&satellites).join(" "))?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn vertex_cover() {
        assert_solves(
            "satellites",
            "3\n2 2 2\n0 0\n1 0\n1 1 0\n2 2 3\n0 0\n0 1\n1 0\n",
            "0 1\n0\n0 0\n2 0\n0 1\n",
        );
    }
}
