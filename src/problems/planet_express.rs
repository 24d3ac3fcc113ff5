use super::*;

const DEADLINE: Distance = 1_000_000;

/// Delivery from any of the warehouses `0..k` to planet `n - 1` over directed links. Planets
/// of the teleportation network that lie in a common strongly connected component may
/// teleport among each other at a cost of the number of such planets minus one. Prints the
/// fastest delivery time if it is at most one second, else "no".
pub struct PlanetExpress;

impl Problem for PlanetExpress {
    const NAME: &'static str = "planet_express";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of planets")?;
        let m: usize = input.next("number of links")?;
        let k: NumNodes = input.next("number of warehouses")?;
        let t: usize = input.next("number of teleportation planets")?;
        let teleports: Vec<Node> = input.next_vec(t, "teleportation planet")?;

        // arcs point backwards so a single search from the target reaches all warehouses
        let mut graph = WeightedGraph::new(n);
        for _ in 0..m {
            let u: Node = input.next("link source")?;
            let v: Node = input.next("link target")?;
            let c: Distance = input.next("link time")?;
            graph.add_arc(v, u, c);
        }

        let (components, label) = graph.strongly_connected_components();
        let mut linked: Vec<Vec<Node>> = vec![Vec::new(); components as usize];
        for &u in &teleports {
            linked[label[u as usize] as usize].push(u);
        }

        // a hub per component: entering is free, leaving costs the teleportation time
        for planets in linked.iter().filter(|planets| planets.len() > 1) {
            let hub = graph.add_node();
            let cost = (planets.len() - 1) as Distance;
            for &u in planets {
                graph.add_arc(hub, u, 0);
                graph.add_arc(u, hub, cost);
            }
        }

        let dist = graph.dijkstra(n - 1);
        let fastest = dist[..k as usize].iter().flatten().min().copied();
        match fastest.filter(|&d| d <= DEADLINE) {
            Some(d) => writeln!(output, "{d}")?,
            None => writeln!(output, "no")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn deliveries() {
        assert_solves(
            "planet_express",
            "4\n\
             3 2 1 0\n0 1 5\n1 2 7\n\
             3 3 1 2\n0 2\n0 1 100\n1 2 100\n2 0 1\n\
             2 0 1 0\n\
             2 1 1 0\n0 1 2000000\n",
            "12\n1\nno\nno",
        );
    }

    #[test]
    fn teleports_need_a_common_component() {
        // 0 and 2 are both teleportation planets but 2 cannot reach 0
        assert_solves("planet_express", "1\n3 2 1 2\n0 2\n0 1 100\n1 2 100\n", "200");
    }
}
