use std::collections::BTreeMap;

use super::*;

/// Radio stations with range `r` must be split into two frequencies without interference.
/// If that is possible, a clue is delivered when Holmes and Watson are in range of each other
/// or of stations in the same connected network.
pub struct Clues;

/// Whether no two stations of `stations` are within range, via the shortest Delaunay edge
fn spread_out(stations: &[Point], r2: f64) -> bool {
    let dt = Delaunay::from_points(stations);
    dt.number_of_vertices() == stations.len()
        && dt
            .finite_edges()
            .into_iter()
            .all(|(u, v)| dt.point(u).squared_distance(&dt.point(v)) > r2)
}

impl Problem for Clues {
    const NAME: &'static str = "clues";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of stations")?;
        let m: usize = input.next("number of clues")?;
        let r: f64 = input.next("station range")?;
        let r2 = r * r;

        let stations = (0..n)
            .map(|_| input.next_point("station"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let mut clues = Vec::with_capacity(m);
        for _ in 0..m {
            let holmes = input.next_point("holmes")?;
            let watson = input.next_point("watson")?;
            clues.push((holmes, watson));
        }

        let dt = Delaunay::from_points(&stations);
        let mut network = AdjArray::new(n as NumNodes);
        for (u, v) in dt.finite_edges() {
            if dt.point(u).squared_distance(&dt.point(v)) <= r2 {
                network.add_edge(dt.info(u) as Node, dt.info(v) as Node);
            }
        }

        // two stations of the same frequency need not be Delaunay neighbours in the network,
        // so each frequency class is triangulated on its own
        let frequencies = network.compute_bipartition().filter(|colours| {
            let mut classes: BTreeMap<bool, Vec<Point>> = BTreeMap::new();
            for (&colour, &p) in colours.iter().zip(&stations) {
                classes.entry(colour).or_default().push(p);
            }
            classes.values().all(|class| spread_out(class, r2))
        });

        let answers: String = match frequencies {
            None => "n".repeat(m),
            Some(_) => {
                let (_, component) = network.component_labels();
                let station_in_range = |p: &Point| {
                    dt.nearest_vertex(p)
                        .filter(|&v| p.squared_distance(&dt.point(v)) <= r2)
                        .map(|v| component[dt.info(v)])
                };
                clues
                    .iter()
                    .map(|(holmes, watson)| {
                        let direct = holmes.squared_distance(watson) <= r2;
                        let relayed = matches!(
                            (station_in_range(holmes), station_in_range(watson)),
                            (Some(a), Some(b)) if a == b
                        );
                        if direct || relayed { 'y' } else { 'n' }
                    })
                    .collect()
            }
        };

        writeln!(output, "{answers}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn interference_and_delivery() {
        assert_solves(
            "clues",
            "3\n2 3 3\n0 0\n2 0\n-1 0 3 0\n0 0 10 0\n10 0 11 0\n\
             3 2 2\n0 0\n1 0\n0 1\n0 0 1 1\n0 0 0 0\n\
             3 1 5\n0 0\n2 0\n4 0\n0 0 4 0\n",
            "yny\nnn\nn\n",
        );
    }

    #[test]
    fn range_is_inclusive() {
        // stations exactly r apart share a network, Holmes and Watson exactly r from one
        assert_solves("clues", "1\n2 2 2\n0 0\n2 0\n-2 0 4 0\n-3 0 4 0\n", "yn\n");
    }

    #[test]
    fn odd_cycle_of_stations() {
        // all three stations within range 3 of each other cannot share two frequencies
        assert_solves(
            "clues",
            "2\n3 1 3\n0 0\n2 0\n0 2\n0 0 0 0\n3 1 2\n0 0\n2 0\n0 2\n2 0 0 2\n",
            "n\ny\n",
        );
    }

    #[test]
    fn no_stations_and_a_line_of_stations() {
        assert_solves(
            "clues",
            "2\n0 2 1\n0 0 1 0\n0 0 2 0\n3 1 1\n0 0\n1 0\n2 0\n-1 0 3 0\n",
            "yn\ny\n",
        );
    }
}
