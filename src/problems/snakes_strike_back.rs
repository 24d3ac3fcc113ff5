use super::*;

/// Can a disk of radius `p` travel from the entrance square to the exit square without
/// touching a snake square? The corners of all snake squares are triangulated; the disk
/// passes from one face to the next if the Delaunay edge between them is at least `2p` long.
pub struct SnakesStrikeBack;

impl Problem for SnakesStrikeBack {
    const NAME: &'static str = "snakes_strike_back";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let h: usize = input.next("grid height")?;
        let w: usize = input.next("grid width")?;
        let p: f64 = input.next("disk radius")?;
        // rows count from the top, the y axis points up
        let mut centre_of = |what| -> Result<Point> {
            let row: usize = input.next(what)?;
            let col: usize = input.next(what)?;
            Ok(Point::new(col as f64 - 0.5, (h - row) as f64 + 0.5))
        };
        let entrance = centre_of("entrance")?;
        let exit = centre_of("exit")?;

        let grid = input.next_chars(h * w, "grid")?;
        let mut corners = Vec::new();
        for (k, &c) in grid.iter().enumerate() {
            if c == '0' {
                let (x, y) = ((k % w) as f64, (h - 1 - k / w) as f64);
                corners.extend([(x, y), (x + 1.0, y), (x, y + 1.0), (x + 1.0, y + 1.0)]);
            }
        }
        let corners: Vec<Point> = corners.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let dt = Delaunay::from_points(&corners);

        let finite_face = |q: &Point| dt.locate(q).filter(|&f| !dt.is_infinite(f));
        let reachable = match (finite_face(&entrance), finite_face(&exit)) {
            (Some(start), Some(goal)) => {
                let mut faces = WeightedGraph::new(dt.face_slots() as NumNodes);
                for f in dt.finite_faces() {
                    for i in 0..3 {
                        let g = dt.neighbor(f, i);
                        if f < g && !dt.is_infinite(g) {
                            let a = dt.point(dt.vertex(f, (i + 1) % 3));
                            let b = dt.point(dt.vertex(f, (i + 2) % 3));
                            faces.add_edge(f, g, a.squared_distance(&b));
                        }
                    }
                }
                let mut initial = vec![f64::NEG_INFINITY; dt.face_slots()];
                initial[start as usize] = f64::INFINITY;
                faces.widest_paths(&initial)[goal as usize] >= 4.0 * p * p
            }
            // a disk outside the snakes' hull would leave the grid
            _ => false,
        };

        writeln!(output, "{}", if reachable { "yes" } else { "no" })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn disk_paths() {
        assert_solves(
            "snakes_strike_back",
            "2\n3 3 1\n2 2 2 2\n000\n010\n000\n3 4 1\n2 2 2 3\n0000\n0110\n0000\n",
            "yes\nno\n",
        );
    }
}
