use super::*;

/// Can a healthy person escape to infinity while keeping a squared distance of at least `d`
/// to every infected person? Escape routes cross Delaunay edges; the widest route from each
/// face to the outside is a bottleneck path in the dual graph.
pub struct H1n1;

/// Width (squared length of the narrowest edge crossed) of the widest escape route from each
/// face slot. Routes end outside the convex hull or in a finite face `f` offering room
/// `room(f)` of its own.
pub(super) fn escape_widths(dt: &Delaunay, room: impl Fn(FaceId) -> f64) -> Vec<f64> {
    let mut dual = WeightedGraph::new(dt.face_slots() as NumNodes);
    let mut initial = vec![f64::NEG_INFINITY; dt.face_slots()];
    for f in dt.faces() {
        if dt.is_infinite(f) {
            initial[f as usize] = f64::INFINITY;
            continue;
        }
        initial[f as usize] = room(f);
        for i in 0..3 {
            let g = dt.neighbor(f, i);
            if dt.is_infinite(g) || f < g {
                let a = dt.point(dt.vertex(f, (i + 1) % 3));
                let b = dt.point(dt.vertex(f, (i + 2) % 3));
                dual.add_edge(f, g, a.squared_distance(&b));
            }
        }
    }
    dual.widest_paths(&initial)
}

impl Problem for H1n1 {
    const NAME: &'static str = "h1n1";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of infected")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };
        let infected = (0..n)
            .map(|_| input.next_point("infected person"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let dt = Delaunay::from_points(&infected);
        let widths = (dt.dimension() == 2).then(|| escape_widths(&dt, |_| f64::NEG_INFINITY));

        let m: usize = input.next("number of healthy people")?;
        let mut answers = String::with_capacity(m);
        for _ in 0..m {
            let p = input.next_point("healthy person")?;
            let d: f64 = input.next("safety distance")?;

            let nearest = dt.nearest_vertex(&p).map(|v| dt.point(v));
            let safe_start = nearest.is_none_or(|q| p.squared_distance(&q) >= d);
            let escapes = safe_start
                && match (&widths, dt.locate(&p)) {
                    (Some(widths), Some(f)) => dt.is_infinite(f) || widths[f as usize] >= 4.0 * d,
                    // a collinear crowd is left perpendicular to its line
                    _ => true,
                };
            answers.push(if escapes { 'y' } else { 'n' });
        }

        writeln!(output, "{answers}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn escape_routes() {
        assert_solves(
            "h1n1",
            "4\n0 0\n10 0\n0 10\n10 10\n4\n5 5 10\n5 5 30\n5 5 60\n20 20 1\n\
             2\n0 0\n4 0\n2\n2 0 4\n2 0 5\n0\n",
            "ynny\nyn\n",
        );
    }

    #[test]
    fn safety_distance_is_inclusive() {
        // a single infected person, then a collinear crowd
        assert_solves(
            "h1n1",
            "1\n0 0\n2\n3 0 9\n2 0 9\n3\n0 0\n4 0\n8 0\n2\n4 2 4\n4 1 4\n0\n",
            "yn\nyn\n",
        );
    }
}
