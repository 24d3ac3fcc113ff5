use super::*;

/// Largest ball inside the polyhedron `{x : A x <= b}` (Chebyshev center). Prints the radius
/// rounded down, `none` for an empty polyhedron and `inf` if arbitrarily large balls fit.
pub struct Inball;

impl Problem for Inball {
    const NAME: &'static str = "inball";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of half-spaces")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };
        let d: usize = input.next("dimension")?;

        // columns 0..d: the center, column d: the radius
        let radius = d;
        let mut lp = LinearProgram::new(Relation::Smaller, None, None);
        lp.set_l(radius, Some(0.0));
        lp.set_c(radius, 1.0);

        for row in 0..n {
            let a: Vec<f64> = input.next_vec(d, "normal coordinate")?;
            for (col, &v) in a.iter().enumerate() {
                lp.set_a(col, row, v);
            }
            let norm = a.iter().map(|v| v * v).sum::<f64>().sqrt();
            lp.set_a(radius, row, norm);
            lp.set_b(row, input.next("offset")?);
        }

        match lp.maximize()? {
            LpStatus::Optimal(solution) => writeln!(output, "{}", floor_to_i64(solution.objective))?,
            LpStatus::Unbounded => writeln!(output, "inf")?,
            LpStatus::Infeasible => writeln!(output, "none")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn balls() {
        assert_solves(
            "inball",
            "4 2\n1 0 2\n-1 0 2\n0 1 1\n0 -1 1\n1 1\n1 0\n2 1\n1 -1\n-1 -1\n0\n",
            "1\ninf\nnone\n",
        );
    }

    #[test]
    fn slanted_faces() {
        // triangle x >= 0, y >= 0, 3x + 4y <= 12 has inradius 1
        assert_solves("inball", "3 2\n-1 0 0\n0 -1 0\n3 4 12\n0\n", "1\n");
    }

    #[test]
    fn interval_and_half_plane() {
        // [-1, 3] on the line holds a ball of radius 2; a single half-plane holds any ball
        assert_solves("inball", "2 1\n1 3\n-1 1\n1 2\n1 0 5\n0\n", "2\ninf\n");
    }
}
