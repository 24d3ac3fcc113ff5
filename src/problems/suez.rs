use super::*;

/// New posters of size `w x h` are centred on free nails and may be scaled by a factor of at
/// least one; old posters on occupied nails keep their size. Posters must not overlap. Prints
/// the largest total perimeter of the new posters, rounded up.
pub struct Suez;

impl Problem for Suez {
    const NAME: &'static str = "suez";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of free nails")?;
        let m: usize = input.next("number of occupied nails")?;
        let h: f64 = input.next("poster height")?;
        let w: f64 = input.next("poster width")?;
        let free = (0..n)
            .map(|_| input.next_point("free nail"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let occupied = (0..m)
            .map(|_| input.next_point("occupied nail"))
            .collect::<std::io::Result<Vec<_>>>()?;

        // scale factors a_i, a_j of posters at p and q fit iff their sum is at most this
        let room = |p: &Point, q: &Point| 2.0 * ((p.x - q.x).abs() / w).max((p.y - q.y).abs() / h);

        let mut lp = LinearProgram::new(Relation::Smaller, Some(1.0), None);
        let mut row = 0;
        for (i, p) in free.iter().enumerate() {
            for (j, q) in free.iter().enumerate().skip(i + 1) {
                lp.set_a(i, row, 1.0);
                lp.set_a(j, row, 1.0);
                lp.set_b(row, room(p, q));
                row += 1;
            }

            if let Some(limit) = occupied.iter().map(|q| room(p, q)).min_by(f64::total_cmp) {
                lp.set_a(i, row, 1.0);
                lp.set_b(row, limit - 1.0);
                row += 1;
            }
            lp.set_c(i, 2.0 * (h + w));
        }

        match lp.maximize()? {
            LpStatus::Optimal(solution) => writeln!(output, "{}", ceil_to_i64(solution.objective))?,
            status => return Err(SolveError::Lp(format!("poster program is {status:?}"))),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn perimeters() {
        assert_solves(
            "suez",
            "3\n\
             2 0 1 1\n0 0\n4 0\n\
             1 1 1 2\n0 0\n3 0\n\
             1 1 2 3\n0 0\n4 0\n",
            "32\n12\n17",
        );
    }
}
