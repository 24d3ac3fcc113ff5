use super::*;

/// Snow cannons first all spray with the common radius `r` of `use_them_all`; afterwards each
/// may grow its own radius as long as no two discs overlap. Prints the largest possible total
/// growth, rounded up.
pub struct SoftwareUpdate;

impl Problem for SoftwareUpdate {
    const NAME: &'static str = "software_update";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of cannons")?;
        let cannons = (0..n)
            .map(|_| input.next_point("cannon"))
            .collect::<std::io::Result<Vec<_>>>()?;

        let r = super::use_them_all::closest_squared_distance(&cannons)
            .map_or(0, |d| super::use_them_all::floor_half_distance(&d)) as f64;

        // variable i is the radius of cannon i, at least r
        let mut lp = LinearProgram::new(Relation::Smaller, Some(r), None);
        let mut row = 0;
        for (i, p) in cannons.iter().enumerate() {
            for (j, q) in cannons.iter().enumerate().skip(i + 1) {
                lp.set_a(i, row, 1.0);
                lp.set_a(j, row, 1.0);
                lp.set_b(row, p.distance(q));
                row += 1;
            }
            lp.set_c(i, 1.0);
        }
        lp.set_c0(-(n as f64) * r);

        let growth = match lp.maximize()? {
            LpStatus::Optimal(solution) => ceil_to_i64(solution.objective),
            status => return Err(SolveError::Lp(format!("radii program is {status:?}"))),
        };
        debug!("common radius {r}, total growth {growth}");
        writeln!(output, "{growth}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn total_growth() {
        // r = 2 for the first case; the far cannon grows to 94
        assert_solves(
            "software_update",
            "3\n3\n0 0\n4 0\n100 0\n2\n0 0\n10 0\n3\n0 0\n2 0\n5 5\n",
            "92\n0\n4",
        );
    }
}
