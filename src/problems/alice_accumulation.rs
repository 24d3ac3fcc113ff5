use super::*;

/// A triangle of values where every entry collects the sub-triangle below it; prints the
/// largest such sum. Sub-triangles of neighbouring entries overlap in the one two rows down.
pub struct AliceAccumulation;

impl Problem for AliceAccumulation {
    const NAME: &'static str = "alice_accumulation";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let k: usize = input.next("number of rows")?;
        let mut rows = (0..k)
            .map(|i| input.next_vec::<i64>(i + 1, "value"))
            .collect::<std::io::Result<Vec<_>>>()?;

        writeln!(output, "{}", largest_subtriangle(&mut rows))?;
        Ok(Flow::Continue)
    }
}

/// Replaces every entry by the sum of the sub-triangle it spans and returns the maximum
fn largest_subtriangle(rows: &mut [Vec<i64>]) -> i64 {
    let k = rows.len();
    let mut best = i64::MIN;
    for i in (0..k).rev() {
        for j in 0..=i {
            if i + 1 < k {
                let mut below = rows[i + 1][j] + rows[i + 1][j + 1];
                if i + 2 < k {
                    below -= rows[i + 2][j + 1];
                }
                rows[i][j] += below;
            }
            best = best.max(rows[i][j]);
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn sums_of_subtriangles() {
        assert_solves(
            "alice_accumulation",
            "3\n2\n1\n2 3\n3\n1\n-1 -2\n3 4 5\n2\n-5\n-1 -2\n",
            "6\n10\n-1",
        );
    }

    #[test]
    fn single_entry() {
        assert_eq!(largest_subtriangle(&mut [vec![-7]]), -7);
    }
}
