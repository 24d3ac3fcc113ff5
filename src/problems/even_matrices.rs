use super::{even_pairs::even_intervals, *};

/// Counts the submatrices of a 0/1 matrix with an even sum. Fixes the pair of bounding rows
/// and counts even column intervals over the collapsed rows.
pub struct EvenMatrices;

impl Problem for EvenMatrices {
    const NAME: &'static str = "even_matrices";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("matrix size")?;
        let matrix: Vec<Vec<u64>> = (0..n)
            .map(|_| input.next_vec(n, "matrix entry"))
            .collect::<std::io::Result<_>>()?;

        let mut total = 0;
        for top in 0..n {
            let mut column_parity = vec![0u64; n];
            for row in &matrix[top..] {
                for (parity, x) in column_parity.iter_mut().zip(row) {
                    *parity ^= x & 1;
                }
                total += even_intervals(column_parity.iter().copied());
            }
        }

        writeln!(output, "{total}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn small_matrices() {
        assert_solves(
            "even_matrices",
            "3\n2\n1 1\n1 1\n1\n0\n2\n0 0\n0 0\n",
            "5\n1\n9\n",
        );
    }
}
