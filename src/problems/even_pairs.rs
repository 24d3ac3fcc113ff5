use super::*;

/// Number of pairs `(i, j)` with `i <= j` drawn from `n + 1` prefix sums that share the parity
/// of their sum; `even` counts the non-empty even prefixes.
pub(super) fn pairs_with_even_sum(even: u64, odd: u64) -> u64 {
    even * even.saturating_sub(1) / 2 + odd * odd.saturating_sub(1) / 2 + even
}

/// Counts the contiguous intervals of `values` whose sum is even
pub(super) fn even_intervals(values: impl IntoIterator<Item = u64>) -> u64 {
    let (mut even, mut odd, mut parity) = (0, 0, 0);
    for x in values {
        parity ^= x & 1;
        if parity == 0 {
            even += 1;
        } else {
            odd += 1;
        }
    }
    pairs_with_even_sum(even, odd)
}

/// Counts the intervals of a bit string containing an even number of ones
pub struct EvenPairs;

impl Problem for EvenPairs {
    const NAME: &'static str = "even_pairs";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("length")?;
        let bits: Vec<u64> = input.next_vec(n, "bit")?;
        writeln!(output, "{}", even_intervals(bits))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn brute_force() {
        let bits = [1u64, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1];
        let expected = (0..bits.len())
            .flat_map(|i| (i..bits.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| bits[i..=j].iter().sum::<u64>() % 2 == 0)
            .count() as u64;
        assert_eq!(even_intervals(bits), expected);
    }

    #[test]
    fn sample() {
        assert_solves("even_pairs", "2\n3\n1 1 1\n4\n0 0 0 0\n", "2\n10\n");
    }
}
