use super::*;

/// Cards with positive values; prints the interval `i j` whose sum is closest to `k`, the
/// lexicographically smallest one among ties.
pub struct DeckOfCards;

impl Problem for DeckOfCards {
    const NAME: &'static str = "deck_of_cards";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of cards")?;
        let k: i64 = input.next("target value")?;
        let values: Vec<i64> = input.next_vec(n, "card value")?;

        let (i, j) = closest_interval(&values, k);
        writeln!(output, "{i} {j}")?;
        Ok(Flow::Continue)
    }
}

/// Sliding window over non-empty intervals; for every right end only the left ends around
/// the point where the sum crosses `k` are candidates
fn closest_interval(values: &[i64], k: i64) -> (usize, usize) {
    let mut best = (i64::MAX, 0, 0);
    let mut left = 0;
    let mut sum = 0;
    for (right, &v) in values.iter().enumerate() {
        sum += v;
        best = best.min(((k - sum).abs(), left, right));
        while sum > k && left < right {
            sum -= values[left];
            left += 1;
            best = best.min(((k - sum).abs(), left, right));
        }
        if best.0 == 0 {
            break;
        }
    }
    (best.1, best.2)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn closest_sums() {
        assert_solves(
            "deck_of_cards",
            "3\n5 7\n1 2 3 4 5\n5 100\n1 2 3 4 5\n3 4\n5 1 1\n",
            "2 3\n0 4\n0 0",
        );
    }

    #[test]
    fn ties_prefer_earlier_intervals() {
        // 2 and 4 are both one away from 3
        assert_eq!(closest_interval(&[2, 4], 3), (0, 0));
        assert_eq!(closest_interval(&[4, 2], 3), (0, 0));
        assert_eq!(closest_interval(&[1, 1, 1], 2), (0, 1));
    }
}
