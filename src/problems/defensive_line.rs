use super::*;

/// `m` attackers each pick an interval of consecutive defenders with total strength exactly
/// `k`; intervals must be disjoint. Prints the largest number of attacked defenders if every
/// attacker gets an interval, else "fail".
pub struct DefensiveLine;

impl Problem for DefensiveLine {
    const NAME: &'static str = "defensive_line";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of defenders")?;
        let m: usize = input.next("number of attackers")?;
        let k: u64 = input.next("attack strength")?;
        let strengths: Vec<u64> = input.next_vec(n, "defence value")?;

        match most_defenders(&strengths, m, k) {
            Some(covered) => writeln!(output, "{covered}")?,
            None => writeln!(output, "fail")?,
        }
        Ok(Flow::Continue)
    }
}

/// All intervals `[left, right]` summing to `k`, ordered by both endpoints
fn exact_intervals(strengths: &[u64], k: u64) -> Vec<(usize, usize)> {
    let mut intervals = Vec::new();
    let mut left = 0;
    let mut sum = 0;
    for (right, &v) in strengths.iter().enumerate() {
        sum += v;
        while sum > k && left <= right {
            sum -= strengths[left];
            left += 1;
        }
        if sum == k && left <= right {
            intervals.push((left, right));
        }
    }
    intervals
}

fn most_defenders(strengths: &[u64], m: usize, k: u64) -> Option<usize> {
    let intervals = exact_intervals(strengths, k);
    debug!("{} intervals of strength {k}", intervals.len());
    if intervals.len() < m {
        return None;
    }

    // number of intervals ending before interval j starts
    let disjoint_prefix = intervals
        .iter()
        .map(|&(left, _)| intervals.partition_point(|&(_, right)| right < left))
        .collect::<Vec<_>>();

    // best[j]: largest total length of `attackers` disjoint intervals among the first j
    let mut best: Vec<Option<usize>> = vec![Some(0); intervals.len() + 1];
    for _ in 0..m {
        let mut next = vec![None; intervals.len() + 1];
        for (j, &(left, right)) in intervals.iter().enumerate() {
            let take = best[disjoint_prefix[j]].map(|covered| covered + right - left + 1);
            next[j + 1] = next[j].max(take);
        }
        best = next;
    }
    best[intervals.len()]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn attacks() {
        assert_solves(
            "defensive_line",
            "3\n5 2 3\n1 2 1 1 1\n5 3 3\n1 2 1 1 1\n3 1 10\n1 1 1\n",
            "5\nfail\nfail",
        );
    }

    #[test]
    fn intervals_with_exact_sum() {
        assert_eq!(exact_intervals(&[1, 2, 1, 1, 1], 3), vec![(0, 1), (1, 2), (2, 4)]);
        assert_eq!(exact_intervals(&[5, 1, 4], 5), vec![(0, 0), (1, 2)]);
        assert_eq!(most_defenders(&[5, 1, 4], 1, 5), Some(2));
        assert_eq!(most_defenders(&[5, 1, 4], 2, 5), Some(3));
    }
}
