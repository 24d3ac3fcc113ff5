use super::*;

/// Starting with `k` coins, the magician bets any part of the balance on each of `n` days and
/// wins day `i` with probability `p_i`. Prints the best probability of ending with at least
/// `m` coins.
pub struct MagicianCoin;

impl Problem for MagicianCoin {
    const NAME: &'static str = "magician_coin";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of days")?;
        let k: usize = input.next("starting balance")?;
        let m: usize = input.next("target balance")?;
        let probabilities: Vec<f64> = input.next_vec(n, "winning probability")?;

        writeln!(output, "{:.5}", winning_probability(&probabilities, k, m))?;
        Ok(Flow::Continue)
    }
}

fn winning_probability(probabilities: &[f64], k: usize, m: usize) -> f64 {
    if k >= m {
        return 1.0;
    }

    // chance[b]: best probability when entering the current day with balance b; balances of
    // at least m are capped at m since betting nothing from there on keeps the target
    let mut chance: Vec<f64> = (0..=m).map(|b| if b == m { 1.0 } else { 0.0 }).collect();
    for &p in probabilities.iter().rev() {
        chance = (0..=m)
            .map(|b| {
                (0..=b.min(m - b))
                    .map(|bet| p * chance[b + bet] + (1.0 - p) * chance[b - bet])
                    .fold(0.0, f64::max)
            })
            .collect();
    }
    chance[k]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn best_bets() {
        assert_solves(
            "magician_coin",
            "3\n1 1 2\n0.5\n1 2 2\n0.1\n2 1 3\n0.5 0.5\n",
            "0.50000\n1.00000\n0.25000",
        );
    }

    #[test]
    fn certain_wins() {
        assert_eq!(winning_probability(&[1.0, 1.0], 1, 4), 1.0);
        assert_eq!(winning_probability(&[1.0], 1, 4), 0.0);
        assert_eq!(winning_probability(&[], 3, 4), 0.0);
    }
}
