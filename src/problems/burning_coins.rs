use super::*;

/// Two players alternately take a coin from either end of a row; the opponent plays to minimise
/// our gain. Prints the value we can guarantee when moving first.
pub struct BurningCoins;

fn guaranteed_value(values: &[u64]) -> u64 {
    let n = values.len();
    if n == 0 {
        return 0;
    }

    // best[i][j]: guaranteed value on values[i..=j] when it is our turn
    let mut best = vec![vec![0u64; n]; n];
    for len in 1..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            best[i][j] = match len {
                1 => values[i],
                2 => values[i].max(values[j]),
                _ => {
                    let take_left = values[i] + best[i + 2][j].min(best[i + 1][j - 1]);
                    let take_right = values[j] + best[i + 1][j - 1].min(best[i][j - 2]);
                    take_left.max(take_right)
                }
            };
        }
    }
    best[0][n - 1]
}

impl Problem for BurningCoins {
    const NAME: &'static str = "burning_coins";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of coins")?;
        let values: Vec<u64> = input.next_vec(n, "coin value")?;
        writeln!(output, "{}", guaranteed_value(&values))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    fn minimax(values: &[u64], ours: bool) -> u64 {
        match values {
            [] => 0,
            [first, .., last] if ours => {
                (first + minimax(&values[1..], false)).max(last + minimax(&values[..values.len() - 1], false))
            }
            [x] if ours => *x,
            _ => minimax(&values[1..], true).min(minimax(&values[..values.len() - 1], true)),
        }
    }

    #[test]
    fn agrees_with_game_tree() {
        let values = [5u64, 3, 8, 1, 9, 2, 2, 7, 4];
        for len in 0..=values.len() {
            assert_eq!(guaranteed_value(&values[..len]), minimax(&values[..len], true), "{len}");
        }
    }

    #[test]
    fn sample() {
        assert_solves("burning_coins", "2\n3\n1 2 3\n2\n1 2\n", "4\n2\n");
    }
}
