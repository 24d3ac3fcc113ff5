use super::*;

/// Two meeples race along a DAG towards position `n`. Each player moves its own meeple so as
/// to arrive quickly and the opponent's so as to arrive late; moves alternate in the order
/// red by Sherlock, black by Moriarty, black by Sherlock, red by Moriarty. Prints `0` if the red
/// meeple (Sherlock's) arrives first.
pub struct GreatGame;

impl Problem for GreatGame {
    const NAME: &'static str = "great_game";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of positions")?;
        let m: usize = input.next("number of transitions")?;
        let red: usize = input.next("red start")?;
        let black: usize = input.next("black start")?;

        let mut transitions = vec![Vec::new(); n + 1];
        for _ in 0..m {
            let u: usize = input.next("transition source")?;
            let v: usize = input.next("transition target")?;
            transitions[u].push(v);
        }

        // transitions always lead to larger positions
        let mut fastest = vec![0u32; n + 1];
        let mut slowest = vec![0u32; n + 1];
        for u in (1..n).rev() {
            fastest[u] = transitions[u].iter().map(|&v| slowest[v].saturating_add(1)).min().unwrap_or(u32::MAX);
            slowest[u] = transitions[u].iter().map(|&v| fastest[v].saturating_add(1)).max().unwrap_or(0);
        }

        let red_turn = match fastest[red] {
            s if s % 2 == 0 => 2 * s as u64,
            s => 2 * s as u64 - 1,
        };
        let black_turn = match fastest[black] {
            s if s % 2 == 0 => (2 * s as u64).saturating_sub(1),
            s => 2 * s as u64,
        };

        writeln!(output, "{}", if red_turn < black_turn { 0 } else { 1 })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn races() {
        // red arrives on the first move, black on the second
        assert_solves("great_game", "1\n3 3\n1 2\n1 3\n2 3\n1 2\n", "0\n");
        // red is two moves away while black needs one
        assert_solves("great_game", "1\n4 3\n1 3\n1 2\n2 4\n3 4\n", "1\n");
    }
}
