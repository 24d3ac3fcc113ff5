use super::*;

/// Up to five stacks of coloured chips. Removing the equally coloured top chips of `k >= 2`
/// stacks at once scores `2^(k-2)` points. The table is indexed by the current stack heights
/// in mixed radix and filled from empty stacks upwards.
pub struct PokerChips;

fn max_points(stacks: &[Vec<u32>]) -> u64 {
    let n = stacks.len();
    let mut strides = vec![1usize; n];
    for i in 1..n {
        strides[i] = strides[i - 1] * (stacks[i - 1].len() + 1);
    }
    let states = strides.last().map_or(1, |&s| s * (stacks[n - 1].len() + 1));

    let mut best = vec![0u64; states];
    let mut heights = vec![0usize; n];
    for state in 0..states {
        let mut rest = state;
        for i in (0..n).rev() {
            heights[i] = rest / strides[i];
            rest %= strides[i];
        }

        for subset in 1usize..1 << n {
            let mut colour = None;
            let mut removed = 0;
            let mut previous = state;
            let valid = (0..n).filter(|&i| subset >> i & 1 == 1).all(|i| {
                let Some(h) = heights[i].checked_sub(1) else { return false };
                previous -= strides[i];
                removed += 1;
                *colour.get_or_insert(stacks[i][h]) == stacks[i][h]
            });
            if !valid {
                continue;
            }
            let bonus = if removed >= 2 { 1 << (removed - 2) } else { 0 };
            best[state] = best[state].max(best[previous] + bonus);
        }
    }

    best[states - 1]
}

impl Problem for PokerChips {
    const NAME: &'static str = "poker_chips";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of stacks")?;
        let sizes: Vec<usize> = input.next_vec(n, "stack size")?;
        let stacks = sizes
            .iter()
            .map(|&m| input.next_vec(m, "chip colour"))
            .collect::<std::io::Result<Vec<_>>>()?;

        writeln!(output, "{}", max_points(&stacks))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn small_games() {
        assert_solves(
            "poker_chips",
            "3\n2\n2 2\n1 2\n3 2\n3\n1 1 1\n5\n5\n5\n3\n2 2 1\n1 2\n2 1\n1\n",
            "1\n2\n2\n",
        );
    }

    #[test]
    fn stacks_of_different_heights() {
        assert_eq!(max_points(&[]), 0);
        assert_eq!(max_points(&[vec![1, 1, 1]]), 0);
        // the tall stack has to be dug through before its bottom matches the others
        assert_eq!(max_points(&[vec![7, 2, 3], vec![7], vec![7]]), 2);
        assert_eq!(max_points(&[vec![1, 2], vec![2, 1], vec![1, 2], vec![2, 1]]), 6);
    }
}
