use super::*;

/// Dominoes topple to the right; domino `i` of height `h` knocks over everything before `i + h`.
/// Prints how many fall when the first one is pushed.
pub struct Dominoes;

impl Problem for Dominoes {
    const NAME: &'static str = "dominoes";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of dominoes")?;
        let heights: Vec<usize> = input.next_vec(n, "height")?;

        let mut reach = 1;
        for (i, &h) in heights.iter().enumerate() {
            if i >= reach {
                break;
            }
            reach = reach.max(i + h);
        }

        writeln!(output, "{}", reach.min(n))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn chain_reactions() {
        assert_solves(
            "dominoes",
            "3\n5\n2 2 1 1 1\n4\n1 1 1 1\n3\n5 1 1\n",
            "3\n1\n3\n",
        );
    }
}
