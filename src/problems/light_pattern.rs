use super::*;

/// Fewest operations turning the bulbs into the pattern `x` repeated `n / k` times. An
/// operation toggles a single bulb or every bulb of a prefix. Scanning the blocks, the state
/// is whether the bulbs so far must end up inverted by a later prefix toggle.
pub struct LightPattern;

fn fewest_operations(bulbs: &[bool], pattern: &[bool]) -> usize {
    let k = pattern.len();
    let (plain, inverted) = bulbs.chunks(k).fold((0, 0), |(plain, inverted), block| {
        let mismatches = block.iter().zip(pattern).filter(|(b, p)| b != p).count();
        let matches = k - mismatches;
        (
            (mismatches + plain).min(matches + 1 + inverted),
            (matches + inverted).min(mismatches + 1 + plain),
        )
    });
    plain.min(inverted + 1)
}

impl Problem for LightPattern {
    const NAME: &'static str = "light_pattern";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of bulbs")?;
        let k: usize = input.next("pattern length")?;
        let x: u64 = input.next("pattern")?;

        let bulbs = input
            .next_vec::<u8>(n, "bulb")?
            .into_iter()
            .map(|b| b == 1)
            .collect::<Vec<_>>();
        let pattern = (0..k).rev().map(|i| x >> i & 1 == 1).collect::<Vec<_>>();

        writeln!(output, "{}", fewest_operations(&bulbs, &pattern))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn toggles() {
        assert_solves("light_pattern", "2\n2 1 1\n0 0\n4 2 2\n1 0 0 1\n", "1\n2\n");
    }

    #[test]
    fn inverted_prefix() {
        let pattern = [true, false];
        // the first three blocks are inverted, one prefix toggle fixes them
        let bulbs = [false, true, false, true, false, true, true, false];
        assert_eq!(fewest_operations(&bulbs, &pattern), 1);
        assert_eq!(fewest_operations(&[true, false], &pattern), 0);
    }
}
