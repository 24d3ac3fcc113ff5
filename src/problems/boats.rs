use super::*;

/// Boats of length `l` are tied to rings at `p`; a boat must cover its ring and boats may not
/// overlap. Greedy by ring position: append whenever possible, otherwise replace the last boat
/// if that ends earlier.
pub struct Boats;

impl Problem for Boats {
    const NAME: &'static str = "boats";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of boats")?;
        let mut boats = Vec::with_capacity(n);
        for _ in 0..n {
            let length: i64 = input.next("boat length")?;
            let ring: i64 = input.next("ring position")?;
            boats.push((ring, length));
        }
        boats.sort_unstable();

        let mut count = 0;
        let (mut previous_end, mut end) = (i64::MIN, i64::MIN);
        for (p, l) in boats {
            if p >= end {
                count += 1;
                previous_end = end;
                end = end.saturating_add(l).max(p);
            } else {
                let replaced = previous_end.saturating_add(l).max(p);
                end = end.min(replaced);
            }
        }

        writeln!(output, "{count}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn greedy_by_ring() {
        assert_solves(
            "boats",
            "3\n3\n2 1\n3 6\n2 4\n3\n1 1\n10 2\n1 3\n4\n3 10\n5 2\n1 5\n1 6\n",
            "3\n2\n4\n",
        );
    }
}
