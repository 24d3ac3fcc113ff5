use std::collections::BTreeSet;

use itertools::Itertools;

use super::*;

/// Customers walk at most this far to a bar
const MAX_WALK: i64 = 100;

/// Places a bar on an integer coordinate that maximises the number of parasols within walking
/// distance, breaking ties by the longest walk. Prints the optimum and all optimal locations.
pub struct BeachBars;

impl Problem for BeachBars {
    const NAME: &'static str = "beach_bars";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of parasols")?;
        let mut coords: Vec<i64> = input.next_vec(n, "parasol coordinate")?;
        coords.sort_unstable();

        let mut best = (0, i64::MAX);
        let mut locations = BTreeSet::new();
        let mut left = 0;
        for (right, &cr) in coords.iter().enumerate() {
            while cr - coords[left] > 2 * MAX_WALK {
                left += 1;
            }
            let cl = coords[left];

            // on an odd span both integers around the midpoint are optimal
            let sum = cl + cr;
            let x = sum.div_euclid(2);
            let walk = (x - cl).max(cr - x);
            let candidate = (right - left + 1, walk);

            let better = candidate.0 > best.0 || (candidate.0 == best.0 && walk < best.1);
            if better {
                best = candidate;
                locations.clear();
            }
            if better || candidate == best {
                locations.insert(x);
                if sum.rem_euclid(2) == 1 {
                    locations.insert(x + 1);
                }
            }
        }

        writeln!(output, "{} {}", best.0, best.1)?;
        writeln!(output, "{}", locations.iter().join(" "))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn optimal_locations() {
        assert_solves(
            "beach_bars",
            "3\n4\n1 3 2 4\n1\n-7\n4\n-300 0 300 600\n",
            "4 2\n2 3\n1 0\n-7\n1 0\n-300 0 300 600\n",
        );
    }

    #[test]
    fn span_limit() {
        assert_solves("beach_bars", "1\n3\n0 200 201\n", "2 1\n200 201\n");
    }
}
