use super::*;

/// Cheapest way to buy at least `k` litres of punch from unlimited bottles; among the cheapest,
/// the one with the most distinct drinks. Prints "cost distinct".
pub struct Punch;

/// Minimal cost first, then maximal number of distinct drinks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Purchase {
    cost: u64,
    distinct: u32,
}

impl Purchase {
    const IMPOSSIBLE: Self = Self {
        cost: u64::MAX,
        distinct: 0,
    };

    fn better(self, other: Self) -> Self {
        if (self.cost, std::cmp::Reverse(self.distinct)) <= (other.cost, std::cmp::Reverse(other.distinct)) {
            self
        } else {
            other
        }
    }

    fn plus(self, cost: u64, new_drink: bool) -> Self {
        if self == Self::IMPOSSIBLE {
            return self;
        }
        Self {
            cost: self.cost + cost,
            distinct: self.distinct + new_drink as u32,
        }
    }
}

impl Problem for Punch {
    const NAME: &'static str = "punch";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of drinks")?;
        let k: usize = input.next("number of people")?;

        // best[v]: cheapest purchase of at least v litres from the drinks seen so far
        let mut best = vec![Purchase::IMPOSSIBLE; k + 1];
        best[0] = Purchase { cost: 0, distinct: 0 };

        for _ in 0..n {
            let cost: u64 = input.next("bottle cost")?;
            let volume: usize = input.next("bottle volume")?;

            // with_drink[v]: like best[v] but buying the current drink at least once
            let mut with_drink = vec![Purchase::IMPOSSIBLE; k + 1];
            for v in 1..=k {
                let rest = v.saturating_sub(volume);
                with_drink[v] = best[rest]
                    .plus(cost, true)
                    .better(with_drink[rest].plus(cost, false));
            }
            for (b, w) in best.iter_mut().zip(with_drink) {
                *b = b.better(w);
            }
        }

        let answer = best[k];
        writeln!(output, "{} {}", answer.cost, answer.distinct)?;
        Ok(Flow::Continue)
    }
}
