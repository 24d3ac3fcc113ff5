use super::*;

/// A pyramid of `n` bombs where bomb `j` rests on bombs `2j + 1` and `2j + 2`; a bomb can
/// only be defused once both bombs below it are, defusing takes a minute and bomb `j`
/// explodes at time `t_j`. Prints "yes" if all bombs can be defused in time.
pub struct Octopussy;

impl Problem for Octopussy {
    const NAME: &'static str = "octopussy";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of bombs")?;
        let timers: Vec<u64> = input.next_vec(n, "bomb timer")?;

        let answer = if Pyramid::new(&timers).defuse_all() { "yes" } else { "no" };
        writeln!(output, "{answer}")?;
        Ok(Flow::Continue)
    }
}

struct Pyramid<'a> {
    timers: &'a [u64],
    defused: Vec<bool>,
    time: u64,
}

impl<'a> Pyramid<'a> {
    fn new(timers: &'a [u64]) -> Self {
        Self {
            timers,
            defused: vec![false; timers.len()],
            time: 0,
        }
    }

    /// Greedy by urgency: always defuse the bomb exploding next, after what it rests on
    fn defuse_all(&mut self) -> bool {
        let mut order: Vec<usize> = (0..self.timers.len()).collect();
        order.sort_by_key(|&j| self.timers[j]);
        order.into_iter().all(|j| self.defuse(j))
    }

    fn defuse(&mut self, j: usize) -> bool {
        if self.defused[j] {
            return true;
        }

        let (a, b) = (2 * j + 1, 2 * j + 2);
        if b < self.timers.len() {
            let (first, second) = if self.timers[b] < self.timers[a] { (b, a) } else { (a, b) };
            if !self.defuse(first) || !self.defuse(second) {
                return false;
            }
        }

        if self.time + 1 > self.timers[j] {
            return false;
        }
        self.time += 1;
        self.defused[j] = true;
        true
    }
}
