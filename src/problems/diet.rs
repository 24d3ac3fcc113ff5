use super::*;

/// Cheapest diet keeping every nutrient within its bounds; the cost is rounded down
pub struct Diet;

impl Problem for Diet {
    const NAME: &'static str = "diet";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let Some(n) = input.try_next::<usize>("number of nutrients")? else {
            return Ok(Flow::Stop);
        };
        let m: usize = input.next("number of foods")?;
        if n == 0 && m == 0 {
            return Ok(Flow::Stop);
        }

        // row i: at most the maximum of nutrient i, row n + i: at least its minimum
        let mut lp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        for i in 0..n {
            let min: f64 = input.next("nutrient minimum")?;
            let max: f64 = input.next("nutrient maximum")?;
            lp.set_b(i, max);
            lp.set_b(n + i, min);
            lp.set_r(n + i, Relation::Larger);
        }

        for food in 0..m {
            lp.set_c(food, input.next("food price")?);
            for i in 0..n {
                let amount: f64 = input.next("nutrient amount")?;
                lp.set_a(food, i, amount);
                lp.set_a(food, n + i, amount);
            }
        }

        match lp.minimize()? {
            LpStatus::Optimal(solution) => writeln!(output, "{}", floor_to_i64(solution.objective))?,
            _ => writeln!(output, "No such diet.")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn cheapest_diet() {
        assert_solves(
            "diet",
            "1 2\n2 4\n3 1\n5 2\n1 1\n5 6\n1 0\n0 0\n",
            "5\nNo such diet.\n",
        );
    }

    #[test]
    fn missing_nutrient_and_exact_amount() {
        // no food provides the first nutrient; then exactly two units of the only food
        assert_solves(
            "diet",
            "2 1\n1 1\n0 10\n3 0 5\n1 1\n4 4\n7 2\n0 0\n",
            "No such diet.\n14\n",
        );
    }
}
