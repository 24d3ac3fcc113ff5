use super::*;

/// Assets with cost, expected return and a covariance matrix; investors with a budget `C`,
/// a return target `R` and a risk limit `V`. An investor is served if the least risky
/// portfolio within budget reaching the target has risk at most `V`.
pub struct Portfolios;

const COST: usize = 0;
const RETURN: usize = 1;
const RISK_TOLERANCE: f64 = 1e-6;

impl Problem for Portfolios {
    const NAME: &'static str = "portfolios";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let Some(n) = input.try_next::<usize>("number of assets")? else {
            return Ok(Flow::Stop);
        };
        let m: usize = input.next("number of investors")?;
        if n == 0 && m == 0 {
            return Ok(Flow::Stop);
        }

        let mut qp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        qp.set_r(RETURN, Relation::Larger);
        for asset in 0..n {
            qp.set_a(asset, COST, input.next("asset cost")?);
            qp.set_a(asset, RETURN, input.next("asset return")?);
        }
        for i in 0..n {
            let row: Vec<f64> = input.next_vec(n, "covariance")?;
            for (j, &v) in row.iter().enumerate().take(i + 1) {
                qp.set_d(i, j, 2.0 * v);
            }
        }

        for _ in 0..m {
            let budget: f64 = input.next("budget")?;
            let target: f64 = input.next("return target")?;
            let max_risk: f64 = input.next("risk limit")?;
            qp.set_b(COST, budget);
            qp.set_b(RETURN, target);

            let served = match qp.minimize()? {
                LpStatus::Optimal(solution) => {
                    solution.objective <= max_risk + RISK_TOLERANCE * max_risk.abs().max(1.0)
                }
                _ => false,
            };
            writeln!(output, "{}", if served { "Yes." } else { "No." })?;
        }
        Ok(Flow::Continue)
    }
}
