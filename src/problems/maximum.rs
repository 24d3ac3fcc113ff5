use super::*;

/// Two small quadratic programs sharing their constraints up to sign. Type 1 maximizes
/// `b y - a x²` over `x, y >= 0`, `x + y <= 4`, `4x + 2y <= ab`, `y - x <= 1` and prints the
/// optimum rounded down. Type 2 minimizes `a x² + b y + z⁴` over `x, y <= 0`,
/// `x + y >= -4`, `4x + 2y + z² >= -ab`, `y - x >= -1` and prints it rounded up.
pub struct Maximum;

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// `x + y`, `4x + 2y` and `y - x` bounded by `4`, `ab` and `1`, with every right-hand side
/// multiplied by `sign`
fn shared_rows(qp: &mut LinearProgram, ab: f64, sign: f64) {
    for (row, (cx, cy, rhs)) in [(1.0, 1.0, 4.0), (4.0, 2.0, ab), (-1.0, 1.0, 1.0)]
        .into_iter()
        .enumerate()
    {
        qp.set_a(X, row, cx);
        qp.set_a(Y, row, cy);
        qp.set_b(row, sign * rhs);
    }
}

/// Type 1 as a minimization of `a x² - b y`
fn maximization(a: f64, b: f64) -> LinearProgram {
    let mut qp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
    shared_rows(&mut qp, a * b, 1.0);
    qp.set_d(X, X, 2.0 * a);
    qp.set_c(Y, -b);
    qp
}

/// Type 2 with `Z = z²` as a third, nonnegative variable
fn minimization(a: f64, b: f64) -> LinearProgram {
    let mut qp = LinearProgram::new(Relation::Larger, None, Some(0.0));
    shared_rows(&mut qp, a * b, -1.0);
    qp.set_a(Z, 1, 1.0);
    qp.set_l(Z, Some(0.0));
    qp.set_u(Z, None);
    qp.set_d(X, X, 2.0 * a);
    qp.set_d(Z, Z, 2.0);
    qp.set_c(Y, b);
    qp
}

impl Problem for Maximum {
    const NAME: &'static str = "maximum";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let kind: u32 = match input.try_next("problem type")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(kind) => kind,
        };
        let a: f64 = input.next("a")?;
        let b: f64 = input.next("b")?;

        let status = match kind {
            1 => maximization(a, b).minimize()?,
            2 => minimization(a, b).minimize()?,
            _ => return Err(SolveError::InvalidInput(format!("unknown problem type {kind}"))),
        };

        match status {
            LpStatus::Optimal(solution) if kind == 1 => {
                writeln!(output, "{}", floor_to_i64(-solution.objective))?
            }
            LpStatus::Optimal(solution) => writeln!(output, "{}", ceil_to_i64(solution.objective))?,
            LpStatus::Infeasible => writeln!(output, "no")?,
            LpStatus::Unbounded => writeln!(output, "unbounded")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn both_types() {
        // optima 4.11, -4.11, 5.22 and -5.30
        assert_solves(
            "maximum",
            "1 2 3\n2 2 3\n1 1 4\n2 1 4\n0\n",
            "4\n-4\n5\n-5\n",
        );
    }

    #[test]
    fn maximum_on_the_corner() {
        // y = 1 + x meets 4x + 2y = 6 at x = 2/3, where b y - a x² = 5 - 8/9
        let LpStatus::Optimal(solution) = maximization(2.0, 3.0).minimize().unwrap() else {
            panic!("type 1 is always feasible");
        };
        assert!((solution.value(0) - 2.0 / 3.0).abs() < 1e-5);
        assert!((-solution.objective - (5.0 - 8.0 / 9.0)).abs() < 1e-5);
    }

    #[test]
    fn flat_objective() {
        // a = b = 1: the optimum 1/2 is at x = 0, y = 1/2
        assert_solves("maximum", "1 1 1\n0\n", "0\n");
    }
}
