use num::BigRational;

use super::*;

/// Warehouses ship beer to stadiums. Every stadium takes exactly its demand and at most `u`
/// litres of pure alcohol; every warehouse supplies a limited amount. Each litre from `i` to
/// `j` earns `r_ij`, minus a cent for every contour line crossed on the way. Prints the
/// largest profit, rounded down, or "RIOT!" if the demands cannot be met.
pub struct Worldcup;

struct Site {
    at: Point,
    amount: f64,
    alcohol: f64,
}

impl Problem for Worldcup {
    const NAME: &'static str = "worldcup";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of warehouses")?;
        let m: usize = input.next("number of stadiums")?;
        let c: usize = input.next("number of contour lines")?;

        let mut read_sites = |count: usize, what: &str| -> std::io::Result<Vec<Site>> {
            (0..count)
                .map(|_| {
                    Ok(Site {
                        at: input.next_point(what)?,
                        amount: input.next(what)?,
                        alcohol: input.next(what)?,
                    })
                })
                .collect()
        };
        let warehouses = read_sites(n, "warehouse")?;
        let stadiums = read_sites(m, "stadium")?;
        let revenues: Vec<f64> = input.next_vec(n * m, "revenue")?;

        // only contour lines enclosing a site can separate two of them
        let sites = warehouses.iter().chain(&stadiums).map(|s| s.at).collect::<Vec<_>>();
        let dt = Delaunay::from_points(&sites);
        let mut contours: Vec<(Point, BigRational)> = Vec::new();
        for _ in 0..c {
            let center = input.next_point("contour center")?;
            let r = to_rational(input.next::<f64>("contour radius")?);
            let squared_radius = &r * &r;
            let encloses = dt
                .nearest_vertex(&center)
                .is_some_and(|v| exact_squared_distance(&dt.point(v), &center) < squared_radius);
            if encloses {
                contours.push((center, squared_radius));
            }
        }
        debug!("{} of {c} contour lines enclose a site", contours.len());

        let inside = |p: &Point| {
            contours
                .iter()
                .map(|(center, squared_radius)| exact_squared_distance(p, center) < *squared_radius)
                .collect::<Vec<_>>()
        };
        let warehouse_inside = warehouses.iter().map(|w| inside(&w.at)).collect::<Vec<_>>();
        let stadium_inside = stadiums.iter().map(|s| inside(&s.at)).collect::<Vec<_>>();

        // variable i * m + j: litres from warehouse i to stadium j
        let mut lp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        for (i, warehouse) in warehouses.iter().enumerate() {
            lp.set_b(i, warehouse.amount);
            for j in 0..m {
                lp.set_a(i * m + j, i, 1.0);
            }
        }
        for (j, stadium) in stadiums.iter().enumerate() {
            let (demand_row, alcohol_row) = (n + j, n + m + j);
            lp.set_r(demand_row, Relation::Equal);
            lp.set_b(demand_row, stadium.amount);
            lp.set_b(alcohol_row, 100.0 * stadium.alcohol);
            for (i, warehouse) in warehouses.iter().enumerate() {
                lp.set_a(i * m + j, demand_row, 1.0);
                lp.set_a(i * m + j, alcohol_row, warehouse.alcohol);

                let crossings = warehouse_inside[i]
                    .iter()
                    .zip(&stadium_inside[j])
                    .filter(|(a, b)| a != b)
                    .count();
                lp.set_c(i * m + j, revenues[i * m + j] - crossings as f64 / 100.0);
            }
        }

        match lp.maximize()? {
            LpStatus::Optimal(solution) => writeln!(output, "{}", floor_to_i64(solution.objective))?,
            LpStatus::Infeasible => writeln!(output, "RIOT!")?,
            LpStatus::Unbounded => return Err(SolveError::Lp("beer program is unbounded".into())),
        }
        Ok(Flow::Continue)
    }
}
