use super::*;

/// Distributes the available energy over the shots so that every particle receives at least
/// its density, where a shot of energy `e` delivers `e / max(1, d²)` to a particle at
/// squared distance `d²`. A shot's blast reaches up to and including the nearest bounty
/// hunter, which bounds the particles it affects. Feasibility of the resulting linear
/// program decides.
pub struct Strikesback;

impl Problem for Strikesback {
    const NAME: &'static str = "strikesback";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let a: usize = input.next("number of particles")?;
        let s: usize = input.next("number of shots")?;
        let b: usize = input.next("number of bounty hunters")?;
        let energy: f64 = input.next("available energy")?;

        let mut particles = Vec::with_capacity(a);
        for _ in 0..a {
            let p = input.next_point("particle")?;
            let density: f64 = input.next("particle density")?;
            particles.push((p, density));
        }
        let shots = (0..s)
            .map(|_| input.next_point("shot"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let hunters = (0..b)
            .map(|_| input.next_point("bounty hunter"))
            .collect::<std::io::Result<Vec<_>>>()?;

        let dt = Delaunay::from_points(&hunters);
        let blast_limits: Vec<Option<f64>> = shots
            .iter()
            .map(|shot| {
                dt.nearest_vertex(shot)
                    .map(|v| shot.squared_distance(&dt.point(v)))
            })
            .collect();

        let mut lp = LinearProgram::new(Relation::Larger, Some(0.0), None);
        for (row, (particle, density)) in particles.iter().enumerate() {
            for (col, (shot, limit)) in shots.iter().zip(&blast_limits).enumerate() {
                let d2 = particle.squared_distance(shot);
                if limit.is_none_or(|limit| d2 <= limit) {
                    lp.set_a(col, row, 1.0 / d2.max(1.0));
                }
            }
            lp.set_b(row, *density);
        }
        for col in 0..s {
            lp.set_a(col, a, 1.0);
        }
        lp.set_b(a, energy);
        lp.set_r(a, Relation::Smaller);

        let feasible = !matches!(lp.minimize()?, LpStatus::Infeasible);
        writeln!(output, "{}", if feasible { "y" } else { "n" })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn energy_distribution() {
        assert_solves(
            "strikesback",
            "4\n1 1 0 10\n0 0 5\n0 0\n\
             1 1 0 4\n0 0 5\n0 0\n\
             1 1 1 10\n3 0 1\n0 0\n2 0\n\
             2 2 0 4\n0 0 2\n10 0 2\n0 0\n10 0\n",
            "y\nn\nn\ny\n",
        );
    }

    #[test]
    fn particle_on_the_blast_boundary() {
        // squared distance 4 to the shot equals the squared distance to the hunter
        assert_solves("strikesback", "1\n1 1 1 10\n2 0 1\n0 0\n0 2\n", "y\n");
        // one step further out the blast no longer reaches
        assert_solves("strikesback", "1\n1 1 1 10\n3 0 1\n0 0\n0 2\n", "n\n");
    }
}
