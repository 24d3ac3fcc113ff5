use super::*;

/// Squared distance from every proposed location to the nearest existing restaurant
pub struct Bistro;

impl Problem for Bistro {
    const NAME: &'static str = "bistro";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of restaurants")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };
        let restaurants = (0..n)
            .map(|_| input.next_point("restaurant"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let dt = Delaunay::from_points(&restaurants);

        let m: usize = input.next("number of locations")?;
        let locations = (0..m)
            .map(|_| input.next_point("location"))
            .collect::<std::io::Result<Vec<_>>>()?;
        for (p, nearest) in locations.iter().zip(dt.nearest_vertices(&locations)) {
            let Some(v) = nearest else {
                continue;
            };
            let squared = exact_squared_distance(p, &dt.point(v));
            writeln!(output, "{}", squared.floor().to_integer())?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn nearest_restaurant() {
        assert_solves(
            "bistro",
            "2\n0 0\n10 0\n3\n1 1\n9 0\n5 5\n\
             4\n0 0\n100 0\n0 100\n100 100\n2\n40 45\n1000000 1000000\n0\n",
            "2\n1\n50\n3625\n1999600020000\n",
        );
    }

    #[test]
    fn single_and_collinear_restaurants() {
        assert_solves(
            "bistro",
            "1\n2 2\n2\n2 2\n-1 -2\n3\n0 0\n5 0\n10 0\n1\n7 1\n0\n",
            "0\n25\n5\n",
        );
    }
}
