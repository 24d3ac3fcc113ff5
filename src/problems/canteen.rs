use super::*;

/// Menus are cooked on each day, may be kept in the freezer for later days and are sold to
/// the students of a day. Maximises the number of students served, then the profit.
pub struct Canteen;

impl Problem for Canteen {
    const NAME: &'static str = "canteen";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of days")?;

        let mut network = CostFlowNetwork::new(n);
        let source = network.add_node();
        let target = network.add_node();

        for day in 0..n {
            let menus: Capacity = input.next("menus cooked")?;
            let cost: Cost = input.next("cost per menu")?;
            network.add_edge(source, day, menus, cost);
        }

        let mut demand = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let students: Capacity = input.next("students")?;
            let price: Cost = input.next("menu price")?;
            demand.push((students, price));
        }
        let max_price = demand.iter().map(|&(_, p)| p).max().unwrap_or(0);
        let students_total: Capacity = demand.iter().map(|&(s, _)| s).sum();
        for (day, &(students, price)) in (0..n).zip(&demand) {
            network.add_edge(day, target, students, max_price - price);
        }

        for day in 1..n {
            let kept: Capacity = input.next("freezer capacity")?;
            let cost: Cost = input.next("freezer cost")?;
            network.add_edge(day - 1, day, kept, cost);
        }

        let (served, cost) = network.min_cost_max_flow(source, target);
        let profit = served * max_price - cost;
        let verdict = if served == students_total { "possible" } else { "impossible" };
        writeln!(output, "{verdict} {served} {profit}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn freezer() {
        assert_solves(
            "canteen",
            "2\n2\n3 1\n0 5\n1 4\n2 3\n2 1\n2\n3 1\n0 5\n1 4\n2 3\n1 1\n",
            "possible 3 5\nimpossible 2 4\n",
        );
    }
}
