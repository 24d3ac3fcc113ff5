use super::*;

/// Can the unknown round outcomes be filled in so that every player ends with the announced
/// score? Rounds with an unknown winner send one point to one of their two players.
pub struct CoinTossing;

impl Problem for CoinTossing {
    const NAME: &'static str = "coin_tossing";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of players")?;
        let m: NumNodes = input.next("number of rounds")?;

        let mut network = FlowNetwork::new(m + n);
        let source = network.add_node();
        let target = network.add_node();
        let player = |p: Node| m + p;

        let mut known = vec![0 as Capacity; n as usize];
        let mut open_rounds = 0;
        for round in 0..m {
            let a: Node = input.next("first player")?;
            let b: Node = input.next("second player")?;
            match input.next::<u8>("outcome")? {
                1 => known[a as usize] += 1,
                2 => known[b as usize] += 1,
                _ => {
                    network.add_edge(source, round, 1);
                    network.add_edge(round, player(a), 1);
                    network.add_edge(round, player(b), 1);
                    open_rounds += 1;
                }
            }
        }

        let mut consistent = true;
        let mut missing = 0;
        for p in 0..n {
            let score: Capacity = input.next("final score")?;
            let remaining = score - known[p as usize];
            if remaining < 0 {
                consistent = false;
            } else if remaining > 0 {
                network.add_edge(player(p), target, remaining);
                missing += remaining;
            }
        }

        let consistent = consistent
            && missing == open_rounds
            && network.max_flow(source, target) == missing;
        writeln!(output, "{}", if consistent { "yes" } else { "no" })?;
        Ok(Flow::Continue)
    }
}
