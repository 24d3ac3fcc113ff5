use fxhash::FxHashMap;

use super::*;

/// Number of ways to build a square frame from all planks, sides being unordered. Split and
/// list: the side lengths reachable by each half of the planks are enumerated and the halves
/// are matched up by complementary lengths.
pub struct Planks;

/// Occurrences of every side length quadruple when `lengths` are distributed over four
/// ordered sides, skipping quadruples with a side longer than `side`
fn side_lengths(lengths: &[u64], side: u64) -> FxHashMap<[u64; 4], u64> {
    let mut counts = FxHashMap::default();
    'assignments: for code in 0..1u64 << (2 * lengths.len()) {
        let mut sides = [0u64; 4];
        for (i, &l) in lengths.iter().enumerate() {
            let s = (code >> (2 * i) & 3) as usize;
            sides[s] += l;
            if sides[s] > side {
                continue 'assignments;
            }
        }
        *counts.entry(sides).or_default() += 1;
    }
    counts
}

fn square_frames(lengths: &[u64]) -> u64 {
    let total: u64 = lengths.iter().sum();
    if lengths.len() < 4 || total % 4 != 0 {
        return 0;
    }
    let side = total / 4;

    let (first, second) = lengths.split_at(lengths.len() / 2);
    let first = side_lengths(first, side);
    let second = side_lengths(second, side);

    let ordered: u64 = first
        .iter()
        .filter_map(|(sides, &count)| {
            let complement = sides.map(|s| side - s);
            second.get(&complement).map(|&other| count * other)
        })
        .sum();
    // every partition was counted once per ordering of its four sides
    ordered / 24
}

impl Problem for Planks {
    const NAME: &'static str = "planks";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of planks")?;
        let lengths: Vec<u64> = input.next_vec(n, "plank length")?;
        writeln!(output, "{}", square_frames(&lengths))?;
        Ok(Flow::Continue)
    }
}
