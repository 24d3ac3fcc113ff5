use super::*;

/// Largest number of 2x2 tiles on the free squares of a floor whose border is never free.
/// Rows are processed top to bottom. `best[t]` holds the most tiles in the rows so far when
/// the current row may only use the squares in the bit set `t`; a tile row covers two
/// consecutive rows with pairs of adjacent columns.
pub struct NewTiles;

/// Whether `t` uses free squares only and splits into pairs of adjacent columns
fn fits(t: u32, free: u32) -> bool {
    if t & !free != 0 {
        return false;
    }
    let mut rest = t;
    while rest != 0 {
        let low = rest & rest.wrapping_neg();
        if rest & (low << 1) == 0 {
            return false;
        }
        rest &= !(low | low << 1);
    }
    true
}

fn most_tiles(rows: &[u32], w: usize) -> u32 {
    let full = (1u32 << w) - 1;
    let mut best = vec![0u32; 1 << w];
    for pair in rows.windows(2) {
        let (above, row) = (pair[0], pair[1]);
        let mut next = vec![best[full as usize]; 1 << w];
        for t in 1..=full {
            let mut value = (0..w)
                .filter(|&j| t >> j & 1 == 1)
                .map(|j| next[(t & !(1 << j)) as usize])
                .max()
                .unwrap_or(0);
            if fits(t, above) && fits(t, row) {
                value = value.max(best[(full & !t) as usize] + t.count_ones() / 2);
            }
            next[t as usize] = value;
        }
        best = next;
    }
    best[full as usize]
}

impl Problem for NewTiles {
    const NAME: &'static str = "new_tiles";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let h: usize = input.next("floor height")?;
        let w: usize = input.next("floor width")?;
        let floor: Vec<u8> = input.next_vec(h * w, "square")?;

        if h < 4 || w < 4 {
            writeln!(output, "0")?;
            return Ok(Flow::Continue);
        }

        let rows: Vec<u32> = (1..h - 1)
            .map(|i| {
                (1..w - 1)
                    .filter(|&j| floor[i * w + j] == 1)
                    .fold(0, |bits, j| bits | 1 << (j - 1))
            })
            .collect();

        writeln!(output, "{}", most_tiles(&rows, w - 2))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn floors() {
        assert_solves(
            "new_tiles",
            "3\n4 4\n0 0 0 0\n0 1 1 0\n0 1 1 0\n0 0 0 0\n\
             5 6\n0 0 0 0 0 0\n0 1 1 1 1 0\n0 1 1 1 1 0\n0 1 1 1 1 0\n0 0 0 0 0 0\n\
             4 4\n0 0 0 0\n0 1 1 0\n0 1 0 0\n0 0 0 0\n",
            "1\n2\n0\n",
        );
    }

    #[test]
    fn pairs_of_columns() {
        assert!(fits(0b0110, 0b1111));
        assert!(fits(0b1111, 0b1111));
        assert!(!fits(0b0111, 0b1111));
        assert!(!fits(0b0101, 0b1111));
        assert!(!fits(0b0011, 0b0010));
        // staggered tiles in a 4x3 block
        assert_eq!(most_tiles(&[0b011, 0b111, 0b111, 0b110], 3), 2);
    }
}
