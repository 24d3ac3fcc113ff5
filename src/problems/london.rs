use fxhash::FxHashMap;

use super::*;

/// A newspaper page has a letter on each side of every cell; the back side is mirrored. Prints
/// "Yes" if cutting out cells and picking one side of each spells the note (in any order).
pub struct London;

impl Problem for London {
    const NAME: &'static str = "london";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let h: usize = input.next("number of rows")?;
        let w: usize = input.next("number of columns")?;
        let note = input.next_word("note")?;

        let front = (0..h)
            .map(|_| input.next_chars(w, "front letter"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let mut pairs: FxHashMap<(char, char), Capacity> = FxHashMap::default();
        for row in &front {
            let back = input.next_chars(w, "back letter")?;
            for (&a, &b) in row.iter().zip(back.iter().rev()) {
                *pairs.entry((a, b)).or_default() += 1;
            }
        }

        let mut letters: FxHashMap<char, Capacity> = FxHashMap::default();
        for c in note.chars() {
            *letters.entry(c).or_default() += 1;
        }

        let answer = if can_spell(&pairs, &letters) { "Yes" } else { "No" };
        writeln!(output, "{answer}")?;
        Ok(Flow::Continue)
    }
}

/// Cells with the same pair of letters are interchangeable, so the network has one node per
/// distinct pair and one per letter of the note
fn can_spell(
    pairs: &FxHashMap<(char, char), Capacity>,
    letters: &FxHashMap<char, Capacity>,
) -> bool {
    let mut network = FlowNetwork::new(2);
    let (source, target) = (0, 1);

    let mut letter_node: FxHashMap<char, Node> = FxHashMap::default();
    for (&c, &count) in letters {
        let u = network.add_node();
        network.add_edge(u, target, count);
        letter_node.insert(c, u);
    }

    for (&(a, b), &count) in pairs {
        let u = network.add_node();
        network.add_edge(source, u, count);
        for c in [a, b] {
            if let Some(&v) = letter_node.get(&c) {
                network.add_edge(u, v, count);
            }
        }
    }

    let needed: Capacity = letters.values().sum();
    let flow = network.max_flow(source, target);
    debug!("{} letter pairs cover {flow} of {needed} letters", pairs.len());
    flow == needed
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn notes() {
        // the cells hold (A, D) and (C, B)
        let page = "AC\nBD\n";
        let input = ["AB", "AA", "DB", "DA"]
            .map(|note| format!("1 2 {note}\n{page}"))
            .concat();
        assert_solves("london", &format!("4\n{input}"), "Yes\nNo\nYes\nNo");
    }

    #[test]
    fn same_letter_on_both_sides() {
        assert_solves("london", "1\n2 2 XXY\nXZ\nYX\nXY\nZZ\n", "Yes");
    }
}
