use super::*;
use std::collections::VecDeque;
use std::marker::PhantomData;

pub trait SequencedItem: Clone + Copy {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;
    fn new_without_predecessor(item: Node) -> Self;
    fn item(&self) -> Node;
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

// The traversal never takes self-loops, so a pair (u, u) encodes "no predecessor".
type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        (self.0 != self.1).then_some(self.0)
    }
}

pub trait NodeSequencer<T> {
    fn init(u: T) -> Self;
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Breadth-first search yielding nodes (or nodes with their predecessor) in visiting order
pub struct TraversalSearch<'a, G: AdjacencyList, S: NodeSequencer<I>, I: SequencedItem> {
    graph: &'a G,
    visited: Vec<bool>,
    sequencer: S,
    next_unvisited: Node,
    _item: PhantomData<I>,
}

pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G: AdjacencyList, S: NodeSequencer<I>, I: SequencedItem> Iterator
    for TraversalSearch<'_, G, S, I>
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for &v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.sequencer.push(I::new_with_predecessor(u, v));
                self.visited[v as usize] = true;
            }
        }

        Some(popped)
    }
}

impl<'a, G: AdjacencyList, S: NodeSequencer<I>, I: SequencedItem> TraversalSearch<'a, G, S, I> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            next_unvisited: 0,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        while (self.next_unvisited as usize) < self.visited.len() {
            let x = self.next_unvisited;
            self.next_unvisited += 1;
            if !self.visited[x as usize] {
                self.visited[x as usize] = true;
                self.sequencer.push(I::new_without_predecessor(x));
                return true;
            }
        }
        false
    }
}

pub trait Traversal: AdjacencyList + Sized {
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }
}

impl<G: AdjacencyList + Sized> Traversal for G {}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        let graph = AdjArray::test_only_from([(0, 1), (1, 2), (1, 3), (4, 5)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(4).collect_vec(), vec![4, 5]);
    }

    #[test]
    fn predecessors_and_restart() {
        let graph = AdjArray::test_only_from([(0, 1), (1, 2), (3, 4)]);
        let mut bfs = graph.bfs_with_predecessor(1);
        let first = bfs.by_ref().map(|x| (x.item(), x.predecessor())).collect_vec();
        assert_eq!(first, vec![(1, None), (0, Some(1)), (2, Some(1))]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().map(|x| x.item()).collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
    }
}
