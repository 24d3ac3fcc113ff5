use super::*;

pub trait EdgeOps {
    fn normalized(&self) -> Self;
    fn is_normalized(&self) -> bool;
    fn is_loop(&self) -> bool;
    fn reverse(&self) -> Self;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

/// An edge with a weight; ordered by weight first, which is what Kruskal wants
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge<W>(pub W, pub Node, pub Node);

impl EdgeOps for Edge {
    fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl<W: Copy> EdgeOps for WeightedEdge<W> {
    fn normalized(&self) -> Self {
        WeightedEdge(self.0, self.1.min(self.2), self.1.max(self.2))
    }

    fn is_normalized(&self) -> bool {
        self.1 <= self.2
    }

    fn is_loop(&self) -> bool {
        self.1 == self.2
    }

    fn reverse(&self) -> Self {
        WeightedEdge(self.0, self.2, self.1)
    }
}

impl<W> WeightedEdge<W> {
    pub fn endpoints(&self) -> Edge {
        Edge(self.1, self.2)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 1).is_loop());
        assert!(!Edge(2, 1).is_normalized());
        assert_eq!(WeightedEdge(7, 5, 2).normalized(), WeightedEdge(7, 2, 5));
        assert!(WeightedEdge(1, 4, 2) < WeightedEdge(2, 0, 1));
    }
}
