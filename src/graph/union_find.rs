use super::*;

/// Disjoint sets over `0..n` with path compression and union by size
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    number_of_sets: NumNodes,
}

impl UnionFind {
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            number_of_sets: n,
        }
    }

    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut v = u;
        while self.parent[v as usize] != root {
            let next = self.parent[v as usize];
            self.parent[v as usize] = root;
            v = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`. Returns *false* if they were already joined.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (mut ru, mut rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        if self.size[ru as usize] < self.size[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }

        self.parent[rv as usize] = ru;
        self.size[ru as usize] += self.size[rv as usize];
        self.number_of_sets -= 1;
        true
    }

    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    pub fn set_size(&mut self, u: Node) -> NumNodes {
        let root = self.find(u);
        self.size[root as usize]
    }

    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unions() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));

        assert!(uf.same_set(0, 3));
        assert!(!uf.same_set(0, 4));
        assert_eq!(uf.set_size(2), 4);
        assert_eq!(uf.number_of_sets(), 3);
    }
}
