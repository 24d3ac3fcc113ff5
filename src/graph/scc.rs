use super::*;

pub trait StronglyConnected {
    /// Labels every node with its strongly connected component (Tarjan's algorithm).
    /// Components are numbered in reverse topological order of the condensation, i.e.
    /// arcs between components always point to a smaller label.
    fn strongly_connected_components(&self) -> (NumNodes, Vec<NumNodes>);
}

const UNVISITED: Node = Node::MAX;

impl<W: Copy> StronglyConnected for WeightedGraph<W> {
    fn strongly_connected_components(&self) -> (NumNodes, Vec<NumNodes>) {
        let n = self.len();
        let mut index = vec![UNVISITED; n];
        let mut low = vec![0; n];
        let mut on_stack = vec![false; n];
        let mut component = vec![0; n];
        let mut tarjan_stack = Vec::new();
        let mut next_index = 0;
        let mut components = 0;

        // (node, position in its arc list)
        let mut call_stack: Vec<(Node, usize)> = Vec::new();

        for root in self.vertices() {
            if index[root as usize] != UNVISITED {
                continue;
            }

            call_stack.push((root, 0));
            while let Some(top) = call_stack.last_mut() {
                let (u, pos) = *top;
                let ui = u as usize;
                if index[ui] == UNVISITED {
                    index[ui] = next_index;
                    low[ui] = next_index;
                    next_index += 1;
                    tarjan_stack.push(u);
                    on_stack[ui] = true;
                }

                if let Some(&(v, _)) = self.arcs_of(u).get(pos) {
                    top.1 += 1;
                    let vi = v as usize;
                    if index[vi] == UNVISITED {
                        call_stack.push((v, 0));
                    } else if on_stack[vi] {
                        low[ui] = low[ui].min(index[vi]);
                    }
                    continue;
                }

                call_stack.pop();
                if let Some(&(parent, _)) = call_stack.last() {
                    low[parent as usize] = low[parent as usize].min(low[ui]);
                }

                if low[ui] == index[ui] {
                    while let Some(w) = tarjan_stack.pop() {
                        on_stack[w as usize] = false;
                        component[w as usize] = components;
                        if w == u {
                            break;
                        }
                    }
                    components += 1;
                }
            }
        }

        (components, component)
    }
}
