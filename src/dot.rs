use crate::common::{HashSet, NodeId};

/// Graphviz `dot` output for a ZDD rooted at a given node.
pub trait Dot {
    fn dot_string(&self, root: NodeId) -> String {
        let mut buf = Vec::new();
        self.dot(&mut buf, root);
        String::from_utf8(buf).expect("dot output is always valid UTF-8")
    }

    fn dot<T>(&self, io: &mut T, root: NodeId)
    where
        T: std::io::Write,
    {
        io.write_all(
            b"digraph { layout=dot; overlap=false; splines=true; node [fontsize=10];\n",
        )
        .unwrap();
        let mut visited: HashSet<NodeId> = HashSet::default();
        self.dot_impl(io, root, &mut visited);
        io.write_all(b"}\n").unwrap();
    }

    fn dot_impl<T>(&self, io: &mut T, id: NodeId, visited: &mut HashSet<NodeId>)
    where
        T: std::io::Write;
}
