/// ZDD (Zero-suppressed Binary Decision Diagram)
///
/// A ZDD is a rooted directed acyclic graph (DAG) with two terminal nodes,
/// `⊥` (zero) and `⊤` (one). Each non-terminal node carries a 64-bit
/// variable id and two edges, `hi` and `lo`; zero-suppression means a node
/// whose `hi` edge is `⊥` is elided in favor of its `lo` edge.
///
/// The manager owns a unique table mapping `(var, hi, lo)` to node identity
/// (hash-consing: structurally equal triples are the same node) plus one
/// memoization cache per binary operation (`union`, `crossUnion`).
///
/// There is no separate header/level table: `var` is already the globally
/// unique 64-bit id produced by the expression-lowering hash, so a node
/// stores it directly instead of indirecting through a named, reorderable
/// variable.
use log::trace;

use crate::common::{HashMap, HashSet, NodeId, Var};
use crate::dot::Dot;

#[derive(Debug)]
pub struct NonTerminal {
    id: NodeId,
    var: Var,
    hi: NodeId,
    lo: NodeId,
}

impl NonTerminal {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn var(&self) -> Var {
        self.var
    }

    #[inline]
    pub fn hi(&self) -> NodeId {
        self.hi
    }

    #[inline]
    pub fn lo(&self) -> NodeId {
        self.lo
    }
}

#[derive(Debug)]
pub enum Node {
    NonTerminal(NonTerminal),
    Zero,
    One,
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Self::NonTerminal(n) => n.id(),
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

pub struct ZddManager {
    nodes: Vec<Node>,
    zero: NodeId,
    one: NodeId,
    utable: HashMap<(Var, NodeId, NodeId), NodeId>,
    union_cache: HashMap<(NodeId, NodeId), NodeId>,
    cross_cache: HashMap<(NodeId, NodeId), NodeId>,
}

impl Default for ZddManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ZddManager {
    pub fn new() -> Self {
        let mut nodes = Vec::default();
        let zero = {
            let n = Node::Zero;
            let id = n.id();
            nodes.push(n);
            id
        };
        let one = {
            let n = Node::One;
            let id = n.id();
            nodes.push(n);
            id
        };
        Self {
            nodes,
            zero,
            one,
            utable: HashMap::default(),
            union_cache: HashMap::default(),
            cross_cache: HashMap::default(),
        }
    }

    #[inline]
    pub fn zero(&self) -> NodeId {
        self.zero
    }

    #[inline]
    pub fn one(&self) -> NodeId {
        self.one
    }

    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The node's variable id, or `None` for a sink (sinks act as `+∞` in
    /// the variable ordering).
    pub fn var(&self, id: NodeId) -> Option<Var> {
        match self.nodes.get(id) {
            Some(Node::NonTerminal(n)) => Some(n.var),
            _ => None,
        }
    }

    pub fn hi(&self, id: NodeId) -> Option<NodeId> {
        match self.nodes.get(id) {
            Some(Node::NonTerminal(n)) => Some(n.hi),
            _ => None,
        }
    }

    pub fn lo(&self, id: NodeId) -> Option<NodeId> {
        match self.nodes.get(id) {
            Some(Node::NonTerminal(n)) => Some(n.lo),
            _ => None,
        }
    }

    fn hi_lo(&self, id: NodeId) -> (NodeId, NodeId) {
        match self.nodes.get(id) {
            Some(Node::NonTerminal(n)) => (n.hi, n.lo),
            other => panic!("hi_lo called on a sink or unknown node: {:?}", other),
        }
    }

    /// `(node count, union cache size, crossUnion cache size)`.
    pub fn size(&self) -> (usize, usize, usize) {
        (self.nodes.len(), self.union_cache.len(), self.cross_cache.len())
    }

    /// The unique-node constructor: zero-suppress, then hash-cons against
    /// the unique table.
    pub fn make(&mut self, var: Var, hi: NodeId, lo: NodeId) -> NodeId {
        if hi == self.zero {
            return lo;
        }
        debug_assert!(
            self.var(hi).map_or(true, |h| var < h),
            "make: var {} must be less than hi's var",
            var
        );
        debug_assert!(
            self.var(lo).map_or(true, |l| var < l),
            "make: var {} must be less than lo's var",
            var
        );
        let key = (var, hi, lo);
        if let Some(&id) = self.utable.get(&key) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::NonTerminal(NonTerminal { id, var, hi, lo }));
        self.utable.insert(key, id);
        trace!("zdd: created node {} (var={}, hi={}, lo={})", id, var, hi, lo);
        id
    }

    pub fn singleton(&mut self, var: Var) -> NodeId {
        let one = self.one;
        let zero = self.zero;
        self.make(var, one, zero)
    }

    fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// `union(a, b)` — the set-theoretic union of the two ZDDs.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> NodeId {
        if a == self.zero {
            return b;
        }
        if b == self.zero {
            return a;
        }
        if a == self.one && b == self.one {
            return self.one;
        }
        if a == b {
            return a;
        }

        let key = Self::canonical_pair(a, b);
        if let Some(&cached) = self.union_cache.get(&key) {
            return cached;
        }
        let (x, y) = key;

        let result = match (self.var(x), self.var(y)) {
            (Some(vx), Some(vy)) if vx < vy => {
                let (hx, lx) = self.hi_lo(x);
                let new_lo = self.union(lx, y);
                self.make(vx, hx, new_lo)
            }
            (Some(vx), Some(vy)) if vx > vy => {
                let (hy, ly) = self.hi_lo(y);
                let new_lo = self.union(x, ly);
                self.make(vy, hy, new_lo)
            }
            (Some(vx), Some(_vy)) => {
                let (hx, lx) = self.hi_lo(x);
                let (hy, ly) = self.hi_lo(y);
                let new_hi = self.union(hx, hy);
                let new_lo = self.union(lx, ly);
                self.make(vx, new_hi, new_lo)
            }
            // y is a sink (⊤, since ⊥ was handled above): treat var(y) = +∞.
            (Some(vx), None) => {
                let (hx, lx) = self.hi_lo(x);
                let new_lo = self.union(lx, y);
                self.make(vx, hx, new_lo)
            }
            (None, Some(vy)) => {
                let (hy, ly) = self.hi_lo(y);
                let new_lo = self.union(x, ly);
                self.make(vy, hy, new_lo)
            }
            (None, None) => unreachable!("both-sink case is handled by the identities above"),
        };
        self.union_cache.insert(key, result);
        result
    }

    /// `crossUnion(a, b)` — the pairwise union of set-members: every member
    /// of `a` combined with every member of `b`.
    pub fn cross_union(&mut self, a: NodeId, b: NodeId) -> NodeId {
        if a == self.zero || b == self.zero {
            return self.zero;
        }
        if a == self.one {
            return b;
        }
        if b == self.one {
            return a;
        }

        let key = Self::canonical_pair(a, b);
        if let Some(&cached) = self.cross_cache.get(&key) {
            return cached;
        }
        let (x, y) = key;

        let result = match (self.var(x), self.var(y)) {
            (Some(vx), Some(vy)) if vx < vy => {
                let (hx, lx) = self.hi_lo(x);
                let new_hi = self.cross_union(hx, y);
                let new_lo = self.cross_union(lx, y);
                self.make(vx, new_hi, new_lo)
            }
            (Some(vx), Some(vy)) if vx > vy => {
                let (hy, ly) = self.hi_lo(y);
                let new_hi = self.cross_union(x, hy);
                let new_lo = self.cross_union(x, ly);
                self.make(vy, new_hi, new_lo)
            }
            (Some(vx), Some(_vy)) => {
                let (hx, lx) = self.hi_lo(x);
                let (hy, ly) = self.hi_lo(y);
                let hh = self.cross_union(hx, hy);
                let hl = self.cross_union(hx, ly);
                let lh = self.cross_union(lx, hy);
                let shared = self.union(hl, lh);
                let new_hi = self.union(hh, shared);
                let new_lo = self.cross_union(lx, ly);
                self.make(vx, new_hi, new_lo)
            }
            _ => unreachable!("sinks are handled by the identities above"),
        };
        self.cross_cache.insert(key, result);
        result
    }

    /// Left-to-right fold of `union`, starting from `⊥`.
    pub fn union_all<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) -> NodeId {
        let zero = self.zero;
        ids.into_iter().fold(zero, |acc, id| self.union(acc, id))
    }

    /// Left-to-right fold of `crossUnion`, starting from `⊤`.
    pub fn cross_union_all<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) -> NodeId {
        let one = self.one;
        ids.into_iter().fold(one, |acc, id| self.cross_union(acc, id))
    }

    /// `(node count, edge count)` reachable from `node`.
    pub fn count(&self, node: NodeId) -> (u64, u64) {
        let mut visited = HashSet::default();
        self.count_impl(node, &mut visited)
    }

    fn count_impl(&self, node: NodeId, visited: &mut HashSet<NodeId>) -> (u64, u64) {
        if visited.contains(&node) {
            return (0, 0);
        }
        visited.insert(node);
        match self.get_node(node).unwrap() {
            Node::NonTerminal(n) => {
                let (n0, e0) = self.count_impl(n.lo, visited);
                let (n1, e1) = self.count_impl(n.hi, visited);
                (n0 + n1 + 1, e0 + e1 + 2)
            }
            Node::Zero | Node::One => (1, 0),
        }
    }
}

impl Dot for ZddManager {
    fn dot_impl<T>(&self, io: &mut T, id: NodeId, visited: &mut HashSet<NodeId>)
    where
        T: std::io::Write,
    {
        if visited.contains(&id) {
            return;
        }
        match self.get_node(id).unwrap() {
            Node::Zero => {
                io.write_all(format!("\"n{}\" [shape=square, label=\"0\"];\n", id).as_bytes())
                    .unwrap();
            }
            Node::One => {
                io.write_all(format!("\"n{}\" [shape=square, label=\"1\"];\n", id).as_bytes())
                    .unwrap();
            }
            Node::NonTerminal(n) => {
                io.write_all(
                    format!("\"n{}\" [shape=circle, label=\"{}\"];\n", id, n.var).as_bytes(),
                )
                .unwrap();
                self.dot_impl(io, n.lo, visited);
                io.write_all(format!("\"n{}\" -> \"n{}\" [style=dashed];\n", id, n.lo).as_bytes())
                    .unwrap();
                self.dot_impl(io, n.hi, visited);
                io.write_all(format!("\"n{}\" -> \"n{}\";\n", id, n.hi).as_bytes())
                    .unwrap();
            }
        }
        visited.insert(id);
    }
}
