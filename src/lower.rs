//! Lowering of tree-set expressions into ZDDs.
//!
//! Two recursive procedures, `trees` and `subtrees`, share the same
//! djb2-variant rolling hash to derive 64-bit variable ids from the path of
//! symbols leading to a `Prefix` node. The hash is seeded at `1` for every
//! top-level call and is a pure function of the path, so identical sibling
//! paths collide onto the same variable and the ZDD shares their subgraphs
//! automatically.

use crate::common::{NodeId, Var};
use crate::expr::Expr;
use crate::zdd::ZddManager;

const SEED: Var = 1;

/// The djb2-variant mix: folds the low 32 bits of `seed` (in descending byte
/// order) and then the symbol's bytes into a running hash.
///
/// This exact recipe is part of the wire contract for variable ids — do not
/// substitute a different hash, even a "better" one; doing so would make
/// this implementation produce non-interoperable ZDDs for the same
/// expression.
pub fn mix(seed: Var, sym: &[u8]) -> Var {
    let mut h: Var = 5381;
    let low32 = (seed & 0xFFFF_FFFF) as u32;
    for b in low32.to_be_bytes() {
        h = h.wrapping_mul(33) ^ (b as Var);
    }
    for &c in sym {
        h = h.wrapping_mul(33) ^ (c as Var);
    }
    h
}

/// The ZDD whose elements are exactly the trees described by `expr`.
pub fn trees(mgr: &mut ZddManager, expr: &Expr) -> NodeId {
    trees_rec(mgr, expr, SEED)
}

fn trees_rec(mgr: &mut ZddManager, expr: &Expr, h: Var) -> NodeId {
    match expr {
        Expr::Bot => mgr.zero(),
        Expr::Top => mgr.one(),
        Expr::Prefix(symbol, child) => {
            let h2 = mix(h, symbol.as_bytes());
            let head = mgr.singleton(h2);
            let rest = trees_rec(mgr, child, h2);
            mgr.cross_union(head, rest)
        }
        Expr::Product(children) => {
            let lowered: Vec<NodeId> = children.iter().map(|c| trees_rec(mgr, c, h)).collect();
            mgr.cross_union_all(lowered)
        }
        Expr::Sum(children) => {
            let lowered: Vec<NodeId> = children.iter().map(|c| trees_rec(mgr, c, h)).collect();
            mgr.union_all(lowered)
        }
    }
}

/// The ZDD whose elements are every prefix-closed subtree (including the
/// empty one) of every tree in `expr`.
pub fn subtrees(mgr: &mut ZddManager, expr: &Expr) -> NodeId {
    subtrees_rec(mgr, expr, SEED)
}

fn subtrees_rec(mgr: &mut ZddManager, expr: &Expr, h: Var) -> NodeId {
    match expr {
        Expr::Bot => mgr.zero(),
        Expr::Top => mgr.one(),
        Expr::Prefix(symbol, child) => {
            let h2 = mix(h, symbol.as_bytes());
            let head = mgr.singleton(h2);
            let rest = subtrees_rec(mgr, child, h2);
            let selected = mgr.cross_union(head, rest);
            let one = mgr.one();
            mgr.union(one, selected)
        }
        Expr::Product(children) => {
            let lowered: Vec<NodeId> = children.iter().map(|c| subtrees_rec(mgr, c, h)).collect();
            mgr.cross_union_all(lowered)
        }
        Expr::Sum(children) => {
            let lowered: Vec<NodeId> = children.iter().map(|c| subtrees_rec(mgr, c, h)).collect();
            mgr.union_all(lowered)
        }
    }
}

/// Creates a fresh manager and lowers `expr` with it, for callers that don't
/// need to share caches across multiple top-level calls.
pub fn trees_fresh(expr: &Expr) -> (ZddManager, NodeId) {
    let mut mgr = ZddManager::new();
    let root = trees(&mut mgr, expr);
    (mgr, root)
}

/// As [`trees_fresh`], for `subtrees`.
pub fn subtrees_fresh(expr: &Expr) -> (ZddManager, NodeId) {
    let mut mgr = ZddManager::new();
    let root = subtrees(&mut mgr, expr);
    (mgr, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{branch, product, sum, Expr};

    #[test]
    fn s1_trees_of_top_is_one() {
        let (mut mgr, root) = trees_fresh(&Expr::Top);
        assert_eq!(root, mgr.one());
    }

    #[test]
    fn s2_trees_of_bot_is_zero() {
        let (mut mgr, root) = trees_fresh(&Expr::Bot);
        assert_eq!(root, mgr.zero());
    }

    #[test]
    fn s3_trees_of_branch_a_b_is_a_two_node_chain() {
        let h1 = mix(SEED, b"a");
        let h2 = mix(h1, b"b");
        let (mut mgr, root) = trees_fresh(&branch(["a", "b"]));

        let (lo_var, hi_var) = if h1 < h2 { (h1, h2) } else { (h2, h1) };
        assert_eq!(mgr.var(root), Some(lo_var));
        let hi_node = mgr.hi(root).unwrap();
        assert_eq!(mgr.var(hi_node), Some(hi_var));
        assert_eq!(mgr.lo(root), Some(mgr.zero()));
    }

    #[test]
    fn s4_trees_of_sum_of_two_branches() {
        let ha = mix(SEED, b"a");
        let hb = mix(SEED, b"b");
        assert_ne!(ha, hb, "test assumes distinct hashes for distinct symbols");
        let (mut mgr, root) = trees_fresh(&sum([branch(["a"]), branch(["b"])]));

        let (min_h, max_h) = if ha < hb { (ha, hb) } else { (hb, ha) };
        assert_eq!(mgr.var(root), Some(min_h));
        assert_eq!(mgr.hi(root), Some(mgr.one()));
        let lo = mgr.lo(root).unwrap();
        assert_eq!(mgr.var(lo), Some(max_h));
    }

    #[test]
    fn s5_trees_of_product_of_two_branches() {
        let ha = mix(SEED, b"a");
        let hb = mix(SEED, b"b");
        let (mut mgr, root) = trees_fresh(&product([branch(["a"]), branch(["b"])]));

        let (min_h, max_h) = if ha < hb { (ha, hb) } else { (hb, ha) };
        assert_eq!(mgr.var(root), Some(min_h));
        let hi_node = mgr.hi(root).unwrap();
        assert_eq!(mgr.var(hi_node), Some(max_h));
        assert_eq!(mgr.lo(root), Some(mgr.zero()));
    }

    #[test]
    fn s6_subtrees_of_branch_a_b() {
        let (mut mgr, root) = subtrees_fresh(&branch(["a", "b"]));
        // den(subtrees) = {∅, {h1}, {h1,h2}}: ⊤ must be reachable as a union
        // branch, and the tree's own full path must still be a member.
        assert_ne!(root, mgr.zero());
        assert_ne!(root, mgr.one());

        // `trees_fresh` built a separate manager, so its NodeId isn't valid
        // in `mgr`; relower the same expression inside `mgr` to compare them.
        let tree_root = trees(&mut mgr, &branch(["a", "b"]));
        let union_with_subtrees = mgr.union(root, tree_root);
        assert_eq!(union_with_subtrees, root, "subtrees(e) already contains trees(e)");
    }
}
