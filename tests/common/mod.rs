use std::collections::{BTreeSet, HashSet};

use treezdd::common::{NodeId, Var};
use treezdd::ZddManager;

/// Enumerates every set of variables denoted by the ZDD rooted at `node`.
/// Only used in tests, over the small bounded-depth expressions the
/// property tests generate — real callers enumerate a ZDD's denotation
/// through their own counting/enumeration logic, which this crate leaves
/// to them.
pub fn enumerate(mgr: &ZddManager, node: NodeId) -> HashSet<BTreeSet<Var>> {
    let mut out = HashSet::new();
    enumerate_into(mgr, node, &mut out);
    out
}

fn enumerate_into(mgr: &ZddManager, node: NodeId, out: &mut HashSet<BTreeSet<Var>>) {
    if node == mgr.zero() {
        return;
    }
    if node == mgr.one() {
        out.insert(BTreeSet::new());
        return;
    }
    let var = mgr.var(node).expect("non-sink node must have a var");
    let hi = mgr.hi(node).unwrap();
    let lo = mgr.lo(node).unwrap();

    let mut hi_sets = HashSet::new();
    enumerate_into(mgr, hi, &mut hi_sets);
    for mut s in hi_sets {
        s.insert(var);
        out.insert(s);
    }
    enumerate_into(mgr, lo, out);
}

pub fn assert_zdd_invariants(mgr: &ZddManager, root: NodeId) {
    let mut visited = HashSet::new();
    assert_invariants_rec(mgr, root, &mut visited);
}

fn assert_invariants_rec(mgr: &ZddManager, node: NodeId, visited: &mut HashSet<NodeId>) {
    if !visited.insert(node) {
        return;
    }
    if let Some(var) = mgr.var(node) {
        let hi = mgr.hi(node).unwrap();
        let lo = mgr.lo(node).unwrap();
        assert_ne!(hi, mgr.zero(), "zero-suppression violated at node {}", node);
        if let Some(hi_var) = mgr.var(hi) {
            assert!(
                var < hi_var,
                "variable ordering violated: {} >= hi's {}",
                var,
                hi_var
            );
        }
        if let Some(lo_var) = mgr.var(lo) {
            assert!(
                var < lo_var,
                "variable ordering violated: {} >= lo's {}",
                var,
                lo_var
            );
        }
        assert_invariants_rec(mgr, hi, visited);
        assert_invariants_rec(mgr, lo, visited);
    }
}
