use treezdd::{branch, product, sum, trees, Expr};
use treezdd::ZddManager;

fn clock<F>(s: &str, f: F)
where
    F: FnOnce(),
{
    let start = std::time::Instant::now();
    f();
    let end = start.elapsed();
    println!("{}: time {}", s, end.as_secs_f64());
}

fn symbols(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("s{}", i)).collect()
}

fn bench_long_chain() {
    let path = symbols(2000);
    let mut mgr = ZddManager::new();
    let expr = branch(path.iter().map(|s| s.as_str()));
    let mut root = 0;
    clock("-bench chain-1", || {
        root = trees(&mut mgr, &expr);
    });
    println!("-chain node {:?}", mgr.size());
    let _ = root;
}

fn bench_wide_sum() {
    let n = 2000;
    let mut mgr = ZddManager::new();
    let branches: Vec<_> = (0..n)
        .map(|i| branch([format!("s{}", i)]))
        .collect();
    let expr = sum(branches);
    clock("-bench wide sum-1", || {
        let _ = trees(&mut mgr, &expr);
    });
    println!("-wide sum node {:?}", mgr.size());
}

fn bench_product_blowup() {
    let n = 14;
    let mut mgr = ZddManager::new();
    let factors: Vec<_> = (0..n)
        .map(|i| sum([branch([format!("a{}", i)]), branch([format!("b{}", i)])]))
        .collect();
    let expr = product(factors);
    clock("-bench product-1", || {
        let _ = trees(&mut mgr, &expr);
    });
    println!("-product node {:?}", mgr.size());
}

fn bench_reused_cache() {
    let mut mgr = ZddManager::new();
    let a: Expr = Expr::Sum(
        (0..500)
            .map(|i| branch([format!("x{}", i)]))
            .collect(),
    );
    clock("-bench reused cache-1", || {
        let _ = trees(&mut mgr, &a);
        // A second lowering of the same expression under the same caches
        // should hit the unique table and the op caches throughout.
        let _ = trees(&mut mgr, &a);
    });
    println!("-reused cache node {:?}", mgr.size());
}

fn main() {
    clock("bench long chain", bench_long_chain);
    clock("bench wide sum", bench_wide_sum);
    clock("bench product blowup", bench_product_blowup);
    clock("bench reused cache", bench_reused_cache);
}
