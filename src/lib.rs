pub mod common;
pub mod dot;
pub mod error;
pub mod expr;
pub mod lower;
pub mod symbol;
pub mod zdd;

pub use error::{Error, Result};
pub use expr::{
    bot, branch, prefix_path, prefix_symbol, product, read_expr, sum, top, write_expr, Expr,
};
pub use lower::{subtrees, subtrees_fresh, trees, trees_fresh};
pub use symbol::Symbol;
pub use zdd::ZddManager;
