//! Tree-set expressions: a small closed algebra describing sets of labeled
//! trees, independent of any ZDD. Purely functional — constructors may share
//! children freely, and nothing here ever mutates.

use std::io::{Read, Write};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::symbol::Symbol;

const TAG_BOT: u8 = 0;
const TAG_TOP: u8 = 1;
const TAG_PREFIX: u8 = 2;
const TAG_PRODUCT: u8 = 3;
const TAG_SUM: u8 = 4;

/// A tree-set expression.
///
/// `Product`/`Sum` hold `Arc<Expr>` children so that callers can build large
/// expressions by sharing subexpressions without cloning them, mirroring how
/// the ZDD layer itself shares subgraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The empty set of trees.
    Bot,
    /// The singleton set containing only the empty tree.
    Top,
    /// Every tree of `child`, with one edge labeled `symbol` prepended at the root.
    Prefix(Symbol, Arc<Expr>),
    /// The exterior product of the children: trees whose root has one edge
    /// per child expression.
    Product(Vec<Arc<Expr>>),
    /// The set-theoretic union of the children.
    Sum(Vec<Arc<Expr>>),
}

impl Expr {
    pub fn bot() -> Arc<Expr> {
        Arc::new(Expr::Bot)
    }

    pub fn top() -> Arc<Expr> {
        Arc::new(Expr::Top)
    }
}

/// The empty set of trees.
pub fn bot() -> Arc<Expr> {
    Expr::bot()
}

/// The singleton set containing only the empty tree.
pub fn top() -> Arc<Expr> {
    Expr::top()
}

/// `Prefix(symbol, child)`.
pub fn prefix_symbol(symbol: impl Into<Symbol>, child: Arc<Expr>) -> Arc<Expr> {
    Arc::new(Expr::Prefix(symbol.into(), child))
}

/// Right-folds a symbol sequence into nested `Prefix` nodes. An empty path
/// returns `expr` unchanged.
pub fn prefix_path<S, I>(path: I, expr: Arc<Expr>) -> Arc<Expr>
where
    S: Into<Symbol>,
    I: IntoIterator<Item = S>,
    I::IntoIter: DoubleEndedIterator,
{
    path.into_iter()
        .rev()
        .fold(expr, |acc, symbol| prefix_symbol(symbol, acc))
}

/// `prefix(path, Top)`.
pub fn branch<S, I>(path: I) -> Arc<Expr>
where
    S: Into<Symbol>,
    I: IntoIterator<Item = S>,
    I::IntoIter: DoubleEndedIterator,
{
    prefix_path(path, Expr::top())
}

pub fn product<I>(children: I) -> Arc<Expr>
where
    I: IntoIterator<Item = Arc<Expr>>,
{
    Arc::new(Expr::Product(children.into_iter().collect()))
}

pub fn sum<I>(children: I) -> Arc<Expr>
where
    I: IntoIterator<Item = Arc<Expr>>,
{
    Arc::new(Expr::Sum(children.into_iter().collect()))
}

fn write_u32<W: Write>(io: &mut W, n: u32) -> Result<()> {
    io.write_all(&n.to_be_bytes())?;
    Ok(())
}

fn read_u32<R: Read>(io: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    io.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn write_symbol<W: Write>(io: &mut W, symbol: &Symbol) -> Result<()> {
    let bytes = symbol.as_bytes();
    let len: u16 = bytes
        .len()
        .try_into()
        .expect("symbol longer than 65535 bytes");
    io.write_all(&len.to_be_bytes())?;
    io.write_all(bytes)?;
    Ok(())
}

fn read_symbol<R: Read>(io: &mut R) -> Result<Symbol> {
    let mut len_buf = [0u8; 2];
    io.read_exact(&mut len_buf)?;
    let len = u16::from_be_bytes(len_buf) as usize;
    let mut bytes = vec![0u8; len];
    io.read_exact(&mut bytes)?;
    // Validate UTF-8 up front so a malformed symbol fails at the read site
    // rather than surfacing later as a confusing equality/hash mismatch.
    String::from_utf8(bytes.clone())?;
    Ok(Symbol::from(bytes))
}

/// Writes `expr` to `io` using a tagged big-endian wire format.
pub fn write_expr<W: Write>(io: &mut W, expr: &Expr) -> Result<()> {
    match expr {
        Expr::Bot => io.write_all(&[TAG_BOT]).map_err(Error::from),
        Expr::Top => io.write_all(&[TAG_TOP]).map_err(Error::from),
        Expr::Prefix(symbol, child) => {
            io.write_all(&[TAG_PREFIX])?;
            write_symbol(io, symbol)?;
            write_expr(io, child)
        }
        Expr::Product(children) => {
            io.write_all(&[TAG_PRODUCT])?;
            write_children(io, children)
        }
        Expr::Sum(children) => {
            io.write_all(&[TAG_SUM])?;
            write_children(io, children)
        }
    }
}

fn write_children<W: Write>(io: &mut W, children: &[Arc<Expr>]) -> Result<()> {
    write_u32(io, children.len() as u32)?;
    for child in children {
        write_expr(io, child)?;
    }
    Ok(())
}

/// Reads an expression from `io` using the tagged big-endian wire format.
pub fn read_expr<R: Read>(io: &mut R) -> Result<Arc<Expr>> {
    let mut tag = [0u8; 1];
    io.read_exact(&mut tag)?;
    match tag[0] {
        TAG_BOT => Ok(Expr::bot()),
        TAG_TOP => Ok(Expr::top()),
        TAG_PREFIX => {
            let symbol = read_symbol(io)?;
            let child = read_expr(io)?;
            Ok(prefix_symbol(symbol, child))
        }
        TAG_PRODUCT => Ok(product(read_children(io)?)),
        TAG_SUM => Ok(sum(read_children(io)?)),
        other => Err(Error::UnknownTag(other)),
    }
}

fn read_children<R: Read>(io: &mut R) -> Result<Vec<Arc<Expr>>> {
    let count = read_u32(io)?;
    let mut children = Vec::with_capacity(count as usize);
    for _ in 0..count {
        children.push(read_expr(io)?);
    }
    Ok(children)
}
