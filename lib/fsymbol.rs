//! F-symbol lookup over a table of rows `(a, b, c, d, e, F)`.
//!
//! Rows are matched on exact label equality, and the first matching row wins.
//! The value column may hold either a number or raw text; text is converted
//! at lookup time.
//!
//! [`lookup`] folds every way of failing (no matching row, a value that isn't
//! a number) into `None`. Use [`try_lookup`] to tell them apart.

use std::collections::HashMap;
use tracing::{ debug, trace };
use crate::mkerr;

mkerr!(
    FSymbolError ("fsymbol") : {
        NoMatch => "no F-symbol row matches the given labels",
        BadValue => "F-symbol value could not be converted to a float",
    }
);
pub type FSymbolResult<T> = Result<T, FSymbolError>;

/// Contents of the value column of a row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FValue {
    Num(f64),
    Text(String),
}

impl FValue {
    /// Convert to `f64`, parsing text after trimming surrounding whitespace.
    pub fn to_f64(&self) -> FSymbolResult<f64> {
        return match self {
            Self::Num(x) => Ok(*x),
            Self::Text(s) => {
                s.trim().parse::<f64>().map_err(|_| FSymbolError::BadValue)
            },
        };
    }
}

impl From<f64> for FValue {
    fn from(x: f64) -> Self { Self::Num(x) }
}

impl From<&str> for FValue {
    fn from(s: &str) -> Self { Self::Text(s.to_string()) }
}

impl From<String> for FValue {
    fn from(s: String) -> Self { Self::Text(s) }
}

/// A single row of an F-symbol table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FSymbolEntry {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub e: String,
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    pub f: FValue,
}

impl FSymbolEntry {
    pub fn new<V>(labels: [&str; 5], f: V) -> Self
    where V: Into<FValue>
    {
        let [a, b, c, d, e] = labels.map(String::from);
        return Self { a, b, c, d, e, f: f.into() };
    }

    /// Labels as a tuple-like array, in column order.
    pub fn labels(&self) -> [&str; 5] {
        return [&self.a, &self.b, &self.c, &self.d, &self.e]
            .map(|s| s.as_str());
    }

    pub fn matches(&self, a: &str, b: &str, c: &str, d: &str, e: &str)
        -> bool
    {
        return self.a == a
            && self.b == b
            && self.c == c
            && self.d == d
            && self.e == e;
    }
}

/// Ordered collection of F-symbol rows.
///
/// Duplicated label tuples are allowed; only the first is ever returned.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FSymbolTable {
    rows: Vec<FSymbolEntry>,
}

impl FSymbolTable {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, row: FSymbolEntry) { self.rows.push(row); }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn rows(&self) -> &[FSymbolEntry] { &self.rows }

    /// First row whose labels equal `(a, b, c, d, e)`.
    pub fn find(&self, a: &str, b: &str, c: &str, d: &str, e: &str)
        -> Option<&FSymbolEntry>
    {
        return self.rows.iter().find(|row| row.matches(a, b, c, d, e));
    }

    /// Build a hash index over this table.
    pub fn index(&self) -> FSymbolIndex<'_> { FSymbolIndex::new(self) }
}

impl From<Vec<FSymbolEntry>> for FSymbolTable {
    fn from(rows: Vec<FSymbolEntry>) -> Self { Self { rows } }
}

impl FromIterator<FSymbolEntry> for FSymbolTable {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = FSymbolEntry>
    {
        return Self { rows: iter.into_iter().collect() };
    }
}

fn row_value(row: Option<&FSymbolEntry>, labels: [&str; 5])
    -> FSymbolResult<f64>
{
    let res = row.ok_or(FSymbolError::NoMatch)
        .and_then(|row| row.f.to_f64());
    match &res {
        Ok(x) => trace!(?labels, value = x, "F-symbol hit"),
        Err(err) => debug!(?labels, %err, "F-symbol lookup failed"),
    }
    return res;
}

/// Return the value of the first row matching `(a, b, c, d, e)`, or an error
/// saying why there isn't one.
pub fn try_lookup(
    table: &FSymbolTable,
    a: &str,
    b: &str,
    c: &str,
    d: &str,
    e: &str,
) -> FSymbolResult<f64>
{
    return row_value(table.find(a, b, c, d, e), [a, b, c, d, e]);
}

/// Return the value of the first row matching `(a, b, c, d, e)` as a float.
///
/// Any failure, whether no row matches or the matching row's value isn't
/// numeric, gives `None`.
///
/// ```
/// use qgf::fsymbol::{ FSymbolEntry, FSymbolTable, lookup };
///
/// let phi: f64 = (1.0 + 5.0_f64.sqrt()) / 2.0;
/// let table: FSymbolTable = vec![
///     FSymbolEntry::new(["tau", "tau", "tau", "tau", "1"], 1.0 / phi),
///     FSymbolEntry::new(["tau", "tau", "tau", "tau", "tau"], "-0.618"),
/// ].into();
/// assert_eq!(lookup(&table, "tau", "tau", "tau", "tau", "1"), Some(1.0 / phi));
/// assert_eq!(lookup(&table, "tau", "tau", "tau", "tau", "tau"), Some(-0.618));
/// assert_eq!(lookup(&table, "1", "tau", "tau", "tau", "1"), None);
/// ```
pub fn lookup(
    table: &FSymbolTable,
    a: &str,
    b: &str,
    c: &str,
    d: &str,
    e: &str,
) -> Option<f64>
{
    return try_lookup(table, a, b, c, d, e).ok();
}

/// Hash index over an [`FSymbolTable`] keyed by the label 5-tuple.
///
/// Gives the same answers as a linear scan of the table: when a tuple appears
/// more than once, the index points at its first row.
#[derive(Clone, Debug)]
pub struct FSymbolIndex<'t> {
    table: &'t FSymbolTable,
    index: HashMap<[&'t str; 5], usize>,
}

impl<'t> FSymbolIndex<'t> {
    pub fn new(table: &'t FSymbolTable) -> Self {
        let mut index: HashMap<[&'t str; 5], usize>
            = HashMap::with_capacity(table.len());
        table.rows.iter().enumerate()
            .for_each(|(k, row)| { index.entry(row.labels()).or_insert(k); });
        return Self { table, index };
    }

    pub fn find(&self, a: &str, b: &str, c: &str, d: &str, e: &str)
        -> Option<&'t FSymbolEntry>
    {
        return self.index.get(&[a, b, c, d, e])
            .map(|k| &self.table.rows[*k]);
    }

    pub fn try_lookup(&self, a: &str, b: &str, c: &str, d: &str, e: &str)
        -> FSymbolResult<f64>
    {
        return row_value(self.find(a, b, c, d, e), [a, b, c, d, e]);
    }

    pub fn lookup(&self, a: &str, b: &str, c: &str, d: &str, e: &str)
        -> Option<f64>
    {
        return self.try_lookup(a, b, c, d, e).ok();
    }
}
