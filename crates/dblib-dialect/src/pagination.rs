//! Pagination rewrite engine.
//!
//! Rewrites an arbitrary `SELECT` statement plus a limit/offset pair into
//! T-SQL that returns exactly the requested row window. SQL Server has no
//! `LIMIT` clause, forbids `ORDER BY` in a subquery without `TOP`, and
//! needs select-list aliases to reference ordering columns from an outer
//! query, so the rewrite is a genuine text transformation rather than a
//! suffix append.
//!
//! Two strategies are supported, selected explicitly by configuration:
//! the legacy double-nested `TOP` form and the `ROW_NUMBER()` windowed
//! form. Both share the zero-offset fast path, which only splices a
//! `TOP <limit>` into the select head.

use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DialectError, Result};
use crate::scan;

/// Trailing `ASC`/`DESC` of one ordering term.
// Allow unwrap for regex patterns that are compile-time constants
#[allow(clippy::unwrap_used)]
static TRAILING_DIRECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+(ASC|DESC)\s*$").unwrap());

/// A (possibly qualified) column reference, each segment a plain or
/// bracket-quoted identifier. The final segment is the alias candidate.
#[allow(clippy::unwrap_used)]
static COLUMN_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:[A-Za-z_@#][A-Za-z0-9_@#$]*|\[[^\]]+\])\.)*(?P<last>[A-Za-z_@#][A-Za-z0-9_@#$]*|\[[^\]]+\])$",
    )
    .unwrap()
});

/// Strategy used to rewrite a query for a non-zero row offset.
///
/// The zero-offset fast path is shared; the strategies only diverge once
/// leading rows have to be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationStrategy {
    /// Legacy double-nested `TOP` rewrite: cap at `limit + offset`, take
    /// `TOP limit` of the reversed ordering, then restore the original
    /// ordering in an outer query. Requires an explicit `ORDER BY`.
    NestedTop,

    /// `ROW_NUMBER() OVER (ORDER BY ...)` window filtered with `BETWEEN`.
    /// Synthesizes a neutral ordering when the statement has none.
    #[default]
    RowNumber,
}

/// Sort direction of a single `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending (the default when a term names no direction).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// SQL keyword for this direction.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// The opposite direction, used by the nested-`TOP` strategy to pick
    /// the requested window off the end of the capped result.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// One parsed `ORDER BY` term.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderTerm {
    expr: String,
    direction: OrderDirection,
}

/// One top-level select-list item and the alias it is addressable by in
/// an outer query, when one can be derived.
#[derive(Debug)]
struct SelectItem<'a> {
    text: &'a str,
    alias: Option<String>,
}

impl<'a> SelectItem<'a> {
    fn parse(text: &'a str) -> Result<Self> {
        if text.is_empty() {
            return Err(DialectError::MalformedQuery("empty select list item".into()));
        }
        if let Some(span) = scan::find_keyword(text, &["AS"])? {
            let alias = normalize_ident(text[span.end..].trim());
            if alias.is_empty() {
                return Err(DialectError::MalformedQuery(format!(
                    "missing alias after AS in `{text}`"
                )));
            }
            return Ok(Self {
                text,
                alias: Some(alias),
            });
        }
        if let Some(caps) = COLUMN_REFERENCE.captures(text) {
            let last = caps.name("last").map_or(text, |m| m.as_str());
            return Ok(Self {
                text,
                alias: Some(normalize_ident(last)),
            });
        }
        // Unaliased complex expression (or a star projection); the
        // windowed rewrite rejects these when it needs the alias.
        Ok(Self { text, alias: None })
    }
}

/// Parsed select head: where a `TOP` clause would be spliced in.
#[derive(Debug, Clone, Copy)]
struct SelectHead {
    /// Offset right after `SELECT` (or after `DISTINCT` when present).
    insert_at: usize,
    distinct: bool,
}

/// Rewrite `sql` so that it returns at most `limit` rows starting after
/// the first `offset` rows of the statement's effective ordering.
///
/// - `limit <= 0` disables rewriting: the input is returned unchanged.
/// - `offset < 0` fails with [`DialectError::InvalidArgument`].
/// - Input that cannot be split safely (unbalanced quoting or
///   parentheses, no `SELECT` head, an already-present `TOP` clause)
///   fails with [`DialectError::MalformedQuery`]; the rewriter never
///   guesses.
///
/// The function is pure: no I/O, no shared state, output depends only on
/// the arguments.
pub fn rewrite(strategy: PaginationStrategy, sql: &str, limit: i64, offset: i64) -> Result<String> {
    if offset < 0 {
        return Err(DialectError::InvalidArgument { limit, offset });
    }
    if limit <= 0 {
        return Ok(sql.to_owned());
    }
    let window_end = offset
        .checked_add(limit)
        .ok_or(DialectError::InvalidArgument { limit, offset })?;
    scan::ensure_balanced(sql)?;
    let head = parse_select_head(sql)?;
    tracing::debug!(
        ?strategy,
        limit,
        offset,
        distinct = head.distinct,
        "rewriting query for pagination"
    );
    if offset == 0 {
        return Ok(insert_top(sql, &head, limit));
    }
    match strategy {
        PaginationStrategy::RowNumber => rewrite_row_number(sql, &head, offset, window_end),
        PaginationStrategy::NestedTop => rewrite_nested_top(sql, &head, limit, window_end),
    }
}

fn parse_select_head(sql: &str) -> Result<SelectHead> {
    let select = scan::find_keyword(sql, &["SELECT"])?
        .filter(|span| sql[..span.start].trim().is_empty())
        .ok_or_else(|| DialectError::MalformedQuery("statement must begin with SELECT".into()))?;
    let mut insert_at = select.end;
    let mut distinct = false;
    if let Some((start, end)) = next_word(sql, insert_at) {
        if sql[start..end].eq_ignore_ascii_case("DISTINCT") {
            distinct = true;
            insert_at = end;
        }
    }
    if let Some((start, end)) = next_word(sql, insert_at) {
        if sql[start..end].eq_ignore_ascii_case("TOP") {
            // Re-applying the rewrite to an already-capped statement would
            // silently corrupt the row window.
            return Err(DialectError::MalformedQuery(
                "statement already carries a TOP clause".into(),
            ));
        }
    }
    Ok(SelectHead { insert_at, distinct })
}

fn next_word(sql: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = sql.as_bytes();
    let mut start = from;
    while start < bytes.len() && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    (end > start).then_some((start, end))
}

/// Zero-offset fast path: `TOP` alone caps the row count while leaving
/// projection and ordering untouched.
fn insert_top(sql: &str, head: &SelectHead, count: i64) -> String {
    let rest = sql[head.insert_at..].trim_start();
    format!("{} TOP {} {}", &sql[..head.insert_at], count, rest)
}

fn rewrite_row_number(sql: &str, head: &SelectHead, offset: i64, window_end: i64) -> Result<String> {
    let (body, terms) = match scan::find_keyword(sql, &["ORDER", "BY"])? {
        Some(span) => {
            let clause = sql[span.end..].trim();
            if clause.is_empty() {
                return Err(DialectError::MalformedQuery("empty ORDER BY clause".into()));
            }
            (sql[..span.start].trim_end(), parse_order_terms(clause)?)
        }
        None => (sql.trim_end(), Vec::new()),
    };
    let items = select_items(body, head)?;
    let projection = items
        .iter()
        .map(|item| {
            item.alias.clone().ok_or_else(|| {
                DialectError::MalformedQuery(format!(
                    "select list item `{}` needs an alias for windowed pagination",
                    item.text
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?
        .join(", ");
    let window = if terms.is_empty() {
        // Neutral ordering keeps the window function legal; row identity
        // across repeated calls is unspecified without an explicit ORDER BY.
        "(SELECT 0)".to_owned()
    } else {
        let mut parts = Vec::with_capacity(terms.len());
        for term in &terms {
            let alias = resolve_alias(&items, &term.expr)?;
            parts.push(format!("{} {}", alias, term.direction.as_sql()));
        }
        parts.join(", ")
    };
    let first = offset + 1;
    Ok(format!(
        "SELECT {projection} FROM (SELECT inner_tbl.*, ROW_NUMBER() OVER (ORDER BY {window}) AS dblib_rownum FROM ({body}) AS inner_tbl) AS outer_tbl WHERE dblib_rownum BETWEEN {first} AND {window_end} ORDER BY dblib_rownum"
    ))
}

fn rewrite_nested_top(sql: &str, head: &SelectHead, limit: i64, window_end: i64) -> Result<String> {
    let order = scan::find_keyword(sql, &["ORDER", "BY"])?.ok_or_else(|| {
        // Without an ordering there is nothing to reverse, so the nested
        // TOP trick cannot skip rows.
        DialectError::MalformedQuery("nested-TOP pagination requires an explicit ORDER BY".into())
    })?;
    let clause = sql[order.end..].trim();
    if clause.is_empty() {
        return Err(DialectError::MalformedQuery("empty ORDER BY clause".into()));
    }
    let terms = parse_order_terms(clause)?;
    let items = select_items(sql[..order.start].trim_end(), head)?;
    let mut aliases = Vec::with_capacity(terms.len());
    for term in &terms {
        aliases.push(resolve_alias(&items, &term.expr)?);
    }
    // The inner query keeps its ORDER BY; that is legal in T-SQL only
    // because the spliced TOP is present.
    let inner = insert_top(sql, head, window_end);
    let mut out = format!("SELECT * FROM (SELECT TOP {limit} * FROM ({inner}) AS inner_tbl ORDER BY ");
    for (i, (term, alias)) in terms.iter().zip(&aliases).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "inner_tbl.{} {}", alias, term.direction.reversed().as_sql());
    }
    out.push_str(") AS outer_tbl ORDER BY ");
    for (i, (term, alias)) in terms.iter().zip(&aliases).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "outer_tbl.{} {}", alias, term.direction.as_sql());
    }
    Ok(out)
}

fn select_items<'a>(body: &'a str, head: &SelectHead) -> Result<Vec<SelectItem<'a>>> {
    let from = scan::find_keyword(body, &["FROM"])?
        .ok_or_else(|| DialectError::MalformedQuery("no top-level FROM clause".into()))?;
    if from.start <= head.insert_at {
        return Err(DialectError::MalformedQuery("empty select list".into()));
    }
    let list = &body[head.insert_at..from.start];
    scan::split_commas(list)?
        .into_iter()
        .map(SelectItem::parse)
        .collect()
}

fn parse_order_terms(clause: &str) -> Result<Vec<OrderTerm>> {
    scan::split_commas(clause)?
        .into_iter()
        .map(|raw| {
            if raw.is_empty() {
                return Err(DialectError::MalformedQuery("empty ORDER BY term".into()));
            }
            let (expr, direction) = match TRAILING_DIRECTION.find(raw) {
                Some(m) => {
                    let direction = if m.as_str().trim().eq_ignore_ascii_case("DESC") {
                        OrderDirection::Desc
                    } else {
                        OrderDirection::Asc
                    };
                    (raw[..m.start()].trim(), direction)
                }
                None => (raw, OrderDirection::Asc),
            };
            Ok(OrderTerm {
                expr: expr.to_owned(),
                direction,
            })
        })
        .collect()
}

/// Map an ordering expression to the select-list alias it will be
/// addressable by in an outer query.
fn resolve_alias(items: &[SelectItem<'_>], expr: &str) -> Result<String> {
    let wanted = normalize_ident(expr);
    for item in items {
        if let Some(alias) = &item.alias {
            if alias.eq_ignore_ascii_case(&wanted) || item.text.eq_ignore_ascii_case(expr.trim()) {
                return Ok(alias.clone());
            }
        }
    }
    Err(DialectError::UnresolvedOrderingAlias(expr.trim().to_owned()))
}

/// Strip bracket or double-quote delimiters from an identifier.
fn normalize_ident(raw: &str) -> String {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .or_else(|| raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')))
        .unwrap_or(raw);
    inner.trim().to_owned()
}
