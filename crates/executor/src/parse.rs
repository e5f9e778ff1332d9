//! Line protocol → Command conversion.
//!
//! Fields are separated by runs of whitespace. The trailing free-text field
//! of ADD/QUERY/WQUERY is everything after the fixed fields, with leading
//! whitespace removed; it may be empty.
//!
//! Numbers are validated here, once. Scores and boost factors must be
//! finite.

use typeahead_core::ItemType;
use typeahead_engine::{Boost, Boosts};

use crate::error::Error;
use crate::{Command, Result};

/// Parse one protocol line into a [`Command`].
///
/// # Errors
///
/// Returns [`Error::Parse`] for unknown commands, missing fields and
/// non-numeric or non-finite numbers.
pub fn parse_command(line: &str) -> Result<Command> {
    let (keyword, rest) = split_field(line.trim());
    match keyword {
        "ADD" => parse_add(rest),
        "DEL" => parse_del(rest),
        "QUERY" => parse_query(rest),
        "WQUERY" => parse_wquery(rest),
        "" => Err(Error::parse("empty command")),
        other => Err(Error::parse(format!("unknown command '{}'", other))),
    }
}

fn parse_add(rest: &str) -> Result<Command> {
    let (type_str, rest) = require_field(rest, "ADD", "type")?;
    let (id, rest) = require_field(rest, "ADD", "id")?;
    let (score_str, content) = require_field(rest, "ADD", "score")?;

    let item_type: ItemType = type_str.parse()?;
    let score = parse_finite(score_str, "score")?;
    Ok(Command::Add {
        item_type,
        id: id.to_string(),
        score,
        content: content.to_string(),
    })
}

fn parse_del(rest: &str) -> Result<Command> {
    let (id, extra) = require_field(rest, "DEL", "id")?;
    if !extra.is_empty() {
        return Err(Error::parse(format!(
            "DEL takes exactly one id, found trailing '{}'",
            extra
        )));
    }
    Ok(Command::Del { id: id.to_string() })
}

fn parse_query(rest: &str) -> Result<Command> {
    let (k_str, query) = require_field(rest, "QUERY", "k")?;
    Ok(Command::Query {
        k: parse_count(k_str, "k")?,
        query: query.to_string(),
    })
}

fn parse_wquery(rest: &str) -> Result<Command> {
    let (k_str, rest) = require_field(rest, "WQUERY", "k")?;
    let (n_str, mut rest) = require_field(rest, "WQUERY", "numBoosts")?;
    let k = parse_count(k_str, "k")?;
    let n = parse_count(n_str, "numBoosts")?;

    let mut boosts = Boosts::none();
    for i in 0..n {
        let (term, tail) = split_field(rest);
        if term.is_empty() {
            return Err(Error::parse(format!(
                "WQUERY declares {} boosts but only {} given",
                n, i
            )));
        }
        boosts.push(parse_boost(term)?);
        rest = tail;
    }

    Ok(Command::WQuery {
        k,
        boosts,
        query: rest.to_string(),
    })
}

/// `<key>:<factor>`; the key is everything before the last `:`.
fn parse_boost(term: &str) -> Result<Boost> {
    let (key, factor_str) = term
        .rsplit_once(':')
        .ok_or_else(|| Error::parse(format!("boost '{}' is not <key>:<factor>", term)))?;
    if key.is_empty() {
        return Err(Error::parse(format!("boost '{}' has an empty key", term)));
    }
    Ok(Boost::new(key, parse_finite(factor_str, "boost factor")?))
}

/// Split off the first whitespace-delimited field.
///
/// Returns `("", "")` for blank input. The remainder has leading
/// whitespace removed.
fn split_field(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim_start()),
        None => (s, ""),
    }
}

fn require_field<'a>(s: &'a str, command: &str, name: &str) -> Result<(&'a str, &'a str)> {
    let (field, rest) = split_field(s);
    if field.is_empty() {
        return Err(Error::parse(format!("{} is missing <{}>", command, name)));
    }
    Ok((field, rest))
}

fn parse_finite(s: &str, name: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::parse(format!("{} '{}' is not a finite number", name, s))),
    }
}

fn parse_count(s: &str, name: &str) -> Result<usize> {
    s.parse::<usize>()
        .map_err(|_| Error::parse(format!("{} '{}' is not a non-negative integer", name, s)))
}
