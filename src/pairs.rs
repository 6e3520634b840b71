use anyhow::{Context, Result};
use std::path::Path;

/// Two images asserted to show the same identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub identity: String,
    pub first: u32,
    pub second: u32,
}

/// Two images asserted to show different identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchedPair {
    pub first_identity: String,
    pub first: u32,
    pub second_identity: String,
    pub second: u32,
}

/// Pair lists parsed from one LFW-style pairs file.
#[derive(Debug, Default)]
pub struct PairLists {
    pub matched: Vec<MatchedPair>,
    pub mismatched: Vec<MismatchedPair>,
}

pub fn load_pairs(path: &Path) -> Result<PairLists> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading pairs file {}", path.display()))?;
    parse_pairs(&raw).with_context(|| format!("parsing pairs file {}", path.display()))
}

/// Parse LFW-style pair lines. Three whitespace-separated fields form a
/// matched pair (identity, image, image); four fields form a mismatched
/// pair (identity, image, identity, image). A leading all-numeric count
/// header is skipped. Malformed lines abort the parse; silently dropping
/// records would corrupt the accuracy ratios downstream.
pub fn parse_pairs(input: &str) -> Result<PairLists> {
    let mut lists = PairLists::default();

    for (lineno, line) in input.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            // e.g. "10 300" fold/size header
            [a] if a.parse::<u32>().is_ok() => {}
            [a, b] if a.parse::<u32>().is_ok() && b.parse::<u32>().is_ok() => {}
            [identity, first, second] => lists.matched.push(MatchedPair {
                identity: identity.to_string(),
                first: parse_image_number(first, lineno)?,
                second: parse_image_number(second, lineno)?,
            }),
            [first_identity, first, second_identity, second] => {
                lists.mismatched.push(MismatchedPair {
                    first_identity: first_identity.to_string(),
                    first: parse_image_number(first, lineno)?,
                    second_identity: second_identity.to_string(),
                    second: parse_image_number(second, lineno)?,
                })
            }
            _ => anyhow::bail!(
                "line {}: expected 3 or 4 fields, found {}",
                lineno + 1,
                fields.len()
            ),
        }
    }

    Ok(lists)
}

fn parse_image_number(field: &str, lineno: usize) -> Result<u32> {
    field
        .parse()
        .with_context(|| format!("line {}: bad image number {:?}", lineno + 1, field))
}
