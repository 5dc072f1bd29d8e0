//! Parser for WordNet::Similarity-style relation files.
//!
//! The format: the first non-blank line is the literal header
//! `RelationFile`; each following non-blank line is
//! `<chain_A>-<chain_B>[ <weight>]`, where a chain is one or more relation
//! tokens composed with nested parentheses (`hype(glos)` applies hypernym
//! expansion, then gloss). A chain whose final token is not textual gets an
//! implicit gloss step appended. Lines are lower-cased before token lookup.

use std::path::Path;

use crate::error::RelationFileError;

use super::{RelationChain, RelationKind, RelationPair};

const HEADER: &str = "RelationFile";

/// Parse a relation specification from text.
///
/// Fails fatally on the first malformed line; the error carries that
/// line's content.
pub fn parse_relation_spec(src: &str) -> Result<Vec<RelationPair>, RelationFileError> {
    let mut lines = src.lines().map(str::trim).filter(|l| !l.is_empty());

    match lines.next() {
        Some(first) if first == HEADER => {}
        found => {
            return Err(RelationFileError::MissingHeader {
                found: found.unwrap_or("").to_string(),
            });
        }
    }

    let mut pairs = Vec::new();
    for line in lines {
        pairs.push(parse_line(line)?);
    }

    tracing::debug!(pairs = pairs.len(), "compiled relation specification");
    Ok(pairs)
}

/// Read and parse a relation file from disk.
pub fn read_relation_file<P: AsRef<Path>>(path: P) -> Result<Vec<RelationPair>, RelationFileError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| RelationFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_relation_spec(&src)
}

fn parse_line(line: &str) -> Result<RelationPair, RelationFileError> {
    let lower = line.to_lowercase();

    let halves: Vec<&str> = lower.split('-').collect();
    let [a_spec, b_half] = halves.as_slice() else {
        return Err(RelationFileError::MalformedLine { line: line.into() });
    };

    // An optional weight is exactly one whitespace-separated field after
    // the B chain; anything else is treated as part of the chain and will
    // surface as an unknown token.
    let mut weight = 1.0;
    let mut b_spec = b_half.trim();
    let fields: Vec<&str> = b_half.split_whitespace().collect();
    if fields.len() == 2 {
        b_spec = fields[0];
        weight = fields[1]
            .parse::<f64>()
            .map_err(|_| RelationFileError::InvalidWeight {
                weight: fields[1].into(),
                line: line.into(),
            })?;
    }

    let chain_a = compile_chain(a_spec.trim(), line)?;
    let chain_b = compile_chain(b_spec, line)?;

    Ok(RelationPair {
        chain_a,
        chain_b,
        weight,
    })
}

/// Compile one chain spec like `hype(hypo(glos))` into a [`RelationChain`].
fn compile_chain(spec: &str, line: &str) -> Result<RelationChain, RelationFileError> {
    let mut fragments: Vec<String> = spec.split('(').map(str::to_string).collect();
    let nesting = fragments.len() - 1;

    // Strip the trailing close-brackets off the innermost fragment and
    // check they balance the opens exactly.
    if nesting > 0 {
        let last = fragments
            .last_mut()
            .ok_or_else(|| RelationFileError::UnbalancedParens { line: line.into() })?;
        if last.len() < nesting {
            return Err(RelationFileError::UnbalancedParens { line: line.into() });
        }
        let stem_len = last.len() - nesting;
        if last[stem_len..] != ")".repeat(nesting) {
            return Err(RelationFileError::UnbalancedParens { line: line.into() });
        }
        last.truncate(stem_len);
    }

    let mut kinds = Vec::with_capacity(fragments.len());
    for fragment in &fragments {
        let kind =
            RelationKind::parse(fragment).ok_or_else(|| RelationFileError::UnknownRelation {
                token: fragment.clone(),
                line: line.into(),
            })?;
        kinds.push(kind);
    }

    // Only the last step may yield tokens.
    if let Some(mid) = kinds[..kinds.len() - 1].iter().find(|k| k.is_textual()) {
        return Err(RelationFileError::TextualMidChain {
            token: mid.token().into(),
            line: line.into(),
        });
    }

    // Implicit gloss append when the authored chain ends on a sense set.
    let ends_textual = kinds.last().copied().is_some_and(|k| k.is_textual());
    let terminal = if ends_textual {
        kinds.pop().unwrap_or(RelationKind::Glos)
    } else {
        RelationKind::Glos
    };

    Ok(RelationChain {
        walks: kinds,
        terminal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(body: &str) -> Result<Vec<RelationPair>, RelationFileError> {
        parse_relation_spec(&format!("RelationFile\n{body}\n"))
    }

    #[test]
    fn header_is_required() {
        let err = parse_relation_spec("glos-glos\n").unwrap_err();
        assert!(matches!(err, RelationFileError::MissingHeader { .. }));

        let err = parse_relation_spec("").unwrap_err();
        assert!(matches!(err, RelationFileError::MissingHeader { .. }));
    }

    #[test]
    fn leading_blank_lines_before_header_are_allowed() {
        let pairs = parse_relation_spec("\n\nRelationFile\nglos-glos\n").unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn hype_glos_with_weight() {
        let pairs = spec("hype-glos 2.0").unwrap();
        assert_eq!(pairs.len(), 1);
        let pair = &pairs[0];
        assert_eq!(pair.chain_a.walks(), &[RelationKind::Hype]);
        assert_eq!(pair.chain_a.terminal(), RelationKind::Glos);
        assert!(pair.chain_b.walks().is_empty());
        assert_eq!(pair.chain_b.terminal(), RelationKind::Glos);
        assert_eq!(pair.weight, 2.0);
    }

    #[test]
    fn default_weight_is_one() {
        let pairs = spec("example-syns").unwrap();
        assert_eq!(pairs[0].weight, 1.0);
        assert_eq!(pairs[0].chain_a.terminal(), RelationKind::Example);
        assert_eq!(pairs[0].chain_b.terminal(), RelationKind::Syns);
    }

    #[test]
    fn implicit_gloss_is_appended_to_sense_chains() {
        let pairs = spec("hype-hypo").unwrap();
        let pair = &pairs[0];
        assert_eq!(pair.chain_a.walks(), &[RelationKind::Hype]);
        assert_eq!(pair.chain_a.terminal(), RelationKind::Glos);
        assert_eq!(pair.chain_b.walks(), &[RelationKind::Hypo]);
        assert_eq!(pair.chain_b.terminal(), RelationKind::Glos);
    }

    #[test]
    fn nested_chains_apply_in_textual_order() {
        let pairs = spec("hype(hypo(glos))-mero(syns)").unwrap();
        let pair = &pairs[0];
        assert_eq!(pair.chain_a.walks(), &[RelationKind::Hype, RelationKind::Hypo]);
        assert_eq!(pair.chain_a.terminal(), RelationKind::Glos);
        assert_eq!(pair.chain_b.walks(), &[RelationKind::Mero]);
        assert_eq!(pair.chain_b.terminal(), RelationKind::Syns);
    }

    #[test]
    fn lines_are_lowercased_before_lookup() {
        let pairs = spec("HYPE-GLOS").unwrap();
        assert_eq!(pairs[0].chain_a.walks(), &[RelationKind::Hype]);
    }

    #[test]
    fn unknown_relation_token_fails() {
        let err = spec("foo-glos").unwrap_err();
        match err {
            RelationFileError::UnknownRelation { token, line } => {
                assert_eq!(token, "foo");
                assert_eq!(line, "foo-glos");
            }
            other => panic!("expected UnknownRelation, got {other:?}"),
        }
    }

    #[test]
    fn missing_or_extra_dashes_fail() {
        assert!(matches!(
            spec("glos glos").unwrap_err(),
            RelationFileError::MalformedLine { .. }
        ));
        assert!(matches!(
            spec("glos-glos-glos").unwrap_err(),
            RelationFileError::MalformedLine { .. }
        ));
    }

    #[test]
    fn non_numeric_weight_fails() {
        let err = spec("glos-glos heavy").unwrap_err();
        match err {
            RelationFileError::InvalidWeight { weight, .. } => assert_eq!(weight, "heavy"),
            other => panic!("expected InvalidWeight, got {other:?}"),
        }
    }

    #[test]
    fn unbalanced_parens_fail() {
        assert!(matches!(
            spec("hype(hypo-glos").unwrap_err(),
            RelationFileError::UnbalancedParens { .. }
        ));
        assert!(matches!(
            spec("hype(hypo(glos)-glos").unwrap_err(),
            RelationFileError::UnbalancedParens { .. }
        ));
    }

    #[test]
    fn textual_step_mid_chain_fails() {
        let err = spec("glos(hype)-glos").unwrap_err();
        match err {
            RelationFileError::TextualMidChain { token, .. } => assert_eq!(token, "glos"),
            other => panic!("expected TextualMidChain, got {other:?}"),
        }
    }

    #[test]
    fn blank_body_lines_are_skipped() {
        let pairs = parse_relation_spec("RelationFile\n\nglos-glos\n\nhype-hype 0.5\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].weight, 0.5);
    }
}
