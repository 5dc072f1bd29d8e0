//! Rich diagnostic error types for the lexirel engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes, help text, and source chains. Scoring
//! itself is infallible: unknown words and empty overlaps are ordinary
//! zero-contribution outcomes, so only configuration compilation and
//! lexicon loading can fail.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the lexirel engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum LexirelError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Relation(#[from] RelationFileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),
}

// ---------------------------------------------------------------------------
// Relation-file errors
// ---------------------------------------------------------------------------

/// Errors raised while compiling a relation specification.
///
/// Always fatal to the compile attempt; every variant that concerns a line
/// carries that line's content verbatim.
#[derive(Debug, Error, Diagnostic)]
pub enum RelationFileError {
    #[error("relation file is missing the \"RelationFile\" header, found \"{found}\"")]
    #[diagnostic(
        code(lexirel::relation::missing_header),
        help(
            "The first non-blank line of a relation file must be the literal \
             token \"RelationFile\". Add it above the relation lines."
        )
    )]
    MissingHeader { found: String },

    #[error("improperly formatted relation line: \"{line}\"")]
    #[diagnostic(
        code(lexirel::relation::malformed_line),
        help(
            "Each relation line must contain exactly one \"-\" separating the \
             two chains, e.g. \"hype-glos\" or \"glos-glos 2.0\"."
        )
    )]
    MalformedLine { line: String },

    #[error("unknown relation token \"{token}\" in line \"{line}\"")]
    #[diagnostic(
        code(lexirel::relation::unknown_relation),
        help(
            "Valid relation tokens are: also, attr, example, glos, holo, \
             hype, hypo, mero, pert, sim, syns."
        )
    )]
    UnknownRelation { token: String, line: String },

    #[error("invalid weight \"{weight}\" in line \"{line}\"")]
    #[diagnostic(
        code(lexirel::relation::invalid_weight),
        help(
            "The optional weight after a chain pair must be numeric, \
             e.g. \"hype-hype 0.5\". Omit it for the default weight of 1."
        )
    )]
    InvalidWeight { weight: String, line: String },

    #[error("unbalanced parentheses in line \"{line}\"")]
    #[diagnostic(
        code(lexirel::relation::unbalanced_parens),
        help(
            "Nested chains use matching parentheses, e.g. \"hype(glos)\". \
             Every \"(\" needs a trailing \")\"."
        )
    )]
    UnbalancedParens { line: String },

    #[error("textual relation \"{token}\" in a non-final chain position in line \"{line}\"")]
    #[diagnostic(
        code(lexirel::relation::textual_mid_chain),
        help(
            "glos, example, and syns produce token sequences, so they can \
             only appear as the last step of a chain. Earlier steps must be \
             sense-to-sense relations (also, attr, holo, hype, hypo, mero, \
             pert, sim)."
        )
    )]
    TextualMidChain { token: String, line: String },

    #[error("failed to read relation file {path}: {source}")]
    #[diagnostic(
        code(lexirel::relation::io),
        help("Check that the relation file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Lexicon errors
// ---------------------------------------------------------------------------

/// Errors raised while loading a lexicon snapshot.
#[derive(Debug, Error, Diagnostic)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    #[diagnostic(
        code(lexirel::lexicon::io),
        help("Check that the lexicon file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon snapshot: {message}")]
    #[diagnostic(
        code(lexirel::lexicon::malformed),
        help(
            "The lexicon must be a JSON array of sense records, each with at \
             least a \"key\" and a \"gloss\" field."
        )
    )]
    Malformed { message: String },

    #[error("sense \"{referenced_by}\" links to unknown sense key \"{key}\"")]
    #[diagnostic(
        code(lexirel::lexicon::unknown_sense_key),
        help(
            "Every relation target must name a sense key defined elsewhere in \
             the snapshot. Add the missing record or remove the dangling link."
        )
    )]
    UnknownSenseKey { key: String, referenced_by: String },
}

/// Convenience alias for functions returning lexirel results.
pub type LexirelResult<T> = std::result::Result<T, LexirelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_error_converts_to_lexirel_error() {
        let err = RelationFileError::MalformedLine {
            line: "hype glos".into(),
        };
        let top: LexirelError = err.into();
        assert!(matches!(
            top,
            LexirelError::Relation(RelationFileError::MalformedLine { .. })
        ));
    }

    #[test]
    fn lexicon_error_converts_to_lexirel_error() {
        let err = LexiconError::UnknownSenseKey {
            key: "ghost.n.01".into(),
            referenced_by: "car.n.01".into(),
        };
        let top: LexirelError = err.into();
        assert!(matches!(top, LexirelError::Lexicon(_)));
    }

    #[test]
    fn error_messages_carry_the_offending_line() {
        let err = RelationFileError::UnknownRelation {
            token: "foo".into(),
            line: "foo-glos".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("foo"));
        assert!(msg.contains("foo-glos"));
    }
}
