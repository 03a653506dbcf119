/*!
Error types used in the library.

- Some of these are external --- e.g. a context returns an `Unsafe` clause error to highlight a clause whose negative body literals are not covered by its positive body literals.
- Others are internally expected --- e.g. a resource error cuts off the resolver on a program outside the Datalog fragment, rather than allowing a silent loop.

Names of the error enums --- for the most part --- overlap with the corresponding modules.
*/
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{
    literal::{Literal, Signature},
    sentence::Label,
};

/// A union of varied error kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// An error while parsing a program.
    Parse(ParseError),

    /// An error in a clause passed to the context.
    Clause(ClauseError),

    /// An error while stratifying a program.
    Stratify(StratifyError),

    /// An error during resolution.
    Resolve(ResolveError),

    /// An error in a probability back-end.
    Probability(ProbabilityError),

    /// An error from, or about, an extension.
    Extension(ExtensionError),

    /// An error in the label database.
    LabelDB(LabelDBError),

    /// A resource ceiling was hit.
    ResourceExhausted(Resource),
}

/// Resources with configurable ceilings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Answers, across the tables of a single query.
    TableAnswers,

    /// Samples, across a Monte-Carlo run with a convergence threshold.
    Samples,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableAnswers => write!(f, "answer ceiling"),
            Self::Samples => write!(f, "sample ceiling"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Clause(e) => write!(f, "clause error: {e}"),
            Self::Stratify(e) => write!(f, "stratification error: {e}"),
            Self::Resolve(e) => write!(f, "resolution error: {e}"),
            Self::Probability(e) => write!(f, "probability error: {e}"),
            Self::Extension(e) => write!(f, "extension error: {e}"),
            Self::LabelDB(e) => write!(f, "label error: {e}"),
            Self::ResourceExhausted(resource) => write!(f, "{resource} hit"),
        }
    }
}

/// Errors while parsing a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// An unexpected character at a specific line.
    UnexpectedCharacter(char, usize),

    /// The input ended while some statement was incomplete.
    UnexpectedEnd,

    /// Something other than the expected token at a specific line.
    Expected(&'static str, usize),

    /// A probability annotation whose value is not a real in [0, 1].
    ProbabilityRange(usize),

    /// A statement was missing its terminator at a specific line.
    MissingTerminator(usize),

    /// No file was found.
    NoFile(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(c, line) => write!(f, "unexpected '{c}' on line {line}"),
            Self::UnexpectedEnd => write!(f, "unexpected end of input"),
            Self::Expected(what, line) => write!(f, "expected {what} on line {line}"),
            Self::ProbabilityRange(line) => {
                write!(f, "probability outside [0, 1] on line {line}")
            }
            Self::MissingTerminator(line) => write!(f, "missing '.' on line {line}"),
            Self::NoFile(path) => write!(f, "no file at {path}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in a clause passed to the context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClauseError {
    /// A variable occurs in a negative body literal but in no positive body literal.
    Unsafe(String),

    /// The head of the clause is negative.
    NegativeHead,
}

impl std::fmt::Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsafe(var) => {
                write!(f, "variable {var} occurs only in a negative body literal")
            }
            Self::NegativeHead => write!(f, "the head of a clause must be positive"),
        }
    }
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors while stratifying a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StratifyError {
    /// A predicate depends negatively on itself, directly or transitively.
    UnstratifiedNegation(Signature),
}

impl std::fmt::Display for StratifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnstratifiedNegation(sig) => {
                write!(f, "{sig} depends negatively on itself")
            }
        }
    }
}

impl From<StratifyError> for ErrorKind {
    fn from(e: StratifyError) -> Self {
        ErrorKind::Stratify(e)
    }
}

/// Errors during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A negative literal could not be grounded by the positive literals of its clause.
    UngroundedNegation(Literal),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UngroundedNegation(literal) => {
                write!(f, "negation of non-ground {literal}")
            }
        }
    }
}

impl From<ResolveError> for ErrorKind {
    fn from(e: ResolveError) -> Self {
        ErrorKind::Resolve(e)
    }
}

/// Errors from a probability back-end.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbabilityError {
    /// A sentence mentions a label whose partition has no declared probabilities.
    MissingProbability(Label),

    /// The exact back-end was asked about a program with negation.
    UnsupportedOperation,
}

impl std::fmt::Display for ProbabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProbability(label) => {
                write!(f, "no probability declared for {label}")
            }
            Self::UnsupportedOperation => {
                write!(f, "the exact back-end does not support negation")
            }
        }
    }
}

impl From<ProbabilityError> for ErrorKind {
    fn from(e: ProbabilityError) -> Self {
        ErrorKind::Probability(e)
    }
}

/// Errors from, or about, extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtensionError {
    /// No extension with the given name is in the catalog.
    Unknown(String),

    /// An extension failed, with whatever detail the extension gave.
    Failure(String),
}

impl std::fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown extension '{name}'"),
            Self::Failure(detail) => write!(f, "extension failure: {detail}"),
        }
    }
}

impl From<ExtensionError> for ErrorKind {
    fn from(e: ExtensionError) -> Self {
        ErrorKind::Extension(e)
    }
}

/// Errors in the label database.
#[derive(Clone, Debug, PartialEq)]
pub enum LabelDBError {
    /// A uniform annotation for a partition with no declared values.
    EmptyPartition(String),

    /// The probabilities of a partition do not sum to one.
    UnbalancedPartition(String, f64),
}

impl std::fmt::Display for LabelDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPartition(partition) => {
                write!(f, "@uniform over {partition}, which has no declared values")
            }
            Self::UnbalancedPartition(partition, sum) => {
                write!(f, "probabilities of {partition} sum to {sum}, not 1")
            }
        }
    }
}

impl From<LabelDBError> for ErrorKind {
    fn from(e: LabelDBError) -> Self {
        ErrorKind::LabelDB(e)
    }
}
