// crates/snippet_address/src/lib.rs

//! Shorthand snippet addresses: `file:marker[:root[:revision]]`.
//!
//! The first two segments are always the file (relative to the root) and the
//! marker. Anything after them is best written labeled, in any order:
//!
//! ```text
//! operation_test.rb:create:root=../trailblazer/test/docs:revision=v2.1:hide=model
//! ```
//!
//! The fully positional `file:marker:root:revision` form is accepted as well.
//! A lone third segment is rejected since it could be either a root or a
//! revision.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const SEPARATOR: char = ':';
const LABEL_SEPARATOR: char = '=';
const MAX_SEGMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed snippet address {input:?}: {problem}")]
pub struct AddressError {
    pub input: String,
    pub problem: AddressProblem,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressProblem {
    #[error("expected at least file:marker")]
    TooFewSegments,
    #[error("{0} segments given, at most {MAX_SEGMENTS} are allowed")]
    TooManySegments(usize),
    #[error("the {0} segment is empty")]
    EmptySegment(&'static str),
    #[error("unknown label '{0}', expected root, revision or hide")]
    UnknownLabel(String),
    #[error("{0} is given more than once")]
    DuplicateField(&'static str),
    #[error("a lone third segment is ambiguous, write root=<dir> or revision=<rev>")]
    AmbiguousSegment,
    #[error("labeled and unlabeled segments cannot be mixed after file:marker")]
    MixedSegments,
    #[error("positional form takes exactly root and revision after file:marker, got {0} unlabeled segments")]
    PositionalArity(usize),
}

pub type AddressResult<T> = Result<T, AddressError>;

/// A parsed shorthand address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetAddress {
    pub file: PathBuf,
    pub marker: String,
    pub root: Option<PathBuf>,
    pub revision: Option<String>,
    pub hide: Option<String>,
}

impl SnippetAddress {
    pub fn new(file: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            marker: marker.into(),
            root: None,
            revision: None,
            hide: None,
        }
    }
}

impl fmt::Display for SnippetAddress {
    /// Renders the labeled form, which always parses back unambiguously.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.file.display(), SEPARATOR, self.marker)?;
        if let Some(root) = &self.root {
            write!(f, "{}root{}{}", SEPARATOR, LABEL_SEPARATOR, root.display())?;
        }
        if let Some(revision) = &self.revision {
            write!(f, "{}revision{}{}", SEPARATOR, LABEL_SEPARATOR, revision)?;
        }
        if let Some(hide) = &self.hide {
            write!(f, "{}hide{}{}", SEPARATOR, LABEL_SEPARATOR, hide)?;
        }
        Ok(())
    }
}

impl FromStr for SnippetAddress {
    type Err = AddressError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_address(input)
    }
}

/// Parses `file:marker` followed by optional labeled or positional segments.
pub fn parse_address(input: &str) -> AddressResult<SnippetAddress> {
    let fail = |problem| AddressError {
        input: input.to_string(),
        problem,
    };

    let segments: Vec<&str> = input.split(SEPARATOR).map(str::trim).collect();
    if segments.len() < 2 {
        return Err(fail(AddressProblem::TooFewSegments));
    }
    if segments.len() > MAX_SEGMENTS {
        return Err(fail(AddressProblem::TooManySegments(segments.len())));
    }

    let file = non_empty(segments[0], "file").map_err(fail)?;
    let marker = non_empty(segments[1], "marker").map_err(fail)?;
    let mut address = SnippetAddress::new(file, marker);

    let extras = &segments[2..];
    let labeled = extras.iter().filter(|s| s.contains(LABEL_SEPARATOR)).count();

    if labeled == 0 {
        match extras {
            [] => {}
            [_] => return Err(fail(AddressProblem::AmbiguousSegment)),
            [root, revision] => {
                address.root = Some(PathBuf::from(non_empty(root, "root").map_err(fail)?));
                address.revision = Some(non_empty(revision, "revision").map_err(fail)?.to_string());
            }
            _ => return Err(fail(AddressProblem::PositionalArity(extras.len()))),
        }
        return Ok(address);
    }
    if labeled != extras.len() {
        return Err(fail(AddressProblem::MixedSegments));
    }

    for &segment in extras {
        let (label, value) = segment
            .split_once(LABEL_SEPARATOR)
            .map(|(label, value)| (label.trim(), value.trim()))
            .unwrap_or((segment, ""));
        match label {
            "root" => {
                let value = non_empty(value, "root").map_err(fail)?;
                set_once(&mut address.root, PathBuf::from(value), "root").map_err(fail)?;
            }
            "revision" => {
                let value = non_empty(value, "revision").map_err(fail)?;
                set_once(&mut address.revision, value.to_string(), "revision").map_err(fail)?;
            }
            "hide" => {
                let value = non_empty(value, "hide").map_err(fail)?;
                set_once(&mut address.hide, value.to_string(), "hide").map_err(fail)?;
            }
            other => return Err(fail(AddressProblem::UnknownLabel(other.to_string()))),
        }
    }
    Ok(address)
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, AddressProblem> {
    if value.is_empty() {
        Err(AddressProblem::EmptySegment(field))
    } else {
        Ok(value)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, field: &'static str) -> Result<(), AddressProblem> {
    if slot.is_some() {
        return Err(AddressProblem::DuplicateField(field));
    }
    *slot = Some(value);
    Ok(())
}
