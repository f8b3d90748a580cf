/*
    This module helps with parsing derivation paths passed in as strings
    as vectors of ChildOptions that can be used to derive a child key.

    Two parsers are provided:
        - FromStr accepts any path "m/a/b'/..." of any depth.
        - Path::bip44 only accepts the five level account path
          m / purpose' / coin_type' / account' / change / index
*/

use crate::hdwallet::{
    ChildOptions,
    HDWError,
    HARDENED_OFFSET
};
use std::str::FromStr;

const BIP44_SEGMENTS: usize = 6;

//Segment names after 'm' and whether they must be hardened
const BIP44_LEVELS: [(&str, bool); 5] = [
    ("purpose", true),
    ("coin type", true),
    ("account", true),
    ("change", false),
    ("index", false)
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub children: Vec<ChildOptions>
}

impl Path {
    /**
        Parses a BIP44 style account path.

        Surrounding whitespace and one pair of surrounding parentheses are ignored,
        as is whitespace around the separators. The first three levels must be
        hardened and the last two must not be.
    */
    pub fn bip44(path: &str) -> Result<Self, HDWError> {
        let mut trimmed = path.trim();
        if trimmed.starts_with('(') && trimmed.ends_with(')') && trimmed.len() >= 2 {
            trimmed = trimmed[1..trimmed.len()-1].trim();
        }

        let segments: Vec<&str> = trimmed.split('/').map(|x| x.trim()).collect();
        if segments.len() != BIP44_SEGMENTS {
            return Err(HDWError::BadSegmentCount { expected: BIP44_SEGMENTS, found: segments.len() })
        }
        if segments[0] != "m" {
            return Err(HDWError::MissingMaster(segments[0].to_string()))
        }

        let mut children: Vec<ChildOptions> = Vec::with_capacity(BIP44_SEGMENTS - 1);
        for ((name, hardened), segment) in BIP44_LEVELS.iter().zip(segments[1..].iter()) {
            let bad_segment = || HDWError::BadSegment { name: *name, segment: segment.to_string() };
            let child = match parse_segment(segment) {
                Some(x) => x,
                None => return Err(bad_segment())
            };
            match (*hardened, child) {
                (true, ChildOptions::Hardened(_)) | (false, ChildOptions::Normal(_)) => children.push(child),
                _ => return Err(bad_segment())
            }
        }

        Ok(Self { children })
    }

    pub fn empty() -> Self {
        Self {
            children: vec![]
        }
    }

    /**
        Number of derivation steps below the master key.
    */
    pub fn depth(&self) -> usize {
        self.children.len()
    }
}

impl FromStr for Path {
    type Err = HDWError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut segments = path.trim().split('/').map(|x| x.trim());
        match segments.next() {
            Some("m") => { /* Continue */ },
            _ => return Err(HDWError::BadPath(path.to_string()))
        }

        let mut children: Vec<ChildOptions> = vec![];
        for segment in segments {
            match parse_segment(segment) {
                Some(x) => children.push(x),
                None => return Err(HDWError::BadPath(path.to_string()))
            }
        }

        Ok(Self { children })
    }
}

/*
    Parses "N" as a normal child and "N'" as a hardened child.
    N must be plain decimal digits below 2^31.
*/
fn parse_segment(segment: &str) -> Option<ChildOptions> {
    let (digits, hardened) = match segment.strip_suffix('\'') {
        Some(x) => (x, true),
        None => (segment, false)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) { return None }

    let index: u32 = digits.parse().ok()?;
    if index >= HARDENED_OFFSET { return None }

    Some(if hardened { ChildOptions::Hardened(index) } else { ChildOptions::Normal(index) })
}
