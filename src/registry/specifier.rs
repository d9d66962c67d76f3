//! Package specifier parsing (`name`, `name==1.0`, `name>=1.0,<2.0`).

use crate::error::{PipError, Result};
use crate::registry::natural::NaturalKey;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const COMPARE_PATTERN: &str = r"(?:!=|==|>=|<=|>|<)";

static PACKAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?P<name>[A-Za-z_][\w.\-]*)\s*(?P<specifiers>{cmp}\s*[\w._]+(?:\s*,\s*{cmp}\s*[\w._]+)*)?$",
        cmp = COMPARE_PATTERN
    );
    Regex::new(&pattern).expect("PACKAGE_REGEX must compile")
});

static CONSTRAINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?P<comparator>{cmp})\s*(?P<version>[\w._]+)",
        cmp = COMPARE_PATTERN
    );
    Regex::new(&pattern).expect("CONSTRAINT_REGEX must compile")
});

/// Version comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    NotEqual,
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
}

impl Comparator {
    /// Operator text as written in a specifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::NotEqual => "!=",
            Comparator::Equal => "==",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::Less => "<",
        }
    }

    /// Whether `candidate.cmp(bound)` satisfies this operator.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Comparator::NotEqual => ordering != Ordering::Equal,
            Comparator::Equal => ordering == Ordering::Equal,
            Comparator::GreaterOrEqual => ordering != Ordering::Less,
            Comparator::LessOrEqual => ordering != Ordering::Greater,
            Comparator::Greater => ordering == Ordering::Greater,
            Comparator::Less => ordering == Ordering::Less,
        }
    }
}

impl FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "!=" => Ok(Comparator::NotEqual),
            "==" => Ok(Comparator::Equal),
            ">=" => Ok(Comparator::GreaterOrEqual),
            "<=" => Ok(Comparator::LessOrEqual),
            ">" => Ok(Comparator::Greater),
            "<" => Ok(Comparator::Less),
            other => Err(format!("unknown comparator '{}'", other)),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `<op> <version>` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub comparator: Comparator,
    pub version: String,
}

impl VersionConstraint {
    /// Whether `version` satisfies this constraint under natural ordering.
    pub fn matches(&self, version: &str) -> bool {
        let ordering = NaturalKey::new(version).cmp(&NaturalKey::new(&self.version));
        self.comparator.accepts(ordering)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}

/// A package name with optional version constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpecifier {
    pub name: String,
    pub constraints: Vec<VersionConstraint>,
}

impl PackageSpecifier {
    /// Parse a specifier such as `"foo"`, `"foo==1.0"` or `"foo>=1.0, <2"`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || PipError::InvalidSpecifier {
            specifier: input.to_string(),
        };

        let caps = PACKAGE_REGEX.captures(input.trim()).ok_or_else(invalid)?;
        let name = caps
            .name("name")
            .map(|m| m.as_str().to_string())
            .ok_or_else(invalid)?;

        let mut constraints = Vec::new();
        if let Some(specifiers) = caps.name("specifiers") {
            for c in CONSTRAINT_REGEX.captures_iter(specifiers.as_str()) {
                let comparator: Comparator = c["comparator"].parse().map_err(|_| invalid())?;
                constraints.push(VersionConstraint {
                    comparator,
                    version: c["version"].to_string(),
                });
            }
        }

        Ok(Self { name, constraints })
    }

    /// Whether `version` satisfies every constraint.
    pub fn matches(&self, version: &str) -> bool {
        self.constraints.iter().all(|c| c.matches(version))
    }

    /// Constraints rendered as `>=1.0,<2.0` (empty when unconstrained).
    pub fn constraints_string(&self) -> String {
        self.constraints
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for PackageSpecifier {
    type Err = PipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.constraints_string())
    }
}
