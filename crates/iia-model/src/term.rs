//! Teaching terms.
//!
//! Modules are examined in one of two terms. Catalog files spell the term as
//! a single letter (`M`/`L`) or as the full name; both are accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Term in which a module is taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Michaelmas (autumn) term.
    Michaelmas,
    /// Lent (spring) term.
    Lent,
}

impl Term {
    /// All terms in teaching order.
    pub const ALL: [Term; 2] = [Term::Michaelmas, Term::Lent];

    /// Returns the single-letter code used in module lists.
    pub fn as_code(&self) -> &'static str {
        match self {
            Term::Michaelmas => "M",
            Term::Lent => "L",
        }
    }

    /// Returns the full term name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Michaelmas => "Michaelmas",
            Term::Lent => "Lent",
        }
    }

    /// Dense index for per-term counters.
    pub fn index(&self) -> usize {
        match self {
            Term::Michaelmas => 0,
            Term::Lent => 1,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Term {
    type Err = String;

    /// Parse a term from a catalog field (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "M" | "MICHAELMAS" | "MICHELMAS" => Ok(Term::Michaelmas),
            "L" | "LENT" => Ok(Term::Lent),
            _ => Err(format!("Unknown term: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_from_str() {
        assert_eq!("M".parse::<Term>().unwrap(), Term::Michaelmas);
        assert_eq!("l".parse::<Term>().unwrap(), Term::Lent);
        assert_eq!(" Michaelmas ".parse::<Term>().unwrap(), Term::Michaelmas);
        assert_eq!("Michelmas".parse::<Term>().unwrap(), Term::Michaelmas);
        assert_eq!("LENT".parse::<Term>().unwrap(), Term::Lent);
    }

    #[test]
    fn test_term_rejects_unknown() {
        assert!("Easter".parse::<Term>().is_err());
        assert!("".parse::<Term>().is_err());
    }

    #[test]
    fn test_term_codes_round_trip() {
        for term in Term::ALL {
            assert_eq!(term.as_code().parse::<Term>().unwrap(), term);
        }
        assert_eq!(Term::Lent.index(), 1);
    }
}
