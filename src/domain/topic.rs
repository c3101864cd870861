//! Topical filters accepted by the backend.

use std::fmt;
use std::str::FromStr;

/// The closed set of topics a user can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    War,
    Art,
    Science,
    Diseases,
}

impl Topic {
    pub const ALL: [Self; 4] = [Self::War, Self::Art, Self::Science, Self::Diseases];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::War => "War",
            Self::Art => "Art",
            Self::Science => "Science",
            Self::Diseases => "Diseases",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown topic: {wanted}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("war".parse::<Topic>(), Ok(Topic::War));
        assert_eq!(" SCIENCE ".parse::<Topic>(), Ok(Topic::Science));
        assert!("Cooking".parse::<Topic>().is_err());
    }
}
