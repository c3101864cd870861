//! Historical eras derived from fixed year ranges.

use std::fmt;

/// A named span of years shown while the time wheel rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Everything before 500.
    Ancient,
    /// 500 through 1499.
    Medieval,
    /// 1500 through 1799.
    EarlyModern,
    /// 1800 through 1899.
    NineteenthCentury,
    /// 1900 through 1999.
    TwentiethCentury,
    /// 2000 onward.
    TwentyFirstCentury,
}

impl Era {
    /// Returns the era containing `year`. Negative years are BCE.
    #[must_use]
    pub const fn of_year(year: i32) -> Self {
        match year {
            i32::MIN..=499 => Self::Ancient,
            500..=1499 => Self::Medieval,
            1500..=1799 => Self::EarlyModern,
            1800..=1899 => Self::NineteenthCentury,
            1900..=1999 => Self::TwentiethCentury,
            _ => Self::TwentyFirstCentury,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ancient => "Ancient",
            Self::Medieval => "Medieval",
            Self::EarlyModern => "Early Modern",
            Self::NineteenthCentury => "1800s",
            Self::TwentiethCentury => "1900s",
            Self::TwentyFirstCentury => "2000s",
        }
    }

    /// Banner text displayed while the wheel is turning, e.g. `"Medieval Era"`.
    #[must_use]
    pub fn banner(self) -> String {
        format!("{} Era", self.label())
    }

    /// Returns the new era when moving from `from` to `to` crosses a boundary.
    #[must_use]
    pub fn crossed(from: i32, to: i32) -> Option<Self> {
        let (before, after) = (Self::of_year(from), Self::of_year(to));
        (before != after).then_some(after)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Era::of_year(-500), Era::Ancient);
        assert_eq!(Era::of_year(499), Era::Ancient);
        assert_eq!(Era::of_year(500), Era::Medieval);
        assert_eq!(Era::of_year(1499), Era::Medieval);
        assert_eq!(Era::of_year(1500), Era::EarlyModern);
        assert_eq!(Era::of_year(1800), Era::NineteenthCentury);
        assert_eq!(Era::of_year(1999), Era::TwentiethCentury);
        assert_eq!(Era::of_year(2024), Era::TwentyFirstCentury);
    }

    #[test]
    fn crossing_reports_destination_era() {
        assert_eq!(Era::crossed(1795, 1800), Some(Era::NineteenthCentury));
        assert_eq!(Era::crossed(1800, 1795), Some(Era::EarlyModern));
        assert_eq!(Era::crossed(1805, 1810), None);
    }

    #[test]
    fn banner_text() {
        assert_eq!(Era::Medieval.banner(), "Medieval Era");
        assert_eq!(Era::NineteenthCentury.to_string(), "1800s");
    }
}
