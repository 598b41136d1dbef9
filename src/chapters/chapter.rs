use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompoundingError;

/// The views a reader can select from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chapter {
    Home,
    CompoundingMachine,
    FinanceStarterKit,
    Investing,
}

impl Chapter {
    /// All chapters in sidebar order
    pub const ALL: [Chapter; 4] = [
        Chapter::Home,
        Chapter::CompoundingMachine,
        Chapter::FinanceStarterKit,
        Chapter::Investing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Chapter::Home => "Home",
            Chapter::CompoundingMachine => "Compounding machine",
            Chapter::FinanceStarterKit => "Finance starter kit",
            Chapter::Investing => "Investing",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Chapter::Home => "home",
            Chapter::CompoundingMachine => "compounding-machine",
            Chapter::FinanceStarterKit => "finance-starter-kit",
            Chapter::Investing => "investing",
        }
    }

    /// Whether the chapter runs the calculator
    pub fn has_calculator(&self) -> bool {
        matches!(self, Chapter::CompoundingMachine)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Chapter {
    type Err = CompoundingError;

    /// Accepts a title ("Finance starter kit") or a slug ("finance-starter-kit"), any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Chapter::ALL
            .into_iter()
            .find(|c| c.title().eq_ignore_ascii_case(wanted) || c.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CompoundingError::UnknownChapter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_titles_and_slugs() {
        assert_eq!("Home".parse::<Chapter>().unwrap(), Chapter::Home);
        assert_eq!("compounding machine".parse::<Chapter>().unwrap(), Chapter::CompoundingMachine);
        assert_eq!("finance-starter-kit".parse::<Chapter>().unwrap(), Chapter::FinanceStarterKit);
        assert_eq!(" INVESTING ".parse::<Chapter>().unwrap(), Chapter::Investing);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "Retirement".parse::<Chapter>(),
            Err(CompoundingError::UnknownChapter(name)) if name == "Retirement"
        ));
    }

    #[test]
    fn test_round_trip_display() {
        for chapter in Chapter::ALL {
            assert_eq!(chapter.to_string().parse::<Chapter>().unwrap(), chapter);
        }
    }

    #[test]
    fn test_only_compounding_has_calculator() {
        let with_calc: Vec<_> = Chapter::ALL.into_iter().filter(|c| c.has_calculator()).collect();
        assert_eq!(with_calc, vec![Chapter::CompoundingMachine]);
    }
}
