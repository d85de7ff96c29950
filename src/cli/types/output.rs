//! Output options for rendered season views.

use std::fmt;

/// How `season show` prints the season views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    #[default]
    Text,
    /// HTML fragments with team colors
    Html,
    /// Machine-readable JSON report
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

/// How driver names are printed in lineups and the race grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    #[default]
    Full,
    /// Only the last whitespace-separated word ("Max Verstappen" -> "Verstappen")
    LastName,
}

impl NameStyle {
    pub fn from_flag(last_names: bool) -> Self {
        if last_names {
            NameStyle::LastName
        } else {
            NameStyle::Full
        }
    }

    pub fn apply<'a>(&self, name: &'a str) -> &'a str {
        match self {
            NameStyle::Full => name,
            NameStyle::LastName => name.split_whitespace().last().unwrap_or(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_name_style() {
        let style = NameStyle::LastName;
        assert_eq!(style.apply("Max Verstappen"), "Verstappen");
        assert_eq!(style.apply("Andrea Kimi Antonelli"), "Antonelli");
        assert_eq!(style.apply("Zhou"), "Zhou");
        assert_eq!(style.apply(""), "");
    }

    #[test]
    fn test_full_name_style() {
        assert_eq!(NameStyle::Full.apply("Max Verstappen"), "Max Verstappen");
        assert_eq!(NameStyle::from_flag(false), NameStyle::Full);
        assert_eq!(NameStyle::from_flag(true), NameStyle::LastName);
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::default().to_string(), "text");
        assert_eq!(OutputFormat::Html.to_string(), "html");
    }
}
