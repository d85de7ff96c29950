//! The fixed 2025 fantasy calendar.
//!
//! The league started at Bahrain, so the fantasy season covers championship
//! rounds 4 through 24. The backend keys race points either by race name or by
//! round number rendered as a string; [`resolve_race`] accepts both.

use crate::cli::types::RaceRound;

/// Fantasy races in calendar order, paired with their championship round.
pub const RACE_CALENDAR: [(&str, u8); 21] = [
    ("Bahrain", 4),
    ("Saudi Arabia", 5),
    ("Miami", 6),
    ("Imola", 7),
    ("Monaco", 8),
    ("Spain", 9),
    ("Canada", 10),
    ("Austria", 11),
    ("UK", 12),
    ("Belgium", 13),
    ("Hungary", 14),
    ("Netherlands", 15),
    ("Monza", 16),
    ("Azerbaijan", 17),
    ("Singapore", 18),
    ("Texas", 19),
    ("Mexico", 20),
    ("Brazil", 21),
    ("Vegas", 22),
    ("Qatar", 23),
    ("Abu Dhabi", 24),
];

/// Round ingested when nothing has been processed yet.
pub const FIRST_ROUND: RaceRound = RaceRound(4);

/// Last round of the fantasy calendar.
pub const LAST_ROUND: RaceRound = RaceRound(24);

/// A race on the fantasy calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub name: &'static str,
    pub round: RaceRound,
}

/// All fantasy races in calendar order.
pub fn races() -> impl Iterator<Item = Race> {
    RACE_CALENDAR.iter().map(|&(name, round)| Race {
        name,
        round: RaceRound(round),
    })
}

pub fn round_for_name(name: &str) -> Option<RaceRound> {
    races()
        .find(|r| r.name.eq_ignore_ascii_case(name))
        .map(|r| r.round)
}

pub fn race_for_round(round: RaceRound) -> Option<Race> {
    races().find(|r| r.round == round)
}

/// Resolve a race identifier from the backend: a race name or a round number.
pub fn resolve_race(identifier: &str) -> Option<Race> {
    let trimmed = identifier.trim();
    if let Ok(n) = trimmed.parse::<u8>() {
        return race_for_round(RaceRound(n));
    }
    round_for_name(trimmed).and_then(race_for_round)
}

/// Round to request next, given the identifiers the backend says it processed.
///
/// Identifiers that resolve to nothing are ignored.
pub fn next_round<'a, I>(processed: I) -> RaceRound
where
    I: IntoIterator<Item = &'a str>,
{
    processed
        .into_iter()
        .filter_map(|id| {
            let trimmed = id.trim();
            trimmed
                .parse::<u8>()
                .ok()
                .map(RaceRound)
                .or_else(|| round_for_name(trimmed))
        })
        .max()
        .map(|r| r.next())
        .unwrap_or(FIRST_ROUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_is_contiguous() {
        let rounds: Vec<u8> = races().map(|r| r.round.as_u8()).collect();
        assert_eq!(rounds.len(), 21);
        assert_eq!(rounds.first(), Some(&FIRST_ROUND.as_u8()));
        assert_eq!(rounds.last(), Some(&LAST_ROUND.as_u8()));
        assert!(rounds.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_resolve_race_by_name_and_round() {
        assert_eq!(resolve_race("Monaco").unwrap().round, RaceRound(8));
        assert_eq!(resolve_race("monaco").unwrap().name, "Monaco");
        assert_eq!(resolve_race("8").unwrap().name, "Monaco");
        assert_eq!(resolve_race(" 24 ").unwrap().name, "Abu Dhabi");
    }

    #[test]
    fn test_resolve_race_outside_calendar() {
        assert!(resolve_race("3").is_none());
        assert!(resolve_race("Australia").is_none());
        assert!(resolve_race("").is_none());
    }

    #[test]
    fn test_next_round_defaults_to_first() {
        assert_eq!(next_round(Vec::<&str>::new()), FIRST_ROUND);
        assert_eq!(next_round(["garbage"]), FIRST_ROUND);
    }

    #[test]
    fn test_next_round_uses_highest_processed() {
        assert_eq!(next_round(["4", "6", "5"]), RaceRound(7));
        assert_eq!(next_round(["Bahrain", "Miami"]), RaceRound(7));
        assert_eq!(next_round(["4", "Imola"]), RaceRound(8));
    }

    #[test]
    fn test_next_round_after_final_race() {
        assert_eq!(next_round(["24"]), RaceRound(25));
    }
}
