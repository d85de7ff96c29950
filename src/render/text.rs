//! Plain-text tables for terminal output.

use std::fmt::Write;

use super::format_points;
use crate::{cli::types::NameStyle, view::SeasonView};

/// Left-aligned columns separated by two spaces; widths count chars, not bytes.
fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let fmt_row = |cells: &[String]| -> String {
        let line = (0..cols)
            .map(|i| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = widths[i].saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&fmt_row(headers));
    out.push('\n');
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  ");
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        out.push_str(&fmt_row(row.as_slice()));
        out.push('\n');
    }
    out
}

pub fn render_leaderboard(view: &SeasonView) -> String {
    let headers = vec!["Fantasy Team".to_string(), "Total Points".to_string()];
    let rows: Vec<Vec<String>> = view
        .leaderboard()
        .into_iter()
        .map(|r| vec![r.team, format_points(r.points)])
        .collect();
    table(&headers, &rows)
}

pub fn render_lineups(view: &SeasonView, names: NameStyle) -> String {
    let grid = view.lineups();
    let rows: Vec<Vec<String>> = grid
        .rows
        .iter()
        .map(|slot| {
            slot.iter()
                .map(|d| d.as_deref().map(|n| names.apply(n)).unwrap_or("").to_string())
                .collect()
        })
        .collect();
    table(&grid.teams, &rows)
}

pub fn render_driver_race_table(view: &SeasonView, names: NameStyle) -> String {
    let grid = view.driver_race_table();
    let mut headers = vec!["Driver".to_string(), "Total".to_string()];
    headers.extend(grid.races.iter().map(|r| r.to_string()));

    let rows: Vec<Vec<String>> = grid
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![names.apply(&row.driver).to_string(), format_points(row.total)];
            cells.extend(
                row.cells
                    .iter()
                    .map(|c| c.as_ref().map(|c| format_points(c.points)).unwrap_or_default()),
            );
            cells
        })
        .collect();
    table(&headers, &rows)
}

pub fn render_trade_history(view: &SeasonView) -> String {
    if view.trade_history().is_empty() {
        return "(no trades yet)\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in view.trade_history().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, entry);
    }
    out
}

pub fn render_driver_list(drivers: &[String]) -> String {
    if drivers.is_empty() {
        return "(none)\n".to_string();
    }
    let mut out = String::new();
    for d in drivers {
        let _ = writeln!(out, "- {}", d);
    }
    out
}

pub fn render_season(view: &SeasonView, names: NameStyle) -> String {
    let sections = [
        ("Leaderboard", render_leaderboard(view)),
        ("Lineups", render_lineups(view, names)),
        ("Race-by-Race Points", render_driver_race_table(view, names)),
        ("Trade History", render_trade_history(view)),
        ("Free Agents", render_driver_list(view.free_agents())),
    ];

    let mut out = format!("Season {}\n", view.season_id());
    for (title, body) in sections {
        let _ = write!(out, "\n== {} ==\n{}", title, body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures;

    #[test]
    fn test_leaderboard_text() {
        let out = render_leaderboard(&fixtures::view());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Fantasy Team  Total Points");
        assert!(lines[2].starts_with("Bravo"));
        assert!(lines[2].ends_with("80.50"));
        assert!(lines[4].starts_with("Charlie"));
        assert!(lines[4].ends_with("12.25"));
    }

    #[test]
    fn test_lineups_last_names() {
        let out = render_lineups(&fixtures::view(), NameStyle::LastName);
        assert!(out.contains("Verstappen"));
        assert!(!out.contains("Max Verstappen"));
        assert_eq!(out.lines().count(), 2 + 3);
    }

    #[test]
    fn test_race_table_blank_cells() {
        let out = render_driver_race_table(&fixtures::view(), NameStyle::Full);
        let norris = out.lines().find(|l| l.starts_with("Lando Norris")).unwrap();
        // Name and a zero total, then nothing but padding
        assert!(norris.trim_end().ends_with("0.00"));
        let piastri = out.lines().find(|l| l.starts_with("Oscar Piastri")).unwrap();
        assert!(piastri.contains("43.00"));
        assert!(piastri.contains("18.00"));
        assert!(piastri.contains("25.00"));
    }

    #[test]
    fn test_trade_history_numbered_in_order() {
        let out = render_trade_history(&fixtures::view());
        assert_eq!(
            out,
            "1. Alpha traded Oscar Piastri to Bravo for 3.0 points\n2. Charlie released Jack Doohan\n"
        );
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(render_driver_list(&[]), "(none)\n");
    }

    #[test]
    fn test_full_render_has_all_sections() {
        let out = render_season(&fixtures::view(), NameStyle::Full);
        for title in [
            "== Leaderboard ==",
            "== Lineups ==",
            "== Race-by-Race Points ==",
            "== Trade History ==",
            "== Free Agents ==",
        ] {
            assert!(out.contains(title), "missing {title}");
        }
        assert!(out.starts_with("Season s1\n"));
        assert!(out.contains("- Oliver Bearman"));
    }

    #[test]
    fn test_table_handles_unicode_width_by_chars() {
        let out = table(
            &["Name".to_string(), "Pts".to_string()],
            &[vec!["Sergio Pérez".to_string(), "1.00".to_string()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].chars().count(), "Sergio Pérez  Pts".chars().count());
    }
}
