//! HTML fragments for the league page.
//!
//! Element ids match the page's placeholders (`leaderboardTable`,
//! `lineupsTable`, `driverRaceTable`, `tradeHistory`, `undraftedList`) so the
//! output can be dropped straight into it.

use std::fmt::Write;

use super::format_points;
use crate::{cli::types::NameStyle, view::SeasonView};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_leaderboard(view: &SeasonView) -> String {
    let mut out = String::from(
        "<table id=\"leaderboardTable\">\n<tr><th>Fantasy Team</th><th>Total Points</th></tr>\n",
    );
    for row in view.leaderboard() {
        let _ = writeln!(
            out,
            "<tr><td style=\"color:{}\">{}</td><td>{}</td></tr>",
            row.color,
            escape(&row.team),
            format_points(row.points)
        );
    }
    out.push_str("</table>\n");
    out
}

pub fn render_lineups(view: &SeasonView, names: NameStyle) -> String {
    let grid = view.lineups();
    let mut out = String::from("<table id=\"lineupsTable\">\n<tr>");
    for team in &grid.teams {
        let color = view.colors().color_or_neutral(Some(team.as_str()));
        let _ = write!(out, "<th style=\"color:{}\">{}</th>", color, escape(team));
    }
    out.push_str("</tr>\n");

    for slot in &grid.rows {
        out.push_str("<tr>");
        for driver in slot {
            let name = driver.as_deref().map(|d| names.apply(d)).unwrap_or("");
            let _ = write!(out, "<td>{}</td>", escape(name));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

pub fn render_driver_race_table(view: &SeasonView, names: NameStyle) -> String {
    let grid = view.driver_race_table();
    let mut out = String::from("<table id=\"driverRaceTable\">\n<thead><tr><th>Driver</th><th>Total</th>");
    for race in &grid.races {
        let _ = write!(out, "<th>{}</th>", escape(race));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for row in &grid.rows {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td>",
            escape(names.apply(&row.driver)),
            format_points(row.total)
        );
        for cell in &row.cells {
            match cell {
                Some(c) => {
                    let _ = write!(
                        out,
                        "<td style=\"background-color:{}\">{}</td>",
                        c.color,
                        format_points(c.points)
                    );
                }
                None => out.push_str("<td></td>"),
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn render_list(id: &str, items: &[String]) -> String {
    let mut out = format!("<ul id=\"{}\">\n", id);
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>\n");
    out
}

pub fn render_trade_history(view: &SeasonView) -> String {
    render_list("tradeHistory", view.trade_history())
}

pub fn render_free_agents(view: &SeasonView) -> String {
    render_list("undraftedList", view.free_agents())
}

pub fn render_season(view: &SeasonView, names: NameStyle) -> String {
    [
        render_leaderboard(view),
        render_lineups(view, names),
        render_driver_race_table(view, names),
        render_trade_history(view),
        render_free_agents(view),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{backend::SeasonSnapshot, view::fixtures, SeasonId};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_leaderboard_colored_and_ordered() {
        let view = fixtures::view();
        let out = render_leaderboard(&view);
        let bravo = out.find(">Bravo<").unwrap();
        let alpha = out.find(">Alpha<").unwrap();
        assert!(bravo < alpha);
        let bravo_color = view.colors().get("Bravo").unwrap();
        assert!(out.contains(&format!("<td style=\"color:{}\">Bravo</td><td>80.50</td>", bravo_color)));
    }

    #[test]
    fn test_lineups_pad_with_empty_cells() {
        let out = render_lineups(&fixtures::view(), NameStyle::Full);
        assert!(out.contains("<tr><td></td><td>George Russell</td><td></td></tr>"));
    }

    #[test]
    fn test_race_table_cell_colored_by_owner_at_the_time() {
        let view = fixtures::view();
        let out = render_driver_race_table(&view, NameStyle::LastName);
        let piastri = out.lines().find(|l| l.contains("<td>Piastri</td>")).unwrap();
        let alpha = view.colors().get("Alpha").unwrap();
        let bravo = view.colors().get("Bravo").unwrap();
        assert!(piastri.contains(&format!("<td style=\"background-color:{}\">18.00</td>", alpha)));
        assert!(piastri.contains(&format!("<td style=\"background-color:{}\">25.00</td>", bravo)));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut snap = SeasonSnapshot::default();
        snap.teams
            .insert("<script>".to_string(), vec!["A & B".to_string()]);
        let view = SeasonView::new(SeasonId::new("s"), snap);
        let out = render_season(&view, NameStyle::Full);
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("A &amp; B"));
    }

    #[test]
    fn test_lists_keep_server_order() {
        let view = fixtures::view();
        let out = render_trade_history(&view);
        let first = out.find("Alpha traded").unwrap();
        let second = out.find("Charlie released").unwrap();
        assert!(first < second);
        assert!(render_free_agents(&view).starts_with("<ul id=\"undraftedList\">"));
    }
}
