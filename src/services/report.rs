use colored::{ColoredString, Colorize};

use crate::config::CompetitionConfig;
use crate::standings::{Palette, Standings, StandingsRow};

/// Terminal rendering of a competition's current table.
pub fn render_standings(competition: &CompetitionConfig, standings: &Standings) -> String {
    let mut out = String::new();
    let title = match standings.latest_period {
        Some(period) => format!("=== {} (period {}) ===", competition.name, period),
        None => format!("=== {} ===", competition.name),
    };
    out.push_str(&format!("{}\n", title.as_str().bold()));

    if standings.rows.is_empty() {
        out.push_str("No entries recorded yet.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<4} {:<20} {:>6} {:>6} {:>8} {:>8} {:>8}\n",
        "#", competition.entrant_label, "Games", "Wins", "Score", "Diff", "Win %"
    ));

    let palette = competition.palette.build();
    for row in &standings.rows {
        out.push_str(&format!(
            "{:<4} {} {:>6} {:>6} {:>8} {:>8} {:>8}\n",
            row.rank,
            paint(&palette, row),
            row.games_played,
            row.wins,
            row.score,
            row.score_difference_from_above,
            row.win_percentage
        ));
    }
    out
}

fn paint(palette: &Palette, row: &StandingsRow) -> ColoredString {
    let name = format!("{:<20}", row.entrant_id);
    let painted = match parse_hex(palette.color_of(&row.entrant_id)) {
        Some((r, g, b)) => name.as_str().truecolor(r, g, b),
        None => name.as_str().normal(),
    };
    if row.rank == 1 { painted.bold() } else { painted }
}

/// `#rrggbb` to its components; anything else (e.g. `transparent`) is `None`.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
