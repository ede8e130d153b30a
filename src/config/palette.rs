use crate::standings::Palette;

pub const RED: &str = "#ea7878";
pub const BLUE: &str = "#4b98de";
pub const GREEN: &str = "#4fcb90";

/// Which color table a competition's entrants are looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Players,
    FifaTeams,
}

impl PaletteKind {
    pub fn build(&self) -> Palette {
        match self {
            PaletteKind::Players => player_palette(),
            PaletteKind::FifaTeams => fifa_team_palette(),
        }
    }
}

pub fn player_palette() -> Palette {
    Palette::new()
        .with("Vanilla", RED)
        .with("Choco", BLUE)
        .with("Panda", GREEN)
}

/// Team colors follow whichever bearo picked the team in the current draft.
pub fn fifa_team_palette() -> Palette {
    let red = [
        "Liverpool",
        "Real Betis",
        "AS Roma",
        "RB Leipzig",
        "Arsenal",
        "Atletico Madrid",
        "Borussia Dortmund",
        "Marseille",
        "Sporting CP",
        "Bayer Leverkusen",
    ];
    let blue = [
        "Villarreal",
        "Chelsea",
        "SS Lazio",
        "PSG",
        "Barcelona",
        "Inter",
        "Milan",
        "Manchester United",
        "Galatasaray",
        "Wolfsburg",
    ];
    let green = [
        "Juventus",
        "Tottenham",
        "Newcastle",
        "Napoli",
        "Athletic Bilbao",
        "Aston Villa",
        "Real Madrid",
        "Bayern Munich",
        "Manchester City",
        "Nottingham Forrest",
    ];

    [(red, RED), (blue, BLUE), (green, GREEN)]
        .into_iter()
        .flat_map(|(teams, color)| teams.into_iter().map(move |team| (team.to_string(), color.to_string())))
        .collect()
}
