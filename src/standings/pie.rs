use super::period::latest_entries;
use super::types::{Entry, Palette, PieSlice};

/// Win distribution of the latest period, one slice per entrant.
pub fn build_pie_slices(entries: &[Entry], palette: &Palette) -> Vec<PieSlice> {
    latest_entries(entries)
        .into_iter()
        .map(|entry| PieSlice {
            color: palette.color_of(&entry.entrant_id).to_string(),
            wins: entry.wins,
            entrant_id: entry.entrant_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_use_latest_period_only() {
        let palette = Palette::new().with("Vanilla", "#ea7878").with("Choco", "#4b98de");
        let entries = vec![
            Entry::new("Vanilla", 1, 5, 2, 10),
            Entry::new("Choco", 1, 5, 1, 5),
            Entry::new("Vanilla", 2, 10, 4, 20),
            Entry::new("Choco", 2, 10, 3, 15),
        ];

        let slices = build_pie_slices(&entries, &palette);
        assert_eq!(
            slices,
            vec![
                PieSlice { entrant_id: "Vanilla".into(), wins: 4, color: "#ea7878".into() },
                PieSlice { entrant_id: "Choco".into(), wins: 3, color: "#4b98de".into() },
            ]
        );
    }

    #[test]
    fn test_unknown_entrant_gets_fallback_color() {
        let slices = build_pie_slices(&[Entry::new("Guest", 1, 1, 1, 1)], &Palette::new());
        assert_eq!(slices[0].color, "transparent");
    }

    #[test]
    fn test_empty_history_has_no_slices() {
        assert!(build_pie_slices(&[], &Palette::new()).is_empty());
    }
}
