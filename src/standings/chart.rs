use std::collections::{BTreeMap, BTreeSet};

use super::period::compute_latest_period;
use super::types::{
    Accumulation, ChartMetric, ChartSeriesPoint, ChartWindow, EntrantId, Entry, FeedKind, Period, Score,
};

/// Reshapes the full history into one line per entrant.
///
/// Every period that appears anywhere in the windowed input gets a point for
/// every entrant; an entrant without a row for that period gets `None`, which
/// renderers must draw as a gap.
pub fn build_chart_series(
    entries: &[Entry],
    accumulation: Accumulation,
    window: ChartWindow,
    metric: ChartMetric,
) -> Vec<ChartSeriesPoint> {
    let Ok(latest) = compute_latest_period(entries) else {
        return Vec::new();
    };

    let series = collect_series(entries, metric);
    let series: BTreeMap<&str, BTreeMap<Period, Score>> = series
        .into_iter()
        .map(|(entrant, values)| (entrant, accumulate(values, accumulation)))
        .collect();

    let periods: BTreeSet<Period> = entries
        .iter()
        .map(|entry| entry.period)
        .filter(|period| window.contains(*period, latest))
        .collect();

    periods
        .iter()
        .flat_map(|period| {
            series.iter().map(move |(entrant, values)| ChartSeriesPoint {
                period: *period,
                entrant_id: EntrantId::from(*entrant),
                value: values.get(period).copied(),
            })
        })
        .collect()
}

fn collect_series(entries: &[Entry], metric: ChartMetric) -> BTreeMap<&str, BTreeMap<Period, Score>> {
    let mut series: BTreeMap<&str, BTreeMap<Period, Score>> = BTreeMap::new();
    for entry in entries {
        series
            .entry(entry.entrant_id.as_str())
            .or_default()
            .insert(entry.period, metric.value(entry));
    }
    series
}

fn accumulate(values: BTreeMap<Period, Score>, accumulation: Accumulation) -> BTreeMap<Period, Score> {
    match accumulation {
        Accumulation::PerPeriodDelta | Accumulation::Cumulative(FeedKind::RunningTotal) => values,
        Accumulation::Cumulative(FeedKind::Deltas) => {
            let mut running = 0;
            values
                .into_iter()
                .map(|(period, delta)| {
                    running += delta;
                    (period, running)
                })
                .collect()
        }
    }
}
