use approx::assert_relative_eq;
use playoff_odds::report::standings_table;
use playoff_odds::{parse_games, simulate, split_games, ForecastContext, Standings};

const SEASON: &str = r#"[
    { "season": 2025, "serie": "RUNKOSARJA", "ended": true, "finishedType": "ENDED_DURING_REGULAR_GAME_TIME",
      "homeTeam": { "teamName": "TPS", "goals": 4 }, "awayTeam": { "teamName": "HIFK", "goals": 1 } },
    { "season": 2025, "serie": "RUNKOSARJA", "ended": true, "finishedType": "ENDED_DURING_EXTENDED_GAME_TIME",
      "homeTeam": { "teamName": "Ilves", "goals": 3 }, "awayTeam": { "teamName": "Tappara", "goals": 2 } },
    { "season": 2025, "serie": "RUNKOSARJA", "ended": true, "finishedType": "ENDED_DURING_REGULAR_GAME_TIME",
      "homeTeam": { "teamName": "HIFK", "goals": 0 }, "awayTeam": { "teamName": "Tappara", "goals": 2 } },
    { "season": 2025, "serie": "RUNKOSARJA", "ended": true, "finishedType": "ENDED_DURING_WINNING_SHOT_COMPETITION",
      "homeTeam": { "teamName": "TPS", "goals": 2 }, "awayTeam": { "teamName": "Ilves", "goals": 3 } },
    { "season": 2025, "serie": "RUNKOSARJA", "ended": false,
      "homeTeam": { "teamName": "Tappara", "goals": 0 }, "awayTeam": { "teamName": "TPS", "goals": 0 } },
    { "season": 2025, "serie": "RUNKOSARJA", "ended": false,
      "homeTeam": { "teamName": "HIFK", "goals": 0 }, "awayTeam": { "teamName": "Ilves", "goals": 0 } },
    { "season": 2025, "serie": "RUNKOSARJA", "ended": false,
      "homeTeam": { "teamName": "Kärpät", "goals": 0 }, "awayTeam": { "teamName": "HIFK", "goals": 0 } },
    { "season": 2025, "serie": "PLAYOFFS", "ended": true, "finishedType": "ENDED_DURING_REGULAR_GAME_TIME",
      "homeTeam": { "teamName": "HIFK", "goals": 9 }, "awayTeam": { "teamName": "TPS", "goals": 0 } }
]"#;

fn season() -> (Standings, Vec<playoff_odds::Fixture>) {
    let games = parse_games(SEASON, 2025, "RUNKOSARJA").unwrap();
    let (completed, remaining) = split_games(games);
    assert_eq!(completed.len(), 4);
    assert_eq!(remaining.len(), 3);

    Standings::aggregate(&completed).with_schedule(&remaining)
}

fn context(trials: u64, cutoff: usize) -> ForecastContext {
    ForecastContext { trials, cutoff, seed: Some(2025), workers: 16, ..ForecastContext::default() }
}

#[test]
fn baseline_table() {
    let (standings, _) = season();
    let table = standings_table(&standings);

    // TPS 3 + 1, Ilves 2 + 2, Tappara 1 + 3, HIFK 0, Kärpät has not played
    let order: Vec<(&str, u32)> = table.iter().map(|r| (r.team, r.points)).collect();
    assert_eq!(order, vec![("TPS", 4), ("Ilves", 4), ("Tappara", 4), ("HIFK", 0), ("Kärpät", 0)]);
    assert_eq!(table[4].games_finished, 0);
}

#[test]
fn newcomer_uses_neutral_rates() {
    let (standings, _) = season();
    let ctx = ForecastContext::default();
    let karpat = standings.team_index("Kärpät").unwrap();

    let rates = standings.rates(karpat, &ctx);
    assert_eq!((rates.regulation, rates.extended, rates.sample_size), (0.5, 0.5, 1));
}

#[test]
fn full_league_cutoff_is_certain() {
    let (standings, fixtures) = season();
    let forecast = simulate(&standings, &fixtures, "HIFK", &context(5_000, standings.len())).unwrap();
    assert_eq!(forecast.probability, 1.0);
}

#[test]
fn estimate_is_stable_and_baseline_untouched() {
    let (standings, fixtures) = season();
    let before: Vec<u32> = (0..standings.len()).map(|t| standings.points(t)).collect();

    let first = simulate(&standings, &fixtures, "TPS", &context(50_000, 2)).unwrap();
    let second = simulate(&standings, &fixtures, "TPS", &context(50_000, 2)).unwrap();
    assert_eq!(first, second);
    assert!(first.probability > 0.0 && first.probability < 1.0);
    assert_eq!(first.baseline_rank, 1);

    let unseeded = simulate(
        &standings,
        &fixtures,
        "TPS",
        &ForecastContext { seed: None, ..context(50_000, 2) },
    )
    .unwrap();
    assert_relative_eq!(unseeded.probability, first.probability, epsilon = 0.02);

    let after: Vec<u32> = (0..standings.len()).map(|t| standings.points(t)).collect();
    assert_eq!(before, after);
}
