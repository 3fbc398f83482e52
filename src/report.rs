use serde::Serialize;
use std::io;

use crate::error::Result;
use crate::simulation::Forecast;
use crate::standings::Standings;

#[derive(Debug, Serialize, PartialEq)]
pub struct StandingsRow<'a> {
    pub team: &'a str,
    pub points: u32,
    pub games_played: u32,
    pub reg_win: u32,
    pub reg_loss: u32,
    pub ext_win: u32,
    pub ext_loss: u32,
    pub games_finished: u32,
}

// Baseline table from first to last place
pub fn standings_table(standings: &Standings) -> Vec<StandingsRow<'_>> {
    standings
        .ordered()
        .into_iter()
        .map(|t| {
            let tally = standings.tally(t);
            StandingsRow {
                team: standings.name(t),
                points: standings.points(t),
                games_played: tally.games_finished,
                reg_win: tally.reg_win,
                reg_loss: tally.reg_loss,
                ext_win: tally.ext_win,
                ext_loss: tally.ext_loss,
                games_finished: tally.games_finished,
            }
        })
        .collect()
}

pub fn output_report(standings: &Standings) {
    println!("=== Current Standings and Basic Stats ===");
    println!("|  #. | {0:20} | {1:>3} | {2:>3} | {3:>3} | {4:>3} | {5:>3} | {6:>3}", "Team", "Pts", "GP", "RW", "RL", "EW", "EL");

    for (i, row) in standings_table(standings).iter().enumerate() {
        println!("|{0:3}. | {1:20} | {2:3} | {3:3} | {4:3} | {5:3} | {6:3} | {7:3}",
            i + 1,
            row.team,
            row.points,
            row.games_played,
            row.reg_win,
            row.reg_loss,
            row.ext_win,
            row.ext_loss,
        )
    }
}

pub fn output_forecast(team: &str, forecast: &Forecast) {
    println!("\n=== After {} simulations, {} finishes in the top {} in {:.2}% of runs ===",
        forecast.trials,
        team,
        forecast.cutoff,
        forecast.probability * 100.0,
    );
}

pub fn write_standings_csv<W: io::Write>(standings: &Standings, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in standings_table(standings) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
