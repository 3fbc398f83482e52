use serde::*;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

// One game from the season schedule, played or not. Goals of an unplayed game are meaningless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub ended: bool,
    pub finished_type: String,
}

impl GameRecord {
    pub fn new(home_team: &str, away_team: &str, home_goals: u32, away_goals: u32, finished_type: &str) -> Self {
        Self {
            home_team: home_team.to_owned(),
            away_team: away_team.to_owned(),
            home_goals,
            away_goals,
            ended: true,
            finished_type: finished_type.to_owned(),
        }
    }

    pub fn scheduled(home_team: &str, away_team: &str) -> Self {
        Self {
            home_team: home_team.to_owned(),
            away_team: away_team.to_owned(),
            home_goals: 0,
            away_goals: 0,
            ended: false,
            finished_type: String::new(),
        }
    }
}

// Loads every game of one season and series from a JSON array. Order of the file is kept, which
// matters for the ranking tie-break later on.
pub fn load_games(file_path: impl AsRef<Path>, season: u32, serie: &str) -> Result<Vec<GameRecord>> {
    let data = fs::read_to_string(file_path)?;
    parse_games(&data, season, serie)
}

pub fn parse_games(data: &str, season: u32, serie: &str) -> Result<Vec<GameRecord>> {
    let json_games: Vec<JsonGame> = serde_json::from_str(data)?;
    let total = json_games.len();

    let games: Vec<GameRecord> = json_games
        .into_iter()
        .filter(|g| g.season == Some(season) && g.serie.as_deref() == Some(serie))
        .filter_map(|g| match g.ended {
            Some(ended) => Some(g.into_record(ended)),
            None => {
                debug!(home = %g.home_team.team_name, away = %g.away_team.team_name, "skipping game without an ended flag");
                None
            }
        })
        .collect();

    debug!(total, kept = games.len(), season, serie, "filtered game records");
    Ok(games)
}

// Splits into (completed, remaining). Games without an ended flag never make it this far.
pub fn split_games(games: Vec<GameRecord>) -> (Vec<GameRecord>, Vec<GameRecord>) {
    games.into_iter().partition(|g| g.ended)
}

#[derive(Deserialize, Debug)]
struct JsonGame {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    season: Option<u32>,
    #[serde(default)]
    serie: Option<String>,
    #[serde(default)]
    ended: Option<bool>,
    #[serde(rename(deserialize = "finishedType"), default)]
    finished_type: Option<String>,
    #[serde(rename(deserialize = "homeTeam"))]
    home_team: JsonSide,
    #[serde(rename(deserialize = "awayTeam"))]
    away_team: JsonSide,
}

#[derive(Deserialize, Debug)]
struct JsonSide {
    #[serde(rename(deserialize = "teamName"))]
    team_name: String,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    goals: Option<u32>,
}

impl JsonGame {
    fn into_record(self, ended: bool) -> GameRecord {
        GameRecord {
            home_team: self.home_team.team_name,
            away_team: self.away_team.team_name,
            home_goals: self.home_team.goals.unwrap_or(0),
            away_goals: self.away_team.goals.unwrap_or(0),
            ended,
            finished_type: self.finished_type.unwrap_or_default(),
        }
    }
}
