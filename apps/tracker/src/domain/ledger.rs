//! Append-only history of completed rounds.

use serde::{Deserialize, Serialize};

use crate::domain::rules::default_player_name;
use crate::domain::state::PlayerIndex;

const EXPORT_HEADER: [&str; 6] = [
    "Round",
    "Player",
    "Bid",
    "Win",
    "Round Points",
    "Total Points",
];
const EXPORT_BAGS_COLUMN: &str = "Bags";

/// One player's line for one completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u8,
    pub player_index: PlayerIndex,
    pub bid: u8,
    pub won: u8,
    /// Net points for the round, bag penalties included.
    pub round_points: i32,
    pub total_points_after: i32,
    /// Only recorded when bags are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bags_after: Option<u8>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub bag_penalties: u8,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    records: Vec<RoundRecord>,
}

impl HistoryLedger {
    pub fn from_records(records: Vec<RoundRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    pub fn records_for_round(&self, round_number: u8) -> Vec<&RoundRecord> {
        self.records
            .iter()
            .filter(|r| r.round_number == round_number)
            .collect()
    }

    pub fn all_records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest round number present, if any round has been recorded.
    pub fn last_round_number(&self) -> Option<u8> {
        self.records.iter().map(|r| r.round_number).max()
    }

    /// Render the ledger as CSV.
    ///
    /// `players` supplies display names by index; seats without a name fall
    /// back to "Player N". The `Bags` column is only written when
    /// `include_bags` is set.
    pub fn export(&self, players: &[String], include_bags: bool) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header: Vec<&str> = EXPORT_HEADER.to_vec();
        if include_bags {
            header.push(EXPORT_BAGS_COLUMN);
        }
        writer.write_record(&header)?;

        for record in &self.records {
            let idx = usize::from(record.player_index);
            let name = players
                .get(idx)
                .cloned()
                .unwrap_or_else(|| default_player_name(idx));
            let mut row = vec![
                record.round_number.to_string(),
                name,
                record.bid.to_string(),
                record.won.to_string(),
                record.round_points.to_string(),
                record.total_points_after.to_string(),
            ];
            if include_bags {
                row.push(record.bags_after.map(|b| b.to_string()).unwrap_or_default());
            }
            writer.write_record(&row)?;
        }

        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}
