//! Plain-text output for the CLI.

use tracker::domain::view::{RoundSummaryView, Standing};
use tracker::domain::rules::default_player_name;
use tracker::domain::GameState;
use tracker::{GameView, Phase, RoundRecord};

pub fn print_view(view: &GameView) {
    match view.phase {
        Phase::Setup => {
            println!("No game in progress. Start one with `spades new --players N`.");
        }
        Phase::NameEntry => {
            if let Some(total) = view.total_rounds {
                println!("Table configured for {total} rounds.");
            }
            println!("Enter names in seat order with `spades names ...`.");
        }
        Phase::Playing => {
            if let Some(total) = view.total_rounds {
                println!("Round {} of {total}", view.round_no);
            }
            if view.show_scoreboard {
                print_standings(view);
            }
        }
        Phase::RoundSummary => {
            if let Some(summary) = &view.last_round {
                print_summary(view, summary);
            }
            if view.show_scoreboard {
                print_standings(view);
            }
        }
        Phase::Finished => {
            if let Some(summary) = &view.last_round {
                print_summary(view, summary);
            }
            println!("Game over.");
            print_standings(view);
            let winners: Vec<&str> = view
                .leaders
                .iter()
                .filter_map(|&i| view.standings.get(usize::from(i)))
                .map(|s| s.name.as_str())
                .collect();
            if !winners.is_empty() {
                println!("Winner: {}", winners.join(", "));
            }
        }
    }
}

fn print_standings(view: &GameView) {
    println!("Scoreboard:");
    for Standing {
        index,
        name,
        score,
        bags,
    } in &view.standings
    {
        let lead = if view.leaders.contains(index) { "*" } else { " " };
        if view.bags_enabled {
            println!("{lead} {name:<16} {score:>6}  bags {bags}");
        } else {
            println!("{lead} {name:<16} {score:>6}");
        }
    }
}

fn print_summary(view: &GameView, summary: &RoundSummaryView) {
    println!("Round {} results:", summary.round_no);
    for line in &summary.lines {
        let name = view
            .standings
            .get(usize::from(line.player_index))
            .map(|s| s.name.as_str())
            .unwrap_or("?");
        print_line(name, line);
    }
    for seat in &summary.penalized {
        if let Some(s) = view.standings.get(usize::from(*seat)) {
            println!("  {} took a bag penalty", s.name);
        }
    }
}

fn print_line(name: &str, record: &RoundRecord) {
    let bags = record
        .bags_after
        .map(|b| format!("  bags {b}"))
        .unwrap_or_default();
    println!(
        "  {name:<16} bid {:>2}  won {:>2}  {:>+5}  total {:>6}{bags}",
        record.bid, record.won, record.round_points, record.total_points_after
    );
}

pub fn print_history(state: &GameState, round: Option<u8>) {
    let records: Vec<&RoundRecord> = match round {
        Some(n) => state.history.records_for_round(n),
        None => state.history.all_records().iter().collect(),
    };
    if records.is_empty() {
        println!("No rounds recorded.");
        return;
    }

    let mut current = None;
    for record in records {
        if current != Some(record.round_number) {
            current = Some(record.round_number);
            println!("Round {}:", record.round_number);
        }
        let name = state
            .player_name(record.player_index)
            .map(str::to_string)
            .unwrap_or_else(|| default_player_name(usize::from(record.player_index)));
        print_line(&name, record);
    }
}
