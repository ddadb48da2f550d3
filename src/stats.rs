use crate::models::{Match, Outcome, Player, Side};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{hash_map::Entry, BTreeMap, HashMap};

/// Aggregate league record for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub id: i32,
    pub name: String,
    pub score: u32,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    /// Percentage, 0 when no matches were played
    pub win_rate: f64,
}

impl PlayerStats {
    fn new(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            score: 0,
            matches_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            win_rate: 0.0,
        }
    }

    fn record(&mut self, m: &Match, side: Side) {
        let (goals_for, goals_against) = m.goals(side);
        let outcome = Outcome::from_goals(goals_for, goals_against);

        self.matches_played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        self.score += outcome.points();

        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    fn finalize(&mut self) {
        self.win_rate = percentage(self.wins, self.matches_played);
        self.goal_difference = self.goals_for - self.goals_against;
    }
}

/// A player's record against one opponent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub id: i32,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Fraction of decided games won, 0.0 to 1.0
    pub win_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadToHead {
    pub nemesis: Option<Matchup>,
    pub best_matchup: Option<Matchup>,
}

/// A player's record alongside one teammate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerRecord {
    pub id: i32,
    pub name: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Fraction of matches won, 0.0 to 1.0
    pub win_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartnerStats {
    pub most_played_partner: Option<PartnerRecord>,
    pub best_partner: Option<PartnerRecord>,
    pub worst_partner: Option<PartnerRecord>,
}

/// Column the rankings table can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    #[default]
    Score,
    MatchesPlayed,
    Wins,
    Losses,
    Draws,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    WinRate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortKey {
    /// Query-string name, as accepted by `Deserialize`
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Score => "score",
            SortKey::MatchesPlayed => "matches_played",
            SortKey::Wins => "wins",
            SortKey::Losses => "losses",
            SortKey::Draws => "draws",
            SortKey::GoalsFor => "goals_for",
            SortKey::GoalsAgainst => "goals_against",
            SortKey::GoalDifference => "goal_difference",
            SortKey::WinRate => "win_rate",
        }
    }

    fn compare(self, a: &PlayerStats, b: &PlayerStats) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Score => a.score.cmp(&b.score),
            SortKey::MatchesPlayed => a.matches_played.cmp(&b.matches_played),
            SortKey::Wins => a.wins.cmp(&b.wins),
            SortKey::Losses => a.losses.cmp(&b.losses),
            SortKey::Draws => a.draws.cmp(&b.draws),
            SortKey::GoalsFor => a.goals_for.cmp(&b.goals_for),
            SortKey::GoalsAgainst => a.goals_against.cmp(&b.goals_against),
            SortKey::GoalDifference => a.goal_difference.cmp(&b.goal_difference),
            SortKey::WinRate => a.win_rate.total_cmp(&b.win_rate),
        }
    }
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// `part / whole * 100`, 0 when `whole` is 0
fn percentage(part: u32, whole: u32) -> f64 {
    ratio(part, whole) * 100.0
}

fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Keep the earliest item unless a later one is strictly better
fn first_best<T>(items: impl Iterator<Item = T>, better: impl Fn(&T, &T) -> bool) -> Option<T> {
    items.fold(None, |best, item| match best {
        Some(current) if !better(&item, &current) => Some(current),
        _ => Some(item),
    })
}

fn name_index(players: &[Player]) -> HashMap<i32, &str> {
    let mut names = HashMap::with_capacity(players.len());
    for p in players {
        names.entry(p.id).or_insert(p.name.as_str());
    }
    names
}

/// Standings order: score, then goal difference (both descending), then id
fn standings_order(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then(a.id.cmp(&b.id))
}

/// Derive every player's league record from the full match history.
///
/// Match slots referencing players missing from `players` are skipped.
/// A player entered on both teams counts as team1.
pub fn compute_standings(players: &[Player], matches: &[Match]) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = Vec::with_capacity(players.len());
    let mut index: HashMap<i32, usize> = HashMap::with_capacity(players.len());

    for player in players {
        if let Entry::Vacant(slot) = index.entry(player.id) {
            slot.insert(stats.len());
            stats.push(PlayerStats::new(player));
        }
    }

    for m in matches {
        for player_id in m.participants() {
            let Some(&i) = index.get(&player_id) else {
                continue;
            };
            if let Some(side) = m.side_of(player_id) {
                stats[i].record(m, side);
            }
        }
    }

    for s in &mut stats {
        s.finalize();
    }

    stats.sort_by(standings_order);
    stats
}

/// Standings entry for a single player, if they exist
pub fn player_stats(player_id: i32, players: &[Player], matches: &[Match]) -> Option<PlayerStats> {
    compute_standings(players, matches)
        .into_iter()
        .find(|s| s.id == player_id)
}

/// Nemesis and best matchup of a player.
///
/// Only decided matches count; draws add to neither wins nor losses.
/// Equal win rates resolve to the lowest opponent id.
pub fn compute_head_to_head(player_id: i32, players: &[Player], matches: &[Match]) -> HeadToHead {
    let names = name_index(players);
    if !names.contains_key(&player_id) {
        return HeadToHead::default();
    }

    // opponent id -> (wins, losses)
    let mut opponents: BTreeMap<i32, (u32, u32)> = BTreeMap::new();

    for m in matches {
        let Some(side) = m.side_of(player_id) else {
            continue;
        };
        let outcome = m.outcome_for(side);

        for &opponent in m.opposing_team(side) {
            if opponent == player_id || !names.contains_key(&opponent) {
                continue;
            }
            let record = opponents.entry(opponent).or_default();
            match outcome {
                Outcome::Win => record.0 += 1,
                Outcome::Loss => record.1 += 1,
                Outcome::Draw => {}
            }
        }
    }

    let matchups: Vec<Matchup> = opponents
        .into_iter()
        .filter(|(_, (wins, losses))| wins + losses > 0)
        .map(|(id, (wins, losses))| Matchup {
            id,
            name: names[&id].to_string(),
            wins,
            losses,
            win_rate: ratio(wins, wins + losses),
        })
        .collect();

    let lost_to = matchups.iter().filter(|m| m.losses > 0);
    let nemesis = first_best(lost_to, |a, b| a.win_rate < b.win_rate).cloned();

    let beaten = matchups.iter().filter(|m| m.wins > 0);
    let best_matchup = first_best(beaten, |a, b| a.win_rate > b.win_rate).cloned();

    HeadToHead {
        nemesis,
        best_matchup,
    }
}

/// Most played, best and worst teammate of a player.
///
/// Equal counts or win rates resolve to the lowest partner id.
pub fn compute_partner_stats(
    player_id: i32,
    players: &[Player],
    matches: &[Match],
) -> PartnerStats {
    let names = name_index(players);
    if !names.contains_key(&player_id) {
        return PartnerStats::default();
    }

    // partner id -> (matches, wins, losses, draws)
    let mut partners: BTreeMap<i32, (u32, u32, u32, u32)> = BTreeMap::new();

    for m in matches {
        let Some(side) = m.side_of(player_id) else {
            continue;
        };
        let Some(partner) = m.team(side).iter().copied().find(|&id| id != player_id) else {
            continue;
        };
        if !names.contains_key(&partner) {
            continue;
        }

        let record = partners.entry(partner).or_default();
        record.0 += 1;
        match m.outcome_for(side) {
            Outcome::Win => record.1 += 1,
            Outcome::Loss => record.2 += 1,
            Outcome::Draw => record.3 += 1,
        }
    }

    let records: Vec<PartnerRecord> = partners
        .into_iter()
        .map(|(id, (matches, wins, losses, draws))| PartnerRecord {
            id,
            name: names[&id].to_string(),
            matches,
            wins,
            losses,
            draws,
            win_rate: ratio(wins, matches),
        })
        .collect();

    PartnerStats {
        most_played_partner: first_best(records.iter(), |a, b| a.matches > b.matches).cloned(),
        best_partner: first_best(records.iter(), |a, b| a.win_rate > b.win_rate).cloned(),
        worst_partner: first_best(records.iter(), |a, b| a.win_rate < b.win_rate).cloned(),
    }
}

/// Re-sort standings by a column. Stable, so equal rows keep their rank order.
pub fn sort_standings(standings: &mut [PlayerStats], key: SortKey, direction: SortDirection) {
    standings.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_player(id: i32, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_match(id: i32, team1: [i32; 2], team2: [i32; 2], score1: i32, score2: i32) -> Match {
        Match {
            id,
            team1: team1.to_vec(),
            team2: team2.to_vec(),
            score1,
            score2,
            created_at: Utc::now(),
        }
    }

    fn four_players() -> Vec<Player> {
        vec![
            make_player(1, "A"),
            make_player(2, "B"),
            make_player(3, "C"),
            make_player(4, "D"),
        ]
    }

    fn find(standings: &[PlayerStats], id: i32) -> &PlayerStats {
        standings.iter().find(|s| s.id == id).unwrap()
    }

    #[test]
    fn test_decisive_match() {
        let standings = compute_standings(&four_players(), &[make_match(1, [1, 2], [3, 4], 5, 3)]);

        for id in [1, 2] {
            let s = find(&standings, id);
            assert_eq!(s.wins, 1);
            assert_eq!(s.score, 3);
            assert_eq!(s.goals_for, 5);
            assert_eq!(s.goals_against, 3);
            assert_eq!(s.win_rate, 100.0);
        }
        for id in [3, 4] {
            let s = find(&standings, id);
            assert_eq!(s.losses, 1);
            assert_eq!(s.score, 0);
            assert_eq!(s.goals_for, 3);
            assert_eq!(s.goals_against, 5);
            assert_eq!(s.win_rate, 0.0);
        }
    }

    #[test]
    fn test_draw_gives_one_point_each() {
        let standings = compute_standings(&four_players(), &[make_match(1, [1, 2], [3, 4], 2, 2)]);

        assert_eq!(standings.len(), 4);
        for s in &standings {
            assert_eq!(s.draws, 1);
            assert_eq!(s.score, 1);
            assert_eq!(s.goal_difference, 0);
        }
    }

    #[test]
    fn test_points_per_match_three_or_two() {
        let players = four_players();
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 5, 3),
            make_match(2, [1, 3], [2, 4], 4, 4),
            make_match(3, [4, 1], [2, 3], 0, 7),
        ];

        for m in &matches {
            let standings = compute_standings(&players, std::slice::from_ref(m));
            let team_points = |team: &[i32]| -> u32 {
                let total: u32 = team.iter().map(|id| find(&standings, *id).score).sum();
                total / 2
            };
            let combined = team_points(&m.team1) + team_points(&m.team2);
            let expected = if m.score1 == m.score2 { 2 } else { 3 };
            assert_eq!(combined, expected, "match {}", m.id);
        }
    }

    #[test]
    fn test_goal_difference_identity() {
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 5, 3),
            make_match(2, [1, 3], [2, 4], 1, 6),
        ];
        for s in compute_standings(&four_players(), &matches) {
            assert_eq!(s.goal_difference, s.goals_for - s.goals_against);
        }
    }

    #[test]
    fn test_no_matches_zero_win_rate() {
        let standings = compute_standings(&four_players(), &[]);
        assert_eq!(standings.len(), 4);
        for s in &standings {
            assert_eq!(s.matches_played, 0);
            assert_eq!(s.win_rate, 0.0);
            assert!(!s.win_rate.is_nan());
        }
    }

    #[test]
    fn test_empty_league() {
        assert!(compute_standings(&[], &[make_match(1, [1, 2], [3, 4], 1, 0)]).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let players = four_players();
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 5, 3),
            make_match(2, [3, 2], [1, 4], 2, 2),
        ];
        assert_eq!(
            compute_standings(&players, &matches),
            compute_standings(&players, &matches)
        );
    }

    #[test]
    fn test_orphaned_player_reference() {
        // Player 4 was deleted after the match was recorded
        let players: Vec<Player> = four_players().into_iter().filter(|p| p.id != 4).collect();
        let standings = compute_standings(&players, &[make_match(1, [1, 2], [3, 4], 5, 3)]);

        assert_eq!(standings.len(), 3);
        assert!(standings.iter().all(|s| s.id != 4));
        assert_eq!(find(&standings, 3).losses, 1);
        assert_eq!(find(&standings, 3).matches_played, 1);
    }

    #[test]
    fn test_player_on_both_teams_counts_as_team1() {
        let standings = compute_standings(&four_players(), &[make_match(1, [1, 2], [1, 3], 4, 1)]);
        let p1 = find(&standings, 1);

        // Listed twice, so two slots, both resolved to team1
        assert_eq!(p1.matches_played, 2);
        assert_eq!(p1.wins, 2);
        assert_eq!(p1.goals_for, 8);
        assert_eq!(find(&standings, 3).losses, 1);
    }

    #[test]
    fn test_standings_order() {
        let players = vec![
            make_player(1, "A"),
            make_player(2, "B"),
            make_player(3, "C"),
            make_player(4, "D"),
            make_player(5, "E"),
            make_player(6, "F"),
        ];
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 3, 2),
            make_match(2, [5, 6], [3, 4], 6, 0),
        ];
        let standings = compute_standings(&players, &matches);
        let ids: Vec<i32> = standings.iter().map(|s| s.id).collect();

        // 5 and 6 lead on goal difference, 1 and 2 follow, ties on id
        assert_eq!(ids, vec![5, 6, 1, 2, 3, 4]);
    }

    #[test]
    fn test_standings_order_independent_of_input_order() {
        let mut players = four_players();
        let matches = vec![make_match(1, [1, 2], [3, 4], 2, 2)];
        let forward = compute_standings(&players, &matches);
        players.reverse();
        let backward = compute_standings(&players, &matches);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_player_stats_lookup() {
        let matches = vec![make_match(1, [1, 2], [3, 4], 5, 3)];
        let stats = player_stats(3, &four_players(), &matches).unwrap();
        assert_eq!(stats.name, "C");
        assert_eq!(stats.losses, 1);
        assert!(player_stats(42, &four_players(), &matches).is_none());
    }

    #[test]
    fn test_nemesis() {
        let players = vec![
            make_player(1, "A"),
            make_player(2, "B"),
            make_player(5, "E"),
            make_player(6, "F"),
        ];
        let matches: Vec<Match> = (1..=3).map(|id| make_match(id, [1, 2], [5, 6], 1, 5)).collect();

        let h2h = compute_head_to_head(1, &players, &matches);
        let nemesis = h2h.nemesis.unwrap();
        // 5 and 6 tie on win rate, lowest id wins
        assert_eq!(nemesis.id, 5);
        assert_eq!(nemesis.name, "E");
        assert_eq!(nemesis.wins, 0);
        assert_eq!(nemesis.losses, 3);
        assert_eq!(nemesis.win_rate, 0.0);
        assert!(h2h.best_matchup.is_none());
    }

    #[test]
    fn test_best_matchup_and_nemesis_split() {
        let players: Vec<Player> = (1..=6)
            .map(|id| make_player(id, &format!("P{id}")))
            .collect();
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 5, 0),
            make_match(2, [1, 2], [3, 5], 5, 0),
            make_match(3, [1, 2], [5, 6], 0, 5),
            make_match(4, [2, 1], [6, 4], 5, 1),
        ];

        let h2h = compute_head_to_head(1, &players, &matches);
        let best = h2h.best_matchup.unwrap();
        let nemesis = h2h.nemesis.unwrap();

        // 3: 2-0, 4: 2-0, 5: 1-1, 6: 1-1
        assert_eq!(best.id, 3);
        assert_eq!(best.win_rate, 1.0);
        assert_eq!(nemesis.id, 5);
        assert_eq!(nemesis.win_rate, 0.5);
    }

    #[test]
    fn test_head_to_head_ignores_draws() {
        let matches = vec![make_match(1, [1, 2], [3, 4], 3, 3)];
        assert_eq!(
            compute_head_to_head(1, &four_players(), &matches),
            HeadToHead::default()
        );

        let matches = vec![
            make_match(1, [1, 2], [3, 4], 3, 3),
            make_match(2, [1, 2], [3, 4], 1, 2),
        ];
        let nemesis = compute_head_to_head(1, &four_players(), &matches).nemesis.unwrap();
        assert_eq!((nemesis.wins, nemesis.losses), (0, 1));
    }

    #[test]
    fn test_head_to_head_unknown_player() {
        let matches = vec![make_match(1, [1, 2], [3, 4], 1, 2)];
        assert_eq!(
            compute_head_to_head(99, &four_players(), &matches),
            HeadToHead::default()
        );
    }

    #[test]
    fn test_head_to_head_skips_deleted_opponent() {
        let players: Vec<Player> = four_players().into_iter().filter(|p| p.id != 3).collect();
        let matches = vec![make_match(1, [1, 2], [3, 4], 1, 2)];
        let nemesis = compute_head_to_head(1, &players, &matches).nemesis.unwrap();
        assert_eq!(nemesis.id, 4);
    }

    #[test]
    fn test_partners() {
        let players = vec![
            make_player(1, "A"),
            make_player(2, "B"),
            make_player(3, "C"),
            make_player(8, "X"),
            make_player(9, "Y"),
        ];
        let matches = vec![
            make_match(1, [1, 2], [8, 9], 5, 2),
            make_match(2, [8, 9], [2, 1], 5, 2),
            make_match(3, [3, 1], [8, 9], 5, 4),
            make_match(4, [8, 9], [1, 3], 0, 5),
            make_match(5, [1, 3], [8, 9], 3, 1),
        ];

        let partners = compute_partner_stats(1, &players, &matches);

        let most = partners.most_played_partner.unwrap();
        assert_eq!(most.id, 3);
        assert_eq!(most.matches, 3);

        let best = partners.best_partner.unwrap();
        assert_eq!(best.id, 3);
        assert_eq!(best.win_rate, 1.0);

        let worst = partners.worst_partner.unwrap();
        assert_eq!(worst.id, 2);
        assert_eq!(worst.win_rate, 0.5);
        assert_eq!((worst.wins, worst.losses, worst.draws), (1, 1, 0));
    }

    #[test]
    fn test_partner_draws_counted() {
        let matches = vec![make_match(1, [1, 2], [3, 4], 2, 2)];
        let partner = compute_partner_stats(4, &four_players(), &matches)
            .best_partner
            .unwrap();
        assert_eq!(partner.id, 3);
        assert_eq!(partner.draws, 1);
        assert_eq!(partner.win_rate, 0.0);
    }

    #[test]
    fn test_partners_none_without_matches() {
        assert_eq!(
            compute_partner_stats(1, &four_players(), &[]),
            PartnerStats::default()
        );
        assert_eq!(
            compute_partner_stats(99, &four_players(), &[make_match(1, [1, 2], [3, 4], 1, 0)]),
            PartnerStats::default()
        );
    }

    #[test]
    fn test_head_to_head_never_lists_self() {
        // Player 1 entered on both teams resolves to team1
        let matches = vec![make_match(1, [1, 2], [1, 3], 0, 2)];
        let h2h = compute_head_to_head(1, &four_players(), &matches);

        let nemesis = h2h.nemesis.unwrap();
        assert_eq!(nemesis.id, 3);
        assert_eq!((nemesis.wins, nemesis.losses), (0, 1));
        assert!(h2h.best_matchup.is_none());
    }

    #[test]
    fn test_partners_skip_deleted_partner() {
        let players: Vec<Player> = four_players().into_iter().filter(|p| p.id != 2).collect();
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 5, 0),
            make_match(2, [1, 2], [3, 4], 5, 1),
            make_match(3, [1, 3], [2, 4], 0, 5),
        ];

        let partners = compute_partner_stats(1, &players, &matches);
        let most = partners.most_played_partner.unwrap();
        assert_eq!(most.id, 3);
        assert_eq!(most.matches, 1);
        assert_eq!(partners.best_partner.unwrap().id, 3);
        assert_eq!(partners.worst_partner.unwrap().id, 3);
    }

    #[test]
    fn test_self_partnering_ignored() {
        let matches = vec![make_match(1, [1, 1], [2, 3], 0, 1)];
        assert_eq!(
            compute_partner_stats(1, &four_players(), &matches),
            PartnerStats::default()
        );
    }

    #[test]
    fn test_most_played_partner_tie_goes_to_lowest_id() {
        // Partner 4 listed first in the history, but 2 and 4 share the count
        let matches = vec![
            make_match(1, [1, 4], [2, 3], 1, 0),
            make_match(2, [2, 1], [3, 4], 0, 1),
        ];
        let partners = compute_partner_stats(1, &four_players(), &matches);

        let most = partners.most_played_partner.unwrap();
        assert_eq!(most.id, 2);
        assert_eq!(most.matches, 1);
        assert_eq!(partners.best_partner.unwrap().id, 4);
        assert_eq!(partners.worst_partner.unwrap().id, 2);
    }

    #[test]
    fn test_sort_standings_by_column() {
        let matches = vec![
            make_match(1, [1, 2], [3, 4], 5, 3),
            make_match(2, [1, 3], [2, 4], 0, 2),
        ];
        let mut standings = compute_standings(&four_players(), &matches);

        sort_standings(&mut standings, SortKey::Name, SortDirection::Asc);
        let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        sort_standings(&mut standings, SortKey::GoalsFor, SortDirection::Desc);
        assert_eq!(standings[0].id, 2);
        assert_eq!(standings[0].goals_for, 7);

        sort_standings(&mut standings, SortKey::WinRate, SortDirection::Asc);
        assert_eq!(standings[0].id, 3);
        assert_eq!(standings[0].win_rate, 0.0);
    }

    #[test]
    fn test_sort_key_from_query() {
        let key: SortKey = serde_json::from_str("\"goal_difference\"").unwrap();
        assert_eq!(key, SortKey::GoalDifference);
        let dir: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(dir, SortDirection::Asc);
    }

    #[test]
    fn test_sort_names_match_serde() {
        let keys = [
            SortKey::Name,
            SortKey::Score,
            SortKey::MatchesPlayed,
            SortKey::Wins,
            SortKey::Losses,
            SortKey::Draws,
            SortKey::GoalsFor,
            SortKey::GoalsAgainst,
            SortKey::GoalDifference,
            SortKey::WinRate,
        ];
        for key in keys {
            assert_eq!(serde_json::to_value(key).unwrap(), key.as_str());
        }
        for dir in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(serde_json::to_value(dir).unwrap(), dir.as_str());
        }
    }
}
