//! Simulation runners built on the real quest service and game loop.
//!
//! Nothing here reimplements game rules: matrix cells call
//! `QuestService::attempt_quest` and seasons call `GameLoop::advance_day`,
//! with statistics gathered from their outcomes.

use super::config::SimConfig;
use super::report::{MatrixCell, MatrixReport, SeasonReport, SeasonRun};
use crate::adventure::AdventureSimulator;
use crate::adventurer::{generate_stats, Adventurer, AdventurerId, Job, JoinType, Origin, RankLabel};
use crate::bestiary::{Bestiary, Region};
use crate::core::QuestModifiers;
use crate::guild::{GameLoop, Guild};
use crate::quest::{MemberStatus, Quest, QuestId, QuestService};
use crate::titles::NoTitles;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Seed offset separating season streams from matrix streams.
const SEASON_STREAM_BASE: u64 = 1 << 32;

fn rng_for(config: &SimConfig, stream: u64) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(stream)),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn service_for(config: &SimConfig, stream: u64) -> QuestService<ChaCha8Rng> {
    let simulator = AdventureSimulator::with_formula(Bestiary::standard(), config.build_formula());
    QuestService::with_parts(rng_for(config, stream), simulator, Box::new(NoTitles))
}

/// Representative rank value in the middle of a label's band.
pub fn party_rank_value(label: RankLabel) -> f64 {
    match label {
        RankLabel::S => label.threshold() + 100.0,
        _ => (label.threshold() + RankLabel::from_bucket(label.bucket() + 1).threshold()) / 2.0,
    }
}

/// A party of `size` members at the given rank, cycling through jobs so
/// successive runs see different compositions.
pub fn build_party(label: RankLabel, size: usize, run: u32, rng: &mut impl Rng) -> Vec<Adventurer> {
    let rank_value = party_rank_value(label);
    (0..size)
        .map(|i| {
            let job = Job::ALL[(run as usize + i) % Job::ALL.len()];
            let stats = generate_stats(&job.base_stats(), Origin::Central, rank_value, rng);
            let mut adventurer = Adventurer::new(
                AdventurerId(i as u32 + 1),
                format!("Sim {}", i + 1),
                job,
                Origin::Central,
                JoinType::Local,
                rank_value,
                stats,
            );
            adventurer.update_rank(0.0, rng);
            adventurer
        })
        .collect()
}

fn build_quest(config: &SimConfig, rank: RankLabel, run: u32, rng: &mut impl Rng) -> Quest {
    let region = *Region::ALL.choose(rng).unwrap_or(&Region::Central);
    let mut quest = Quest::new(
        QuestId(run + 1),
        format!("{} Proving Grounds", region.adjective()),
        config.quest_type,
        rank,
    );
    quest.party_size = config.party_size;
    quest
}

/// Run Monte Carlo quest attempts for every quest rank × party rank pair.
pub fn run_matrix(config: &SimConfig) -> MatrixReport {
    let mut cells = Vec::with_capacity(RankLabel::ALL.len() * RankLabel::ALL.len());
    for (qi, quest_rank) in RankLabel::ALL.into_iter().enumerate() {
        for (pi, party_rank) in RankLabel::ALL.into_iter().enumerate() {
            let stream = (qi * RankLabel::ALL.len() + pi) as u64 * config.num_runs.max(1) as u64;
            let mut service = service_for(config, stream);
            let cell = run_cell(config, quest_rank, party_rank, &mut service);
            if config.verbosity >= 2 {
                info!(
                    quest = %quest_rank,
                    party = %party_rank,
                    success = cell.success_rate,
                    deaths = cell.death_rate,
                    "matrix cell finished"
                );
            }
            cells.push(cell);
        }
    }

    MatrixReport {
        formula: config.formula.name().to_string(),
        runs_per_cell: config.num_runs,
        party_size: config.party_size,
        quest_type: format!("{:?}", config.quest_type),
        cells,
    }
}

fn run_cell(
    config: &SimConfig,
    quest_rank: RankLabel,
    party_rank: RankLabel,
    service: &mut QuestService<ChaCha8Rng>,
) -> MatrixCell {
    let modifiers = QuestModifiers::default();
    let mut successes = 0u32;
    let mut member_outcomes = 0u32;
    let mut damage = 0.0;
    let mut deaths = 0u32;
    let mut injuries = 0u32;
    let mut rank_delta = 0.0;
    let mut reward = 0.0;

    for run in 0..config.num_runs {
        let mut party = build_party(party_rank, config.party_size, run, service.rng());
        let quest = build_quest(config, quest_rank, run, service.rng());
        let mut refs: Vec<&mut Adventurer> = party.iter_mut().collect();
        let outcome = service.attempt_quest(&quest, &mut refs, &modifiers);

        if outcome.success {
            successes += 1;
        }
        reward += outcome.reward as f64;
        for member in &outcome.member_results {
            member_outcomes += 1;
            damage += member.damage;
            rank_delta += member.rank.delta_applied;
            match member.status {
                MemberStatus::Dead => deaths += 1,
                MemberStatus::Injured => injuries += 1,
                MemberStatus::Ok => {}
            }
        }
    }

    let attempts = config.num_runs.max(1) as f64;
    let members = member_outcomes.max(1) as f64;
    MatrixCell {
        quest_rank,
        party_rank,
        attempts: config.num_runs,
        success_rate: successes as f64 / attempts,
        avg_damage: damage / members,
        death_rate: deaths as f64 / members,
        injury_rate: injuries as f64 / members,
        avg_rank_delta: rank_delta / members,
        avg_reward: reward / attempts,
    }
}

/// Run full guilds for `season_days` days each.
pub fn run_season(config: &SimConfig) -> SeasonReport {
    let runs = (0..config.season_runs)
        .map(|run| {
            let mut service = service_for(config, SEASON_STREAM_BASE + run as u64);
            let season = simulate_season(config, run, &mut service);
            if config.verbosity >= 2 {
                info!(
                    run = run + 1,
                    roster = season.final_roster,
                    money = season.final_money,
                    deaths = season.deaths,
                    "season finished"
                );
            }
            season
        })
        .collect();
    SeasonReport::from_runs(config.formula.name(), runs)
}

fn simulate_season(config: &SimConfig, run: u32, service: &mut QuestService<ChaCha8Rng>) -> SeasonRun {
    let mut guild = Guild::found(format!("Sim Guild {}", run + 1), service.rng());
    let mut season = SeasonRun {
        days: config.season_days,
        ..SeasonRun::default()
    };

    for _ in 0..config.season_days {
        let report = GameLoop::advance_day(&mut guild, service);
        season.deaths += report.deaths() as u32;
        season.departures += report.departures() as u32;
        for outcome in &report.outcomes {
            season.quests_resolved += 1;
            if outcome.success {
                season.quests_succeeded += 1;
            }
        }
    }
    debug!(guild = %guild.name, day = guild.day, "season complete");

    season.final_roster = guild.roster.len();
    season.rank_distribution = guild.rank_distribution();
    season.final_money = guild.money;
    season.final_reputation = guild.reputation;
    season
}
