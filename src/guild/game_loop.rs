//! The daily tick: departures, quest resolution, upkeep, new quests and
//! auto-assignment.

use super::assignment::AssignmentService;
use super::types::{DayReport, DepartureReason, Guild, GuildEvent};
use crate::adventurer::{AchievementRecord, Adventurer, AdventurerId, AdventurerState, JoinType};
use crate::core::constants::*;
use crate::quest::{AssignmentStatus, MemberStatus, QuestAssignment, QuestService};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Drives a guild forward one day at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameLoop;

impl GameLoop {
    /// Advance the guild by one day.
    ///
    /// Steps run in a fixed order: the day counter moves, planned parties set
    /// out, finished quests resolve and settle money, members recover or
    /// leave, stale quests expire, the new board is posted, and open quests
    /// are auto-assigned.
    pub fn advance_day<R: Rng>(guild: &mut Guild, service: &mut QuestService<R>) -> DayReport {
        // ── 1. Next day ─────────────────────────────────────────────
        guild.day += 1;
        let mut report = DayReport {
            day: guild.day,
            ..DayReport::default()
        };

        // ── 2. Planned parties set out ──────────────────────────────
        for mut assignment in std::mem::take(&mut guild.planned) {
            assignment.status = AssignmentStatus::Ongoing;
            for id in &assignment.members {
                if let Some(adventurer) = guild.roster.get_mut(id) {
                    adventurer.state = AdventurerState::Questing;
                }
            }
            report.events.push(GuildEvent::QuestDeparted {
                quest_id: assignment.quest.id,
                message: format!(
                    "A party of {} sets out on {}.",
                    assignment.members.len(),
                    assignment.quest.title
                ),
            });
            guild.ongoing.push(assignment);
        }

        // ── 3. Count down and resolve ───────────────────────────────
        let mut finished = Vec::new();
        for mut assignment in std::mem::take(&mut guild.ongoing) {
            assignment.remaining_days = assignment.remaining_days.saturating_sub(1);
            if assignment.remaining_days == 0 {
                finished.push(assignment);
            } else {
                guild.ongoing.push(assignment);
            }
        }
        let mut returned = BTreeSet::new();
        for assignment in finished {
            returned.extend(assignment.members.iter().copied());
            resolve_assignment(guild, service, assignment, &mut report);
        }

        // ── 4. Recovery, trust and departures ───────────────────────
        upkeep(guild, &returned, service.rng(), &mut report);

        // ── 5. Expire stale quests ──────────────────────────────────
        let today = guild.day;
        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut guild.board)
            .into_iter()
            .partition(|q| q.expiry_day().is_some_and(|last| today > last));
        guild.board = kept;
        for quest in expired {
            report.events.push(GuildEvent::QuestExpired {
                quest_id: quest.id,
                title: quest.title,
            });
        }

        if guild.roster.len() < STARTING_ROSTER_SIZE {
            let id = guild.recruit(Some(STARTING_ROSTER_RANK_CAP), service.rng());
            if let Ok(adventurer) = guild.adventurer(id) {
                report.events.push(GuildEvent::AdventurerJoined {
                    id,
                    message: format!("{} walks in and signs the register.", adventurer.name),
                });
            }
        }

        // ── 6. Post the new board ───────────────────────────────────
        let facilities = guild.facilities;
        let quests =
            service.generate_daily_quests(guild.day, guild.reputation, &facilities, &mut guild.next_quest_id);
        for quest in quests {
            if quest.is_tournament {
                report.events.push(GuildEvent::TournamentAnnounced {
                    quest_id: quest.id,
                    message: format!("The {} opens for entries!", quest.title),
                });
            } else {
                report.events.push(GuildEvent::QuestPosted {
                    quest_id: quest.id,
                    title: quest.title.clone(),
                });
            }
            guild.board.push(quest);
        }

        // ── 7. Auto-assign ──────────────────────────────────────────
        let planned = AssignmentService::auto_assign(guild, service);
        report.events.extend(planned);

        debug!(
            day = guild.day,
            money = guild.money,
            reputation = guild.reputation,
            roster = guild.roster.len(),
            events = report.events.len(),
            "day advanced"
        );
        report
    }
}

/// Run a finished assignment through the quest service and settle the
/// results back into the guild.
fn resolve_assignment<R: Rng>(
    guild: &mut Guild,
    service: &mut QuestService<R>,
    mut assignment: QuestAssignment,
    report: &mut DayReport,
) {
    let quest = &assignment.quest;
    let mut party: Vec<Adventurer> = assignment
        .members
        .iter()
        .filter_map(|id| guild.roster.remove(id))
        .collect();
    let modifiers = guild.modifiers();
    let outcome = {
        let mut refs: Vec<&mut Adventurer> = party.iter_mut().collect();
        service.attempt_quest(quest, &mut refs, &modifiers)
    };

    let survivors = outcome
        .member_results
        .iter()
        .filter(|m| m.status != MemberStatus::Dead)
        .count();
    let (guild_cut, member_share) = if survivors == 0 {
        (0, 0)
    } else {
        let cut_rate = (assignment.guild_cut_rate * outcome.effective_share_mod).clamp(0.0, 1.0);
        let cut = (outcome.reward as f64 * cut_rate).floor() as i64;
        let rest = outcome.reward as i64 - cut;
        let share = rest / survivors as i64;
        // Whatever does not split evenly stays with the guild
        (cut + rest - share * survivors as i64, share)
    };
    let guild_income = guild_cut - outcome.effective_penalty as i64;
    guild.money += guild_income;
    guild.reputation += outcome.reputation_delta as i64;

    let day = guild.day;
    for (mut adventurer, result) in party.into_iter().zip(outcome.member_results.iter()) {
        let id = adventurer.id;
        if result.rank.label_changed {
            report.events.push(GuildEvent::RankChanged {
                id,
                label: adventurer.rank_label(),
                message: format!("{} is now {}-rank.", adventurer.name, adventurer.rank_label()),
            });
        }
        for art in &result.rank.learned_arts {
            report.events.push(GuildEvent::ArtLearned {
                id,
                art: art.clone(),
                message: format!("{} learned {}.", adventurer.name, art),
            });
        }
        if let Some(title) = &result.title {
            report.events.push(GuildEvent::TitleGranted {
                id,
                title: title.clone(),
                message: format!("{} is now known as {}.", adventurer.name, title),
            });
        }

        if result.status == MemberStatus::Dead {
            info!(adventurer = %adventurer.name, quest = %quest.title, "adventurer died");
            report.events.push(GuildEvent::AdventurerDied {
                id,
                name: adventurer.name.clone(),
                message: format!("{} fell during {}.", adventurer.name, quest.title),
            });
            continue;
        }

        adventurer.state = AdventurerState::Idle;
        adventurer.personal_money += member_share;
        if outcome.success {
            adventurer.trust += 1;
            adventurer.records.record_achievement(AchievementRecord {
                quest_title: quest.title.clone(),
                rank: quest.rank(),
                day,
            });
        }
        let verdict = if outcome.success { "succeeded" } else { "failed" };
        adventurer.push_history(format!("Day {day}: {verdict} at {}", quest.title));

        if result.status == MemberStatus::Injured {
            adventurer.recovery_days = result.recovery_days;
            report.events.push(GuildEvent::AdventurerInjured {
                id,
                recovery_days: result.recovery_days,
                message: format!(
                    "{} was injured and needs {} days to recover.",
                    adventurer.name, result.recovery_days
                ),
            });
        }
        guild.roster.insert(id, adventurer);
    }

    let verdict = if outcome.success { "completed" } else { "failed" };
    report.events.push(GuildEvent::QuestResolved {
        quest_id: quest.id,
        success: outcome.success,
        guild_income,
        reputation_delta: outcome.reputation_delta,
        message: format!("{} {verdict}. Guild funds {:+}.", quest.title, guild_income),
    });
    assignment.status = AssignmentStatus::Completed;
    guild.archive.push(assignment.quest.id);
    report.outcomes.push(outcome);
}

/// Daily recovery countdown, trust decay and departures. Members who came
/// back today are left alone.
fn upkeep(guild: &mut Guild, returned: &BTreeSet<AdventurerId>, rng: &mut impl Rng, report: &mut DayReport) {
    let mut departures = Vec::new();
    for adventurer in guild.roster.values_mut() {
        if returned.contains(&adventurer.id) || adventurer.state != AdventurerState::Idle {
            continue;
        }
        if adventurer.recovery_days > 0 {
            adventurer.tick_recovery();
            if adventurer.recovery_days == 0 {
                report.events.push(GuildEvent::Recovered {
                    id: adventurer.id,
                    message: format!("{} is back on their feet.", adventurer.name),
                });
            }
        }
        if rng.gen::<f64>() < TRUST_DECAY_CHANCE {
            adventurer.trust -= 1;
        }

        if let Some(reason) = roll_departure(adventurer, rng) {
            departures.push((adventurer.id, reason));
        }
    }

    for (id, reason) in departures {
        let Some(adventurer) = guild.roster.remove(&id) else {
            continue;
        };
        info!(adventurer = %adventurer.name, ?reason, "adventurer departed");
        report.events.push(GuildEvent::AdventurerDeparted {
            id,
            name: adventurer.name.clone(),
            reason,
            message: format!("{} {}.", adventurer.name, reason.verb()),
        });
    }
}

fn roll_departure(adventurer: &Adventurer, rng: &mut impl Rng) -> Option<DepartureReason> {
    if adventurer.trust < 0 && rng.gen::<f64>() < LEAVE_CHANCE_WHEN_DISTRUSTFUL {
        return Some(DepartureReason::LostTrust);
    }
    if adventurer.records.quests_total() >= RETIRE_MIN_QUESTS && rng.gen::<f64>() < RETIRE_CHANCE_VETERAN {
        return Some(DepartureReason::Retired);
    }
    if adventurer.join_type == JoinType::Wanderer && rng.gen::<f64>() < DISAPPEAR_CHANCE_WANDERER {
        return Some(DepartureReason::Disappeared);
    }
    None
}
