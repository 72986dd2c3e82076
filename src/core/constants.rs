// Rank value domain
pub const RANK_VALUE_MIN: f64 = 0.0;
pub const RANK_VALUE_MAX: f64 = 9999.0;

// Rank label thresholds (descending lookup)
pub const RANK_THRESHOLD_S: f64 = 1000.0;
pub const RANK_THRESHOLD_A: f64 = 640.0;
pub const RANK_THRESHOLD_B: f64 = 380.0;
pub const RANK_THRESHOLD_C: f64 = 200.0;
pub const RANK_THRESHOLD_D: f64 = 80.0;

// Arts unlock at these rank values
pub const FIRST_ART_RANK: f64 = 380.0;
pub const SECOND_ART_RANK: f64 = 1000.0;

// Stat generation: rank_factor = BASE + SCALE * t^EXPONENT, t = rank_value / 1000
pub const STAT_RANK_FACTOR_BASE: f64 = 0.88;
pub const STAT_RANK_FACTOR_SCALE: f64 = 0.70;
pub const STAT_RANK_FACTOR_EXPONENT: f64 = 1.6;
pub const STAT_VARIANCE_BASE: f64 = 0.10;
pub const STAT_VARIANCE_RANK_SLOPE: f64 = 0.04;
pub const STAT_MIN_SUM_RATIO: f64 = 0.92;
pub const STAT_MIN_SUM_MAX_ITERATIONS: u32 = 20;
pub const FOREIGN_LUCK_CHANCE: f64 = 0.20;
pub const FOREIGN_LUCK_BONUS: f64 = 3.0;

// Initial rank ranges by join type (min, max)
pub const LOCAL_RANK_RANGE: (f64, f64) = (0.0, 160.0);
pub const WANDERER_RANK_RANGE: (f64, f64) = (0.0, 650.0);
pub const CONTRACT_RANK_RANGE: (f64, f64) = (350.0, 900.0);

// Initial trust bonus by join type
pub const LOCAL_TRUST_BONUS: i32 = 15;
pub const WANDERER_TRUST_BONUS: i32 = 0;
pub const CONTRACT_TRUST_BONUS: i32 = -15;

// Combat power
pub const CP_PRIMARY_WEIGHT: f64 = 1.0;
pub const CP_SECONDARY_WEIGHT: f64 = 0.5;
pub const CP_EQUIPMENT_BONUS_PER_RANK: f64 = 0.02;
pub const CP_ARTS_BONUS_PER_ART: f64 = 0.06;
pub const PARTY_SIZE_BONUS_PER_MEMBER: f64 = 0.1;

// Battle resolution
pub const WIN_RATE_BASE: f64 = 0.5;
pub const WIN_RATE_POWER_DIVISOR: f64 = 50.0;
pub const WIN_RATE_MIN: f64 = 0.05;
pub const WIN_RATE_MAX: f64 = 0.95;
pub const BATTLE_DAMAGE_FACTOR: f64 = 0.3;
pub const BOSS_POWER_MULTIPLIER: f64 = 1.5;
pub const TOUGH_POWER_MULTIPLIER: f64 = 1.2;
pub const MID_TIER_POWER_MULTIPLIER: f64 = 1.1;
pub const BOSS_DROP_VALUE_MULTIPLIER: u32 = 3;

// Tournament opponent scaling by day
pub const TOURNAMENT_DAY2_MULTIPLIER: f64 = 1.1;
pub const TOURNAMENT_DAY3_MULTIPLIER: f64 = 1.2;
pub const TOURNAMENT_FINAL_MULTIPLIER: f64 = 1.5;

// Narrative rolls
pub const TRAIT_FLAVOR_CHANCE: f64 = 0.40;
pub const RANDOM_EVENT_CHANCE: f64 = 0.15;
pub const RANDOM_EVENT_DAMAGE: u32 = 10;

// Quest scoring
pub const SCORE_DANGER_DIVISOR: f64 = 100.0;
pub const SCORE_REWARD_DIVISOR: f64 = 1000.0;
pub const SCORE_PRESTIGE: f64 = 0.5;
pub const SCORE_RISK_WEIGHT: f64 = 0.25;
pub const SCORE_GREED_WEIGHT: f64 = 0.3;
pub const SCORE_SOCIAL_WEIGHT: f64 = 0.2;

// Success chance estimate
pub const SUCCESS_BASE: f64 = 0.5;
pub const SUCCESS_POWER_DIVISOR: f64 = 200.0;
pub const SUCCESS_JOB_ADVANTAGE_BONUS: f64 = 0.02;
pub const SUCCESS_MIN: f64 = 0.05;
pub const SUCCESS_MAX: f64 = 0.95;

// Member outcomes
pub const DEATH_DAMAGE_THRESHOLD: f64 = 50.0;
pub const INJURY_DAMAGE_THRESHOLD: f64 = 20.0;
pub const DEATH_CHANCE: f64 = 0.05;
pub const INFIRMARY_DEATH_REDUCTION_PER_LEVEL: f64 = 0.05;
pub const INJURY_CHANCE: f64 = 0.5;
pub const INJURY_BASE_RECOVERY_DAYS: u32 = 2;
pub const INJURY_DAMAGE_PER_RECOVERY_DAY: f64 = 25.0;
pub const INJURY_MAX_RECOVERY_DAYS: u32 = 10;

// Rewards
pub const KILL_BONUS_MONEY: u32 = 10;
pub const BOSS_KILL_BONUS_MONEY: u32 = 100;
pub const WAREHOUSE_ITEM_VALUE_MULTIPLIER: f64 = 1.1;

// Rank growth
pub const RANK_DELTA_ON_FAILURE: f64 = -5.0;
pub const RANK_BASE_REWARD_BY_QUEST_RANK: [f64; 7] = [0.0, 6.0, 7.0, 9.0, 12.0, 14.0, 20.0];
pub const UNDERDOG_BONUS_PER_RANK: f64 = 0.2;
pub const GAP_PENALTY_PER_RANK: f64 = 0.4;
pub const SURPRISE_BONUS_FACTOR: f64 = 0.5;
pub const PERF_EMA_DECAY: f64 = 0.9;
pub const PERF_EMA_WEIGHT: f64 = 0.1;
pub const DIMINISH_START_RANK: f64 = 850.0;
pub const DIMINISH_ZERO_RANK: f64 = 1050.0;
pub const DIMINISH_SPAN: f64 = 150.0;
pub const TRAINING_BONUS_PER_LEVEL: f64 = 0.10;
pub const TRAINING_RANK_CEILING: f64 = 380.0;

// Stat growth
pub const STAT_GROWTH_SUCCESS_BASE: f64 = 0.60;
pub const STAT_GROWTH_FAILURE_BASE: f64 = 0.25;
pub const STAT_GROWTH_DIFFICULTY_BASE: f64 = 0.7;
pub const STAT_GROWTH_DIFFICULTY_PER_RANK: f64 = 0.15;
pub const STAT_SOFT_CAP: f64 = 120.0;
pub const STAT_DIMINISH_DIVISOR: f64 = 100.0;
pub const STAT_DIMINISH_FLOOR: f64 = 0.1;

// Guild economy
pub const GUILD_BASE_CUT: f64 = 0.30;
pub const GUILD_MANUAL_CUT_SHIFT: f64 = 0.10;
pub const STARTING_GUILD_MONEY: i64 = 1000;
pub const STARTING_ROSTER_SIZE: usize = 4;
pub const STARTING_ROSTER_RANK_CAP: f64 = 200.0;

// Quest generation
pub const DAILY_QUEST_BASE_COUNT: usize = 3;
pub const DAILY_QUEST_REPUTATION_STEP: i64 = 100;
pub const DAILY_QUEST_MAX_COUNT: usize = 8;
pub const SPECIAL_QUEST_CHANCE: f64 = 0.05;
pub const SPECIAL_QUEST_REWARD_MULTIPLIER: f64 = 3.0;
pub const QUEST_REWARD_SPREAD: f64 = 0.2;
pub const QUEST_PENALTY_RATIO: f64 = 0.2;
pub const QUEST_MIN_EXPIRY_DAYS: u32 = 3;
pub const QUEST_MAX_EXPIRY_DAYS: u32 = 7;
pub const TOURNAMENT_INTERVAL_DAYS: u32 = 30;

// Daily roster upkeep
pub const TRUST_DECAY_CHANCE: f64 = 0.10;
pub const LEAVE_CHANCE_WHEN_DISTRUSTFUL: f64 = 0.05;
pub const DISAPPEAR_CHANCE_WANDERER: f64 = 0.001;
pub const RETIRE_CHANCE_VETERAN: f64 = 0.002;
pub const RETIRE_MIN_QUESTS: u32 = 50;

// Records
pub const RECORD_TOP_N: usize = 10;
pub const HISTORY_MAX_ENTRIES: usize = 50;

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x4755_494C_4448_0001; // "GUILDH" + v1
