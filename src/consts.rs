/// Maximum talent points a hero can spread across its trees.
pub const MAX_TALENT_POINTS: u32 = 49;

/// Flat speed every hero can unlock on top of its tree allocation.
pub const INNATE_SPEED_BONUS: f32 = 6.0;

/// Deviations (in speed %) above this are multiplied by `DEVIATION_PENALTY`.
pub const DEVIATION_TOLERANCE: f32 = 1.5;

pub const DEVIATION_PENALTY: f32 = 10.0;

/// Hard cap on full pairings scored in a single run.
pub const MAX_EVALUATIONS: usize = 100_000;

/// Number of ranked plans returned to the caller.
pub const RESULT_LIMIT: usize = 20;

/// Progress is reported every N evaluations.
pub const PROGRESS_INTERVAL: usize = 2_000;

pub const DEFAULT_TARGET_SPEED: f32 = 50.0;

pub const MAX_FILLERS: usize = 10;

/// Skill levels run 1..=5; 0 means the skill is not unlocked.
pub const MAX_SKILL_LEVEL: u8 = 5;

pub const SKILL_TIERS: usize = 5;

/// Category assigned to filler placeholders for synergy checks.
pub const DEFAULT_FILLER_CATEGORY: &str = "Filler";

/// Display prefix for filler placeholders. Only used when rendering names.
pub const FILLER_PREFIX: &str = "Filler";

/// Talent speeds are keyed in hundredths of a percent. Tree bonuses and the
/// innate bonus finer than that are rejected at catalog load.
pub const SPEED_KEY_SCALE: f32 = 100.0;
