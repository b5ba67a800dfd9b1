// ABOUTME: Verifier configuration: physiology constants, progression limits, scoring penalties
// ABOUTME: Defaults match documented constants; WELLPLAN_* environment variables override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Revised Harris-Benedict coefficients
///
/// Reference: Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
/// American Journal of Clinical Nutrition, 40(1), 168-182. DOI: 10.1093/ajcn/40.1.168
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male constant (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient, subtracted (5.677)
    pub male_age_coef: f64,
    /// Female constant (447.593)
    pub female_constant: f64,
    /// Female weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098)
    pub female_height_coef: f64,
    /// Female age coefficient, subtracted (4.33)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.33,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Daily kcal offsets applied per primary goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalOffsetsConfig {
    /// `fat_loss`: -400
    pub fat_loss: f64,
    /// `lean_gain`: +300
    pub lean_gain: f64,
    /// `maintenance`: 0
    pub maintenance: f64,
    /// `pcod_remission`: -250
    pub pcod_remission: f64,
    /// `stress_balance`: -100
    pub stress_balance: f64,
}

impl Default for GoalOffsetsConfig {
    fn default() -> Self {
        Self {
            fat_loss: -400.0,
            lean_gain: 300.0,
            maintenance: 0.0,
            pcod_remission: -250.0,
            stress_balance: -100.0,
        }
    }
}

/// Regional multipliers applied to energy and hydration targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMultipliersConfig {
    /// India: 1.05
    pub india: f64,
    /// United States: 1.0
    pub united_states: f64,
    /// Europe: 0.98
    pub europe: f64,
    /// Global: 1.0
    pub global: f64,
}

impl Default for RegionMultipliersConfig {
    fn default() -> Self {
        Self {
            india: 1.05,
            united_states: 1.0,
            europe: 0.98,
            global: 1.0,
        }
    }
}

/// Energy and hydration target configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Goal offsets
    pub goal_offsets: GoalOffsetsConfig,
    /// Region multipliers
    pub region_multipliers: RegionMultipliersConfig,
    /// Hydration per kg body weight (ml)
    pub hydration_ml_per_kg: f64,
    /// Hydration floor before the region multiplier (ml)
    pub hydration_floor_ml: f64,
    /// Lowest calorie target ever emitted (kcal)
    pub calorie_floor_kcal: u32,
    /// Allowed drift of the plan's kcal target from the derived target (%)
    pub kcal_tolerance_pct: f64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            goal_offsets: GoalOffsetsConfig::default(),
            region_multipliers: RegionMultipliersConfig::default(),
            hydration_ml_per_kg: 35.0,
            hydration_floor_ml: 2000.0,
            calorie_floor_kcal: 1200,
            kcal_tolerance_pct: 15.0,
        }
    }
}

/// Load progression and rest cadence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Largest allowed week-over-week increase in activity minutes (%)
    pub max_weekly_increase_pct: u32,
    /// A deload is due every this many completed weeks
    pub deload_every_weeks: u32,
    /// Minimum reduction a deload week must show versus the prior week (%)
    pub deload_drop_pct: u32,
    /// Days below this many activity minutes count as rest
    pub low_activity_threshold_min: u32,
    /// Longest run of days allowed without a rest day
    pub rest_window_days: usize,
    /// Plans at least this many weeks long must contain a deload week
    pub long_plan_weeks: usize,
    /// Duration growth per completed week (%)
    pub overload_pct_per_week: u32,
    /// Absolute session duration cap (minutes)
    pub max_session_duration_min: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_weekly_increase_pct: 10,
            deload_every_weeks: 4,
            deload_drop_pct: 40,
            low_activity_threshold_min: 10,
            rest_window_days: 6,
            long_plan_weeks: 8,
            overload_pct_per_week: 10,
            max_session_duration_min: 120,
        }
    }
}

/// Per-finding penalties for each score axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Avoid-severity contraindication
    pub avoid_penalty: f64,
    /// Modify- or monitor-severity contraindication
    pub caution_penalty: f64,
    /// Diet, allergy, energy or hydration finding
    pub diet_penalty: f64,
    /// Progression finding
    pub progression_penalty: f64,
    /// Structural or catalog finding
    pub structure_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            avoid_penalty: 0.05,
            caution_penalty: 0.02,
            diet_penalty: 0.03,
            progression_penalty: 0.04,
            structure_penalty: 0.02,
        }
    }
}

/// How avoid-severity contraindication hits are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyMode {
    /// Attach hits as warnings
    #[default]
    Advisory,
    /// Reject plans with any hit
    Strict,
}

impl FromStr for SafetyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "advisory" => Ok(Self::Advisory),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::Parse(format!("unknown safety mode '{other}'"))),
        }
    }
}

/// How references to ids missing from a catalog are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Attach unknown ids as warnings
    #[default]
    Advisory,
    /// Reject the plan as structurally invalid
    Fatal,
}

impl FromStr for ReferencePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "advisory" => Ok(Self::Advisory),
            "fatal" => Ok(Self::Fatal),
            other => Err(ConfigError::Parse(format!(
                "unknown reference policy '{other}'"
            ))),
        }
    }
}

/// Complete verifier configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Energy and hydration targets
    pub nutrition: NutritionConfig,
    /// Progression limits
    pub progression: ProgressionConfig,
    /// Score penalties
    pub scoring: ScoringConfig,
    /// Avoid-hit handling
    pub safety_mode: SafetyMode,
    /// Unknown catalog id handling
    pub reference_policy: ReferencePolicy,
}

/// Global configuration singleton
static VERIFIER_CONFIG: OnceLock<VerifierConfig> = OnceLock::new();

impl VerifierConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        VERIFIER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load verifier config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Same configuration in strict safety mode
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.safety_mode = SafetyMode::Strict;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first constraint the configuration violates
    pub fn validate(&self) -> Result<(), ConfigError> {
        let progression = &self.progression;
        if progression.max_weekly_increase_pct == 0 || progression.max_weekly_increase_pct > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "max_weekly_increase_pct must be between 1 and 100",
            ));
        }
        if progression.deload_every_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload_every_weeks must be at least 1",
            ));
        }
        if progression.deload_drop_pct == 0 || progression.deload_drop_pct >= 100 {
            return Err(ConfigError::InvalidRange(
                "deload_drop_pct must be between 1 and 99",
            ));
        }
        if progression.rest_window_days < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "rest_window_days must be at least 2",
            ));
        }
        if progression.max_session_duration_min == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_session_duration_min must be positive",
            ));
        }

        let nutrition = &self.nutrition;
        let factors = &nutrition.activity_factors;
        if factors.sedentary < 1.0
            || factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidFactors(
                "activity factors must start at 1.0 or above and increase with activity level",
            ));
        }
        if nutrition.hydration_ml_per_kg <= 0.0 || nutrition.hydration_floor_ml <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "hydration_ml_per_kg and hydration_floor_ml must be positive",
            ));
        }
        if nutrition.calorie_floor_kcal == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_floor_kcal must be positive",
            ));
        }
        if nutrition.kcal_tolerance_pct <= 0.0 || nutrition.kcal_tolerance_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_tolerance_pct must be in (0, 100]",
            ));
        }
        let regions = &nutrition.region_multipliers;
        if [regions.india, regions.united_states, regions.europe, regions.global]
            .iter()
            .any(|multiplier| *multiplier <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "region multipliers must be positive",
            ));
        }

        let scoring = &self.scoring;
        if [
            scoring.avoid_penalty,
            scoring.caution_penalty,
            scoring.diet_penalty,
            scoring.progression_penalty,
            scoring.structure_penalty,
        ]
        .iter()
        .any(|penalty| !(0.0..=1.0).contains(penalty))
        {
            return Err(ConfigError::ValueOutOfRange(
                "score penalties must be within [0, 1]",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        apply_env_var(
            "WELLPLAN_MAX_WEEKLY_INCREASE_PCT",
            &mut self.progression.max_weekly_increase_pct,
        )?;
        apply_env_var(
            "WELLPLAN_DELOAD_EVERY_WEEKS",
            &mut self.progression.deload_every_weeks,
        )?;
        apply_env_var(
            "WELLPLAN_DELOAD_DROP_PCT",
            &mut self.progression.deload_drop_pct,
        )?;
        apply_env_var(
            "WELLPLAN_LOW_ACTIVITY_MIN",
            &mut self.progression.low_activity_threshold_min,
        )?;
        apply_env_var(
            "WELLPLAN_REST_WINDOW_DAYS",
            &mut self.progression.rest_window_days,
        )?;
        apply_env_var(
            "WELLPLAN_KCAL_TOLERANCE_PCT",
            &mut self.nutrition.kcal_tolerance_pct,
        )?;
        apply_env_var(
            "WELLPLAN_HYDRATION_FLOOR_ML",
            &mut self.nutrition.hydration_floor_ml,
        )?;
        apply_env_var(
            "WELLPLAN_CALORIE_FLOOR_KCAL",
            &mut self.nutrition.calorie_floor_kcal,
        )?;
        apply_env_var("WELLPLAN_SAFETY_MODE", &mut self.safety_mode)?;
        apply_env_var("WELLPLAN_REFERENCE_POLICY", &mut self.reference_policy)?;
        Ok(self)
    }
}

/// Overwrite `target` with the parsed value of `key` when the variable is set
fn apply_env_var<T: FromStr>(key: &'static str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(key) {
        Ok(raw) => {
            *target = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {key}: '{raw}'")))?;
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
