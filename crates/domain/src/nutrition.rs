use std::slice::Iter;

use derive_more::Display;
use log::debug;

use crate::InvalidInputError;

/// Physical parameters of a person, supplied per calculation call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnthropometricInput {
    pub weight: f32,
    pub height: f32,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl AnthropometricInput {
    fn validated(&self) -> Result<(), InvalidInputError> {
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(InvalidInputError::Weight);
        }

        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(InvalidInputError::Height);
        }

        if self.age == 0 {
            return Err(InvalidInputError::Age);
        }

        Ok(())
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    #[display("female")]
    Female,
    #[display("male")]
    Male,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    #[display("sedentary")]
    Sedentary,
    #[display("light")]
    Light,
    #[display("moderate")]
    Moderate,
    #[display("active")]
    Active,
    #[display("very active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn iter() -> Iter<'static, ActivityLevel> {
        static ACTIVITY_LEVEL: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        ACTIVITY_LEVEL.iter()
    }

    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.90,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    #[display("lose")]
    Lose,
    #[display("maintain")]
    Maintain,
    #[display("gain")]
    Gain,
}

impl Goal {
    pub fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];
        GOAL.iter()
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTier {
    #[display("beginner")]
    Beginner,
    #[display("intermediate")]
    Intermediate,
    #[display("advanced")]
    Advanced,
}

impl ExperienceTier {
    pub fn iter() -> Iter<'static, ExperienceTier> {
        static EXPERIENCE_TIER: [ExperienceTier; 3] = [
            ExperienceTier::Beginner,
            ExperienceTier::Intermediate,
            ExperienceTier::Advanced,
        ];
        EXPERIENCE_TIER.iter()
    }
}

/// Daily energy and macro targets derived from [`AnthropometricInput`].
///
/// A profile is never mutated in place. Deriving with changed inputs yields a
/// new profile that replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionProfile {
    pub bmr: u32,
    pub tdee: u32,
    pub target_calories: u32,
    pub macros: MacroGoals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroGoals {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
    pub calories: u32,
}

impl MacroGoals {
    pub const KCAL_PER_G_PROTEIN: f32 = 4.0;
    pub const KCAL_PER_G_CARBS: f32 = 4.0;
    pub const KCAL_PER_G_FAT: f32 = 9.0;
}

pub const MIN_TARGET_CALORIES: u32 = 1200;

pub fn derive_profile(
    anthro: &AnthropometricInput,
) -> Result<NutritionProfile, InvalidInputError> {
    anthro.validated()?;

    let bmr = mifflin_st_jeor(anthro).round();
    let tdee = (bmr * anthro.activity_level.multiplier()).round();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let tdee = tdee as u32;
    let target_calories = target_calories(tdee, anthro.goal);

    debug!(
        "derived nutrition profile for goal {}: {target_calories} kcal/day",
        anthro.goal
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(NutritionProfile {
        bmr: bmr as u32,
        tdee,
        target_calories,
        macros: macro_goals(target_calories, anthro.goal),
    })
}

fn mifflin_st_jeor(anthro: &AnthropometricInput) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let age = anthro.age as f32;
    let sex_term = match anthro.sex {
        Sex::Female => -161.0,
        Sex::Male => 5.0,
    };
    10.0 * anthro.weight + 6.25 * anthro.height - 5.0 * age + sex_term
}

#[must_use]
pub fn target_calories(tdee: u32, goal: Goal) -> u32 {
    match goal {
        Goal::Lose => tdee.saturating_sub(500).max(MIN_TARGET_CALORIES),
        Goal::Maintain => tdee,
        Goal::Gain => tdee + 400,
    }
}

#[must_use]
pub fn macro_goals(target_calories: u32, goal: Goal) -> MacroGoals {
    let (protein_pct, fat_pct, carb_pct) = match goal {
        Goal::Lose => (0.35, 0.30, 0.35),
        Goal::Maintain => (0.30, 0.30, 0.40),
        Goal::Gain => (0.25, 0.25, 0.50),
    };

    #[allow(clippy::cast_precision_loss)]
    let calories = target_calories as f32;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    MacroGoals {
        protein_g: (calories * protein_pct / MacroGoals::KCAL_PER_G_PROTEIN).round() as u32,
        carbs_g: (calories * carb_pct / MacroGoals::KCAL_PER_G_CARBS).round() as u32,
        fats_g: (calories * fat_pct / MacroGoals::KCAL_PER_G_FAT).round() as u32,
        calories: target_calories,
    }
}

/// Advisory protein target in g per kg of body weight.
///
/// Higher while losing weight to preserve lean mass, scaling up with training
/// experience.
#[must_use]
pub fn protein_per_kg(goal: Goal, tier: ExperienceTier) -> f32 {
    match (goal, tier) {
        (Goal::Lose, ExperienceTier::Beginner) => 1.8,
        (Goal::Lose, ExperienceTier::Intermediate) => 2.0,
        (Goal::Lose, ExperienceTier::Advanced) => 2.2,
        (Goal::Maintain, ExperienceTier::Beginner) => 1.2,
        (Goal::Maintain, ExperienceTier::Intermediate) => 1.4,
        (Goal::Maintain, ExperienceTier::Advanced) => 1.6,
        (Goal::Gain, ExperienceTier::Beginner) => 1.4,
        (Goal::Gain, ExperienceTier::Intermediate) => 1.6,
        (Goal::Gain, ExperienceTier::Advanced) => 1.8,
    }
}

pub fn protein_requirement(
    weight: f32,
    goal: Goal,
    tier: ExperienceTier,
) -> Result<u32, InvalidInputError> {
    if !(weight.is_finite() && weight > 0.0) {
        return Err(InvalidInputError::Weight);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok((protein_per_kg(goal, tier) * weight).round() as u32)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    static ANTHRO: std::sync::LazyLock<AnthropometricInput> =
        std::sync::LazyLock::new(|| AnthropometricInput {
            weight: 70.0,
            height: 175.0,
            age: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        });

    #[rstest]
    #[case::sedentary(ActivityLevel::Sedentary, 1.20)]
    #[case::light(ActivityLevel::Light, 1.375)]
    #[case::moderate(ActivityLevel::Moderate, 1.55)]
    #[case::active(ActivityLevel::Active, 1.725)]
    #[case::very_active(ActivityLevel::VeryActive, 1.90)]
    fn test_activity_level_multiplier(#[case] activity_level: ActivityLevel, #[case] expected: f32) {
        assert_eq!(activity_level.multiplier(), expected);
    }

    #[test]
    fn test_derive_profile() {
        let profile = derive_profile(&ANTHRO).unwrap();

        assert_eq!(profile.bmr, 1649);
        assert_eq!(profile.tdee, 2556);
        assert_eq!(profile.target_calories, 2556);
    }

    #[test]
    fn test_derive_profile_female() {
        let profile = derive_profile(&AnthropometricInput {
            weight: 60.0,
            height: 165.0,
            age: 25,
            sex: Sex::Female,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        })
        .unwrap();

        assert_eq!(profile.bmr, 1345);
        assert_eq!(profile.tdee, 1614);
    }

    #[test]
    fn test_derive_profile_lose() {
        let profile = derive_profile(&AnthropometricInput {
            goal: Goal::Lose,
            ..ANTHRO.clone()
        })
        .unwrap();

        assert_eq!(profile.target_calories, 2056);
        assert_eq!(
            profile.macros,
            MacroGoals {
                protein_g: 180,
                carbs_g: 180,
                fats_g: 69,
                calories: 2056,
            }
        );
    }

    #[rstest]
    #[case::weight(AnthropometricInput { weight: 0.0, ..ANTHRO.clone() }, InvalidInputError::Weight)]
    #[case::weight_negative(
        AnthropometricInput { weight: -70.0, ..ANTHRO.clone() },
        InvalidInputError::Weight
    )]
    #[case::weight_nan(
        AnthropometricInput { weight: f32::NAN, ..ANTHRO.clone() },
        InvalidInputError::Weight
    )]
    #[case::height(AnthropometricInput { height: 0.0, ..ANTHRO.clone() }, InvalidInputError::Height)]
    #[case::age(AnthropometricInput { age: 0, ..ANTHRO.clone() }, InvalidInputError::Age)]
    fn test_derive_profile_invalid_input(
        #[case] anthro: AnthropometricInput,
        #[case] expected: InvalidInputError,
    ) {
        assert_eq!(derive_profile(&anthro), Err(expected));
    }

    #[test]
    fn test_derive_profile_idempotence() {
        assert_eq!(derive_profile(&ANTHRO), derive_profile(&ANTHRO));
    }

    #[rstest]
    #[case::lose(2556, Goal::Lose, 2056)]
    #[case::lose_floor(1500, Goal::Lose, 1200)]
    #[case::lose_below_deficit(400, Goal::Lose, 1200)]
    #[case::maintain(2000, Goal::Maintain, 2000)]
    #[case::gain(1500, Goal::Gain, 1900)]
    fn test_target_calories(#[case] tdee: u32, #[case] goal: Goal, #[case] expected: u32) {
        assert_eq!(target_calories(tdee, goal), expected);
    }

    #[test]
    fn test_macro_goals_match_target_calories() {
        for goal in Goal::iter() {
            for activity_level in ActivityLevel::iter() {
                let profile = derive_profile(&AnthropometricInput {
                    activity_level: *activity_level,
                    goal: *goal,
                    ..ANTHRO.clone()
                })
                .unwrap();
                let macro_calories = i64::from(profile.macros.protein_g) * 4
                    + i64::from(profile.macros.carbs_g) * 4
                    + i64::from(profile.macros.fats_g) * 9;
                let deviation = (macro_calories - i64::from(profile.target_calories)).abs();

                // Each gram value may be off by half a gram due to rounding.
                let tolerance = 0.5 * (4.0 + 4.0 + 9.0);
                #[allow(clippy::cast_precision_loss)]
                let deviation = deviation as f64;
                assert!(
                    deviation <= tolerance,
                    "macro calories {macro_calories} deviate from target {} for {goal}/{activity_level}",
                    profile.target_calories
                );
            }
        }
    }

    #[rstest]
    #[case::lowest(Goal::Maintain, ExperienceTier::Beginner, 1.2)]
    #[case::highest(Goal::Lose, ExperienceTier::Advanced, 2.2)]
    #[case::gain_intermediate(Goal::Gain, ExperienceTier::Intermediate, 1.6)]
    fn test_protein_per_kg(
        #[case] goal: Goal,
        #[case] tier: ExperienceTier,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(protein_per_kg(goal, tier), expected, 0.001);
    }

    #[test]
    fn test_protein_per_kg_ordering() {
        for tier in ExperienceTier::iter() {
            assert!(protein_per_kg(Goal::Lose, *tier) > protein_per_kg(Goal::Maintain, *tier));
        }
        for goal in Goal::iter() {
            assert!(
                protein_per_kg(*goal, ExperienceTier::Advanced)
                    > protein_per_kg(*goal, ExperienceTier::Beginner)
            );
        }
    }

    #[rstest]
    #[case(70.0, Goal::Lose, ExperienceTier::Advanced, Ok(154))]
    #[case(80.0, Goal::Maintain, ExperienceTier::Beginner, Ok(96))]
    #[case(0.0, Goal::Maintain, ExperienceTier::Beginner, Err(InvalidInputError::Weight))]
    fn test_protein_requirement(
        #[case] weight: f32,
        #[case] goal: Goal,
        #[case] tier: ExperienceTier,
        #[case] expected: Result<u32, InvalidInputError>,
    ) {
        assert_eq!(protein_requirement(weight, goal, tier), expected);
    }
}
