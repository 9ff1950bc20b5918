use derive_more::Display;

use crate::{MIN_TARGET_CALORIES, MacroGoals, NutritionProfile};

/// Advisory finding about a derived [`NutritionProfile`].
///
/// Warnings never invalidate a profile. They are surfaced to the user as
/// safety advisories.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    #[display("Target calories are below the safe minimum of 1200 kcal per day")]
    CaloriesTooLow,
    #[display("Less than 15% of target calories come from protein")]
    ProteinTooLow,
    #[display("Less than 20% of target calories come from fat")]
    FatTooLow,
}

/// Minimum share of target calories that should come from protein.
pub const MIN_PROTEIN_SHARE: f32 = 0.15;

/// Minimum share of target calories that should come from fat.
pub const MIN_FAT_SHARE: f32 = 0.20;

/// Cross-check a profile against the safety thresholds.
///
/// All rules are evaluated independently. An empty result means no issues
/// were found.
#[must_use]
pub fn validate(profile: &NutritionProfile) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if profile.target_calories < MIN_TARGET_CALORIES {
        warnings.push(ValidationWarning::CaloriesTooLow);
    }

    #[allow(clippy::cast_precision_loss)]
    let target_calories = profile.target_calories as f32;

    #[allow(clippy::cast_precision_loss)]
    if (profile.macros.protein_g as f32) * MacroGoals::KCAL_PER_G_PROTEIN / target_calories
        < MIN_PROTEIN_SHARE
    {
        warnings.push(ValidationWarning::ProteinTooLow);
    }

    #[allow(clippy::cast_precision_loss)]
    if (profile.macros.fats_g as f32) * MacroGoals::KCAL_PER_G_FAT / target_calories
        < MIN_FAT_SHARE
    {
        warnings.push(ValidationWarning::FatTooLow);
    }

    warnings
}
