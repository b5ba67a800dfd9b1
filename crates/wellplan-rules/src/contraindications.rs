// ABOUTME: Contraindication matrix mapping medical flags to restricted activity tags
// ABOUTME: Deterministic lookup with a lexicographic first-flag-wins tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Contraindication matrix
//!
//! Each medical flag restricts a set of activity or food tags at one of three
//! severities. When several flags restrict the same tag, flags are visited in
//! lexicographic order and the first rule seen for a tag is kept, even when a
//! later flag carries a stricter severity.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use tracing::debug;
use wellplan_core::models::Severity;

/// A single rule in the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContraindicationRule {
    /// Restricted tag
    pub activity_tag: &'static str,
    /// Rule severity
    pub severity: Severity,
    /// Guidance shown to coaches
    pub note: &'static str,
}

const fn rule(
    activity_tag: &'static str,
    severity: Severity,
    note: &'static str,
) -> ContraindicationRule {
    ContraindicationRule {
        activity_tag,
        severity,
        note,
    }
}

/// Restriction in effect for a member, with the flag that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restriction {
    /// Medical flag the rule came from
    pub flag: String,
    /// Restricted tag
    pub activity_tag: String,
    /// Rule severity
    pub severity: Severity,
    /// Guidance shown to coaches
    pub note: String,
}

/// Immutable flag-keyed rule table
#[derive(Debug, Clone)]
pub struct ContraindicationTable {
    rules: BTreeMap<&'static str, Vec<ContraindicationRule>>,
}

static CONTRAINDICATIONS: LazyLock<ContraindicationTable> =
    LazyLock::new(ContraindicationTable::builtin);

/// Canonical spelling of a medical flag: trimmed, lower-case, `snake_case`, aliases folded
#[must_use]
pub fn canonical_flag(flag: &str) -> String {
    let flag = flag.trim().to_lowercase().replace(['-', ' '], "_");
    match flag.as_str() {
        "pcos" => "pcod".to_owned(),
        "high_blood_pressure" | "high_bp" => "hypertension".to_owned(),
        "back_pain" | "lumbar_pain" => "lower_back_pain".to_owned(),
        "knee_pain" => "knee_injury".to_owned(),
        "pregnant" => "pregnancy".to_owned(),
        "cardiac" | "heart_disease" => "heart_condition".to_owned(),
        _ => flag,
    }
}

impl ContraindicationTable {
    /// Process-wide table
    #[must_use]
    pub fn global() -> &'static Self {
        &CONTRAINDICATIONS
    }

    /// The built-in clinical rule set
    // Long function: the rule set is data, kept in one place for audit
    #[allow(clippy::too_many_lines)]
    #[must_use]
    pub fn builtin() -> Self {
        use Severity::{Avoid, Modify, Monitor};

        let mut rules = BTreeMap::new();
        rules.insert(
            "asthma",
            vec![
                rule("breath_retention", Modify, "Shorten or skip retention holds"),
                rule("kapalabhati", Modify, "Use a slow, gentle pace"),
                rule("hot_yoga", Monitor, "Heat and humidity can trigger symptoms"),
            ],
        );
        rules.insert(
            "diabetes",
            vec![
                rule("fasting", Avoid, "Prolonged fasting risks hypoglycaemia"),
                rule("high_sugar", Avoid, "Refined sugar spikes blood glucose"),
                rule("hot_yoga", Monitor, "Watch hydration and glucose in heat"),
            ],
        );
        rules.insert(
            "glaucoma",
            vec![
                rule("inversions", Avoid, "Head-below-heart raises intraocular pressure"),
                rule("inversions_long", Avoid, "Sustained inversions raise intraocular pressure"),
                rule("forward_folds_deep", Modify, "Keep the head above the heart"),
            ],
        );
        rules.insert(
            "heart_condition",
            vec![
                rule("hot_yoga", Avoid, "Heat load strains the cardiovascular system"),
                rule("breath_retention", Avoid, "Retention spikes blood pressure"),
                rule("high_intensity", Avoid, "Keep effort conversational"),
                rule("inversions_long", Modify, "Keep inversions brief and supported"),
            ],
        );
        rules.insert(
            "hypertension",
            vec![
                rule("inversions_long", Avoid, "Head-below-heart holds raise blood pressure"),
                rule("breath_retention", Avoid, "Retention spikes blood pressure"),
                rule("kapalabhati", Modify, "Replace with slow alternate-nostril breathing"),
                rule("high_sodium", Avoid, "Sodium raises blood pressure"),
                rule("hot_yoga", Modify, "Prefer a cool room"),
                rule("caffeine", Monitor, "Limit to one cup before noon"),
            ],
        );
        rules.insert(
            "hypothyroid",
            vec![
                rule("high_intensity", Monitor, "Fatigue may limit tolerance"),
                rule("raw_cruciferous", Monitor, "Prefer cooked cruciferous vegetables"),
            ],
        );
        rules.insert(
            "knee_injury",
            vec![
                rule("deep_knee_flexion", Avoid, "Deep flexion loads the injured joint"),
                rule("high_impact", Avoid, "Impact aggravates the joint"),
                rule("kneeling_long", Modify, "Pad the knees or use a chair"),
            ],
        );
        rules.insert(
            "lower_back_pain",
            vec![
                rule("deep_backbends", Avoid, "Lumbar extension under load aggravates pain"),
                rule("heavy_lifting", Avoid, "Avoid axial loading"),
                rule("forward_folds_deep", Modify, "Bend the knees in folds"),
                rule("deep_twists", Modify, "Twist from the thoracic spine only"),
            ],
        );
        rules.insert(
            "migraine",
            vec![
                rule("inversions", Monitor, "Stop if head pressure builds"),
                rule("hot_yoga", Modify, "Heat is a common trigger"),
                rule("caffeine", Modify, "Keep caffeine intake consistent"),
            ],
        );
        rules.insert(
            "osteoporosis",
            vec![
                rule("deep_twists", Avoid, "Loaded spinal rotation risks vertebral fracture"),
                rule("forward_folds_deep", Avoid, "Loaded spinal flexion risks fracture"),
                rule("high_impact", Modify, "Keep impact low and controlled"),
            ],
        );
        rules.insert(
            "pcod",
            vec![
                rule("inversions_long", Modify, "Keep inversions short; prefer supported variations"),
                rule("inversions", Monitor, "Skip inversions during heavy flow days"),
                rule("high_sugar", Avoid, "Refined sugar worsens insulin resistance"),
                rule("fried_food", Modify, "Limit fried food to support insulin sensitivity"),
            ],
        );
        rules.insert(
            "pregnancy",
            vec![
                rule("inversions", Avoid, "Avoid inversions during pregnancy"),
                rule("inversions_long", Avoid, "Avoid inversions during pregnancy"),
                rule("prone_poses", Avoid, "Avoid lying on the abdomen"),
                rule("deep_twists", Avoid, "Use open twists only"),
                rule("hot_yoga", Avoid, "Overheating risks the pregnancy"),
                rule("breath_retention", Avoid, "Keep the breath flowing"),
                rule("kapalabhati", Avoid, "Avoid forceful abdominal breathing"),
                rule("high_impact", Avoid, "Avoid jumping and impact"),
                rule("raw_fish", Avoid, "Risk of foodborne illness"),
                rule("caffeine", Monitor, "Stay under 200 mg per day"),
            ],
        );
        rules.insert(
            "vertigo",
            vec![
                rule("inversions", Avoid, "Inversions provoke dizziness"),
                rule("rapid_transitions", Modify, "Move slowly between levels"),
                rule("balance_poses", Monitor, "Practice near a wall"),
            ],
        );
        Self { rules }
    }

    /// Rules registered for a canonical flag
    #[must_use]
    pub fn rules_for(&self, flag: &str) -> &[ContraindicationRule] {
        self.rules.get(flag).map_or(&[][..], Vec::as_slice)
    }

    /// Restrictions in effect for a set of flags, one per tag, ordered by tag
    ///
    /// Flags are canonicalized and visited in lexicographic order; for each tag
    /// the first rule encountered wins.
    pub fn lookup<I, S>(&self, flags: I) -> Vec<Restriction>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ordered: BTreeSet<String> = flags
            .into_iter()
            .map(|flag| canonical_flag(flag.as_ref()))
            .filter(|flag| !flag.is_empty())
            .collect();

        let mut by_tag: BTreeMap<&'static str, Restriction> = BTreeMap::new();
        for flag in &ordered {
            let rules = self.rules_for(flag);
            if rules.is_empty() {
                debug!(flag = %flag, "No contraindication rules for medical flag");
            }
            for rule in rules {
                by_tag
                    .entry(rule.activity_tag)
                    .or_insert_with(|| Restriction {
                        flag: flag.clone(),
                        activity_tag: rule.activity_tag.to_owned(),
                        severity: rule.severity,
                        note: rule.note.to_owned(),
                    });
            }
        }
        by_tag.into_values().collect()
    }
}

/// Restrictions in effect for a set of medical flags, using the process-wide table
pub fn lookup_restrictions<I, S>(flags: I) -> Vec<Restriction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ContraindicationTable::global().lookup(flags)
}
