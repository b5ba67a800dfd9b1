// ABOUTME: Allergy alias groups used to detect allergens in meal and ingredient names
// ABOUTME: Case-insensitive substring matching with per-group exclusions and a name fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

/// Ingredient aliases for one allergy, plus phrases that look like a hit but are not
#[derive(Debug, Clone, Copy)]
struct AliasGroup {
    aliases: &'static [&'static str],
    exclusions: &'static [&'static str],
}

const NUTS: AliasGroup = AliasGroup {
    aliases: &[
        "almond",
        "walnut",
        "cashew",
        "peanut",
        "groundnut",
        "pista",
        "pistachio",
        "hazelnut",
        "pecan",
        "macadamia",
        "brazil nut",
        "pine nut",
        "nut butter",
    ],
    exclusions: &["coconut butter"],
};

const TREE_NUTS: AliasGroup = AliasGroup {
    aliases: &[
        "almond",
        "walnut",
        "cashew",
        "pista",
        "pistachio",
        "hazelnut",
        "pecan",
        "macadamia",
        "brazil nut",
        "pine nut",
    ],
    exclusions: &[],
};

const PEANUTS: AliasGroup = AliasGroup {
    aliases: &["peanut", "groundnut", "monkey nut"],
    exclusions: &[],
};

const DAIRY: AliasGroup = AliasGroup {
    aliases: &[
        "milk", "paneer", "cheese", "curd", "yogurt", "yoghurt", "dahi", "ghee", "butter",
        "cream", "whey", "lassi", "khoya", "casein", "raita",
    ],
    exclusions: &[
        "coconut milk",
        "almond milk",
        "oat milk",
        "soy milk",
        "rice milk",
        "cocoa butter",
        "peanut butter",
        "nut butter",
        "almond butter",
        "butternut",
        "coconut cream",
        "bean curd",
    ],
};

const GLUTEN: AliasGroup = AliasGroup {
    aliases: &[
        "wheat", "atta", "maida", "barley", "rye", "semolina", "suji", "sooji", "seitan",
        "bread", "roti", "chapati", "paratha", "pasta", "couscous", "noodle",
    ],
    exclusions: &[
        "buckwheat",
        "rice noodle",
        "breadfruit",
        "rotisserie",
        "matta rice",
    ],
};

const SOY: AliasGroup = AliasGroup {
    aliases: &["soy", "soya", "tofu", "edamame", "tempeh", "miso"],
    exclusions: &[],
};

const EGGS: AliasGroup = AliasGroup {
    aliases: &["egg", "omelette", "omelet", "mayonnaise", "meringue"],
    exclusions: &["eggplant", "veggie"],
};

const SHELLFISH: AliasGroup = AliasGroup {
    aliases: &[
        "shrimp", "prawn", "crab", "lobster", "oyster", "mussel", "clam", "scallop",
    ],
    exclusions: &[],
};

const FISH: AliasGroup = AliasGroup {
    aliases: &[
        "fish", "salmon", "tuna", "sardine", "mackerel", "cod", "anchov", "tilapia", "rohu",
        "pomfret", "basa",
    ],
    exclusions: &[],
};

const SEAFOOD: AliasGroup = AliasGroup {
    aliases: &[
        "fish", "salmon", "tuna", "sardine", "mackerel", "cod", "anchov", "tilapia", "rohu",
        "pomfret", "basa", "shrimp", "prawn", "crab", "lobster", "oyster", "mussel", "clam",
        "scallop",
    ],
    exclusions: &[],
};

const SESAME: AliasGroup = AliasGroup {
    aliases: &["sesame", "til", "tahini", "gingelly"],
    exclusions: &["tilapia", "lentil", "tortilla", "stilton"],
};

/// Which alias fired for which allergy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergyMatch {
    /// Member's allergy, canonicalized
    pub allergy: String,
    /// Alias that matched the item text
    pub alias: String,
}

/// Allergy name to alias group table
#[derive(Debug, Clone)]
pub struct AllergyTable {
    groups: HashMap<&'static str, AliasGroup>,
}

static ALLERGY_TABLE: LazyLock<AllergyTable> = LazyLock::new(AllergyTable::builtin);

impl AllergyTable {
    /// Process-wide table
    #[must_use]
    pub fn global() -> &'static Self {
        &ALLERGY_TABLE
    }

    fn builtin() -> Self {
        let groups = HashMap::from([
            ("nuts", NUTS),
            ("nut", NUTS),
            ("tree_nuts", TREE_NUTS),
            ("tree_nut", TREE_NUTS),
            ("peanut", PEANUTS),
            ("peanuts", PEANUTS),
            ("dairy", DAIRY),
            ("milk", DAIRY),
            ("lactose", DAIRY),
            ("gluten", GLUTEN),
            ("wheat", GLUTEN),
            ("soy", SOY),
            ("soya", SOY),
            ("egg", EGGS),
            ("eggs", EGGS),
            ("shellfish", SHELLFISH),
            ("fish", FISH),
            ("seafood", SEAFOOD),
            ("sesame", SESAME),
        ]);
        Self { groups }
    }

    /// Whether an allergy has a known alias group
    #[must_use]
    pub fn is_known(&self, allergy: &str) -> bool {
        self.groups.contains_key(canonical_allergy(allergy).as_str())
    }

    /// First allergy whose aliases appear in `item`
    ///
    /// Known allergies match an alias anywhere in the text, compound words
    /// included, after removing the group's exclusion phrases. Unknown allergies fall back to a plain
    /// case-insensitive substring match of the allergy name itself.
    pub fn first_match<I, S>(&self, allergies: I, item: &str) -> Option<AllergyMatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = item.to_lowercase();
        allergies.into_iter().find_map(|allergy| {
            let allergy = canonical_allergy(allergy.as_ref());
            if allergy.is_empty() {
                return None;
            }
            let alias = match self.groups.get(allergy.as_str()) {
                Some(group) => group.matching_alias(&text).map(str::to_owned),
                None => {
                    let needle = allergy.replace('_', " ");
                    text.contains(&needle).then_some(needle)
                }
            }?;
            Some(AllergyMatch { allergy, alias })
        })
    }
}

impl AliasGroup {
    fn matching_alias(&self, text: &str) -> Option<&'static str> {
        let mut cleaned = text.to_owned();
        for exclusion in self.exclusions {
            cleaned = cleaned.replace(exclusion, " ");
        }
        self.aliases
            .iter()
            .copied()
            .find(|alias| cleaned.contains(*alias))
    }
}

fn canonical_allergy(allergy: &str) -> String {
    allergy.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Whether any of the member's allergies matches `item_name`
pub fn is_allergy_blocked<I, S>(allergies: I, item_name: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AllergyTable::global()
        .first_match(allergies, item_name)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_group_matches() {
        assert!(is_allergy_blocked(["nuts"], "Roasted Almond Oats"));
        assert!(is_allergy_blocked(["NUTS"], "cashew curry"));
        assert!(!is_allergy_blocked(["dairy"], "Oats with Banana"));
        assert!(is_allergy_blocked(["dairy"], "Paneer Tikka"));
    }

    #[test]
    fn test_exclusions() {
        assert!(!is_allergy_blocked(["nuts"], "Coconut Chutney"));
        assert!(!is_allergy_blocked(["eggs"], "Roasted Eggplant"));
        assert!(is_allergy_blocked(["eggs"], "Egg Bhurji"));
        assert!(!is_allergy_blocked(["dairy"], "Coconut milk curry"));
        assert!(!is_allergy_blocked(["sesame"], "Grilled Tilapia"));
        assert!(is_allergy_blocked(["fish"], "Grilled Tilapia"));
        assert!(!is_allergy_blocked(["sesame"], "Masoor lentil soup"));
        assert!(!is_allergy_blocked(["eggs"], "Veggie upma"));
        assert!(!is_allergy_blocked(["gluten"], "Chicken rotisserie"));
        assert!(!is_allergy_blocked(["dairy"], "Bean curd stir fry"));
    }

    #[test]
    fn test_compound_words_match() {
        assert!(is_allergy_blocked(["gluten"], "Wholewheat crackers"));
        assert!(is_allergy_blocked(["dairy"], "Icecream sundae"));
        assert!(is_allergy_blocked(["dairy"], "Wholemilk porridge"));
        assert!(is_allergy_blocked(["nuts"], "Badamalmond halwa"));
    }

    #[test]
    fn test_unknown_allergy_falls_back_to_substring() {
        let table = AllergyTable::global();
        assert!(!table.is_known("mustard"));
        let hit = table.first_match(["mustard"], "Mustard greens saag");
        assert_eq!(
            hit,
            Some(AllergyMatch {
                allergy: "mustard".to_owned(),
                alias: "mustard".to_owned(),
            })
        );
        assert!(!is_allergy_blocked(["kiwi"], "Oats with Banana"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!is_allergy_blocked(Vec::<String>::new(), "Almond milk"));
        assert!(!is_allergy_blocked([""], "anything"));
    }
}
