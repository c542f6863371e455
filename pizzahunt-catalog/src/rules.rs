use crate::product::Category;

/// The facts about a recipe that category derivation looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryContext<'a> {
    pub title: &'a str,
    pub vegetarian: bool,
    pub very_popular: bool,
}

#[derive(Debug, Clone)]
pub enum RuleCondition {
    Vegetarian,
    VeryPopular,
    TitleContainsAny(&'static [&'static str]),
    Always,
}

#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub name: &'static str,
    pub condition: RuleCondition,
    pub category: Category,
}

pub const MEAT_TERMS: &[&str] = &["pepperoni", "sausage", "meat", "bacon", "bbq", "prosciutto", "ham"];
pub const GOURMET_TERMS: &[&str] = &["truffle", "funghi", "mushroom", "pesto", "gourmet", "tartufo"];
pub const CLASSIC_TERMS: &[&str] = &["cheese", "margherita", "classic", "napo"];

/// Ordered rule list; the first matching rule decides the category.
pub struct RuleEngine {
    rules: Vec<CategoryRule>,
}

impl RuleEngine {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn derive(&self, context: &CategoryContext<'_>) -> Category {
        let title = context.title.to_lowercase();

        self.rules
            .iter()
            .find(|rule| Self::matches(&rule.condition, context, &title))
            .map(|rule| rule.category)
            .unwrap_or(Category::Signature)
    }

    fn matches(condition: &RuleCondition, context: &CategoryContext<'_>, title: &str) -> bool {
        match condition {
            RuleCondition::Vegetarian => context.vegetarian,
            RuleCondition::VeryPopular => context.very_popular,
            RuleCondition::TitleContainsAny(terms) => terms.iter().any(|term| title.contains(term)),
            RuleCondition::Always => true,
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(get_default_rules())
    }
}

pub fn get_default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule {
            name: "Vegetarian flag",
            condition: RuleCondition::Vegetarian,
            category: Category::Vegetarian,
        },
        CategoryRule {
            name: "Meat in title",
            condition: RuleCondition::TitleContainsAny(MEAT_TERMS),
            category: Category::MeatLover,
        },
        CategoryRule {
            name: "Gourmet ingredient in title",
            condition: RuleCondition::TitleContainsAny(GOURMET_TERMS),
            category: Category::Gourmet,
        },
        CategoryRule {
            name: "Classic style in title",
            condition: RuleCondition::TitleContainsAny(CLASSIC_TERMS),
            category: Category::Classic,
        },
        CategoryRule {
            name: "Very popular",
            condition: RuleCondition::VeryPopular,
            category: Category::ChefSpecial,
        },
        CategoryRule {
            name: "Default",
            condition: RuleCondition::Always,
            category: Category::Signature,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(title: &str, vegetarian: bool, very_popular: bool) -> Category {
        RuleEngine::default().derive(&CategoryContext {
            title,
            vegetarian,
            very_popular,
        })
    }

    #[test]
    fn test_vegetarian_flag_wins_over_title() {
        assert_eq!(derive("Pepperoni Truffle Margherita", true, true), Category::Vegetarian);
    }

    #[test]
    fn test_title_terms_in_priority_order() {
        assert_eq!(derive("Mushroom & Sausage", false, false), Category::MeatLover);
        assert_eq!(derive("Pesto Margherita", false, false), Category::Gourmet);
        assert_eq!(derive("Pizza Napoletana", false, false), Category::Classic);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        assert_eq!(derive("BBQ CHICKEN", false, false), Category::MeatLover);
        assert_eq!(derive("Three-Cheese", false, false), Category::Classic);
    }

    #[test]
    fn test_very_popular_after_title_rules() {
        assert_eq!(derive("Grilled Veggie Flatbread", false, true), Category::ChefSpecial);
        assert_eq!(derive("Classic Crust", false, true), Category::Classic);
    }

    #[test]
    fn test_signature_default() {
        assert_eq!(derive("Hawaiian Dream", false, false), Category::Signature);
        assert_eq!(derive("", false, false), Category::Signature);
    }
}
