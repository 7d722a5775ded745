//! The static menu catalog: category names mapped to dish lists.
//!
//! Pure data plus a normalization function. Defined at compile time,
//! never mutated; every lookup yields a displayable string.

/// Canonical menu entries, category name to comma-separated dish list.
const MENU: &[(&str, &str)] = &[
    ("breakfast", "Idli, Vada, Sambar, Coconut Chutney, Filter Coffee"),
    ("lunch", "Rice, Dal Fry, Paneer Butter Masala, Roti, Curd"),
    ("evening", "Samosa, Chutney, Tea, Biscuits"),
    ("dinner", "Biryani, Raita, Papad, Salad"),
];

/// Canonicalizes a raw category string.
///
/// Lowercases and trims; anything mentioning "evening" or "snack"
/// (in any form, e.g. "Evening Snacks") maps to the single `evening`
/// entry.
pub fn normalize_category(raw: &str) -> String {
    let category = raw.trim().to_lowercase();
    if category.contains("evening") || category.contains("snack") {
        return "evening".to_string();
    }
    category
}

/// Looks up the menu for a category.
///
/// Returns the configured dish list, or a fallback message naming the
/// valid categories when the category is unknown. Never fails.
pub fn lookup(raw: &str) -> String {
    let category = normalize_category(raw);
    MENU.iter()
        .find(|(name, _)| *name == category)
        .map(|(_, dishes)| (*dishes).to_string())
        .unwrap_or_else(|| {
            let categories: Vec<&str> = MENU.iter().map(|(name, _)| *name).collect();
            format!(
                "No menu found for \"{}\". Valid categories are: {}.",
                category,
                categories.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_return_their_dish_lists() {
        assert_eq!(lookup("breakfast"), "Idli, Vada, Sambar, Coconut Chutney, Filter Coffee");
        assert_eq!(lookup("lunch"), "Rice, Dal Fry, Paneer Butter Masala, Roti, Curd");
        assert_eq!(lookup("dinner"), "Biryani, Raita, Papad, Salad");
    }

    #[test]
    fn lookup_is_case_insensitive_and_trims() {
        assert_eq!(lookup("  DINNER  "), lookup("dinner"));
        assert_eq!(lookup("Lunch"), lookup("lunch"));
        assert_eq!(lookup("\tBreakFast\n"), lookup("breakfast"));
    }

    #[test]
    fn evening_and_snack_variants_all_map_to_evening() {
        let evening = lookup("evening");
        assert_eq!(evening, "Samosa, Chutney, Tea, Biscuits");
        assert_eq!(lookup("Evening Snacks"), evening);
        assert_eq!(lookup("  snack  "), evening);
        assert_eq!(lookup("SNACKS"), evening);
        assert_eq!(lookup("late evening bites"), evening);
    }

    #[test]
    fn unknown_category_yields_fallback_listing_valid_categories() {
        let fallback = lookup("brunch");
        assert!(fallback.contains("No menu found"));
        assert!(fallback.contains("breakfast"));
        assert!(fallback.contains("lunch"));
        assert!(fallback.contains("evening"));
        assert!(fallback.contains("dinner"));
    }

    #[test]
    fn empty_category_yields_fallback() {
        assert!(lookup("").contains("No menu found"));
        assert!(lookup("   ").contains("No menu found"));
    }

    #[test]
    fn normalize_category_lowercases_and_trims() {
        assert_eq!(normalize_category("  Dinner "), "dinner");
        assert_eq!(normalize_category("Evening Snacks"), "evening");
        assert_eq!(normalize_category("snack"), "evening");
    }
}
