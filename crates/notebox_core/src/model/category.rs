//! Fixed category lookup table.
//!
//! # Responsibility
//! - Own the immutable `(name, color)` pairs notes can be assigned to.
//! - Resolve display colors for persisted category names.
//!
//! # Invariants
//! - The table is never persisted and never edited at runtime.
//! - The first entry is the default category for new and legacy notes.

/// One named, color-coded grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// CSS-style hex color, e.g. `#60A5FA`.
    pub color: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category {
        name: "Personal",
        color: "#60A5FA",
    },
    Category {
        name: "Work",
        color: "#34D399",
    },
    Category {
        name: "Study",
        color: "#F472B6",
    },
    Category {
        name: "Ideas",
        color: "#A78BFA",
    },
    Category {
        name: "Tasks",
        color: "#FBBF24",
    },
    Category {
        name: "Projects",
        color: "#F87171",
    },
];

/// Returns the full category table in display order.
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Returns the default category (first table entry).
pub fn default_category() -> Category {
    CATEGORIES[0]
}

/// Finds a category by exact (case-sensitive) name.
pub fn find_category(name: &str) -> Option<Category> {
    CATEGORIES
        .iter()
        .copied()
        .find(|category| category.name == name)
}

/// Returns the color to display for `name`.
///
/// Unknown names fall back to the default category's color.
pub fn category_color(name: &str) -> &'static str {
    find_category(name).map_or(default_category().color, |category| category.color)
}

#[cfg(test)]
mod tests {
    use super::{categories, category_color, default_category, find_category};

    #[test]
    fn default_category_is_personal() {
        assert_eq!(default_category().name, "Personal");
        assert_eq!(default_category().color, "#60A5FA");
    }

    #[test]
    fn find_category_is_case_sensitive() {
        assert_eq!(find_category("Work").map(|c| c.color), Some("#34D399"));
        assert!(find_category("work").is_none());
    }

    #[test]
    fn unknown_category_color_falls_back_to_default() {
        assert_eq!(category_color("Other"), "#60A5FA");
        assert_eq!(category_color("Projects"), "#F87171");
    }

    #[test]
    fn category_names_are_unique() {
        let mut names: Vec<_> = categories().iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), categories().len());
    }
}
