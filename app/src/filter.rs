//! Category filtering over the portfolio grid.
//!
//! Filtering is a pure visibility recomputation: entries are never removed,
//! only shown or hidden, so repeated applications of the same category are
//! idempotent and order-independent.

/// Sentinel category that matches every entry.
pub const ALL_CATEGORIES: &str = "all";

/// Whether an entry with `category` is visible under the active filter.
#[must_use]
pub fn is_visible(active: &str, category: &str) -> bool {
    active == ALL_CATEGORIES || active == category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Project;

    fn catalog() -> Vec<Project> {
        vec![
            Project {
                id: 1,
                title: "A".to_owned(),
                category: "fotografia".to_owned(),
                image: Some("a.jpg".to_owned()),
                ..Default::default()
            },
            Project {
                id: 2,
                title: "B".to_owned(),
                category: "diseno-grafico".to_owned(),
                media: crate::types::MediaKind::Pdf,
                pdf: Some("b.pdf".to_owned()),
                ..Default::default()
            },
            Project {
                id: 3,
                title: "C".to_owned(),
                category: "fotografia".to_owned(),
                ..Default::default()
            },
        ]
    }

    fn visible_ids(projects: &[Project], active: &str) -> Vec<u32> {
        projects
            .iter()
            .filter(|p| is_visible(active, &p.category))
            .map(|p| p.id)
            .collect()
    }

    #[test]
    fn category_filter_selects_exactly_matching_entries() {
        let projects = catalog();
        assert_eq!(visible_ids(&projects, "fotografia"), vec![1, 3]);
        assert_eq!(visible_ids(&projects, "diseno-grafico"), vec![2]);
        assert_eq!(visible_ids(&projects, "animacion-digital"), Vec::<u32>::new());
    }

    #[test]
    fn all_sentinel_shows_every_entry() {
        let projects = catalog();
        assert_eq!(visible_ids(&projects, ALL_CATEGORIES), vec![1, 2, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let projects = catalog();
        let first = visible_ids(&projects, "fotografia");
        let second = visible_ids(&projects, "fotografia");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_category_without_button_still_filters() {
        // A dropdown-only category simply hides everything that doesn't match.
        let projects = catalog();
        assert_eq!(visible_ids(&projects, "ceramica"), Vec::<u32>::new());
    }

    #[test]
    fn empty_catalog_is_a_noop() {
        assert_eq!(visible_ids(&[], "fotografia"), Vec::<u32>::new());
        assert_eq!(visible_ids(&[], ALL_CATEGORIES), Vec::<u32>::new());
    }
}
