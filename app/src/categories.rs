//! Fixed mapping of category identifiers to display labels.
//!
//! The table also drives the filter button group on the portfolio page, so a
//! new category only needs an entry here to get a label and a button.

/// Known category identifiers and their human-readable labels.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("ilustracion-digital", "Ilustración Digital"),
    ("diseno-grafico", "Diseño Gráfico"),
    ("animacion-digital", "Animación Digital"),
    ("fotografia", "Fotografía"),
    ("desarrollo-web", "Desarrollo Web"),
    ("realidad-aumentada", "Realidad Aumentada"),
];

/// Resolve a category identifier to its display label. Unknown identifiers
/// are displayed verbatim.
#[must_use]
pub fn label_for(category: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(id, _)| *id == category)
        .map_or(category, |(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_categories() {
        assert_eq!(label_for("fotografia"), "Fotografía");
        assert_eq!(label_for("diseno-grafico"), "Diseño Gráfico");
        assert_eq!(label_for("realidad-aumentada"), "Realidad Aumentada");
    }

    #[test]
    fn unknown_category_falls_back_to_identifier() {
        assert_eq!(label_for("ceramica"), "ceramica");
        assert_eq!(label_for(""), "");
    }

    #[test]
    fn table_has_no_duplicate_identifiers() {
        for (index, (id, _)) in CATEGORIES.iter().enumerate() {
            assert!(
                !CATEGORIES[index + 1..].iter().any(|(other, _)| other == id),
                "duplicate category id: {id}"
            );
        }
    }
}
