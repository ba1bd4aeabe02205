//! Static category taxonomy.
//!
//! Two levels: categories and sub-categories, where a sub-category names
//! its parent by id. The index is an immutable value constructed once and
//! passed into the catalog service, so tests can run against fabricated
//! taxonomies without touching process-global state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sub-category node. `parent_category` is a back-reference by id, not an
/// ownership edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub parent_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Category node with its attached sub-categories in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Glyph shown next to the category name
    pub icon: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<SubCategory>,
}

/// Immutable lookup over the category taxonomy.
///
/// Absence is a valid, non-exceptional result everywhere: unknown ids
/// return `None` or an empty slice, and the label helpers fall back to
/// echoing the raw id so bad references degrade instead of failing.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    categories: Vec<Category>,
}

impl CategoryIndex {
    /// Build an index from category nodes and a flat sub-category list.
    ///
    /// Sub-categories attach to their parent in list order; entries whose
    /// `parent_category` matches no category are dropped (they would be
    /// unreachable from every lookup this index offers).
    pub fn new(categories: Vec<Category>, sub_categories: Vec<SubCategory>) -> Self {
        let mut categories = categories;
        for category in &mut categories {
            category.sub_categories = sub_categories
                .iter()
                .filter(|sub| sub.parent_category == category.id)
                .cloned()
                .collect();
        }
        Self { categories }
    }

    /// All categories in declared order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Sub-categories of a category, in declared order. Empty for unknown
    /// or leaf categories.
    pub fn sub_categories_of(&self, category_id: &str) -> &[SubCategory] {
        self.category_by_id(category_id)
            .map(|c| c.sub_categories.as_slice())
            .unwrap_or_default()
    }

    pub fn sub_category_by_id(&self, id: &str) -> Option<&SubCategory> {
        self.categories
            .iter()
            .flat_map(|c| &c.sub_categories)
            .find(|s| s.id == id)
    }

    /// Display name for a category id, or the raw id when unresolved.
    pub fn category_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.category_by_id(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    /// Display name for a sub-category id, or the raw id when unresolved.
    pub fn sub_category_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.sub_category_by_id(id)
            .map(|s| s.name.as_str())
            .unwrap_or(id)
    }
}

fn category(id: &str, name: &str, description: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        sub_categories: Vec::new(),
    }
}

fn sub_category(id: &str, name: &str, parent: &str, description: &str) -> SubCategory {
    SubCategory {
        id: id.to_string(),
        name: name.to_string(),
        parent_category: parent.to_string(),
        description: Some(description.to_string()),
    }
}

impl Default for CategoryIndex {
    /// The retailer's hand-authored automotive-equipment taxonomy.
    fn default() -> Self {
        let sub_categories = vec![
            // Body equipment
            sub_category("frame-machines", "Frame Machines", "bodyparts", "Frame straightening equipment"),
            sub_category("welding-equipment", "Welding Equipment", "bodyparts", "Welding tools and machines"),
            // Diagnostic tools
            sub_category("alignment-tools", "Alignment Tools", "diagnostictools", "Wheel alignment equipment"),
            sub_category("testing-equipment", "Testing Equipment", "diagnostictools", "Diagnostic testing tools"),
            sub_category("pressure-testers", "Pressure Testers", "diagnostictools", "Pressure testing equipment"),
            // Garage tools
            sub_category("lifting-equipment", "Lifting Equipment", "garagetools", "Jacks, lifts, and hoists"),
            sub_category("air-tools", "Air Tools", "garagetools", "Pneumatic tools and compressors"),
            sub_category("wheel-service", "Wheel Service", "garagetools", "Tire and wheel equipment"),
            sub_category("cleaning-equipment", "Cleaning Equipment", "garagetools", "Washers and cleaning tools"),
            sub_category("ac-service", "AC Service", "garagetools", "Air conditioning service equipment"),
            sub_category("lubebay", "Lube Bay", "garagetools", "Lube bay equipment"),
            // Diagnostic scanners
            sub_category("konwei", "Konwei", "diagnosticscanners", "Konwei scanners"),
            sub_category("thinkcar", "Thinkcar", "diagnosticscanners", "Thinkcar scanners"),
            sub_category("xtool", "XTOOL", "diagnosticscanners", "XTOOL scanners"),
            sub_category("thinkdiag", "Thinkdiag", "diagnosticscanners", "Thinkdiag scanners"),
            // Hand tools
            sub_category("socket-sets", "Socket Sets", "handtools", "Socket and ratchet sets"),
            sub_category("pneumatic-tools", "Pneumatic Tools", "handtools", "Air-powered hand tools"),
            sub_category("specialty-tools", "Specialty Tools", "handtools", "Specialized automotive tools"),
        ];

        let categories = vec![
            category("spraybooth", "SprayBooth", "Premium car oven", "🔥"),
            category("bodyparts", "Body Equipment", "Premium body equipment", "🛡️"),
            category("diagnostictools", "Diagnostic Tools", "Quality diagnostic tools and accessories", "⚙️"),
            category("garagetools", "Garage Tools", "Premium garage tools and accessories", "🔧"),
            category("diagnosticscanners", "Diagnostic Scanners", "Diagnostic scanners optimal performance", "💻"),
            category("accessories", "Our Brand", "Get premium tools made by us", "✨"),
            category("handtools", "Hand Tools", "Quality garage hand tools", "🖐️"),
        ];

        Self::new(categories, sub_categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_taxonomy_attaches_sub_categories_in_order() {
        let index = CategoryIndex::default();
        let subs = index.sub_categories_of("garagetools");
        let ids: Vec<&str> = subs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "lifting-equipment",
                "air-tools",
                "wheel-service",
                "cleaning-equipment",
                "ac-service",
                "lubebay"
            ]
        );
    }

    #[test]
    fn leaf_and_unknown_categories_have_no_sub_categories() {
        let index = CategoryIndex::default();
        assert!(index.sub_categories_of("accessories").is_empty());
        assert!(index.sub_categories_of("no-such-category").is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let index = CategoryIndex::default();
        assert_eq!(index.category_by_id("handtools").unwrap().name, "Hand Tools");
        assert!(index.category_by_id("missing").is_none());
        assert_eq!(
            index.sub_category_by_id("xtool").unwrap().parent_category,
            "diagnosticscanners"
        );
    }

    #[test]
    fn labels_fall_back_to_the_raw_id() {
        let index = CategoryIndex::default();
        assert_eq!(index.category_label("bodyparts"), "Body Equipment");
        assert_eq!(index.category_label("paint-booths"), "paint-booths");
        assert_eq!(index.sub_category_label("lubebay"), "Lube Bay");
        assert_eq!(index.sub_category_label("LUB"), "LUB");
    }

    #[test]
    fn orphan_sub_categories_are_dropped() {
        let index = CategoryIndex::new(
            vec![category("a", "A", "", "·")],
            vec![
                sub_category("a1", "A1", "a", ""),
                sub_category("b1", "B1", "b", ""),
            ],
        );
        assert_eq!(index.sub_categories_of("a").len(), 1);
        assert!(index.sub_category_by_id("b1").is_none());
    }
}
