use super::host::TestTrait;
use super::model::TestNode;

pub const CATEGORY_TRAIT: &str = "Category";

/// Trait annotations for a node: one `Category` trait per category, then one
/// trait per property. Properties whose name starts with `_` are private to
/// the framework and skipped. Order and duplicates are preserved.
pub fn traits_for(node: &TestNode) -> Vec<TestTrait> {
    let categories = node.categories.iter()
        .map(|c| TestTrait::new(CATEGORY_TRAIT, c));
    let properties = node.properties.iter()
        .filter(|p| !p.name.starts_with('_'))
        .map(|p| TestTrait::new(&p.name, &p.value));
    categories.chain(properties).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::model::TestProperty;

    #[test]
    fn test_traits_preserve_order_and_duplicates() {
        let mut node = TestNode::case("c-1", "shop.Cart.totals", "totals");
        node.categories = vec!["Slow".to_string(), "Db".to_string(), "Slow".to_string()];
        node.properties = vec![
            TestProperty { name: "Owner".to_string(), value: "ana".to_string() },
            TestProperty { name: "_SkipReason".to_string(), value: "x".to_string() },
            TestProperty { name: "Owner".to_string(), value: "li".to_string() },
        ];

        let traits = traits_for(&node);
        assert_eq!(traits, vec![
            TestTrait::new("Category", "Slow"),
            TestTrait::new("Category", "Db"),
            TestTrait::new("Category", "Slow"),
            TestTrait::new("Owner", "ana"),
            TestTrait::new("Owner", "li"),
        ]);
    }

    #[test]
    fn test_no_metadata_no_traits() {
        assert!(traits_for(&TestNode::case("c-1", "a.b", "b")).is_empty());
    }
}
