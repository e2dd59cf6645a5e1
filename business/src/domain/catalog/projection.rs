use std::cmp::Ordering;

use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Collection order.
    #[default]
    Default,
    /// Title, ascending.
    Title,
    /// Rating, highest first.
    Rating,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Default => write!(f, "default"),
            SortMode::Title => write!(f, "title"),
            SortMode::Rating => write!(f, "rating"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "title" => Ok(SortMode::Title),
            "rating" => Ok(SortMode::Rating),
            _ => Err(format!("Invalid sort mode: {}", s)),
        }
    }
}

/// The inputs the displayed list is derived from, besides the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub sort: SortMode,
    pub page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortMode::Default,
            page: 1,
        }
    }
}

/// One rendered page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Product>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Keeps products whose title contains `search`, ignoring case.
pub fn filter<'a>(products: &'a [Product], search: &str) -> Vec<&'a Product> {
    if search.is_empty() {
        return products.iter().collect();
    }
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort; ties keep their input order.
pub fn sort(products: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::Title => {
            let mut collator = Collator::default();
            products.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        SortMode::Rating => products.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a))),
    }
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Items `[(page - 1) * PAGE_SIZE, page * PAGE_SIZE)`; empty when out of range.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + PAGE_SIZE).min(items.len());
    items[start..end].to_vec()
}

/// Filter, then sort, then slice out the requested page.
pub fn project(products: &[Product], query: &ViewQuery) -> PageView {
    let mut matches = filter(products, &query.search);
    sort(&mut matches, query.sort);

    let total_matches = matches.len();
    let items = paginate(&matches, query.page)
        .into_iter()
        .cloned()
        .collect();

    PageView {
        items,
        page: query.page,
        total_pages: total_pages(total_matches),
        total_matches,
    }
}

/// Unicode collation with the CLDR root order: accents and case only break
/// ties between otherwise equal titles, and lowercase sorts first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

// Missing or NaN ratings rank as zero.
fn rating_key(product: &Product) -> f64 {
    product.rating.filter(|r| !r.is_nan()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductId;
    use proptest::prelude::*;

    fn product(id: u64, title: &str, rating: Option<f64>) -> Product {
        Product::from_fields(
            ProductId::new(id),
            NewProduct {
                title: title.to_string(),
                rating,
                ..Default::default()
            },
        )
    }

    fn numbered(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|i| product(i, &format!("Item {i}"), None))
            .collect()
    }

    fn query(search: &str, sort: SortMode, page: usize) -> ViewQuery {
        ViewQuery {
            search: search.to_string(),
            sort,
            page,
        }
    }

    #[test]
    fn should_match_search_case_insensitively() {
        let products = vec![product(1, "Apple", None), product(2, "Banana", None)];
        let view = project(&products, &query("ban", SortMode::Default, 1));
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, ProductId::new(2));
    }

    #[test]
    fn should_return_everything_in_order_when_search_is_empty() {
        let products = vec![product(2, "b", None), product(1, "a", None)];
        let filtered = filter(&products, "");
        assert_eq!(filtered, products.iter().collect::<Vec<_>>());
    }

    #[test]
    fn should_sort_titles_ignoring_case() {
        let products = vec![
            product(1, "banana", None),
            product(2, "Apple", None),
            product(3, "cherry", None),
        ];
        let view = project(&products, &query("", SortMode::Title, 1));
        let titles: Vec<_> = view.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn should_put_lowercase_first_when_titles_differ_only_by_case() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("apple", "apple"), Ordering::Equal);
    }

    #[test]
    fn should_sort_accented_titles_with_their_base_letter() {
        let products = vec![
            product(1, "Zebra", None),
            product(2, "Éclair", None),
            product(3, "Fig", None),
            product(4, "eclair", None),
        ];
        let view = project(&products, &query("", SortMode::Title, 1));
        let titles: Vec<_> = view.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["eclair", "Éclair", "Fig", "Zebra"]);
    }

    #[test]
    fn should_sort_by_rating_descending_and_keep_ties_stable() {
        let products = vec![
            product(1, "a", Some(3.0)),
            product(2, "b", Some(4.5)),
            product(3, "c", Some(3.0)),
            product(4, "d", None),
        ];
        let view = project(&products, &query("", SortMode::Rating, 1));
        let ids: Vec<_> = view.items.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn should_compute_three_pages_for_seventeen_items() {
        let products = numbered(17);
        let view = project(&products, &query("", SortMode::Default, 3));
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, ProductId::new(17));
    }

    #[test]
    fn should_return_empty_slice_when_page_is_beyond_total() {
        let products = numbered(9);
        assert!(project(&products, &query("", SortMode::Default, 3)).items.is_empty());
        assert!(project(&products, &query("", SortMode::Default, 0)).items.is_empty());
    }

    #[test]
    fn should_report_zero_pages_for_empty_result() {
        let view = project(&[], &ViewQuery::default());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.total_matches, 0);
    }

    #[test]
    fn should_parse_sort_mode() {
        assert_eq!("rating".parse::<SortMode>(), Ok(SortMode::Rating));
        assert!("price".parse::<SortMode>().is_err());
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        proptest::collection::vec(("[a-zA-Z ]{0,8}", proptest::option::of(0.0f64..5.0)), 0..40)
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (title, rating))| product(i as u64 + 1, &title, rating))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn filter_is_case_insensitive_substring(products in arb_products(), search in "[a-zA-Z]{0,3}") {
            let needle = search.to_lowercase();
            let kept = filter(&products, &search);
            let expected: Vec<&Product> = products
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&needle))
                .collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn title_sort_is_non_decreasing(products in arb_products()) {
            let mut refs: Vec<&Product> = products.iter().collect();
            sort(&mut refs, SortMode::Title);
            for pair in refs.windows(2) {
                prop_assert_ne!(compare_titles(&pair[0].title, &pair[1].title), Ordering::Greater);
            }
        }

        #[test]
        fn rating_sort_is_non_increasing(products in arb_products()) {
            let mut refs: Vec<&Product> = products.iter().collect();
            sort(&mut refs, SortMode::Rating);
            for pair in refs.windows(2) {
                prop_assert!(rating_key(pair[0]) >= rating_key(pair[1]));
            }
        }

        #[test]
        fn default_sort_is_identity(products in arb_products()) {
            let mut refs: Vec<&Product> = products.iter().collect();
            sort(&mut refs, SortMode::Default);
            prop_assert_eq!(refs, products.iter().collect::<Vec<_>>());
        }

        #[test]
        fn pages_concatenate_to_full_sequence(len in 0usize..60) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len);
            let joined: Vec<usize> = (1..=pages).flat_map(|page| paginate(&items, page)).collect();
            prop_assert_eq!(joined, items);
            prop_assert!(paginate(&(0..len).collect::<Vec<_>>(), pages + 1).is_empty());
        }
    }
}
