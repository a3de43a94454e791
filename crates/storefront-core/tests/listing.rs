//! End-to-end checks of the listing pipeline against the seed catalog.

use proptest::prelude::*;
use std::time::Duration;
use storefront_core::prelude::*;

fn instant_catalog() -> MockCatalog {
    MockCatalog::seeded().with_latency(Duration::ZERO)
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn seed_catalog_has_eleven_products() {
    assert_eq!(Catalog::seed().len(), 11);
}

#[test]
fn soundwave_brand_yields_two_products() {
    let catalog = Catalog::seed();
    let spec = FilterSpec::new().with_brand("SoundWave");
    assert_eq!(visible_products(catalog.products(), &spec).len(), 2);
}

#[test]
fn running_search_yields_two_shoes() {
    let catalog = Catalog::seed();
    let spec = FilterSpec::new().with_search("running");
    let visible = visible_products(catalog.products(), &spec);
    assert_eq!(ids(&visible), vec!["running-shoes-001", "running-shoes-002"]);
}

#[test]
fn ceiling_of_fifty_excludes_pricier_products() {
    let catalog = Catalog::seed();
    let spec = FilterSpec::new().with_price_ceiling(Money::usd(5000));
    let visible = visible_products(catalog.products(), &spec);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|p| p.price.amount_cents <= 5000));
}

#[test]
fn query_string_drives_the_listing() {
    let catalog = Catalog::seed();
    let spec = FilterSpec::from_query_string("?category=Electronics&price=0-250&brand=SoundWave");
    let visible = visible_products(catalog.products(), &spec);
    assert_eq!(
        ids(&visible),
        vec!["wireless-headphones-001", "wireless-headphones-002"]
    );
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let source = instant_catalog();
    let result = source.product(&ProductId::new("hoverboard-001")).await;
    assert!(matches!(result, Err(StorefrontError::ProductNotFound(_))));
    assert_eq!(Loadable::from(result), Loadable::<Product>::NotFound);
}

#[tokio::test]
async fn accessor_lists_distinct_facets() {
    let source = instant_catalog();
    let categories = source.categories().await.unwrap();
    let brands = source.brands().await.unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(brands.len(), 9);
}

#[tokio::test]
async fn accessor_by_category_matches_engine() {
    let source = instant_catalog();
    let by_category = source.products_in_category("Footwear").await.unwrap();
    let via_engine = load_visible_products(&source, &FilterSpec::new().with_category("Footwear"))
        .await
        .unwrap();
    assert_eq!(by_category, via_engine);
}

#[tokio::test]
async fn accessor_search_matches_engine() {
    let source = instant_catalog();
    for query in ["wireless", "", "  ", " running ", "SOUNDWAVE", "submarine"] {
        let searched = source.search(query).await.unwrap();
        let via_engine = load_visible_products(&source, &FilterSpec::new().with_search(query))
            .await
            .unwrap();
        assert_eq!(searched, via_engine, "query {:?}", query);
    }
}

#[tokio::test]
async fn engine_works_through_a_trait_object() {
    let source: Box<dyn CatalogSource> = Box::new(instant_catalog());
    let visible = load_visible_products(source.as_ref(), &FilterSpec::new()).await.unwrap();
    assert_eq!(visible.len(), 11);
}

#[tokio::test]
async fn closed_view_discards_fetch() {
    let source = instant_catalog();
    let scope = ViewScope::new();
    let id = ProductId::new("backpack-001");
    let fetch = source.product(&id);
    scope.close();
    assert_eq!(scope.load(fetch).await, None);
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    let categories = prop::sample::subsequence(Catalog::seed().categories(), 0..3);
    let brands = prop::sample::subsequence(Catalog::seed().brands(), 0..3);
    let search = prop::sample::select(vec!["", "running", "wireless", "pack", "zzz", "  "]);
    (categories, brands, 0i64..120_000, search).prop_map(|(categories, brands, ceiling, search)| {
        FilterSpec {
            categories: categories.into_iter().collect(),
            brands: brands.into_iter().collect(),
            price_floor: Money::usd(0),
            price_ceiling: Money::usd(ceiling),
            search: search.to_string(),
        }
    })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(spec in arb_spec()) {
        let catalog = Catalog::seed();
        let once = visible_products(catalog.products(), &spec);
        let twice = visible_products(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_preserves_catalog_order(spec in arb_spec()) {
        let catalog = Catalog::seed();
        let visible = visible_products(catalog.products(), &spec);
        let positions: Vec<usize> = visible
            .iter()
            .map(|p| catalog.products().iter().position(|c| c.id == p.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
