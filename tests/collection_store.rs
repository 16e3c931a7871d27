use backdesk::api::ApiError;
use backdesk::model::{Product, ProductDraft, Record, RecordId, User};
use backdesk::store::{derive_view, CollectionStore, SortCriteria, SortDirection};
use reqwest::StatusCode;

fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id: RecordId::from(id),
        title: title.to_string(),
        price,
        description: String::new(),
    }
}

fn inventory() -> Vec<Product> {
    vec![product(1, "Apple", 10.0), product(2, "Banana", 5.0)]
}

fn titles(view: &[Product]) -> Vec<&str> {
    view.iter().map(|p| p.title.as_str()).collect()
}

fn server_error() -> ApiError {
    ApiError::Status {
        resource: Product::RESOURCE,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[test]
fn view_contains_exactly_the_substring_matches() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(vec![
        product(1, "Apple", 10.0),
        product(2, "Banana", 5.0),
        product(3, "Mandarin", 3.0),
    ]));

    store.set_search_query("AN");
    assert_eq!(titles(store.view()), vec!["Banana", "Mandarin"]);

    // "Apple" does not contain "an"; "Banana" does.
    store.set_search_query("an");
    assert_eq!(titles(store.view()), vec!["Banana", "Mandarin"]);
}

#[test]
fn trailing_whitespace_in_the_query_is_part_of_the_needle() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));

    // No searchable field contains "apple " with the trailing space.
    store.set_search_query("apple ");
    assert!(store.view().is_empty());
}

#[test]
fn search_an_over_apple_and_banana_keeps_only_banana() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));
    store.set_search_query("an");
    assert_eq!(titles(store.view()), vec!["Banana"]);
}

#[test]
fn price_sort_is_ascending_then_toggles_to_descending() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));

    store.set_sort("price");
    assert_eq!(titles(store.view()), vec!["Banana", "Apple"]);
    assert_eq!(
        store.sort(),
        Some(&SortCriteria {
            field: "price",
            direction: SortDirection::Ascending,
        })
    );

    store.set_sort("price");
    assert_eq!(titles(store.view()), vec!["Apple", "Banana"]);

    // A third request lands back on ascending.
    store.set_sort("price");
    assert_eq!(titles(store.view()), vec!["Banana", "Apple"]);
}

#[test]
fn sorted_view_is_monotone_under_the_field_ordering() {
    let records = vec![
        product(1, "Cherry", 2.5),
        product(2, "Apple", 10.0),
        product(3, "Banana", 5.0),
        product(4, "Date", 5.0),
    ];
    let asc = derive_view(
        &records,
        "",
        Some(&SortCriteria {
            field: "price",
            direction: SortDirection::Ascending,
        }),
    );
    let prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    let desc = derive_view(
        &records,
        "",
        Some(&SortCriteria {
            field: "price",
            direction: SortDirection::Descending,
        }),
    );
    let prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn create_appends_exactly_one_with_the_backend_id() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));

    let created = product(42, "Cherry", 2.5);
    assert!(store.finish_create(Ok(created)));
    assert_eq!(store.view().len(), 3);
    assert_eq!(store.view()[2].id, RecordId::from(42));
}

#[test]
fn delete_leaves_no_record_with_that_id() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));

    assert!(store.finish_delete(&RecordId::from(1), Ok(())));
    assert!(store.view().iter().all(|p| p.id != RecordId::from(1)));
}

#[test]
fn failed_update_leaves_the_collection_unchanged() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));
    let before: Vec<Product> = store.view().to_vec();

    let draft = ProductDraft {
        price: Some(99.0),
        ..Default::default()
    };
    assert!(!store.finish_update(&RecordId::from(1), &draft, Err(server_error())));
    assert_eq!(store.view(), &before[..]);
}

#[test]
fn users_search_covers_every_text_field() {
    let mut store = CollectionStore::<User>::new();
    store.finish_fetch(Ok(vec![
        User {
            id: RecordId::from(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        },
        User {
            id: RecordId::from(2),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
        },
    ]));

    store.set_search_query("hopper");
    assert_eq!(store.view().len(), 1);
    assert_eq!(store.view()[0].first_name, "Grace");

    store.set_search_query("example.com");
    assert_eq!(store.view().len(), 2);
}

#[test]
fn sort_survives_refetch_and_mutations() {
    let mut store = CollectionStore::<Product>::new();
    store.finish_fetch(Ok(inventory()));
    store.set_sort("price");

    store.begin_fetch();
    store.finish_fetch(Ok(vec![
        product(3, "Cherry", 2.5),
        product(1, "Apple", 10.0),
        product(2, "Banana", 5.0),
    ]));
    assert_eq!(titles(store.view()), vec!["Cherry", "Banana", "Apple"]);
}
