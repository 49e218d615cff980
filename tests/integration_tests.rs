// Integration tests for Food Match

use chrono::{DateTime, Duration, TimeZone, Utc};
use food_match::core::{
    graph::{FoodRelationGraph, RelationStore, SharedFoodGraph},
    inventory::list_lots,
    matcher::{find_best_food_matches, Matcher},
};
use food_match::models::{FoodLot, InventoryQuery, Location, MatchRequest, SortKey};
use food_match::{FoodMatchError, MatchingSettings};

fn t(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap() + Duration::days(days)
}

fn create_test_lot(
    id: &str,
    name: &str,
    quantity: u32,
    expiry: DateTime<Utc>,
    status: &str,
    location: Option<Location>,
) -> FoodLot {
    FoodLot::new(id, name, expiry, quantity, status, location)
}

fn ids(lots: &[&FoodLot]) -> Vec<String> {
    lots.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn test_rice_example_prefers_earlier_expiry() {
    let loc = Location::new("Nagpur", "MH");
    let lots = vec![
        create_test_lot("A", "Rice", 10, t(2), "available", None),
        create_test_lot("B", "Rice", 20, t(1), "available", None),
    ];

    let matches = find_best_food_matches(&lots, "rice", 5, &loc);

    assert_eq!(ids(&matches), vec!["B", "A"]);
}

#[test]
fn test_quantity_above_all_lots_is_empty() {
    let loc = Location::new("Nagpur", "MH");
    let lots = vec![
        create_test_lot("A", "Rice", 10, t(2), "available", None),
        create_test_lot("B", "Rice", 20, t(1), "available", None),
    ];

    assert!(find_best_food_matches(&lots, "rice", 100, &loc).is_empty());
    assert!(find_best_food_matches(&[], "rice", 0, &loc).is_empty());
}

#[test]
fn test_integration_end_to_end_matching() {
    let recipient = Location::new("Pune", "MH");
    let pune = || Some(Location::new("Pune", "MH"));
    let mumbai = || Some(Location::new("Mumbai", "MH"));

    let lots = vec![
        create_test_lot("1", "Rice", 30, t(5), "available", pune()),     // Local, late
        create_test_lot("2", "Rice", 30, t(1), "available", mumbai()),   // Remote, early
        create_test_lot("3", "Rice", 30, t(3), "available", pune()),     // Local, mid
        create_test_lot("4", "Rice", 2, t(0), "available", pune()),      // Too little
        create_test_lot("5", "Rice", 30, t(0), "claimed", pune()),       // Not available
        create_test_lot("6", "Wheat", 30, t(0), "available", pune()),    // Wrong food
        create_test_lot("7", "Rice", 30, t(2), "available", None),       // Unknown location
        create_test_lot("8", "Jasmine Rice", 30, t(4), "AVAILABLE", mumbai()),
        create_test_lot("9", "rice flour", 30, t(6), "available", Some(Location::new("pune", "MH"))),
    ];

    let result = Matcher::default().rank(&lots, "Rice", 10, &recipient);

    assert_eq!(result.total_candidates, 9);
    assert_eq!(result.eligible, 6);
    // Local lots first, each group earliest-expiring first, capped at five
    assert_eq!(ids(&result.matches), vec!["3", "1", "2", "7", "8"]);
}

#[test]
fn test_inventory_decoded_from_json() {
    let json = r#"[
        {"id": "x", "name": "Milk", "expiryDate": "2024-05-12T00:00:00Z", "quantity": 8,
         "status": "available", "location": {"city": "Goa", "state": "GA"}, "manufacturer": "Amul"},
        {"id": "y", "name": "Milk", "expiryDate": "2024-05-11T00:00:00Z", "quantity": 8,
         "status": "available", "location": null}
    ]"#;
    let lots: Vec<FoodLot> = serde_json::from_str(json).unwrap();
    let request: MatchRequest = serde_json::from_str(
        r#"{"foodName": "milk", "requiredQuantity": 8, "recipientLocation": {"city": "Goa", "state": "GA"}}"#,
    )
    .unwrap();

    let result = Matcher::default().find_matches(&lots, &request).unwrap();

    assert_eq!(ids(&result.matches), vec!["x", "y"]);
    assert_eq!(result.matches[0].manufacturer.as_deref(), Some("Amul"));
}

#[test]
fn test_invalid_request_is_rejected() {
    let request = MatchRequest {
        food_name: "x".repeat(201),
        required_quantity: 1,
        recipient_location: Location::new("Goa", "GA"),
    };

    let result = Matcher::new(MatchingSettings::default()).find_matches(&[], &request);

    assert!(matches!(result, Err(FoodMatchError::InvalidRequest(_))));
}

#[test]
fn test_related_food_examples() {
    let mut graph = FoodRelationGraph::new();
    graph.add_edge("Bread", "Butter");
    graph.add_edge("Butter", "Jam");

    assert!(graph.find_related_food("Bread", 0).is_empty());
    assert_eq!(graph.find_related_food("Bread", 1), vec!["Butter"]);
    assert_eq!(graph.find_related_food("Bread", 2), vec!["Butter", "Jam"]);
}

#[test]
fn test_related_food_never_returns_start_or_duplicates() {
    let mut graph = FoodRelationGraph::new();
    let edges = [
        ("Rice", "Dal"),
        ("Rice", "Curd"),
        ("Dal", "Curd"),
        ("Curd", "Rice"),
        ("Dal", "Ghee"),
        ("Ghee", "Roti"),
        ("Roti", "Rice"),
    ];
    for (a, b) in edges {
        graph.add_edge(a, b);
    }

    for depth in 0..6 {
        let related = graph.find_related_food("Rice", depth);
        assert!(!related.contains(&"Rice".to_string()));

        let mut unique = related.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), related.len(), "Duplicates at depth {}", depth);
    }

    assert_eq!(graph.find_related_food("Rice", 1), vec!["Dal", "Curd", "Roti"]);
    assert_eq!(graph.find_related_food("Rice", 2), vec!["Dal", "Curd", "Roti", "Ghee"]);
}

#[test]
fn test_shared_graph_across_threads() {
    let graph = SharedFoodGraph::default();

    let handles: Vec<_> = ["Oats", "Honey", "Banana"]
        .into_iter()
        .map(|food| {
            let mut writer = graph.clone();
            std::thread::spawn(move || writer.add_edge("Milk", food))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut related = graph.find_related_food("Milk", 1);
    related.sort();
    assert_eq!(related, vec!["Banana", "Honey", "Oats"]);
}

#[test]
fn test_donor_dashboard_listing() {
    let mut lots = vec![
        create_test_lot("a", "Bread", 4, t(2), "available", None),
        create_test_lot("b", "Eggs", 12, t(1), "available", None),
        create_test_lot("c", "Milk", 6, t(0), "claimed", None),
    ];
    lots[0].donor_id = Some("donor-1".to_string());
    lots[2].donor_id = Some("donor-1".to_string());
    let settings = MatchingSettings::default();

    let available = InventoryQuery {
        available_only: true,
        donor_id: None,
        sort: Some(SortKey::Expiry),
    };
    assert_eq!(ids(&list_lots(&lots, &available, &settings)), vec!["b", "a"]);

    let by_quantity = InventoryQuery {
        sort: Some(SortKey::Quantity),
        ..InventoryQuery::default()
    };
    assert_eq!(ids(&list_lots(&lots, &by_quantity, &settings)), vec!["b", "c", "a"]);

    let donor = InventoryQuery {
        donor_id: Some("donor-1".to_string()),
        ..InventoryQuery::default()
    };
    assert_eq!(ids(&list_lots(&lots, &donor, &settings)), vec!["a", "c"]);
}
