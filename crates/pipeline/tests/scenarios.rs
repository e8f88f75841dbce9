use std::sync::Arc;

use orderflow_pipeline::order::REJECTED_STATUS;
use orderflow_pipeline::{
    Notice, OrderDesk, OrderOutcome, PipelineConfig, RecordingSink, ShipmentOutcome,
};
use proptest::prelude::*;

fn desk() -> (OrderDesk, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let desk = OrderDesk::new(sink.clone()).unwrap();
    (desk, sink)
}

fn express_count(notices: &[Notice]) -> usize {
    notices
        .iter()
        .filter(|n| matches!(n, Notice::ExpressDelivery))
        .count()
}

#[test]
fn scenario_a_positive_quantity_confirms() {
    let (desk, sink) = desk();

    let outcome = desk.submit_order("Alice", "Laptop", 2).unwrap();

    assert_eq!(outcome, OrderOutcome::Confirmed);
    assert!(desk.last_order_confirmed());
    assert_eq!(
        sink.status().as_deref(),
        Some("Order Processed Successfully for Alice")
    );
    assert_eq!(
        sink.notices(),
        vec![Notice::OrderSummary {
            customer_name: "Alice".into(),
            product: "Laptop".into(),
            quantity: 2,
        }]
    );
}

#[test]
fn scenario_b_zero_quantity_rejects() {
    let (desk, sink) = desk();

    let outcome = desk.submit_order("Bob", "Mouse", 0).unwrap();

    assert_eq!(outcome, OrderOutcome::Rejected);
    assert!(!desk.last_order_confirmed());
    assert_eq!(sink.status().as_deref(), Some("Order Invalid \u{2013} Please retry"));
}

#[test]
fn scenario_c_confirmed_order_ships_express() {
    let (desk, sink) = desk();
    desk.submit_order("Alice", "Laptop", 2).unwrap();
    sink.take_notices();

    let outcome = desk.request_shipment("Laptop", true).unwrap();

    assert_eq!(outcome, ShipmentOutcome::Dispatched { express: true });
    assert_eq!(sink.status().as_deref(), Some("Product dispatched: Laptop"));
    assert_eq!(sink.notices(), vec![Notice::ExpressDelivery]);
}

#[test]
fn scenario_d_rejected_order_blocks_shipment() {
    let (desk, sink) = desk();
    desk.submit_order("Bob", "Mouse", 0).unwrap();
    sink.take_notices();

    let outcome = desk.request_shipment("Mouse", true).unwrap();

    assert_eq!(outcome, ShipmentOutcome::Declined);
    assert_eq!(sink.notices(), vec![Notice::ShipmentBlocked]);
    assert_eq!(sink.status().as_deref(), Some(REJECTED_STATUS));
    assert!(
        !sink
            .status_history()
            .iter()
            .any(|s| s.starts_with("Product dispatched"))
    );
}

#[test]
fn scenario_e_express_membership_is_re_added() {
    let (desk, sink) = desk();
    desk.submit_order("Alice", "Laptop", 2).unwrap();
    sink.take_notices();

    desk.request_shipment("Laptop", false).unwrap();
    assert_eq!(express_count(&sink.take_notices()), 0);

    desk.request_shipment("Laptop", true).unwrap();
    assert_eq!(express_count(&sink.take_notices()), 1);
}

#[test]
fn shipment_without_any_order_is_declined() {
    let (desk, sink) = desk();

    let outcome = desk.request_shipment("Keyboard", false).unwrap();

    assert_eq!(outcome, ShipmentOutcome::Declined);
    assert_eq!(sink.status(), None);
    assert_eq!(sink.notices(), vec![Notice::ShipmentBlocked]);
    assert_eq!(desk.shipments().shipped().listener_names(), vec!["show_dispatch"]);
}

#[test]
fn later_rejection_closes_the_gate_again() {
    let (desk, _sink) = desk();
    desk.submit_order("Alice", "Laptop", 2).unwrap();
    assert!(matches!(
        desk.request_shipment("Laptop", false).unwrap(),
        ShipmentOutcome::Dispatched { express: false }
    ));

    desk.submit_order("Alice", "Laptop", -5).unwrap();

    assert_eq!(
        desk.request_shipment("Laptop", true).unwrap(),
        ShipmentOutcome::Declined
    );
}

#[test]
fn declined_shipment_leaves_state_and_membership_untouched() {
    let (desk, _sink) = desk();
    desk.submit_order("Alice", "Laptop", 1).unwrap();
    desk.request_shipment("Laptop", true).unwrap();
    desk.submit_order("Bob", "Mouse", 0).unwrap();

    let courier = desk.shipments().courier_listener();
    assert_eq!(desk.shipments().shipped().count(courier), 1);

    desk.request_shipment("Mouse", false).unwrap();

    assert!(!desk.last_order_confirmed());
    assert_eq!(desk.shipments().shipped().count(courier), 1);
}

#[test]
fn summary_first_shows_summary_before_status() {
    let sink = Arc::new(RecordingSink::new());
    let config = PipelineConfig {
        summary_first: true,
        ..PipelineConfig::default()
    };
    let desk = OrderDesk::with_config(sink.clone(), &config).unwrap();

    desk.submit_order("Alice", "Laptop", 2).unwrap();

    assert_eq!(
        desk.orders().submitted().listener_names(),
        vec!["display_order", "validate_order"]
    );
    assert_eq!(sink.notices().len(), 1);
    assert!(desk.last_order_confirmed());
}

#[test]
fn products_outside_catalog_are_accepted() {
    let (desk, sink) = desk();
    assert!(!desk.catalog().contains("Webcam"));

    desk.submit_order("Dana", "Webcam", 1).unwrap();
    desk.request_shipment("Webcam", false).unwrap();

    assert_eq!(sink.status().as_deref(), Some("Product dispatched: Webcam"));
}

#[test]
fn blank_shipment_product_dispatches_as_unknown() {
    let (desk, sink) = desk();
    desk.submit_order("Dana", "Mouse", 1).unwrap();

    desk.request_shipment("", false).unwrap();

    assert_eq!(sink.status().as_deref(), Some("Product dispatched: Unknown"));
}

#[test]
fn shipment_product_is_kept_as_given() {
    let (desk, sink) = desk();
    desk.submit_order("Dana", "Mouse", 1).unwrap();

    desk.request_shipment(" Mouse ", false).unwrap();

    assert_eq!(sink.status().as_deref(), Some("Product dispatched:  Mouse "));
}

#[test]
fn customer_name_is_trimmed_in_status() {
    let (desk, sink) = desk();

    desk.submit_order("  Erin  ", "Keyboard", 4).unwrap();

    assert_eq!(
        sink.status().as_deref(),
        Some("Order Processed Successfully for Erin")
    );
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: any positive quantity confirms and names the customer.
    #[test]
    fn positive_quantity_always_confirms(
        name in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]",
        quantity in 1i64..10_000,
    ) {
        let (desk, sink) = desk();

        let outcome = desk.submit_order(&name, "Laptop", quantity).unwrap();

        prop_assert_eq!(outcome, OrderOutcome::Confirmed);
        prop_assert!(desk.last_order_confirmed());
        prop_assert!(sink.status().unwrap().contains(&name));
    }

    /// Property: any non-positive quantity rejects with the fixed text.
    #[test]
    fn non_positive_quantity_always_rejects(quantity in i64::MIN..=0) {
        let (desk, sink) = desk();
        desk.submit_order("Alice", "Laptop", 1).unwrap();

        let outcome = desk.submit_order("Alice", "Laptop", quantity).unwrap();

        prop_assert_eq!(outcome, OrderOutcome::Rejected);
        prop_assert!(!desk.last_order_confirmed());
        let status = sink.status();
        prop_assert_eq!(status.as_deref(), Some(REJECTED_STATUS));
    }

    /// Property: shipments fire only while the latest order is confirmed.
    #[test]
    fn gate_follows_latest_order(
        steps in prop::collection::vec((any::<bool>(), -3i64..4, any::<bool>()), 1..12)
    ) {
        let (desk, sink) = desk();
        let mut latest_confirmed: Option<bool> = None;

        for (submit_first, quantity, express) in steps {
            if submit_first {
                desk.submit_order("Alice", "Laptop", quantity).unwrap();
                latest_confirmed = Some(quantity > 0);
            }
            sink.take_notices();

            let outcome = desk.request_shipment("Laptop", express).unwrap();

            if latest_confirmed == Some(true) {
                prop_assert_eq!(outcome, ShipmentOutcome::Dispatched { express });
                prop_assert_eq!(express_count(&sink.notices()), usize::from(express));
            } else {
                prop_assert_eq!(outcome, ShipmentOutcome::Declined);
                prop_assert_eq!(sink.notices(), vec![Notice::ShipmentBlocked]);
            }
        }
    }
}
