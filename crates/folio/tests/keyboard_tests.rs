//! Keyboard and ARIA contract tests.

use folio::prelude::*;
use folio::widget::AccessibleRole;

fn skills() -> DisclosureList {
    DisclosureList::new(
        vec![
            DisclosureItem::new("Languages", "Rust, TypeScript, Go"),
            DisclosureItem::new("Infrastructure", "Kubernetes, Terraform"),
            DisclosureItem::new("Data", "Postgres, Kafka"),
        ],
        DisclosureConfig::new(Exclusivity::Single),
    )
    .with_list_id("skills")
}

#[test]
fn keyboard_walks_headers_and_toggles() {
    let mut list = skills();

    assert_eq!(list.handle_key(DisclosureKey::ArrowUp), Ok(true));
    assert_eq!(list.focused(), Some(2));
    assert_eq!(list.handle_key(DisclosureKey::Home), Ok(true));
    assert_eq!(list.focused(), Some(0));
    assert_eq!(list.handle_key(DisclosureKey::ArrowDown), Ok(true));
    assert_eq!(list.focused(), Some(1));

    // Moving focus never opens anything
    assert!(list.open_indices().is_empty());

    assert_eq!(list.handle_key(DisclosureKey::Enter), Ok(true));
    assert_eq!(list.open_indices(), vec![1]);
    assert_eq!(list.handle_key(DisclosureKey::Space), Ok(true));
    assert!(list.open_indices().is_empty());
}

#[test]
fn aria_attributes_follow_open_state() {
    let mut list = skills();
    list.toggle(0).unwrap();

    let entries = list.entries();
    let open = &entries[0].accessibility;
    assert_eq!(open.role, AccessibleRole::Button);
    assert_eq!(open.name, "Languages");
    assert!(open.expanded);
    assert!(
        open.header_attributes()
            .contains(&("aria-controls", "skills-panel-0".to_string()))
    );
    assert!(!open.panel_attributes().iter().any(|(name, _)| *name == "hidden"));

    let closed = &entries[1].accessibility;
    assert!(!closed.expanded);
    assert!(
        closed
            .header_attributes()
            .contains(&("aria-expanded", "false".to_string()))
    );
    assert!(closed.panel_attributes().iter().any(|(name, _)| *name == "hidden"));
}
