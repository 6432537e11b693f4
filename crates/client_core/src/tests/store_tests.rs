use super::*;

fn lead(id: i64) -> Lead {
    Lead {
        id: LeadId(id),
        full_name: format!("Lead {id}"),
        email: format!("lead{id}@x.com"),
        phone_number: None,
        company_name: None,
        notes: None,
    }
}

#[test]
fn replace_all_keeps_listing_order() {
    let mut store = LeadStore::new();
    store.replace_all(vec![lead(3), lead(1), lead(2)]);
    assert_eq!(store.ids(), vec![LeadId(3), LeadId(1), LeadId(2)]);

    store.replace_all(Vec::new());
    assert!(store.is_empty());
}

#[test]
fn append_adds_to_the_end() {
    let mut store = LeadStore::new();
    store.replace_all(vec![lead(1), lead(2)]);
    store.append(lead(9));
    assert_eq!(store.ids(), vec![LeadId(1), LeadId(2), LeadId(9)]);
    assert_eq!(store.get(LeadId(9)).map(|l| l.full_name.as_str()), Some("Lead 9"));
}

#[test]
fn remove_by_id_preserves_order_of_the_rest() {
    let mut store = LeadStore::new();
    store.replace_all(vec![lead(1), lead(2), lead(3)]);
    assert!(store.remove_by_id(LeadId(2)));
    assert_eq!(store.ids(), vec![LeadId(1), LeadId(3)]);
}

#[test]
fn remove_by_id_only_takes_the_first_match() {
    let mut store = LeadStore::new();
    store.replace_all(vec![lead(1), lead(2), lead(1)]);
    assert!(store.remove_by_id(LeadId(1)));
    assert_eq!(store.ids(), vec![LeadId(2), LeadId(1)]);
}

#[test]
fn removing_an_absent_id_is_a_no_op() {
    let mut store = LeadStore::new();
    store.replace_all(vec![lead(1), lead(2)]);
    let before = store.clone();

    assert!(!store.remove_by_id(LeadId(42)));
    assert_eq!(store, before);
    assert!(!store.remove_by_id(LeadId(42)));
    assert_eq!(store, before);
}
