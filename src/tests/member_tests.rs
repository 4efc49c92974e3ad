use super::{day, draft, Fixture};
use crate::error::LedgerError;
use crate::models::*;

#[test]
fn test_ensure_self_is_idempotent() {
    let mut fx = Fixture::new();
    let mut service = fx.service();

    let me = service.ensure_self("Alice").unwrap();
    let again = service.ensure_self("Someone else").unwrap();

    assert_eq!(me.id, service.self_id());
    assert_eq!(again, me);
    assert_eq!(service.storage.list_members().len(), 1);

    drop(service);
    assert_eq!(fx.audit_logger.get_logs().len(), 1);
    assert_eq!(
        fx.audit_logger.get_logs()[0].event,
        AuditEvent::MemberAdded { member_id: me.id, name: "Alice".to_string() }
    );
}

#[test]
fn test_add_member_requires_name() {
    let mut fx = Fixture::new();
    let mut service = fx.service();

    let result = service.add_member("  ");
    assert!(matches!(result, Err(LedgerError::InvalidInput(field, _)) if field == "name"));
}

#[test]
fn test_rename_member() {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    let bob = service.add_member("Bob").unwrap();

    let renamed = service.rename_member(bob.id, " Robert ").unwrap();
    assert_eq!(renamed.name, "Robert");
    assert_eq!(service.storage.get_member(bob.id).unwrap().name, "Robert");

    let missing = service.rename_member(uuid::Uuid::new_v4(), "Nobody");
    assert!(matches!(missing, Err(LedgerError::MemberNotFound(_))));
}

#[test]
fn test_cannot_remove_self() {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    let me = service.ensure_self("Alice").unwrap();

    let result = service.remove_member(me.id);
    assert!(matches!(result, Err(LedgerError::CannotRemoveSelf)));
}

#[test]
fn test_cannot_remove_friend_with_outstanding_balance() {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    let me = service.ensure_self("Alice").unwrap();
    let bob = service.add_member("Bob").unwrap();
    let group = service
        .create_group("Lunch", Currency::Hkd, day(1), vec![])
        .unwrap();
    service
        .add_expense(
            group.id,
            draft(me.id, 40.0, Currency::Hkd, SplitInput::Equal(vec![me.id, bob.id])),
        )
        .unwrap();

    let result = service.remove_member(bob.id);
    assert!(matches!(result, Err(LedgerError::OutstandingBalance(_, b)) if b == 20.0));
    assert!(service.storage.get_member(bob.id).is_some());
}

#[test]
fn test_cannot_remove_member_owing_someone_else() {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    service.ensure_self("Alice").unwrap();
    let bob = service.add_member("Bob").unwrap();
    let carol = service.add_member("Carol").unwrap();
    let group = service
        .create_group("Cinema", Currency::Hkd, day(1), vec![])
        .unwrap();
    service
        .add_expense(
            group.id,
            draft(carol.id, 30.0, Currency::Hkd, SplitInput::Equal(vec![bob.id, carol.id])),
        )
        .unwrap();

    // invisible in the friend view, but Bob still owes Carol
    assert_eq!(service.friend_balance_of(bob.id), 0.0);
    let result = service.remove_member(bob.id);
    assert!(matches!(result, Err(LedgerError::OutstandingBalance(_, b)) if b == -15.0));
}

#[test]
fn test_remove_settled_friend_drops_them_from_groups() {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    service.ensure_self("Alice").unwrap();
    let bob = service.add_member("Bob").unwrap();
    let group = service
        .create_group("Hike", Currency::Hkd, day(1), vec![])
        .unwrap();
    assert!(group.is_member(bob.id));

    service.remove_member(bob.id).unwrap();

    assert!(service.storage.get_member(bob.id).is_none());
    assert!(!service.group(group.id).unwrap().is_member(bob.id));
    assert!(service.friend_balances().get(bob.id).is_none());

    drop(service);
    let logs = fx.audit_logger.get_logs();
    assert_eq!(logs.last().unwrap().event, AuditEvent::MemberRemoved { member_id: bob.id });
}

#[test]
fn test_friend_balances_list_every_friend() {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    let me = service.ensure_self("Alice").unwrap();
    let bob = service.add_member("Bob").unwrap();
    let carol = service.add_member("Carol").unwrap();
    let group = service
        .create_group("Tokyo", Currency::Hkd, day(1), vec![])
        .unwrap();
    service
        .add_expense(
            group.id,
            draft(me.id, 1000.0, Currency::Jpy, SplitInput::Equal(vec![me.id, bob.id])),
        )
        .unwrap();

    let balances = service.friend_balances();
    let order: Vec<MemberId> = balances.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![bob.id, carol.id]);
    assert!((balances.get(bob.id).unwrap() - 26.0).abs() < 1e-9);
    assert_eq!(balances.get(carol.id), Some(0.0));
}
