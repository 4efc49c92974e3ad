use super::{approx, day, draft, Fixture};
use crate::error::LedgerError;
use crate::logger::AuditLogger;
use crate::models::*;

struct Trip {
    fx: Fixture,
    me: MemberId,
    bob: MemberId,
    carol: MemberId,
    group: GroupId,
}

fn trip(base_currency: Currency) -> Trip {
    let mut fx = Fixture::new();
    let mut service = fx.service();
    let me = service.ensure_self("Alice").unwrap().id;
    let bob = service.add_member("Bob").unwrap().id;
    let carol = service.add_member("Carol").unwrap().id;
    let group = service
        .create_group("Taipei", base_currency, day(1), vec![])
        .unwrap()
        .id;
    drop(service);
    Trip {
        fx,
        me,
        bob,
        carol,
        group,
    }
}

#[test]
fn test_add_expense_and_settle() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();

    let expense = service
        .add_expense(
            t.group,
            draft(t.me, 90.0, Currency::Hkd, SplitInput::Equal(vec![t.me, t.bob, t.carol])),
        )
        .unwrap();
    assert_eq!(expense.exchange_rate, 1.0);
    assert_eq!(expense.splits.len(), 3);
    assert_eq!(expense.description, "Dinner");

    let plan = service.group_settlements(t.group).unwrap();
    assert_eq!(
        plan.settlements,
        vec![
            Settlement { from: t.bob, to: t.me, amount: 30.0 },
            Settlement { from: t.carol, to: t.me, amount: 30.0 },
        ]
    );

    drop(service);
    let logs = t.fx.audit_logger.get_logs();
    assert!(matches!(
        logs.last().unwrap().event,
        AuditEvent::ExpenseAdded { expense_id, unallocated, .. } if expense_id == expense.id && unallocated == 0.0
    ));
}

#[test]
fn test_rate_is_captured_into_group_base() {
    let mut t = trip(Currency::Eur);
    let mut service = t.fx.service();

    let expense = service
        .add_expense(
            t.group,
            draft(t.bob, 1000.0, Currency::Jpy, SplitInput::Equal(vec![t.me, t.bob])),
        )
        .unwrap();

    assert!(approx(expense.exchange_rate, 0.052 / 8.4));
    assert!(approx(service.group_total_spent(t.group).unwrap(), 1000.0 * 0.052 / 8.4));
}

#[test]
fn test_update_keeps_frozen_rate_unless_currency_changes() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();
    let expense = service
        .add_expense(
            t.group,
            draft(t.me, 10.0, Currency::Usd, SplitInput::Equal(vec![t.me, t.bob])),
        )
        .unwrap();
    assert_eq!(expense.exchange_rate, 7.8);
    drop(service);

    let rates = RateTable::new(Currency::Hkd, [(Currency::Usd, 8.0), (Currency::Gbp, 10.0)]);
    let mut service = t.fx.service().with_rates(rates);

    let same_currency = service
        .update_expense(
            t.group,
            expense.id,
            draft(t.me, 20.0, Currency::Usd, SplitInput::Equal(vec![t.me, t.bob])),
        )
        .unwrap();
    assert_eq!(same_currency.id, expense.id);
    assert_eq!(same_currency.exchange_rate, 7.8);
    assert_eq!(same_currency.amount, 20.0);

    let new_currency = service
        .update_expense(
            t.group,
            expense.id,
            draft(t.me, 20.0, Currency::Gbp, SplitInput::Equal(vec![t.me, t.bob])),
        )
        .unwrap();
    assert_eq!(new_currency.exchange_rate, 10.0);
    assert_eq!(service.group(t.group).unwrap().expenses.len(), 1);
}

#[test]
fn test_expenses_are_kept_newest_first() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();
    for d in [5, 9, 7] {
        let mut entry = draft(t.me, 10.0, Currency::Hkd, SplitInput::Equal(vec![t.bob]));
        entry.date = day(d);
        service.add_expense(t.group, entry).unwrap();
    }

    let dates: Vec<_> = service
        .group(t.group)
        .unwrap()
        .expenses
        .iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(dates, vec![day(9), day(7), day(5)]);
}

#[test]
fn test_custom_split_shortfall_is_accepted_and_flagged() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();

    let expense = service
        .add_expense(
            t.group,
            draft(
                t.me,
                100.0,
                Currency::Hkd,
                SplitInput::Custom(vec![SplitDetail::new(t.bob, 50.0), SplitDetail::new(t.carol, 30.0)]),
            ),
        )
        .unwrap();
    assert_eq!(expense.unallocated_amount(), 20.0);

    let plan = service.group_settlements(t.group).unwrap();
    assert_eq!(plan.total_transferred(), 80.0);
    assert_eq!(plan.leftover, vec![Outstanding { member_id: t.me, amount: 20.0 }]);

    drop(service);
    let trail = t.fx.audit_logger.for_group(t.group);
    assert_eq!(trail.len(), 2);
    assert!(matches!(trail[0].event, AuditEvent::GroupCreated { .. }));
    assert!(matches!(
        trail[1].event,
        AuditEvent::ExpenseAdded { unallocated, .. } if unallocated == 20.0
    ));
}

#[test]
fn test_expense_validation() {
    let mut t = trip(Currency::Hkd);
    let stranger = uuid::Uuid::new_v4();
    let mut service = t.fx.service();
    let everyone = SplitInput::Equal(vec![t.me, t.bob]);

    let zero = service.add_expense(t.group, draft(t.me, 0.0, Currency::Hkd, everyone.clone()));
    assert!(matches!(zero, Err(LedgerError::InvalidAmount(_))));

    let nan = service.add_expense(t.group, draft(t.me, f64::NAN, Currency::Hkd, everyone.clone()));
    assert!(matches!(nan, Err(LedgerError::InvalidAmount(_))));

    let outsider_payer = service.add_expense(t.group, draft(stranger, 10.0, Currency::Hkd, everyone.clone()));
    assert!(matches!(outsider_payer, Err(LedgerError::NotGroupMember(_, _))));

    let outsider_split = service.add_expense(
        t.group,
        draft(t.me, 10.0, Currency::Hkd, SplitInput::Equal(vec![t.me, stranger])),
    );
    assert!(matches!(outsider_split, Err(LedgerError::NotGroupMember(_, _))));

    let empty = service.add_expense(t.group, draft(t.me, 10.0, Currency::Hkd, SplitInput::Custom(vec![])));
    assert!(matches!(empty, Err(LedgerError::EmptySplit)));

    let duplicate = service.add_expense(
        t.group,
        draft(
            t.me,
            10.0,
            Currency::Hkd,
            SplitInput::Custom(vec![SplitDetail::new(t.bob, 5.0), SplitDetail::new(t.bob, 5.0)]),
        ),
    );
    assert!(matches!(duplicate, Err(LedgerError::DuplicateSplitMember(_))));

    let negative = service.add_expense(
        t.group,
        draft(
            t.me,
            10.0,
            Currency::Hkd,
            SplitInput::Custom(vec![SplitDetail::new(t.bob, 15.0), SplitDetail::new(t.me, -5.0)]),
        ),
    );
    assert!(matches!(negative, Err(LedgerError::InvalidInput(field, _)) if field == "splits"));

    let missing_group = service.add_expense(uuid::Uuid::new_v4(), draft(t.me, 10.0, Currency::Hkd, everyone));
    assert!(matches!(missing_group, Err(LedgerError::GroupNotFound(_))));

    assert!(service.group(t.group).unwrap().expenses.is_empty());
}

#[test]
fn test_blank_description_falls_back_to_category() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();

    let mut taxi = draft(t.me, 12.0, Currency::Hkd, SplitInput::Equal(vec![t.me, t.bob]));
    taxi.category = Category::Transport;
    taxi.description = "  ".to_string();
    assert_eq!(service.add_expense(t.group, taxi).unwrap().description, "Transport");

    let mut misc = draft(t.me, 12.0, Currency::Hkd, SplitInput::Equal(vec![t.me, t.bob]));
    misc.category = Category::Others;
    misc.description = String::new();
    assert_eq!(service.add_expense(t.group, misc).unwrap().description, "Others");
}

#[test]
fn test_delete_expense() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();
    let expense = service
        .add_expense(t.group, draft(t.me, 30.0, Currency::Hkd, SplitInput::Equal(vec![t.bob])))
        .unwrap();

    service.delete_expense(t.group, expense.id).unwrap();
    assert!(service.group(t.group).unwrap().expenses.is_empty());
    assert!(service.group_settlements(t.group).unwrap().is_empty());

    let again = service.delete_expense(t.group, expense.id);
    assert!(matches!(again, Err(LedgerError::ExpenseNotFound(_))));

    drop(service);
    let logs = t.fx.audit_logger.get_logs();
    assert_eq!(
        logs.last().unwrap().event,
        AuditEvent::ExpenseDeleted { group_id: t.group, expense_id: expense.id }
    );
}

#[test]
fn test_category_totals_and_total_spent() {
    let mut t = trip(Currency::Hkd);
    let mut service = t.fx.service();

    service
        .add_expense(t.group, draft(t.me, 50.0, Currency::Hkd, SplitInput::Equal(vec![t.me, t.bob])))
        .unwrap();
    let mut hotel = draft(t.bob, 100.0, Currency::Usd, SplitInput::Equal(vec![t.me, t.bob]));
    hotel.category = Category::Hotel;
    service.add_expense(t.group, hotel).unwrap();

    let totals = service.category_totals(t.group).unwrap();
    assert_eq!(totals.len(), Category::ALL.len());
    assert_eq!(totals[0], (Category::Food, 50.0));
    assert_eq!(totals[2].0, Category::Hotel);
    assert!(approx(totals[2].1, 780.0));
    assert!(approx(service.group_total_spent(t.group).unwrap(), 830.0));
}
