use log::info;
use splitledger::config::CONFIG;
use splitledger::error::LedgerError;
use splitledger::ledger::conversion::round_to_cents;
use splitledger::logger::in_memory::InMemoryAuditLogger;
use splitledger::service::LedgerService;
use splitledger::snapshot::LedgerSnapshot;
use splitledger::storage::Storage;
use std::env;

fn main() -> Result<(), LedgerError> {
    env_logger::Builder::new()
        .parse_filters(&CONFIG.log_level)
        .init();
    info!("Starting splitledger with {:?}", *CONFIG);

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG.snapshot_path.clone());
    let snapshot = LedgerSnapshot::load(&path)?;
    let self_id = CONFIG.self_member_id.unwrap_or(snapshot.self_id);
    let names = snapshot.clone();

    let mut storage = snapshot.into_storage();
    let mut audit_logger = InMemoryAuditLogger::new();
    let service = LedgerService::new(&mut storage, &mut audit_logger, self_id);

    for group in service.storage.list_groups() {
        println!(
            "== {} ({}, {} expenses)",
            group.title,
            group.base_currency,
            group.expenses.len()
        );
        println!(
            "   total spent: {:.2} {}",
            service.group_total_spent(group.id)?,
            group.base_currency
        );

        for (member_id, balance) in service.group_balances(group.id)?.iter() {
            println!(
                "   {:<16} {:>10.2}",
                names.member_name(member_id),
                round_to_cents(balance)
            );
        }

        let plan = service.group_settlements(group.id)?;
        if plan.is_empty() {
            println!("   all settled");
        }
        for settlement in &plan.settlements {
            println!(
                "   {} pays {} {:.2} {}",
                names.member_name(settlement.from),
                names.member_name(settlement.to),
                settlement.rounded_amount(),
                group.base_currency
            );
        }
        for outstanding in &plan.leftover {
            println!(
                "   warning: {} left unsettled at {:.2}",
                names.member_name(outstanding.member_id),
                round_to_cents(outstanding.amount)
            );
        }
    }

    println!("== friends of {}", names.member_name(self_id));
    for (member_id, balance) in service.friend_balances().iter() {
        println!(
            "   {:<16} {:>10.2}",
            names.member_name(member_id),
            round_to_cents(balance)
        );
    }

    Ok(())
}
