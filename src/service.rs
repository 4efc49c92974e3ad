use crate::constants::{BALANCE_EPSILON, FRIEND_BALANCE_TOLERANCE};
use crate::error::LedgerError;
use crate::ledger::split::equal_split;
use crate::ledger::{compute_balances, compute_friend_balances, simplify_debts};
use crate::logger::AuditLogger;
use crate::models::*;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::HashSet;
use uuid::Uuid;

pub struct LedgerService<'a> {
    pub storage: &'a mut dyn Storage,
    pub audit_logger: &'a mut dyn AuditLogger,
    self_id: MemberId,
    rates: RateTable,
}

impl<'a> LedgerService<'a> {
    pub fn new(
        storage: &'a mut dyn Storage,
        audit_logger: &'a mut dyn AuditLogger,
        self_id: MemberId,
    ) -> Self {
        info!("Initializing LedgerService for member {}", self_id);
        Self {
            storage,
            audit_logger,
            self_id,
            rates: RateTable::default(),
        }
    }

    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    pub fn self_id(&self) -> MemberId {
        self.self_id
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    // MEMBER MANAGEMENT

    /// Puts the local user on the roster if they are not there yet.
    pub fn ensure_self(&mut self, name: &str) -> Result<Member, LedgerError> {
        if let Some(member) = self.storage.get_member(self.self_id) {
            return Ok(member);
        }
        let member = Member::with_id(self.self_id, validate_name(name)?);
        self.insert_member(member)
    }

    pub fn add_member(&mut self, name: &str) -> Result<Member, LedgerError> {
        let member = Member::new(validate_name(name)?);
        self.insert_member(member)
    }

    fn insert_member(&mut self, member: Member) -> Result<Member, LedgerError> {
        info!("Adding member '{}'", member.name);
        let created = self.storage.add_member(member)?;
        debug!("Member added with ID: {}", created.id);

        self.audit(AuditEvent::MemberAdded {
            member_id: created.id,
            name: created.name.clone(),
        });
        Ok(created)
    }

    /// Groups only hold member ids, so the new name shows up everywhere.
    pub fn rename_member(&mut self, member_id: MemberId, name: &str) -> Result<Member, LedgerError> {
        info!("Renaming member {}", member_id);
        let mut member = self
            .storage
            .get_member(member_id)
            .ok_or_else(|| LedgerError::MemberNotFound(member_id.to_string()))?;
        member.name = validate_name(name)?;
        let updated = self.storage.update_member(member)?;

        self.audit(AuditEvent::MemberRenamed {
            member_id,
            name: updated.name.clone(),
        });
        Ok(updated)
    }

    /// Drops a friend from the roster and from every group, provided nothing
    /// is owed either way.
    pub fn remove_member(&mut self, member_id: MemberId) -> Result<(), LedgerError> {
        info!("Removing member {}", member_id);
        if member_id == self.self_id {
            warn!("Attempted to remove the local user {}", member_id);
            return Err(LedgerError::CannotRemoveSelf);
        }
        if self.storage.get_member(member_id).is_none() {
            return Err(LedgerError::MemberNotFound(member_id.to_string()));
        }

        let friend_balance = self.friend_balance_of(member_id);
        if friend_balance.abs() > FRIEND_BALANCE_TOLERANCE {
            warn!(
                "Member {} still has a friend balance of {:.2}",
                member_id, friend_balance
            );
            return Err(LedgerError::OutstandingBalance(
                member_id.to_string(),
                friend_balance,
            ));
        }

        let groups = self.storage.list_groups();
        for group in &groups {
            if let Some(balance) = compute_balances(group).get(member_id) {
                if balance.abs() > BALANCE_EPSILON {
                    warn!(
                        "Member {} still has a balance of {:.2} in group {}",
                        member_id, balance, group.id
                    );
                    return Err(LedgerError::OutstandingBalance(
                        member_id.to_string(),
                        balance,
                    ));
                }
            }
        }

        self.storage.remove_member(member_id)?;
        for mut group in groups.into_iter().filter(|g| g.is_member(member_id)) {
            group.members.retain(|&id| id != member_id);
            self.storage.update_group(group)?;
        }

        self.audit(AuditEvent::MemberRemoved { member_id });
        debug!("Member {} removed", member_id);
        Ok(())
    }

    // GROUP MANAGEMENT

    /// An empty `member_ids` puts the whole roster in the group.
    pub fn create_group(
        &mut self,
        title: &str,
        base_currency: Currency,
        date: DateTime<Utc>,
        member_ids: Vec<MemberId>,
    ) -> Result<Group, LedgerError> {
        info!("Creating group '{}' in {}", title, base_currency);
        let title = title.trim();
        if title.is_empty() {
            return Err(LedgerError::invalid_input(
                "title",
                "Missing title",
                "A group needs a title",
            ));
        }

        let members: Vec<MemberId> = if member_ids.is_empty() {
            self.storage.list_members().into_iter().map(|m| m.id).collect()
        } else {
            let mut seen = HashSet::new();
            let mut members = Vec::with_capacity(member_ids.len());
            for id in member_ids {
                if self.storage.get_member(id).is_none() {
                    warn!("Unknown member {} for new group '{}'", id, title);
                    return Err(LedgerError::MemberNotFound(id.to_string()));
                }
                if seen.insert(id) {
                    members.push(id);
                }
            }
            members
        };

        let created = self
            .storage
            .create_group(Group::new(title, base_currency, members, date))?;
        debug!("Group created with ID: {}", created.id);

        self.audit(AuditEvent::GroupCreated {
            group_id: created.id,
            title: created.title.clone(),
            base_currency: created.base_currency,
            members: created.members.len(),
        });
        Ok(created)
    }

    pub fn add_group_member(
        &mut self,
        group_id: GroupId,
        member_id: MemberId,
    ) -> Result<Group, LedgerError> {
        info!("Adding member {} to group {}", member_id, group_id);
        let mut group = self.group(group_id)?;
        if self.storage.get_member(member_id).is_none() {
            return Err(LedgerError::MemberNotFound(member_id.to_string()));
        }
        if group.is_member(member_id) {
            return Err(LedgerError::AlreadyGroupMember(
                member_id.to_string(),
                group_id.to_string(),
            ));
        }
        group.members.push(member_id);
        let updated = self.storage.update_group(group)?;

        self.audit(AuditEvent::GroupMemberAdded { group_id, member_id });
        Ok(updated)
    }

    pub fn group(&self, group_id: GroupId) -> Result<Group, LedgerError> {
        self.storage
            .get_group(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    // EXPENSE MANAGEMENT

    /// Records an expense, freezing today's rate into the group's base
    /// currency.
    pub fn add_expense(
        &mut self,
        group_id: GroupId,
        draft: ExpenseDraft,
    ) -> Result<Expense, LedgerError> {
        info!(
            "Adding expense of {} {} to group {}",
            draft.amount, draft.currency, group_id
        );
        let mut group = self.group(group_id)?;
        let rate = self.rates.rate_between(draft.currency, group.base_currency)?;
        let expense = build_expense(&group, Uuid::new_v4(), draft, rate)?;

        group.expenses.push(expense.clone());
        group.sort_expenses();
        self.storage.update_group(group)?;
        debug!("Expense created with ID: {}", expense.id);

        self.audit(AuditEvent::ExpenseAdded {
            group_id,
            expense_id: expense.id,
            amount: expense.amount,
            currency: expense.currency,
            exchange_rate: expense.exchange_rate,
            unallocated: expense.unallocated_amount(),
        });
        Ok(expense)
    }

    /// Keeps the frozen rate unless the currency changed.
    pub fn update_expense(
        &mut self,
        group_id: GroupId,
        expense_id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<Expense, LedgerError> {
        info!("Updating expense {} in group {}", expense_id, group_id);
        let mut group = self.group(group_id)?;
        let existing = group
            .expense(expense_id)
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;

        let rate = if existing.currency == draft.currency {
            existing.exchange_rate
        } else {
            self.rates.rate_between(draft.currency, group.base_currency)?
        };
        let expense = build_expense(&group, expense_id, draft, rate)?;

        if let Some(slot) = group.expenses.iter_mut().find(|e| e.id == expense_id) {
            *slot = expense.clone();
        }
        group.sort_expenses();
        self.storage.update_group(group)?;
        debug!("Expense updated: {:?}", expense);

        self.audit(AuditEvent::ExpenseUpdated {
            group_id,
            expense_id,
            amount: expense.amount,
            currency: expense.currency,
            exchange_rate: expense.exchange_rate,
            unallocated: expense.unallocated_amount(),
        });
        Ok(expense)
    }

    pub fn delete_expense(
        &mut self,
        group_id: GroupId,
        expense_id: ExpenseId,
    ) -> Result<(), LedgerError> {
        info!("Deleting expense {} from group {}", expense_id, group_id);
        let mut group = self.group(group_id)?;
        let before = group.expenses.len();
        group.expenses.retain(|e| e.id != expense_id);
        if group.expenses.len() == before {
            warn!("Expense {} not found in group {}", expense_id, group_id);
            return Err(LedgerError::ExpenseNotFound(expense_id.to_string()));
        }
        self.storage.update_group(group)?;

        self.audit(AuditEvent::ExpenseDeleted { group_id, expense_id });
        Ok(())
    }

    // SUMMARY & DEBT SIMPLIFICATION

    pub fn group_balances(&self, group_id: GroupId) -> Result<Balances, LedgerError> {
        Ok(compute_balances(&self.group(group_id)?))
    }

    pub fn group_settlements(&self, group_id: GroupId) -> Result<SettlementPlan, LedgerError> {
        let balances = self.group_balances(group_id)?;
        Ok(simplify_debts(&balances))
    }

    /// The local user's position with every other roster member, zero for
    /// friends with no shared expense.
    pub fn friend_balances(&self) -> Balances {
        let computed = compute_friend_balances(&self.storage.list_groups(), self.self_id);
        let mut balances: Balances = self
            .storage
            .list_members()
            .into_iter()
            .filter(|m| m.id != self.self_id)
            .map(|m| (m.id, 0.0))
            .collect();
        for (id, amount) in computed.iter() {
            balances.add(id, amount);
        }
        balances
    }

    pub fn friend_balance_of(&self, member_id: MemberId) -> f64 {
        compute_friend_balances(&self.storage.list_groups(), self.self_id)
            .get(member_id)
            .unwrap_or(0.0)
    }

    pub fn group_total_spent(&self, group_id: GroupId) -> Result<f64, LedgerError> {
        let group = self.group(group_id)?;
        Ok(group.expenses.iter().map(Expense::amount_in_base).sum())
    }

    /// Spending per category in the group's base currency, every category
    /// listed.
    pub fn category_totals(&self, group_id: GroupId) -> Result<Vec<(Category, f64)>, LedgerError> {
        let group = self.group(group_id)?;
        Ok(Category::ALL
            .into_iter()
            .map(|category| {
                let total: f64 = group
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .map(Expense::amount_in_base)
                    .sum();
                (category, total)
            })
            .collect())
    }

    // UTILITIES

    fn audit(&mut self, event: AuditEvent) {
        self.audit_logger
            .log(AuditLogEntry::new(self.self_id, event, Utc::now()));
    }
}

fn validate_name(name: &str) -> Result<String, LedgerError> {
    let name = name.trim();
    if name.is_empty() {
        warn!("Rejected empty member name");
        return Err(LedgerError::invalid_input(
            "name",
            "Missing name",
            "A member needs a display name",
        ));
    }
    Ok(name.to_string())
}

/// Checks a draft against its group's current roster.
fn build_expense(
    group: &Group,
    id: ExpenseId,
    draft: ExpenseDraft,
    exchange_rate: f64,
) -> Result<Expense, LedgerError> {
    let splits = match draft.split {
        SplitInput::Equal(member_ids) => equal_split(draft.amount, &member_ids)?,
        SplitInput::Custom(splits) => splits,
    };

    let description = match draft.description.trim() {
        "" => draft.category.label().to_string(),
        text => text.to_string(),
    };

    let expense = Expense {
        id,
        group_id: group.id,
        payer_id: draft.payer_id,
        amount: draft.amount,
        currency: draft.currency,
        exchange_rate,
        splits,
        category: draft.category,
        description,
        date: draft.date,
    };
    expense.validate(|member_id| {
        if group.is_member(member_id) {
            Ok(())
        } else {
            warn!("Member {} not in group {}", member_id, group.id);
            Err(LedgerError::NotGroupMember(
                member_id.to_string(),
                group.id.to_string(),
            ))
        }
    })?;

    let unallocated = expense.unallocated_amount();
    if unallocated.abs() > BALANCE_EPSILON {
        warn!(
            "Splits of expense {} leave {:.2} {} unallocated",
            expense.id, unallocated, expense.currency
        );
    }
    Ok(expense)
}
