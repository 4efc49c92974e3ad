use crate::error::LedgerError;
use crate::models::*;

/// The application store. Members come back in registration order and
/// groups in creation order.
pub trait Storage {
    fn add_member(&mut self, member: Member) -> Result<Member, LedgerError>;
    fn update_member(&mut self, member: Member) -> Result<Member, LedgerError>;
    fn remove_member(&mut self, member_id: MemberId) -> Result<(), LedgerError>;
    fn get_member(&self, member_id: MemberId) -> Option<Member>;
    fn list_members(&self) -> Vec<Member>;

    fn create_group(&mut self, group: Group) -> Result<Group, LedgerError>;
    fn update_group(&mut self, group: Group) -> Result<Group, LedgerError>;
    fn get_group(&self, group_id: GroupId) -> Option<Group>;
    fn list_groups(&self) -> Vec<Group>;
}

pub mod in_memory;
