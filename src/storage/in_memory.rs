use crate::error::LedgerError;
use crate::models::*;
use crate::storage::Storage;

#[derive(Clone, Debug, Default)]
pub struct InMemoryStorage {
    members: Vec<Member>,
    groups: Vec<Group>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(members: Vec<Member>, groups: Vec<Group>) -> Self {
        InMemoryStorage { members, groups }
    }
}

impl Storage for InMemoryStorage {
    fn add_member(&mut self, member: Member) -> Result<Member, LedgerError> {
        if self.members.iter().any(|m| m.id == member.id) {
            return Err(LedgerError::MemberAlreadyExists(member.id.to_string()));
        }
        self.members.push(member.clone());
        Ok(member)
    }

    fn update_member(&mut self, member: Member) -> Result<Member, LedgerError> {
        let slot = self
            .members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| LedgerError::MemberNotFound(member.id.to_string()))?;
        *slot = member.clone();
        Ok(member)
    }

    fn remove_member(&mut self, member_id: MemberId) -> Result<(), LedgerError> {
        let before = self.members.len();
        self.members.retain(|m| m.id != member_id);
        if self.members.len() == before {
            return Err(LedgerError::MemberNotFound(member_id.to_string()));
        }
        Ok(())
    }

    fn get_member(&self, member_id: MemberId) -> Option<Member> {
        self.members.iter().find(|m| m.id == member_id).cloned()
    }

    fn list_members(&self) -> Vec<Member> {
        self.members.clone()
    }

    fn create_group(&mut self, group: Group) -> Result<Group, LedgerError> {
        if self.groups.iter().any(|g| g.id == group.id) {
            return Err(LedgerError::StorageError(format!(
                "Group {} already exists",
                group.id
            )));
        }
        self.groups.push(group.clone());
        Ok(group)
    }

    fn update_group(&mut self, group: Group) -> Result<Group, LedgerError> {
        let slot = self
            .groups
            .iter_mut()
            .find(|g| g.id == group.id)
            .ok_or_else(|| LedgerError::GroupNotFound(group.id.to_string()))?;
        *slot = group.clone();
        Ok(group)
    }

    fn get_group(&self, group_id: GroupId) -> Option<Group> {
        self.groups.iter().find(|g| g.id == group_id).cloned()
    }

    fn list_groups(&self) -> Vec<Group> {
        self.groups.clone()
    }
}
