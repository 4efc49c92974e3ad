use super::member::MemberId;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Signed net amounts per member, iterated in the order members were first
/// recorded. Positive means the member is owed money.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Balances {
    entries: Vec<(MemberId, f64)>,
    index: HashMap<MemberId, usize>,
}

impl Balances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every id starts at zero, in the given order.
    pub fn with_members<'a>(members: impl IntoIterator<Item = &'a MemberId>) -> Self {
        let mut balances = Balances::new();
        for &id in members {
            balances.add(id, 0.0);
        }
        balances
    }

    pub fn add(&mut self, member_id: MemberId, delta: f64) {
        match self.index.get(&member_id) {
            Some(&pos) => self.entries[pos].1 += delta,
            None => {
                self.index.insert(member_id, self.entries.len());
                self.entries.push((member_id, delta));
            }
        }
    }

    pub fn get(&self, member_id: MemberId) -> Option<f64> {
        self.index.get(&member_id).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemberId, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, b)| b).sum()
    }
}

impl FromIterator<(MemberId, f64)> for Balances {
    fn from_iter<I: IntoIterator<Item = (MemberId, f64)>>(iter: I) -> Self {
        let mut balances = Balances::new();
        for (id, amount) in iter {
            balances.add(id, amount);
        }
        balances
    }
}

impl Serialize for Balances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, amount) in &self.entries {
            map.serialize_entry(id, amount)?;
        }
        map.end()
    }
}
