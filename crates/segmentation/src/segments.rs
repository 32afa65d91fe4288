//! Threshold-based user segmentation.
//!
//! [`UserSegmentation`] borrows any [`UserRepository`] and sorts its users into
//! the segments named by [`SegmentName`]. Membership in one segment says
//! nothing about the other: a user can be in both, either, or neither.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::config::SegmentationConfig;
use crate::models::User;
use crate::repository::UserRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentName {
    /// Users with more than `customer_min_order_count` orders.
    Customer,
    /// Users who paid more than `lux_min_purchase_amount` in total.
    Lux,
}

impl SegmentName {
    pub const ALL: [SegmentName; 2] = [SegmentName::Customer, SegmentName::Lux];

    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentName::Customer => "customer",
            SegmentName::Lux => "lux",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|segment| segment.as_str() == name)
    }

    /// Whether `user` belongs to this segment under `config`.
    pub fn matches(&self, user: &User, config: &SegmentationConfig) -> bool {
        match self {
            SegmentName::Customer => user.order_count() > config.customer_min_order_count,
            SegmentName::Lux => user.total_payment_amount() > config.lux_min_purchase_amount,
        }
    }

    fn index(&self) -> usize {
        match self {
            SegmentName::Customer => 0,
            SegmentName::Lux => 1,
        }
    }
}

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Users per segment, borrowed from the repository in load order.
///
/// Every [`SegmentName`] has an entry, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    members: [Vec<&'a User>; 2],
}

impl<'a> Segments<'a> {
    pub fn get(&self, name: SegmentName) -> &[&'a User] {
        &self.members[name.index()]
    }

    /// Looks a segment up by its string name (`"customer"`, `"lux"`).
    pub fn get_by_name(&self, name: &str) -> Option<&[&'a User]> {
        SegmentName::from_name(name).map(|segment| self.get(segment))
    }

    pub fn customers(&self) -> &[&'a User] {
        self.get(SegmentName::Customer)
    }

    pub fn lux(&self) -> &[&'a User] {
        self.get(SegmentName::Lux)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentName, &[&'a User])> + '_ {
        SegmentName::ALL
            .into_iter()
            .map(move |segment| (segment, self.get(segment)))
    }
}

impl Serialize for Segments<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SegmentName::ALL.len()))?;
        for (segment, users) in self.iter() {
            map.serialize_entry(segment.as_str(), users)?;
        }
        map.end()
    }
}

/// Segments the users of an injected repository.
pub struct UserSegmentation<'r, R: UserRepository + ?Sized> {
    user_repo: &'r R,
    config: SegmentationConfig,
}

impl<'r, R: UserRepository + ?Sized> UserSegmentation<'r, R> {
    pub fn new(user_repo: &'r R, config: SegmentationConfig) -> Self {
        Self { user_repo, config }
    }

    /// Evaluates every segment predicate against every user.
    pub fn segment_users(&self) -> Segments<'r> {
        let user_repo: &'r R = self.user_repo;
        let users = user_repo.get_users();

        let members = SegmentName::ALL.map(|segment| {
            users
                .iter()
                .filter(|user| segment.matches(user, &self.config))
                .collect::<Vec<_>>()
        });
        let segments = Segments { members };

        debug!(
            mode = %user_repo.mode(),
            users = users.len(),
            customers = segments.customers().len(),
            lux = segments.lux().len(),
            "Segmented users"
        );

        segments
    }
}
