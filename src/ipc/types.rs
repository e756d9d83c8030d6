use std::collections::HashSet;

use serde::Deserialize;

use crate::cart::Cart;
use crate::fixtures::Fixtures;
use crate::model::{LeaveApplication, MentorMessage};
use crate::prefs::Preferences;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// View-local mutable state. Lives only as long as the process; nothing
/// here is persisted.
pub struct Session {
    pub cart: Cart,
    pub rsvped_event_ids: HashSet<u32>,
    pub joined_group_ids: HashSet<u32>,
    /// Memberships that were already counted in the fixture member totals,
    /// so a later leave can subtract them.
    pub seeded_group_ids: HashSet<u32>,
    pub leave_applications: Vec<LeaveApplication>,
    pub sent_messages: Vec<MentorMessage>,
}

impl Session {
    pub fn seeded(fixtures: &Fixtures) -> Session {
        let seeded: HashSet<u32> = fixtures.joined_group_ids.iter().copied().collect();
        Session {
            cart: Cart::new(),
            rsvped_event_ids: HashSet::new(),
            joined_group_ids: seeded.clone(),
            seeded_group_ids: seeded,
            leave_applications: fixtures.leave_applications.clone(),
            sent_messages: Vec::new(),
        }
    }
}

pub struct AppState {
    pub fixtures: Fixtures,
    pub prefs: Preferences,
    pub session: Session,
}

impl AppState {
    pub fn new(prefs: Preferences) -> AppState {
        let fixtures = Fixtures::demo();
        let session = Session::seeded(&fixtures);
        AppState {
            fixtures,
            prefs,
            session,
        }
    }
}
