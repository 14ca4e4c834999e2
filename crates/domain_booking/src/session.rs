//! Guest sessions
//!
//! A session is created per request and handed to the booking service
//! explicitly; there is no process-wide "current user".

use serde::{Deserialize, Serialize};

use crate::booking::CustomerContact;

/// A signed-in guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub phone: Option<String>,
}

/// The guest's session, anonymous or signed in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn login(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Applies `update` to the signed-in user; does nothing when anonymous
    pub fn update_user(&mut self, update: impl FnOnce(&mut SessionUser)) {
        if let Some(user) = self.user.as_mut() {
            update(user);
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Fills contact details from the signed-in user
    ///
    /// Name and email always come from the account. The account's phone wins
    /// when it has one, otherwise the phone typed on the form is kept.
    pub fn prefill(&self, contact: CustomerContact) -> CustomerContact {
        match &self.user {
            Some(user) => CustomerContact {
                name: user.name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone().unwrap_or(contact.phone),
                ..contact
            },
            None => contact,
        }
    }
}
