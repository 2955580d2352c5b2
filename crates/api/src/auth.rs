// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor identity and role-based authorization.
//!
//! Identity verification (credentials, tokens) is the identity
//! provider's job; this layer receives a `{uid, role}` claim pair and
//! trusts it as-is. What it does enforce is which claimed role may
//! perform which operation.

use crate::error::AuthError;
use linha_domain::{Role, UserId};

/// An acting principal with verified claims from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The provider uid of the actor.
    pub uid: UserId,
    /// The role claim supplied by the provider.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(uid: UserId, role: Role) -> Self {
        Self { uid, role }
    }
}

/// Builds an actor from identity-provider claims.
///
/// The claims are trusted as-is; only structural sanity is checked.
///
/// # Errors
///
/// Returns an error if the uid is empty.
pub fn actor_from_claims(uid: &str, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if uid.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor uid cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(UserId::new(uid), role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor may create or manage events.
    ///
    /// Coordinators and admins may manage events; volunteers and
    /// visitors may not.
    ///
    /// # Errors
    ///
    /// Returns an error naming the attempted action if the actor's role
    /// is insufficient.
    pub fn authorize_manage_events(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.role.can_manage_events() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Coordinator or Admin"),
            })
        }
    }

    /// Checks that an actor may manage user records.
    ///
    /// Only admins may write to the users collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an Admin.
    pub fn authorize_manage_users(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Admin {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            })
        }
    }

    /// Checks that an actor may sign a user up for an event.
    ///
    /// Acting on your own behalf requires a role that can join rosters
    /// (visitors cannot). Acting on behalf of another user requires
    /// event-management authority.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's role is insufficient.
    pub fn authorize_sign_up(
        actor: &AuthenticatedActor,
        target: &UserId,
    ) -> Result<(), AuthError> {
        if actor.uid == *target {
            if actor.role.can_sign_up() {
                Ok(())
            } else {
                Err(AuthError::Unauthorized {
                    action: String::from("sign_up"),
                    required_role: String::from("Volunteer"),
                })
            }
        } else {
            Self::authorize_manage_events(actor, "sign_up_on_behalf")
        }
    }

    /// Checks that an actor may force a sign-up past the capacity bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor cannot manage events.
    pub fn authorize_forced_sign_up(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::authorize_manage_events(actor, "forced_sign_up")
    }
}
