//! Central access control.
//!
//! Every guarded operation declares which [`Capability`] alternatives it
//! accepts as a [`Guard`]. Services load the facts a decision needs into an
//! [`AccessContext`] and check the guard before touching the store.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Hackathon, Participation, Role},
};

/// A tagged capability predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any signed-in user whose access has not been revoked
    Authenticated,
    /// Global admin role
    Admin,
    /// Organizer or admin role
    Organizer,
    /// Owner of the hackathon in context
    HackathonOwner,
    /// Judge assigned to the hackathon in context
    AssignedJudge,
    /// Creator of the participation in context
    SubmissionCreator,
}

/// A set of alternative capabilities guarding one kind of action
#[derive(Debug, Clone, Copy)]
pub struct Guard {
    alternatives: &'static [Capability],
    action: &'static str,
}

impl Guard {
    pub const fn any_of(alternatives: &'static [Capability], action: &'static str) -> Self {
        Self {
            alternatives,
            action,
        }
    }

    /// Check whether any of the alternatives holds
    pub fn allows(&self, ctx: &AccessContext<'_>) -> bool {
        self.alternatives.iter().any(|c| c.is_satisfied_by(ctx))
    }

    /// Fail with `Forbidden` unless one of the alternatives holds
    pub fn check(&self, ctx: &AccessContext<'_>) -> AppResult<()> {
        if !ctx.user.has_access {
            return Err(AppError::Forbidden("Access has been revoked".to_string()));
        }
        if self.allows(ctx) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!("Not allowed to {}", self.action)))
        }
    }
}

pub const ORGANIZE: Guard = Guard::any_of(&[Capability::Organizer], "create hackathons");

pub const MANAGE_HACKATHON: Guard = Guard::any_of(
    &[Capability::HackathonOwner, Capability::Admin],
    "manage this hackathon",
);

/// Per-judge scores, judge lists and the leaderboard
pub const VIEW_REVIEWS: Guard = Guard::any_of(
    &[
        Capability::HackathonOwner,
        Capability::Admin,
        Capability::AssignedJudge,
    ],
    "view review data of this hackathon",
);

pub const SCORE: Guard = Guard::any_of(
    &[Capability::AssignedJudge],
    "score submissions of this hackathon",
);

pub const PARTICIPATE: Guard = Guard::any_of(&[Capability::Authenticated], "submit projects");

pub const EDIT_SUBMISSION: Guard =
    Guard::any_of(&[Capability::SubmissionCreator], "modify this submission");

pub const ADMINISTER: Guard = Guard::any_of(&[Capability::Admin], "perform admin actions");

/// Facts about the caller and the resource an operation targets
#[derive(Debug, Clone)]
pub struct AccessContext<'a> {
    pub user: &'a AuthenticatedUser,
    pub hackathon_owner_id: Option<Uuid>,
    pub is_assigned_judge: bool,
    pub submission_creator_id: Option<Uuid>,
}

impl<'a> AccessContext<'a> {
    pub fn new(user: &'a AuthenticatedUser) -> Self {
        Self {
            user,
            hackathon_owner_id: None,
            is_assigned_judge: false,
            submission_creator_id: None,
        }
    }

    pub fn with_hackathon(mut self, hackathon: &Hackathon) -> Self {
        self.hackathon_owner_id = Some(hackathon.owner_id);
        self
    }

    pub fn with_judge_assignment(mut self, is_assigned: bool) -> Self {
        self.is_assigned_judge = is_assigned;
        self
    }

    pub fn with_submission(mut self, participation: &Participation) -> Self {
        self.submission_creator_id = Some(participation.creator_id);
        self
    }
}

impl Capability {
    /// Evaluate this capability. Revoked users satisfy nothing.
    pub fn is_satisfied_by(&self, ctx: &AccessContext<'_>) -> bool {
        if !ctx.user.has_access {
            return false;
        }

        match self {
            Self::Authenticated => true,
            Self::Admin => ctx.user.role == Role::Admin,
            Self::Organizer => ctx.user.role.can_organize(),
            Self::HackathonOwner => ctx.hackathon_owner_id == Some(ctx.user.id),
            Self::AssignedJudge => ctx.is_assigned_judge,
            Self::SubmissionCreator => ctx.submission_creator_id == Some(ctx.user.id),
        }
    }
}
