//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod gig_detail;
pub mod gig_new;
pub mod home;
pub mod login;
pub mod my_gigs;
pub mod not_found;
pub mod notifications;
pub mod profile;
pub mod profile_edit;
pub mod public_profile;
pub mod register;
