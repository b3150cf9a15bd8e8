//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! Components read session and API handles from context and keep their own
//! transient state local; route-level orchestration stays in `pages`.

pub mod application_row;
pub mod crash_screen;
pub mod gig_card;
pub mod navbar;
pub mod onboarding_banner;
pub mod profile_card;
