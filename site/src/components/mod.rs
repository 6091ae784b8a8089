//! Leptos UI components for the site pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Nav
//! ├── <main> (page content)
//! │   ├── Hero, ServiceCard*          home
//! │   ├── MaintenanceNotice           home, maintenance mode
//! │   │   └── StatusBadge
//! │   └── ContactCard                 contact
//! └── Footer
//!     └── StatusBadge                 when show_status_banner
//! ```

mod contact_card;
mod document;
mod footer;
mod hero;
mod icons;
mod maintenance;
mod nav;
mod service_card;
mod status_badge;

pub use contact_card::ContactCard;
pub use document::SiteDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use maintenance::{MAINTENANCE_HEADLINE, MaintenanceNotice};
pub use nav::Nav;
pub use service_card::ServiceCard;
pub use status_badge::StatusBadge;
