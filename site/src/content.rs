//! Static page copy (single source of truth for business details).

/// A service offered on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

/// One titled block of legal copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const BUSINESS_NAME: &str = "Greenway Landscaping";
pub const TAGLINE: &str = "Healthy lawns, thoughtful gardens, built to last.";
pub const INTRO: &str = "Family-owned since 2009, we design, build and care for outdoor \
    spaces across the valley. One crew from first sketch to final mow.";

pub const PHONE: &str = "(555) 014-2290";
pub const PHONE_HREF: &str = "tel:+15550142290";
pub const EMAIL: &str = "hello@greenway-landscaping.com";
pub const ADDRESS: &str = "418 Orchard Lane, Maple Valley";
pub const HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "7:00 - 18:00"),
    ("Saturday", "8:00 - 14:00"),
    ("Sunday", "Closed"),
];
pub const SERVICE_AREA: &str = "Maple Valley, Cedar Falls, Riverbend and surrounding towns";

pub const SERVICES: &[Service] = &[
    Service {
        slug: "lawn-care",
        name: "Lawn Care",
        summary: "Weekly mowing, edging, aeration and fertilization programs.",
        highlights: &["Weekly or bi-weekly visits", "Core aeration", "Organic feed options"],
    },
    Service {
        slug: "garden-design",
        name: "Garden Design",
        summary: "Planting plans built around your soil, light and maintenance budget.",
        highlights: &["Native plant palettes", "Seasonal color", "3D concept sketches"],
    },
    Service {
        slug: "hardscaping",
        name: "Hardscaping",
        summary: "Patios, walkways, retaining walls and fire pits in stone or pavers.",
        highlights: &["Natural stone", "Permeable pavers", "Ten-year workmanship warranty"],
    },
    Service {
        slug: "irrigation",
        name: "Irrigation",
        summary: "Drip and sprinkler installs, smart controllers and spring start-ups.",
        highlights: &["Water audits", "Smart controllers", "Winterization"],
    },
    Service {
        slug: "seasonal-cleanup",
        name: "Seasonal Cleanup",
        summary: "Spring and fall cleanups, leaf removal, pruning and mulching.",
        highlights: &["Leaf removal", "Shrub pruning", "Fresh mulch"],
    },
];

pub const PRIVACY_UPDATED: &str = "March 1, 2025";
pub const PRIVACY: &[LegalSection] = &[
    LegalSection {
        heading: "Information we collect",
        body: "When you request an estimate we collect your name, phone number, email and \
               property address. We do not use tracking cookies or third-party analytics.",
    },
    LegalSection {
        heading: "How we use it",
        body: "Your details are used only to schedule visits, prepare quotes and send \
               invoices. We never sell or rent customer information.",
    },
    LegalSection {
        heading: "Retention",
        body: "Estimate requests that do not become jobs are deleted after twelve months. \
               Customer records are kept for as long as tax law requires.",
    },
    LegalSection {
        heading: "Your choices",
        body: "Email us at any time to review, correct or delete the information we hold \
               about you.",
    },
];

pub const TERMS_UPDATED: &str = "March 1, 2025";
pub const TERMS: &[LegalSection] = &[
    LegalSection {
        heading: "Estimates",
        body: "Written estimates are valid for thirty days. Final pricing may change if site \
               conditions differ from those described at the time of the estimate.",
    },
    LegalSection {
        heading: "Scheduling",
        body: "Visits may move because of weather. We will contact you before rescheduling \
               any work.",
    },
    LegalSection {
        heading: "Warranty",
        body: "Plant material is guaranteed for one growing season when our care \
               recommendations are followed. Hardscape workmanship carries a ten-year warranty.",
    },
    LegalSection {
        heading: "Website",
        body: "Content on this site is provided for general information and may change \
               without notice.",
    },
];

/// Copyright line for the footer.
pub fn copyright() -> String {
    format!("(c) 2009-2025 {BUSINESS_NAME}. All rights reserved.")
}
