//! CSS styles for the site.
//!
//! One stylesheet, inlined into every page so the static export has no
//! asset dependencies.
//!
//! # Customization
//!
//! ```rust
//! use greenway_site::styles::SITE_CSS;
//!
//! let seasonal = ".hero { background: #f4efe6; }";
//! let combined = format!("{}\n{}", SITE_CSS, seasonal);
//! ```

/// Complete CSS for the site - light, earthy palette.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #fbfaf6;
    --bg-card: #ffffff;
    --bg-hero: #eef3e8;
    --text: #22301f;
    --text-dim: #5b6b57;
    --border: rgba(34, 48, 31, 0.12);
    --accent: #3f7d3a;
    --accent-dark: #2d5b29;
    --warn: #b7791f;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1080px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

a {
    color: var(--accent);
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.page-main {
    flex: 1;
}

.muted {
    color: var(--text-dim);
}

.icon-sm {
    vertical-align: -2px;
    margin-right: 6px;
}

/* Nav */
.nav {
    border-bottom: 1px solid var(--border);
    background: var(--bg-card);
    position: sticky;
    top: 0;
    z-index: 50;
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 14px;
    padding-bottom: 14px;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 10px;
    color: var(--accent-dark);
    font-weight: 700;
    text-decoration: none;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 20px;
}

.nav-link {
    color: var(--text-dim);
    text-decoration: none;
}

.nav-link.active,
.nav-link:hover {
    color: var(--accent-dark);
}

.nav-cta {
    padding: 6px 14px;
    border-radius: 999px;
    background: var(--accent);
    color: #ffffff;
    text-decoration: none;
}

/* Hero */
.hero {
    background: var(--bg-hero);
    padding: 80px 0 64px;
    text-align: center;
}

.hero-mark {
    color: var(--accent);
}

.hero-title {
    font-size: 2.6rem;
    margin: 8px 0;
}

.hero-tagline {
    font-size: 1.25rem;
    color: var(--accent-dark);
}

.hero-intro {
    max-width: 640px;
    margin: 0 auto 24px;
    color: var(--text-dim);
}

.hero-actions {
    display: flex;
    gap: 12px;
    justify-content: center;
}

.btn {
    display: inline-block;
    padding: 10px 20px;
    border-radius: 6px;
    text-decoration: none;
    font-weight: 600;
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
}

.btn-ghost {
    border: 1px solid var(--accent);
}

/* Services */
.services {
    padding: 56px 0;
}

.service-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 20px;
}

.service-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 20px;
}

.service-card h3 {
    margin-top: 0;
    color: var(--accent-dark);
}

.service-highlights {
    padding-left: 18px;
    color: var(--text-dim);
}

.cta-band {
    background: var(--accent-dark);
    color: #ffffff;
    padding: 40px 0;
    text-align: center;
}

.cta-band a {
    color: #ffffff;
}

/* Content pages */
.content-page {
    padding: 48px 0;
}

.content-page h1 {
    color: var(--accent-dark);
}

.legal-section h2 {
    font-size: 1.15rem;
}

.contact-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 24px;
    max-width: 560px;
}

.contact-list dt {
    font-weight: 600;
    margin-top: 12px;
}

.contact-list dd {
    margin-left: 22px;
}

.hours-table th {
    text-align: left;
    padding-right: 24px;
    font-weight: 500;
}

.sitemap-list li {
    margin: 6px 0;
}

/* Maintenance */
.maintenance {
    padding: 96px 0;
    text-align: center;
}

.maintenance-icon {
    color: var(--warn);
}

.maintenance-lead {
    max-width: 560px;
    margin: 0 auto 20px;
    color: var(--text-dim);
}

.maintenance-contact {
    margin-top: 24px;
}

/* Status badge */
.status-badge {
    display: inline-flex;
    align-items: center;
    padding: 4px 12px;
    border-radius: 999px;
    font-size: 0.85rem;
    font-weight: 600;
}

.status-online {
    background: rgba(63, 125, 58, 0.12);
    color: var(--accent-dark);
}

.status-maintenance {
    background: rgba(183, 121, 31, 0.14);
    color: var(--warn);
}

/* Footer */
.footer {
    border-top: 1px solid var(--border);
    background: var(--bg-card);
    padding: 32px 0;
    font-size: 0.9rem;
}

.footer-brand {
    display: flex;
    flex-direction: column;
    margin-bottom: 12px;
}

.footer-title {
    font-weight: 700;
    color: var(--accent-dark);
}

.footer-address {
    color: var(--text-dim);
}

.footer-links {
    display: flex;
    gap: 18px;
}

.footer-status {
    margin-top: 12px;
}

.footer-copyright {
    color: var(--text-dim);
    margin-bottom: 0;
}

@media (max-width: 640px) {
    .nav-links {
        gap: 12px;
    }

    .hero-title {
        font-size: 2rem;
    }
}
"#;

/// Content Security Policy. The site ships no scripts.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; object-src 'none'; base-uri 'self'; form-action 'self';";
