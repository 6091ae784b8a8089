//! Static export: one `index.html` per route directory plus `404.html` and
//! `sitemap.xml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use greenway_site::{Route, SiteConfiguration, render_not_found, render_route, sitemap_xml};
use tracing::{debug, info};

/// Write the whole site to `out_dir`, creating it if needed.
/// Returns the written paths in route order.
pub fn export_site(config: &SiteConfiguration, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output dir {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(Route::ALL.len() + 2);
    for route in Route::ALL {
        let page = render_route(route, config);
        let path = out_dir.join(route.file_name());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        write_file(&path, &page.html)?;
        debug!(?route, decision = ?page.decision, path = %path.display(), "exported page");
        written.push(path);
    }

    let not_found = out_dir.join("404.html");
    write_file(&not_found, &render_not_found(config))?;
    written.push(not_found);

    let sitemap = out_dir.join("sitemap.xml");
    write_file(&sitemap, &sitemap_xml(config))?;
    written.push(sitemap);

    info!(
        files = written.len(),
        out = %out_dir.display(),
        maintenance = config.maintenance_mode,
        "static export complete"
    );
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_every_route() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let written = export_site(&SiteConfiguration::new(false), &out).expect("export");

        assert_eq!(written.len(), Route::ALL.len() + 2);
        for route in Route::ALL {
            assert!(out.join(route.file_name()).is_file(), "{route:?} missing");
        }
        assert!(out.join("404.html").is_file());
        assert!(out.join("sitemap.xml").is_file());

        let index = fs::read_to_string(out.join("index.html")).expect("read index");
        assert!(index.contains("Our Services"));
    }

    #[test]
    fn maintenance_export_gates_only_index() {
        let temp = TempDir::new().expect("temp dir");
        export_site(&SiteConfiguration::new(true), temp.path()).expect("export");

        let index = fs::read_to_string(temp.path().join("index.html")).expect("read index");
        assert!(index.contains("under maintenance"));
        assert!(!index.contains("Our Services"));

        let contact =
            fs::read_to_string(temp.path().join("contact/index.html")).expect("read contact");
        assert!(contact.contains("Contact Us"));
        assert!(!contact.contains("under maintenance"));
    }

    #[test]
    fn nav_links_resolve_to_exported_files() {
        let temp = TempDir::new().expect("temp dir");
        export_site(&SiteConfiguration::new(false), temp.path()).expect("export");

        let sitemap_page =
            fs::read_to_string(temp.path().join("sitemap/index.html")).expect("read sitemap");
        for route in Route::ALL {
            assert!(sitemap_page.contains(&format!("href=\"{}\"", route.path())));
            let dir = temp.path().join(route.path().trim_start_matches('/'));
            assert!(dir.join("index.html").is_file(), "{} has no index", route.path());
        }
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("file");
        fs::write(&blocker, "not a dir").expect("write blocker");

        let err = export_site(&SiteConfiguration::new(false), &blocker).expect_err("not a dir");
        assert!(err.to_string().contains("failed to create output dir"));
    }
}
