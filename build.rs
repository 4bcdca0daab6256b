use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=style/tailwind.css");
    println!("cargo:rerun-if-changed=public/portfolio.json");

    // Ensure the target directory exists
    let site_pkg_dir = Path::new("target/site/pkg");
    if !site_pkg_dir.exists() {
        if let Err(err) = fs::create_dir_all(site_pkg_dir) {
            println!("Failed to create site/pkg directory: {err}");
            return;
        }
    }

    // Copy the compiled CSS file if it exists
    let css_source = Path::new("target/tmp/tailwind.css");
    let css_dest = Path::new("target/site/pkg/portfolio.css");

    if css_source.exists() {
        match fs::copy(css_source, css_dest) {
            Ok(_) => println!("Copied CSS from {css_source:?} to {css_dest:?}"),
            Err(err) => println!("Failed to copy CSS file: {err}"),
        }
    } else {
        println!("Source CSS file not found at {css_source:?}");
    }

    // Copy favicon to site root
    let favicon_source = Path::new("public/favicon.ico");
    let favicon_dest = Path::new("target/site/favicon.ico");

    if favicon_source.exists() {
        match fs::copy(favicon_source, favicon_dest) {
            Ok(_) => println!("Copied favicon to site root"),
            Err(err) => println!("Failed to copy favicon file: {err}"),
        }
    } else {
        println!("Favicon not found at {favicon_source:?}");
    }

    // The catalog JSON ships with the site assets so the server can read it
    // from the site root in deployments that only mount target/site.
    let catalog_source = Path::new("public/portfolio.json");
    let catalog_dest = Path::new("target/site/portfolio.json");

    if catalog_source.exists() {
        match fs::copy(catalog_source, catalog_dest) {
            Ok(_) => println!("Copied catalog data to site root"),
            Err(err) => println!("Failed to copy catalog data: {err}"),
        }
    } else {
        println!("Catalog data not found at {catalog_source:?}");
    }
}
