use chrono::Datelike;

fn main() {
    // Exposed to the crate through env! (the footer shows the build year)
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
