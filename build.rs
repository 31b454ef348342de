fn main() {
    let now = chrono::Utc::now();

    // Build metadata for use with env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
