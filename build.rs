//! Build script for tdt - embeds the git commit hash for dev builds
//!
//! Without the `release` feature, `VERGEN_GIT_SHA` is emitted so that
//! `tdt --version` identifies the exact commit. Release builds skip it and
//! report the plain package version.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .expect("Failed to add git instructions")
            .emit()
        {
            // Source tarballs have no .git directory
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
