use std::env;

// The all-zero key means "no expected initializer": the first caller becomes owner.
const PERMISSIVE_OWNER: &str = "11111111111111111111111111111111";

fn main() {
    println!("cargo:rerun-if-env-changed=INITIAL_OWNER");
    let initial_owner = env::var("INITIAL_OWNER").unwrap_or_else(|_| {
        println!(
            "cargo:warning=INITIAL_OWNER not set, using {PERMISSIVE_OWNER} (any first caller may initialize)"
        );
        PERMISSIVE_OWNER.to_string()
    });
    println!("cargo:rustc-env=INITIAL_OWNER={initial_owner}");
}
