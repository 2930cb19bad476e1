use std::{collections::HashMap, path::Path};

// The WASM client has no process environment, so site configuration is baked
// in at build time. Real environment variables win over `.env` entries.
const CONFIG_VARS: [&str; 5] = [
    "PORTFOLIO_API_URL",
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
    "CONTACT_EMAIL",
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    let dotenv: HashMap<String, String> = dotenvy::dotenv_iter()
        .map(|iter| iter.filter_map(Result::ok).collect())
        .unwrap_or_default();

    for key in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", key);
        let value = std::env::var(key)
            .ok()
            .or_else(|| dotenv.get(key).cloned());
        if let Some(value) = value {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    // a missing path counts as changed on every build
    if Path::new(".env").exists() {
        println!("cargo:rerun-if-changed=.env");
    }
}
