use std::{env, env::VarError};

/// There's no real CLI for the server, so just do quick 'n dirty
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        // We don't expect any CLI args, so always print the help
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

/// Secrets (SHOPIFY_ACCESS_TOKEN) are deliberately left off this list.
const DISPLAY_ENVS: [&str; 31] = [
    "RUST_LOG",
    "BPP_HOST",
    "BPP_PORT",
    "BPP_ID",
    "BPP_URI",
    "SHOPIFY_URL",
    "SHOPIFY_API_VERSION",
    "SHOPIFY_REQUEST_TIMEOUT_SECS",
    "BPP_CURRENCY",
    "BPP_DEFAULT_DISCOUNT_PERCENT",
    "BPP_DELIVERY_FEE",
    "BPP_BILLING_NAME",
    "BPP_BILLING_BUILDING",
    "BPP_BILLING_LOCALITY",
    "BPP_BILLING_CITY",
    "BPP_BILLING_STATE",
    "BPP_BILLING_COUNTRY",
    "BPP_BILLING_AREA_CODE",
    "BPP_BILLING_EMAIL",
    "BPP_BILLING_PHONE",
    "BPP_PAYMENT_URI",
    "BPP_FINDER_FEE_TYPE",
    "BPP_FINDER_FEE_AMOUNT",
    "BPP_WITHHOLDING_AMOUNT",
    "BPP_COLLECTION_SUCCESS_CODE",
    "BPP_COLLECTION_ERROR_CODE",
    "BPP_JOB_QUEUE_SIZE",
    "BPP_MAX_CONCURRENT_JOBS",
    "BPP_JOB_TIMEOUT_SECS",
    "BPP_CALLBACK_TIMEOUT_SECS",
    "RUST_BACKTRACE",
];

fn display_envs() {
    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
