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

// Be explicit about which envars to print, so as to avoid accidentally exposing secrets
const DISPLAY_ENVS: [&str; 9] = [
    "RUST_LOG",
    "UPG_HOST",
    "UPG_PORT",
    "UPG_UNIPAY_MODE",
    "UPG_UNIPAY_TEST_URL",
    "UPG_UNIPAY_PRODUCTION_URL",
    "UPG_UNIPAY_MERCHANT_ID",
    "UPG_UNIPAY_SUB_MERCHANT_ID",
    "UPG_UNIPAY_PROCESSING_CODE",
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
