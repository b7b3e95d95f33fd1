use std::process::Command;

fn main() {
    // Record the compiler version so the snapshot can report it at runtime.
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .map(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .unwrap_or_else(|_| "unknown".to_string())
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("unknown")
                    .to_string()
            } else {
                "unknown".to_string()
            }
        })
        .unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BOOT_REPORT_RUSTC_VERSION={}", rustc_version);
    println!("cargo:rerun-if-env-changed=RUSTC");
}
