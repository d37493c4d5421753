fn main() {
    // バージョン表示用に git describe を埋め込む
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let described = std::process::Command::new("git")
        .args(["describe", "--always", "--dirty", "--tags"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string());

    let version = match described {
        Some(rev) if !rev.is_empty() => format!("{} ({})", env!("CARGO_PKG_VERSION"), rev),
        _ => env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("cargo:rustc-env=STANCE_ANALYZER_VERSION={}", version);
}
