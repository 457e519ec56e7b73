use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI against a file token store and the given token service.
pub fn run_cli_with_env(args: &[&str], token_file: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_carehome"));
    cmd.args(args);
    cmd.env("CAREHOME_TOKEN_STORE", "file");
    cmd.env("CAREHOME_TOKEN_FILE", token_file);
    cmd.env("CAREHOME_API_URL", api_url);
    cmd.env_remove("CAREHOME_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated token file and expect success.
pub fn run_cli_with_env_success(args: &[&str], token_file: &Path, api_url: &str) -> String {
    let output = run_cli_with_env(args, token_file, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A loopback URL with nothing listening on it.
pub fn unreachable_api_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}", port)
}
