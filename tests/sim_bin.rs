use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7", "25"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 25);
    let total = v["first_wins"].as_u64().unwrap()
        + v["second_wins"].as_u64().unwrap()
        + v["draws"].as_u64().unwrap();
    assert_eq!(total, 25);
    assert_eq!(v["final_grid"].as_array().unwrap().len(), 6);
}

#[test]
fn sim_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["42", "10"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_rejects_bad_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["not-a-seed"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
