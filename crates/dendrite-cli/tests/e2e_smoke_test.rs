use std::fs;

use tempfile::tempdir;

use dendrite_cli::{Args, run};

fn args_for(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: Some(output.to_string()),
        config: None,
        width: 700.0,
        height: 500.0,
        seed: Some(42),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_outline_to_placement() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("outline.json");
    fs::write(
        &input_path,
        r#"{
            "root": "Photosynthesis",
            "subtopics": [
                { "label": "Light reactions", "children": ["Photolysis", "ATP synthesis"] },
                { "label": "Calvin cycle", "children": ["Carbon fixation"] }
            ]
        }"#,
    )
    .expect("Failed to write outline");

    let output_path = temp_dir.path().join("placement.json");
    let args = args_for(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    );

    run(&args).expect("CLI run succeeds");

    let rendered = fs::read_to_string(&output_path).expect("Output exists");
    let placed: serde_json::Value = serde_json::from_str(&rendered).expect("Output is JSON");

    let concepts = placed["concepts"].as_array().expect("concepts array");
    let connections = placed["connections"].as_array().expect("connections array");
    assert_eq!(concepts.len(), 6);
    assert_eq!(connections.len(), 5);

    // The root sits at the canvas center
    assert_eq!(concepts[0]["role"], "root");
    assert_eq!(concepts[0]["position"]["x"], 350.0);
    assert_eq!(concepts[0]["position"]["y"], 250.0);
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("nope.json").to_string_lossy(),
        &temp_dir.path().join("out.json").to_string_lossy(),
    );

    assert!(run(&args).is_err());
}

#[test]
fn e2e_custom_config_applies() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("outline.json");
    fs::write(&input_path, r#"{ "root": "Solo", "subtopics": [] }"#).expect("write outline");

    let config_path = temp_dir.path().join("layout.toml");
    fs::write(&config_path, "main_radius = 150.0\n").expect("write config");

    let output_path = temp_dir.path().join("placement.json");
    let mut args = args_for(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("CLI run succeeds");

    let rendered = fs::read_to_string(&output_path).expect("Output exists");
    let placed: serde_json::Value = serde_json::from_str(&rendered).expect("Output is JSON");
    assert_eq!(placed["concepts"].as_array().expect("concepts").len(), 1);
}
