use std::fs;

mod common;
use common::{cutlog, init_with_data, setup_test_home, temp_out, test_data_file};

#[test]
fn test_export_csv_all() {
    let home = setup_test_home("export_csv_all");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let out = temp_out("export_csv_all", "csv");

    cutlog(&home)
        .args(["--table", &data, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Date,Client,N_Commande"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
}

#[test]
fn test_export_json_range() {
    let home = setup_test_home("export_json_range");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let out = temp_out("export_json_range", "json");

    cutlog(&home)
        .args([
            "--table", &data, "export", "--format", "json", "--file", &out, "--range",
            "2025-09-01:2025-09-10",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"Date\": \"2025-09-01\""));
    assert!(content.contains("\"Heure_Debut\": \"08:00\""));
    assert!(!content.contains("2025-09-15"));
}

#[test]
fn test_export_json_per_client() {
    let home = setup_test_home("export_json_client");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let out = temp_out("export_json_client", "json");

    cutlog(&home)
        .args([
            "--table", &data, "export", "--format", "json", "--file", &out, "--client", "Zara",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Zara"));
    assert!(!content.contains("Benetton"));
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let home = setup_test_home("export_xlsx");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let out = temp_out("export_xlsx", "xlsx");

    cutlog(&home)
        .args(["--table", &data, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_overwrites_with_force() {
    let home = setup_test_home("export_force");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").unwrap();

    cutlog(&home)
        .args([
            "--table", &data, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("stale"));
}

#[test]
fn test_export_rejects_relative_path() {
    let home = setup_test_home("export_relative");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    cutlog(&home)
        .args([
            "--table", &data, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_empty_selection_warns_and_writes_nothing() {
    let home = setup_test_home("export_empty");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let out = temp_out("export_empty", "csv");

    cutlog(&home)
        .args([
            "--table", &data, "export", "--format", "csv", "--file", &out, "--range", "2020",
        ])
        .assert()
        .success();

    assert!(!std::path::Path::new(&out).exists());
}
