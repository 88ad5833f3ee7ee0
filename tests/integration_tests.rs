use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cutlog, init_with_data, setup_test_home, test_data_file};

#[test]
fn test_init_creates_table_with_canonical_header() {
    let home = setup_test_home("init_creates_table");
    let data = test_data_file(&home);

    cutlog(&home)
        .args(["--table", &data, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&data).expect("read table");
    assert!(content.starts_with(
        "Date,Client,N_Commande,Tissu,Code_Rouleau,Longueur_Matelas,\
         Nombre_Plis,Heure_Debut,Heure_Fin,Duree_Minutes,Nom_Operateur,Matricule"
    ));
}

#[test]
fn test_init_is_idempotent() {
    let home = setup_test_home("init_idempotent");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    let before = fs::read_to_string(&data).expect("read table");

    cutlog(&home)
        .args(["--table", &data, "init"])
        .assert()
        .success();

    let after = fs::read_to_string(&data).expect("read table");
    assert_eq!(before, after, "re-init must not touch an existing table");
}

#[test]
fn test_add_echoes_computed_duration() {
    let home = setup_test_home("add_echoes_duration");
    let data = test_data_file(&home);

    cutlog(&home)
        .args(["--table", &data, "init"])
        .assert()
        .success();

    cutlog(&home)
        .args([
            "--table", &data, "add", "2025-09-01",
            "--client", "Zara",
            "--order", "CMD-1",
            "--fabric", "Coton",
            "--roll", "R-1",
            "--length", "10",
            "--plies", "4",
            "--start", "08:00",
            "--end", "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("60 min"));
}

#[test]
fn test_add_wraps_past_midnight() {
    let home = setup_test_home("add_wraps_midnight");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    // second dataset row runs 22:00 -> 02:00
    cutlog(&home)
        .args(["--table", &data, "list"])
        .assert()
        .success()
        .stdout(contains("240"));
}

#[test]
fn test_add_rejects_malformed_time_without_writing() {
    let home = setup_test_home("add_rejects_bad_time");
    let data = test_data_file(&home);

    cutlog(&home)
        .args(["--table", &data, "init"])
        .assert()
        .success();

    cutlog(&home)
        .args([
            "--table", &data, "add", "2025-09-01",
            "--client", "Zara",
            "--order", "CMD-1",
            "--fabric", "Coton",
            "--roll", "R-1",
            "--length", "10",
            "--plies", "4",
            "--start", "8h00",
            "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    // no partial state was written
    let content = fs::read_to_string(&data).expect("read table");
    assert_eq!(content.lines().count(), 1, "only the header row expected");
}

#[test]
fn test_add_rejects_malformed_date() {
    let home = setup_test_home("add_rejects_bad_date");
    let data = test_data_file(&home);

    cutlog(&home)
        .args([
            "--table", &data, "add", "01/09/2025",
            "--client", "Zara",
            "--order", "CMD-1",
            "--fabric", "Coton",
            "--roll", "R-1",
            "--length", "10",
            "--plies", "4",
            "--start", "08:00",
            "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_all_entries() {
    let home = setup_test_home("list_all");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    cutlog(&home)
        .args(["--table", &data, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Zara"))
        .stdout(contains("Benetton"));
}

#[test]
fn test_list_filtered_by_client() {
    let home = setup_test_home("list_by_client");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    cutlog(&home)
        .args(["--table", &data, "list", "--client", "Zara"])
        .assert()
        .success()
        .stdout(contains("Zara"))
        .stdout(contains("Benetton").not());
}

#[test]
fn test_list_filtered_by_range() {
    let home = setup_test_home("list_by_range");
    let data = test_data_file(&home);
    init_with_data(&home, &data);

    cutlog(&home)
        .args(["--table", &data, "list", "--range", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15").not());
}

#[test]
fn test_list_on_missing_file_reports_no_entries() {
    let home = setup_test_home("list_missing_file");
    let data = test_data_file(&home);

    cutlog(&home)
        .args(["--table", &data, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn test_add_grows_client_list() {
    let home = setup_test_home("add_grows_clients");
    let data = test_data_file(&home);

    cutlog(&home)
        .args(["--table", &data, "init"])
        .assert()
        .success();

    cutlog(&home)
        .args([
            "--table", &data, "add", "2025-09-01",
            "--client", "Kiabi",
            "--order", "CMD-9",
            "--fabric", "Coton",
            "--roll", "R-9",
            "--length", "5",
            "--plies", "2",
            "--start", "10:00",
            "--end", "10:30",
        ])
        .assert()
        .success()
        .stdout(contains("New client recorded: Kiabi"));

    cutlog(&home)
        .args(["--table", &data, "clients"])
        .assert()
        .success()
        .stdout(contains("Kiabi"))
        .stdout(contains("Decathlon"));
}

#[test]
fn test_clients_add_is_deduplicated() {
    let home = setup_test_home("clients_dedup");
    let data = test_data_file(&home);

    cutlog(&home)
        .args(["--table", &data, "clients", "--add", "Zara"])
        .assert()
        .success()
        .stdout(contains("already known"));
}
