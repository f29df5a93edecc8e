use std::io::Write;
use std::time::Duration;

use kiwi_estimator::gate::{self, GateOutcome};
use kiwi_estimator::settings::{SettingsError, SettingsLoader};
use tempfile::NamedTempFile;

fn secrets_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write secrets");
    file
}

#[test]
fn loads_password_from_secrets_file() {
    let file = secrets_file("[auth]\npassword = \"orchard\"\n");

    let settings = SettingsLoader::new()
        .file(file.path(), true)
        .load()
        .expect("Failed to load settings");

    assert_eq!(gate::check(&settings.credential, "orchard"), GateOutcome::Valid);
    assert_eq!(gate::check(&settings.credential, "Orchard"), GateOutcome::Invalid);
}

#[test]
fn applies_defaults_for_optional_sections() {
    let file = secrets_file("[auth]\npassword = \"orchard\"\n");

    let settings = SettingsLoader::new().file(file.path(), true).load().unwrap();

    assert_eq!(settings.session_ttl, Duration::from_secs(3600));
    assert_eq!(settings.currency_symbol, "R");
}

#[test]
fn reads_session_and_display_sections() {
    let file = secrets_file(
        "[auth]\npassword = \"orchard\"\n\n\
         [session]\nttl_secs = 120\n\n\
         [display]\ncurrency_symbol = \"NZ$\"\n",
    );

    let settings = SettingsLoader::new().file(file.path(), true).load().unwrap();

    assert_eq!(settings.session_ttl, Duration::from_secs(120));
    assert_eq!(settings.currency_symbol, "NZ$");
}

#[test]
fn missing_password_is_fatal() {
    let file = secrets_file("[display]\ncurrency_symbol = \"R\"\n");

    let err = SettingsLoader::new().file(file.path(), true).load().unwrap_err();

    assert!(matches!(err, SettingsError::MissingConfiguration));
}

#[test]
fn empty_password_is_treated_as_missing() {
    let file = secrets_file("[auth]\npassword = \"\"\n");

    let err = SettingsLoader::new().file(file.path(), true).load().unwrap_err();

    assert!(matches!(err, SettingsError::MissingConfiguration));
}

#[test]
fn no_sources_at_all_is_fatal() {
    let err = SettingsLoader::new().load().unwrap_err();
    assert!(matches!(err, SettingsError::MissingConfiguration));
}

#[test]
fn optional_file_may_be_absent() {
    let dir = tempfile::tempdir().unwrap();
    let present = secrets_file("[auth]\npassword = \"orchard\"\n");

    let settings = SettingsLoader::new()
        .file(dir.path().join("secrets.toml"), false)
        .file(present.path(), true)
        .load()
        .unwrap();

    assert_eq!(gate::check(&settings.credential, "orchard"), GateOutcome::Valid);
}

#[test]
fn required_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();

    let err = SettingsLoader::new()
        .file(dir.path().join("missing.toml"), true)
        .load()
        .unwrap_err();

    assert!(matches!(err, SettingsError::Source(_)));
}

#[test]
fn later_files_override_earlier_ones() {
    let base = secrets_file("[auth]\npassword = \"old\"\n");
    let local = secrets_file("[auth]\npassword = \"new\"\n");

    let settings = SettingsLoader::new()
        .file(base.path(), true)
        .file(local.path(), true)
        .load()
        .unwrap();

    assert_eq!(gate::check(&settings.credential, "new"), GateOutcome::Valid);
    assert_eq!(gate::check(&settings.credential, "old"), GateOutcome::Invalid);
}

#[test]
fn environment_overrides_files() {
    let file = secrets_file("[auth]\npassword = \"from-file\"\n");
    std::env::set_var("KIWI_SETTINGS_SPEC_AUTH__PASSWORD", "from-env");

    let settings = SettingsLoader::new()
        .file(file.path(), true)
        .env_prefix("KIWI_SETTINGS_SPEC")
        .load()
        .unwrap();

    std::env::remove_var("KIWI_SETTINGS_SPEC_AUTH__PASSWORD");
    assert_eq!(gate::check(&settings.credential, "from-env"), GateOutcome::Valid);
}

#[test]
fn environment_password_is_kept_verbatim() {
    let cases = [
        ("KIWI_VERBATIM_A", "007"),
        ("KIWI_VERBATIM_B", "1.50"),
        ("KIWI_VERBATIM_C", "1e3"),
        ("KIWI_VERBATIM_D", "TRUE"),
    ];

    for (prefix, secret) in cases {
        let var = format!("{}_AUTH__PASSWORD", prefix);
        std::env::set_var(&var, secret);

        let settings = SettingsLoader::new().env_prefix(prefix).load();

        std::env::remove_var(&var);
        let settings = settings.expect("Failed to load settings");
        assert_eq!(
            gate::check(&settings.credential, secret),
            GateOutcome::Valid,
            "password {:?} was altered",
            secret
        );
    }
}

#[test]
fn environment_session_ttl_is_read_as_a_number() {
    std::env::set_var("KIWI_TTL_SPEC_AUTH__PASSWORD", "orchard");
    std::env::set_var("KIWI_TTL_SPEC_SESSION__TTL_SECS", "90");

    let settings = SettingsLoader::new().env_prefix("KIWI_TTL_SPEC").load();

    std::env::remove_var("KIWI_TTL_SPEC_AUTH__PASSWORD");
    std::env::remove_var("KIWI_TTL_SPEC_SESSION__TTL_SECS");
    assert_eq!(settings.unwrap().session_ttl, Duration::from_secs(90));
}
