use super::validation::validate_timezone;
use super::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    path
}

/// Run `f` with `XDG_CONFIG_HOME` pointing at `dir`, restoring it afterwards.
fn with_config_home<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", dir);
    }

    let result = f();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
    result
}

#[test]
fn test_config_toml_parsing() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"
latitude = 34.1
longitude = -118.2
low_temp = 3300
high_temp = 6000
timezone = "America/Los_Angeles"
time_format = "%I:%M %p"
"#,
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(34.1));
    assert_eq!(config.longitude, Some(-118.2));
    assert_eq!(config.low_temp, Some(3300.0));
    assert_eq!(config.high_temp, Some(6000.0));
    assert_eq!(config.timezone.as_deref(), Some("America/Los_Angeles"));
    assert_eq!(config.time_format(), "%I:%M %p");
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "");

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.low_temperature(), Temperature::DEFAULT_LOW);
    assert_eq!(config.high_temperature(), Temperature::DEFAULT_HIGH);
    assert_eq!(config.time_format(), "%H:%M:%S");
}

#[test]
fn test_load_from_custom_dir() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "latitude = 51.5\n");

    let (config, source) = Config::load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(51.5));
    assert_eq!(source, Some(path));
}

#[test]
fn test_missing_file_in_custom_dir_is_error() {
    let temp_dir = tempdir().unwrap();
    let err = Config::load(Some(temp_dir.path())).unwrap_err();
    assert!(err.to_string().contains("not found"), "got: {err}");
}

#[test]
#[serial]
fn test_missing_default_file_gives_defaults() {
    let temp_dir = tempdir().unwrap();
    let (config, source) = with_config_home(temp_dir.path(), || Config::load(None)).unwrap();
    assert_eq!(config, Config::default());
    assert!(source.is_none());
}

#[test]
#[serial]
fn test_default_location_is_read() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().join(CONFIG_DIR_NAME);
    fs::create_dir_all(&dir).unwrap();
    write_config(&dir, "high_temp = 5500\n");

    let (config, source) = with_config_home(temp_dir.path(), || Config::load(None)).unwrap();
    assert_eq!(config.high_temp, Some(5500.0));
    assert_eq!(source, Some(dir.join(CONFIG_FILE_NAME)));
}

#[test]
fn test_parse_error_names_the_file() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "latitude = \"north\"\n");

    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"), "got: {err}");
}

#[test]
fn test_invalid_file_value_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "latitude = 123.0\n");

    let err = load_from_path(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid configuration"), "got: {message}");
    assert!(message.contains("latitude must be between"), "got: {message}");
}

#[test]
fn test_config_validation_coordinates() {
    for (lat, lon, ok) in [
        (0.0, 0.0, true),
        (90.0, 180.0, true),
        (-90.0, -180.0, true),
        (90.5, 0.0, false),
        (-91.0, 0.0, false),
        (0.0, 180.1, false),
        (0.0, -200.0, false),
        (f64::NAN, 0.0, false),
    ] {
        let config = Config {
            latitude: Some(lat),
            longitude: Some(lon),
            ..Config::default()
        };
        assert_eq!(validate_config(&config).is_ok(), ok, "lat {lat}, lon {lon}");
    }
}

#[test]
fn test_fractional_temperatures_are_read() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(temp_dir.path(), "low_temp = 3300.5\nhigh_temp = 5800\n");

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.low_temperature(), Temperature(3300.5));
    assert_eq!(config.high_temperature(), Temperature(5800.0));
}

#[test]
fn test_config_validation_extreme_temperature_values() {
    for (temp, ok) in [
        (MINIMUM_TEMP, true),
        (1000.0, true),
        (2750.5, true),
        (40000.0, true),
        (-1.0, false),
        (f64::NAN, false),
        (f64::INFINITY, false),
    ] {
        let low = Config {
            low_temp: Some(temp),
            ..Config::default()
        };
        let high = Config {
            high_temp: Some(temp),
            ..Config::default()
        };
        assert_eq!(validate_config(&low).is_ok(), ok, "low_temp {temp}");
        assert_eq!(validate_config(&high).is_ok(), ok, "high_temp {temp}");
    }

    let err = validate_config(&Config {
        high_temp: Some(-300.0),
        ..Config::default()
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("high_temp (-300)"), "got: {err}");
}

#[test]
fn test_inverted_temperatures_are_accepted() {
    let config = Config {
        low_temp: Some(6500.0),
        high_temp: Some(3000.0),
        ..Config::default()
    };
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_config_validation_timezone() {
    assert!(validate_timezone("Europe/Berlin").is_ok());
    assert!(validate_timezone("UTC").is_ok());
    assert!(validate_timezone("Mars/Olympus_Mons").is_err());
    assert!(validate_timezone("").is_err());
}

#[test]
fn test_config_validation_time_format() {
    assert!(validate_time_format("%H:%M:%S").is_ok());
    assert!(validate_time_format("%I:%M %p").is_ok());
    assert!(validate_time_format("%Y-%m-%d %H:%M").is_ok());
    assert!(validate_time_format("").is_err());
    assert!(validate_time_format("%J").is_err());
    assert!(validate_time_format("%").is_err());
}

#[test]
fn test_with_overrides_prefers_set_fields() {
    let file = Config {
        latitude: Some(10.0),
        longitude: Some(20.0),
        low_temp: Some(3000.0),
        timezone: Some("Europe/Berlin".to_string()),
        ..Config::default()
    };
    let flags = Config {
        latitude: Some(-33.9),
        high_temp: Some(5000.0),
        timezone: Some("Australia/Sydney".to_string()),
        ..Config::default()
    };

    let merged = file.with_overrides(&flags);
    assert_eq!(merged.latitude, Some(-33.9));
    assert_eq!(merged.longitude, Some(20.0));
    assert_eq!(merged.low_temp, Some(3000.0));
    assert_eq!(merged.high_temp, Some(5000.0));
    assert_eq!(merged.timezone.as_deref(), Some("Australia/Sydney"));
    assert_eq!(merged.time_format, None);
}

#[test]
fn test_with_empty_overrides_is_identity() {
    let file = Config {
        latitude: Some(1.0),
        time_format: Some("%H:%M".to_string()),
        ..Config::default()
    };
    assert_eq!(file.clone().with_overrides(&Config::default()), file);
}

#[test]
fn test_display_path_shortens_home() {
    if let Some(home) = dirs::home_dir() {
        let path = home.join(".config").join("solar").join("solar.toml");
        assert_eq!(display_path(&path), "~/.config/solar/solar.toml");
    }
    assert_eq!(display_path(Path::new("/etc/solar.toml")), "/etc/solar.toml");
}
