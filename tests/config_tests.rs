use steve_bot::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: [&str; 6] = [
    "TELEGRAM_BOT_TOKEN",
    "DATABASE_URL",
    "HTTP_PORT",
    "BOT_NAME",
    "FUN_FACTS_PATH",
    "GREETING_UTC_OFFSET_HOURS",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("BOT_NAME", "Stevie");
    env::set_var("FUN_FACTS_PATH", "/srv/facts.txt");
    env::set_var("GREETING_UTC_OFFSET_HOURS", "-5");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.bot_name, "Stevie");
    assert_eq!(config.fun_facts_path, PathBuf::from("/srv/facts.txt"));
    assert_eq!(config.greeting_utc_offset_hours, -5);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Only set required token, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/steve.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.bot_name, "Steve");
    assert_eq!(config.fun_facts_path, PathBuf::from("fun_facts.txt"));
    assert_eq!(config.greeting_utc_offset_hours, 8);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_port_edge_cases() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    env::set_var("HTTP_PORT", "0");
    assert_eq!(Config::from_env().unwrap().http_port, 0);

    env::set_var("HTTP_PORT", "65535");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    env::set_var("HTTP_PORT", "-1");
    assert!(Config::from_env().is_err());

    env::set_var("HTTP_PORT", "65536");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_greeting_offset_range() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    for valid in ["-12", "0", " 8 ", "14"] {
        env::set_var("GREETING_UTC_OFFSET_HOURS", valid);
        assert!(Config::from_env().is_ok(), "offset {valid:?} should be accepted");
    }

    for invalid in ["-13", "15", "eight", "5.5"] {
        env::set_var("GREETING_UTC_OFFSET_HOURS", invalid);
        let error_msg = Config::from_env().unwrap_err().to_string();
        assert!(error_msg.contains("Invalid GREETING_UTC_OFFSET_HOURS"), "offset {invalid:?}");
    }

    clear_env();
}

#[test]
fn test_config_empty_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Test empty token (should fail)
    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    // Blank optional values fall back to defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("DATABASE_URL", "");
    env::set_var("BOT_NAME", "  ");
    env::set_var("FUN_FACTS_PATH", "");
    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/steve.db");
    assert_eq!(config.bot_name, "Steve");
    assert_eq!(config.fun_facts_path, PathBuf::from("fun_facts.txt"));

    clear_env();
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "  token_with_spaces  ");
    env::set_var("DATABASE_URL", "  sqlite:spaced.db  ");
    env::set_var("HTTP_PORT", "  3000  ");
    env::set_var("BOT_NAME", "  Steve  ");

    let config = Config::from_env().unwrap();

    // Token and URL are kept as-is
    assert_eq!(config.telegram_bot_token, "  token_with_spaces  ");
    assert_eq!(config.database_url, "  sqlite:spaced.db  ");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.bot_name, "Steve");

    clear_env();
}
