use super::*;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment.
unsafe fn clear_rafa_env() {
    unsafe {
        std::env::remove_var("RAFA_RAPHAEL_VERSION");
        std::env::remove_var("RAFA_RAPHAEL_SRC");
        std::env::remove_var("RAFA_UID_STRATEGY");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_rafa_env() };

    let cfg = RafaConfig::from_env().unwrap();
    assert_eq!(cfg.raphael_version, "1.3.1");
    assert_eq!(cfg.raphael_src, "raphael-1.3.1.min.js");
    assert!(matches!(cfg.uid, UidStrategy::Timestamp));
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_rafa_env();
        std::env::set_var("RAFA_RAPHAEL_VERSION", "2.1.0");
        std::env::set_var("RAFA_UID_STRATEGY", "sequential");
    }

    let cfg = RafaConfig::from_env().unwrap();
    assert_eq!(cfg.raphael_version, "2.1.0");
    assert_eq!(cfg.raphael_src, "raphael-2.1.0.min.js");
    assert!(matches!(cfg.uid, UidStrategy::Sequential));

    unsafe {
        std::env::set_var("RAFA_RAPHAEL_SRC", "/static/raphael.js");
    }
    let cfg = RafaConfig::from_env().unwrap();
    assert_eq!(cfg.raphael_src, "/static/raphael.js");

    unsafe { clear_rafa_env() };
}

#[test]
fn from_env_unknown_strategy_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_rafa_env();
        std::env::set_var("RAFA_UID_STRATEGY", "dice");
    }

    let err = RafaConfig::from_env().unwrap_err();
    assert!(matches!(err, RafaError::ConfigParse(_)));
    assert!(err.to_string().contains("unknown RAFA_UID_STRATEGY"));

    unsafe { clear_rafa_env() };
}

#[test]
fn from_env_rejects_empty_version() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_rafa_env();
        std::env::set_var("RAFA_RAPHAEL_VERSION", "  ");
    }

    assert!(RafaConfig::from_env().is_err());

    unsafe { clear_rafa_env() };
}

#[test]
fn parse_uid_strategy_accepts_known_names() {
    assert!(matches!(parse_uid_strategy(None).unwrap(), UidStrategy::Timestamp));
    assert!(matches!(parse_uid_strategy(Some("uuid")).unwrap(), UidStrategy::Uuid));
    assert!(matches!(parse_uid_strategy(Some(" sequential ")).unwrap(), UidStrategy::Sequential));
}

#[test]
fn timestamp_uids_have_seconds_and_salt() {
    let uid = UidStrategy::Timestamp.generate(0);
    let (secs, salt) = uid.split_once('_').unwrap();
    assert!(secs.parse::<i64>().unwrap() > 0);
    assert!(salt.parse::<u32>().unwrap() < TIMESTAMP_UID_RANGE);
}

#[test]
fn sequential_uids_use_the_counter() {
    assert_eq!(UidStrategy::Sequential.generate(7), "7");
}

#[test]
fn uuid_uids_are_identifier_safe() {
    let uid = UidStrategy::Uuid.generate(0);
    assert_eq!(uid.len(), 32);
    assert!(uid.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn custom_uids_call_the_generator() {
    let strategy = UidStrategy::Custom(Arc::new(|| "fixed".to_owned()));
    assert_eq!(strategy.generate(3), "fixed");
    assert_eq!(format!("{strategy:?}"), "custom");
}

#[test]
fn include_tag_points_at_the_runtime() {
    let cfg = RafaConfig::default();
    assert_eq!(
        cfg.script_include_tag(),
        "<script type=\"text/javascript\" src=\"raphael-1.3.1.min.js\"></script>"
    );
}

#[test]
fn include_tag_escapes_the_source() {
    let cfg = RafaConfig { raphael_src: "x.js?a=1&b=\"2\"".to_owned(), ..RafaConfig::default() };
    assert_eq!(
        cfg.script_include_tag(),
        "<script type=\"text/javascript\" src=\"x.js?a=1&amp;b=&quot;2&quot;\"></script>"
    );
}
