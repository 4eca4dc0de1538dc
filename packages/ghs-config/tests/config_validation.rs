use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use ghs_config::Error;

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_value() -> Value {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.")
}

fn render(value: &Value) -> String {
	toml::to_string(value).expect("Failed to render sample config.")
}

fn set(value: &mut Value, path: &[&str], leaf: Value) {
	let mut cursor = value;

	for key in &path[..path.len() - 1] {
		cursor = cursor
			.as_table_mut()
			.and_then(|table| table.get_mut(*key))
			.expect("Sample config must contain the requested table.");
	}

	cursor
		.as_table_mut()
		.expect("Sample config leaf parent must be a table.")
		.insert(path[path.len() - 1].to_string(), leaf);
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("ghs_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn expect_validation_error(payload: String, needle: &str) {
	let path = write_temp_config(payload);
	let result = ghs_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	match result {
		Err(Error::Validation { message }) => {
			assert!(message.contains(needle), "unexpected message: {message}")
		},
		other => panic!("expected validation error, got {other:?}"),
	}
}

#[test]
fn loads_sample_config() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let cfg = ghs_config::load(&path).expect("Sample config must load.");

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.storage.postgres.table, "issue_comments");
	assert_eq!(cfg.providers.embedding.dimensions, 1536);
}

#[test]
fn normalizes_trailing_slash_in_issue_url_base() {
	let mut value = sample_value();

	set(
		&mut value,
		&["service", "issue_url_base"],
		Value::String("https://github.com/ClickHouse/ClickHouse/issues/".to_string()),
	);

	let path = write_temp_config(render(&value));
	let cfg = ghs_config::load(&path).expect("Config must load.");

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert_eq!(cfg.service.issue_url_base, "https://github.com/ClickHouse/ClickHouse/issues");
}

#[test]
fn rejects_empty_http_bind() {
	let mut value = sample_value();

	set(&mut value, &["service", "http_bind"], Value::String(" ".to_string()));

	expect_validation_error(render(&value), "service.http_bind");
}

#[test]
fn rejects_zero_pool_max_conns() {
	let mut value = sample_value();

	set(&mut value, &["storage", "postgres", "pool_max_conns"], Value::Integer(0));

	expect_validation_error(render(&value), "pool_max_conns");
}

#[test]
fn rejects_non_identifier_table() {
	let mut value = sample_value();

	set(
		&mut value,
		&["storage", "postgres", "table"],
		Value::String("issue_comments; DROP TABLE issue_comments".to_string()),
	);

	expect_validation_error(render(&value), "storage.postgres.table");
}

#[test]
fn rejects_zero_dimensions() {
	let mut value = sample_value();

	set(&mut value, &["providers", "embedding", "dimensions"], Value::Integer(0));
	set(&mut value, &["storage", "postgres", "vector_dim"], Value::Integer(0));

	expect_validation_error(render(&value), "dimensions must be greater than zero");
}

#[test]
fn rejects_dimension_mismatch_with_vector_dim() {
	let mut value = sample_value();

	set(&mut value, &["providers", "embedding", "dimensions"], Value::Integer(1024));

	expect_validation_error(render(&value), "must match storage.postgres.vector_dim");
}

#[test]
fn rejects_empty_api_key() {
	let mut value = sample_value();

	set(&mut value, &["providers", "embedding", "api_key"], Value::String(String::new()));

	expect_validation_error(render(&value), "api_key");
}

#[test]
fn identifier_check_rejects_quoting_and_dots() {
	assert!(ghs_config::is_sql_identifier("issue_comments"));
	assert!(ghs_config::is_sql_identifier("_tmp2"));
	assert!(!ghs_config::is_sql_identifier(""));
	assert!(!ghs_config::is_sql_identifier("2fast"));
	assert!(!ghs_config::is_sql_identifier("public.issue_comments"));
	assert!(!ghs_config::is_sql_identifier("issue\"; --"));
}
