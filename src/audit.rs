use serde_json::Value;

/// Record a user action on the `audit` tracing target.
pub fn log_audit(user_id: Option<i32>, action: &str, resource: Option<&str>, metadata: Option<Value>) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "audit",
        user_id = ?user_id,
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata,
        "audit"
    );
}
