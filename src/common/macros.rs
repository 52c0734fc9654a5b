#[macro_export]
macro_rules! log_err {
    // Usage: log_err!(&pool, "referral credit", params);
    // Fire-and-forget: the row lands in error_logs, the caller never waits.
    ($pool:expr, $context:expr, $params:expr) => {{
        let pool_clone = $pool.clone();
        let location = format!("{}:{}", file!(), line!());
        let context = $context;

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::tokio::spawn(async move {
            let _ = ::sqlx::query(
                r#"
                    INSERT INTO error_logs (location, context, parameters)
                    VALUES ($1, $2, $3)
                    "#,
            )
            .bind(location)
            .bind(context)
            .bind(params_json)
            .execute(&pool_clone)
            .await;
        });
    }};
}
