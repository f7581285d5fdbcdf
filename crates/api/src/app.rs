use crate::handlers::health::health_check;
use crate::handlers::ledger::{
    account_transactions::account_transactions, book_advisory::book_advisory,
    check_balance::check_balance, create_account::create_account, delete_account::delete_account,
    delete_advisory::delete_advisory, delete_investment::delete_investment, deposit::deposit,
    get_accounts::get_accounts, login::login, logout::logout, register::register,
    reschedule_advisory::reschedule_advisory, to_invest::to_invest, transfer::transfer,
    update_account::update_account, update_investment::update_investment,
    view_advisories::view_advisories, view_investments::view_investments, withdraw::withdraw,
};
use crate::handlers::{advisory, invest};
use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use moneta_core::{AppState, SecurityConfig};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Router for the user-facing ledger service.
///
/// The rate limiter and the HTTPS redirect only apply here; the desk
/// services sit on the internal network and are never exposed directly.
pub fn ledger_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    // rate limiting configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    // public routes (no authentication)
    let public_router = ledger_public_routes(metric_handle);

    // protected routes (require JWT authentication)
    let protected_router = ledger_secured_routes(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(middleware::from_fn(https_redirect_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // the rate limiter keys on the peer address; test clients have none
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn ledger_public_routes(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/check-balance", post(check_balance))
        .route("/health", get(health_check))
        .route("/metrics", get(move || async move { metric_handle.render() }))
}

fn ledger_secured_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/accounts", post(create_account).get(get_accounts))
        .route(
            "/accounts/{account_id}",
            put(update_account).delete(delete_account),
        )
        .route("/transactions/deposit", post(deposit))
        .route("/transactions/withdraw", post(withdraw))
        .route("/transactions/transfer", post(transfer))
        .route("/transactions/{account_id}", get(account_transactions))
        .route("/to-invest", post(to_invest))
        .route("/view-investments", get(view_investments))
        .route("/update-investment/{investment_id}", put(update_investment))
        .route(
            "/delete-investment/{investment_id}",
            delete(delete_investment),
        )
        .route("/book-advisory", post(book_advisory))
        .route("/view-advisories", get(view_advisories))
        .route("/reschedule-advisory/{session_id}", put(reschedule_advisory))
        .route("/delete-advisory/{session_id}", delete(delete_advisory))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

/// Router for the investment desk service.
pub fn invest_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    Router::new()
        .route(
            "/investments",
            post(invest::create_investment::create_investment)
                .get(invest::list_investments::list_investments),
        )
        .route(
            "/investments/{investment_id}",
            put(invest::update_investment::update_investment)
                .delete(invest::delete_investment::delete_investment),
        )
        .route("/health", get(health_check))
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer)
        .with_state(state)
}

/// Router for the advisory desk service.
pub fn advisory_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    Router::new()
        .route(
            "/sessions",
            post(advisory::create_session::create_session)
                .get(advisory::list_sessions::list_sessions),
        )
        .route(
            "/sessions/{session_id}",
            put(advisory::reschedule_session::reschedule_session)
                .delete(advisory::cancel_session::cancel_session),
        )
        .route(
            "/advisors",
            post(advisory::create_advisor::create_advisor)
                .get(advisory::list_advisors::list_advisors),
        )
        .route(
            "/advisors/{advisor_id}",
            delete(advisory::delete_advisor::delete_advisor),
        )
        .route("/health", get(health_check))
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer)
        .with_state(state)
}

async fn https_redirect_middleware(
    req: axum::extract::Request,
    next: middleware::Next,
) -> Result<axum::response::Response, (axum::http::StatusCode, String)> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let uri = req.uri();
            let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return Ok(axum::response::Redirect::permanent(&redirect_url).into_response());
        }
    }

    Ok(next.run(req).await)
}
