use crate::{state::AppState, templates::index::IndexView, upstream};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use std::{collections::HashMap, sync::Arc};
use tracing::debug;
use youbike::prelude::*;

pub async fn index(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, StatusCode> {
    let query = board_query(&params);
    let stations = upstream::fetch(&state.client, &state.config.feed_url).await;
    let board = Board::build(stations, &query);
    debug!(
        "Rendering {} stations in {} districts",
        board.stations().len(),
        board.districts().len()
    );
    IndexView::new(&board, &query).page().render(&state.hbs)
}

/// Reads `q`, `district`, `sort_by`, `order` and `clear`.
fn board_query(params: &HashMap<String, String>) -> BoardQuery {
    let mut query = BoardQuery::new();
    if let Some(search) = params.get("q") {
        query.search = search.trim().to_string();
    }
    if let Some(district) = params.get("district") {
        query.district = district.trim().to_string();
    }
    if let Some(sort_by) = params.get("sort_by").filter(|value| !value.trim().is_empty()) {
        query.sort_by = sort_by.trim().to_string();
    }
    if let Some(order) = params.get("order") {
        query.order = SortOrder::parse(order);
    }
    if params.contains_key("clear") {
        query = query.cleared();
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api, config::Config, testing};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    async fn spawn_board(feed_url: String) -> String {
        let config = Config {
            port: 0,
            feed_url,
        };
        let state = Arc::new(AppState::new(config).unwrap());
        let addr = testing::serve(api::router(state)).await;
        format!("http://{addr}")
    }

    #[test]
    fn defaults() {
        assert_eq!(board_query(&HashMap::new()), BoardQuery::default());
    }

    #[test]
    fn reads_params() {
        let query = board_query(&params(&[
            ("q", "  捷運 "),
            ("district", "大安區"),
            ("sort_by", "available_rent_bikes"),
            ("order", "desc"),
        ]));
        assert_eq!(query.search, "捷運");
        assert_eq!(query.district, "大安區");
        assert_eq!(query.sort_by, "available_rent_bikes");
        assert_eq!(query.order, SortOrder::Descending);
    }

    #[test]
    fn blank_sort_falls_back_to_name() {
        let query = board_query(&params(&[("sort_by", " "), ("order", "sideways")]));
        assert_eq!(query.sort_by, "sna");
        assert_eq!(query.order, SortOrder::Ascending);
    }

    #[test]
    fn clear_resets_filters() {
        let query = board_query(&params(&[
            ("q", "捷運"),
            ("district", "大安區"),
            ("order", "desc"),
            ("clear", "清除"),
        ]));
        assert!(query.search.is_empty());
        assert!(query.district.is_empty());
        assert_eq!(query.order, SortOrder::Descending);
    }

    #[tokio::test]
    async fn index_filters_by_district() {
        let upstream = testing::spawn_upstream().await;
        let base = spawn_board(upstream.url("/feed")).await;
        let url = format!("{base}/?district={}", urlencoding::encode("信義區"));
        let html = reqwest::get(url).await.unwrap().text().await.unwrap();

        assert!(html.contains("<h2>信義區 (共 2 站)</h2>"));
        assert!(html.contains("YouBike2.0_信義廣場(台北101)"));
        assert!(!html.contains("<h2>大安區"));
        assert!(html.contains("<option value=\"大安區\">大安區</option>"));
        assert!(html.contains("<option value=\"信義區\" selected>信義區</option>"));
    }

    #[tokio::test]
    async fn index_groups_unknown_district() {
        let upstream = testing::spawn_upstream().await;
        let base = spawn_board(upstream.url("/feed")).await;
        let html = reqwest::get(format!("{base}/?q=keelung"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(html.contains("<h2>未知區 (共 1 站)</h2>"));
    }

    #[tokio::test]
    async fn index_with_broken_upstream() {
        let upstream = testing::spawn_upstream().await;
        let base = spawn_board(upstream.url("/broken")).await;
        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("沒有找到符合條件的站點"));
        assert!(!html.contains("<h2>"));
        assert!(!html.contains("<option value=\"大安區\""));
    }

    #[tokio::test]
    async fn health_does_not_touch_upstream() {
        let base = spawn_board("http://127.0.0.1:9/feed".into()).await;
        let body = reqwest::get(format!("{base}/healthz"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }
}
