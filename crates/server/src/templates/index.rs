//! The station board page.

use serde::Serialize;
use youbike::prelude::*;

use super::{district::DistrictView, map::MapView, search_form::SearchFormView};
use crate::tmpl::TemplateContext;

pub const TITLE: &str = "YouBike 2.0 查詢系統";

#[derive(Serialize)]
pub struct IndexView {
    pub form: SearchFormView,
    pub groups: Vec<DistrictView>,
    pub map: MapView,
}

impl IndexView {
    pub fn new(board: &Board, query: &BoardQuery) -> Self {
        Self {
            form: SearchFormView::new(board.districts(), query),
            groups: board
                .groups()
                .iter()
                .map(|(district, stations)| DistrictView::new(district, stations, query))
                .collect(),
            map: MapView::new(board),
        }
    }

    pub fn page(self) -> TemplateContext<'static, Self> {
        TemplateContext {
            template: "index",
            title: TITLE.into(),
            body: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmpl::handlebars_init;
    use serde_json::json;

    const NO_RESULTS: &str = "🔍 沒有找到符合條件的站點。";

    fn render(stations: serde_json::Value, query: &BoardQuery) -> String {
        let stations: Vec<Station> = serde_json::from_value(stations).unwrap();
        let board = Board::build(stations, query);
        let hbs = handlebars_init().unwrap();
        IndexView::new(&board, query).page().to_html(&hbs).unwrap()
    }

    fn sample() -> serde_json::Value {
        json!([
            { "sna": "A", "sarea": "X", "available_rent_bikes": 5, "latitude": 25.01, "longitude": 121.5 },
            { "sna": "B", "sarea": "Y", "available_rent_bikes": 0 },
            { "sna": "C", "sarea": "X", "available_rent_bikes": 2 },
        ])
    }

    #[test]
    fn page_has_a_table_per_district() {
        let html = render(sample(), &BoardQuery::new());
        assert!(html.contains("<title>YouBike 2.0 查詢系統</title>"));
        assert!(html.contains("<h2>X (共 2 站)</h2>"));
        assert!(html.contains("<h2>Y (共 1 站)</h2>"));
        assert!(html.find("<h2>X").unwrap() < html.find("<h2>Y").unwrap());
        assert_eq!(html.matches("<table>").count(), 2);
        assert!(!html.contains(NO_RESULTS));
    }

    #[test]
    fn rows_are_numbered_per_district() {
        let html = render(sample(), &BoardQuery::new());
        let second_table = &html[html.find("<h2>Y").unwrap()..];
        assert!(second_table.contains("<td>1</td>"));
        assert!(!second_table.contains("<td>2</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("color: red; font-weight: bold;\">0</td>"));
        assert!(html.contains("color: orange; font-weight: bold;\">2</td>"));
        assert!(html.contains("color: black; font-weight: bold;\">5</td>"));
    }

    #[test]
    fn half_a_bike_is_orange() {
        let html = render(
            json!([{ "sna": "A", "sarea": "X", "available_rent_bikes": 0.5 }]),
            &BoardQuery::new(),
        );
        assert!(html.contains("color: orange; font-weight: bold;\">0.5</td>"));
    }

    #[test]
    fn empty_board_says_so() {
        let html = render(json!([]), &BoardQuery::new());
        assert!(html.contains(NO_RESULTS));
        assert!(!html.contains("<table>"));
        assert!(html.contains("const stations = [];"));
        assert!(html.contains("setView([25.033, 121.5654], 13)"));
    }

    #[test]
    fn station_text_is_escaped() {
        let html = render(
            json!([{ "sna": "<script>alert(1)</script>", "sarea": "X&Y" }]),
            &BoardQuery::new(),
        );
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("X&amp;Y"));
    }

    #[test]
    fn form_keeps_the_query() {
        let query = BoardQuery {
            search: "\"quoted\"".into(),
            district: "Y".into(),
            sort_by: fields::AVAILABLE_RENT_BIKES.into(),
            order: SortOrder::Descending,
        };
        let html = render(sample(), &query);
        assert!(html.contains("value=\"&quot;quoted&quot;\""));
        assert!(html.contains("<option value=\"Y\" selected>Y</option>"));
        assert!(html.contains("<option value=\"X\">X</option>"));
        assert!(html.contains("name=\"order\" value=\"desc\""));
        assert!(html.contains("<th class=\"desc\">"));
    }

    #[test]
    fn map_is_centred_on_markers() {
        let html = render(sample(), &BoardQuery::new());
        assert!(html.contains("setView([25.01, 121.5], 13)"));
        assert!(html.contains("\"sna\":\"A\""));
        assert!(!html.contains("\"sna\":\"B\""));
    }
}
