use serde::Serialize;
use youbike::prelude::*;

/// Columns that can be clicked to sort, with their headings.
pub const SORTABLE_COLUMNS: [(&str, &str); 4] = [
    (fields::NAME, "站點名稱"),
    (fields::DISTRICT, "行政區"),
    (fields::AVAILABLE_RENT_BIKES, "可借車輛數"),
    (fields::AVAILABLE_RETURN_BIKES, "可還空位數"),
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
pub struct HeaderView {
    pub label: &'static str,
    pub class: &'static str,
    pub href: String,
}

#[derive(Serialize)]
pub struct RowView {
    pub position: usize,
    pub name: String,
    pub district: String,
    pub bikes: String,
    pub bikes_color: &'static str,
    pub docks: String,
    pub address: String,
    pub updated_at: String,
}

impl RowView {
    pub fn new(index: usize, station: &Station) -> Self {
        let updated_at = match station.updated_at_parsed() {
            Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
            None => station.updated_at().to_string(),
        };
        Self {
            position: index + 1,
            name: station.name().to_string(),
            district: station.display(fields::DISTRICT).into_owned(),
            bikes: station.display(fields::AVAILABLE_RENT_BIKES).into_owned(),
            bikes_color: bikes_color(station.number(fields::AVAILABLE_RENT_BIKES)),
            docks: station.display(fields::AVAILABLE_RETURN_BIKES).into_owned(),
            address: station.address().to_string(),
            updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct DistrictView {
    pub name: String,
    pub count: usize,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

impl DistrictView {
    pub fn new(district: &str, stations: &[(usize, &Station)], query: &BoardQuery) -> Self {
        Self {
            name: district.to_string(),
            count: stations.len(),
            headers: SORTABLE_COLUMNS
                .iter()
                .map(|(column, label)| HeaderView {
                    label,
                    class: header_class(query, column),
                    href: sort_link(query, column),
                })
                .collect(),
            rows: stations
                .iter()
                .map(|(index, station)| RowView::new(*index, station))
                .collect(),
        }
    }
}

/// Red when empty, orange when nearly empty.
pub fn bikes_color(bikes: Option<f64>) -> &'static str {
    match bikes {
        Some(bikes) if bikes == 0.0 => "red",
        Some(bikes) if bikes <= 3.0 => "orange",
        _ => "black",
    }
}

fn header_class(query: &BoardQuery, column: &str) -> &'static str {
    if query.sort_by == column {
        query.order.as_str()
    } else {
        ""
    }
}

/// Link sorting by `column`, flipping to descending only when the column is
/// already sorted ascending.
pub fn sort_link(query: &BoardQuery, column: &str) -> String {
    let order = if query.sort_by == column && query.order == SortOrder::Ascending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    format!(
        "?q={}&district={}&sort_by={}&order={order}",
        urlencoding::encode(query.search.trim()),
        urlencoding::encode(query.district.trim()),
        urlencoding::encode(column)
    )
}

#[test]
fn bikes_color_test() {
    assert_eq!(bikes_color(Some(0.0)), "red");
    assert_eq!(bikes_color(Some(1.0)), "orange");
    assert_eq!(bikes_color(Some(3.0)), "orange");
    assert_eq!(bikes_color(Some(4.0)), "black");
    assert_eq!(bikes_color(None), "black");
}

#[test]
fn fractional_bikes_are_not_empty() {
    assert_eq!(bikes_color(Some(0.5)), "orange");

    let station: Station =
        serde_json::from_value(serde_json::json!({ "available_rent_bikes": 0.5 })).unwrap();
    let row = RowView::new(0, &station);
    assert_eq!(row.bikes, "0.5");
    assert_eq!(row.bikes_color, "orange");
}

#[test]
fn sort_link_toggles_current_column() {
    let query = BoardQuery {
        search: "捷運".into(),
        ..Default::default()
    };
    assert_eq!(
        sort_link(&query, fields::NAME),
        "?q=%E6%8D%B7%E9%81%8B&district=&sort_by=sna&order=desc"
    );
    assert_eq!(
        sort_link(&query, fields::DISTRICT),
        "?q=%E6%8D%B7%E9%81%8B&district=&sort_by=sarea&order=asc"
    );

    let descending = BoardQuery {
        order: SortOrder::Descending,
        ..query
    };
    assert_eq!(
        sort_link(&descending, fields::NAME),
        "?q=%E6%8D%B7%E9%81%8B&district=&sort_by=sna&order=asc"
    );
}

#[test]
fn header_marks_active_column() {
    let query = BoardQuery {
        sort_by: fields::AVAILABLE_RENT_BIKES.into(),
        order: SortOrder::Descending,
        ..Default::default()
    };
    assert_eq!(header_class(&query, fields::AVAILABLE_RENT_BIKES), "desc");
    assert_eq!(header_class(&query, fields::NAME), "");
}

#[test]
fn row_numbers_start_at_one() {
    let station: Station = serde_json::from_value(serde_json::json!({
        "sna": "A",
        "sarea": "X",
        "available_rent_bikes": 0,
        "mday": "20240501123456",
    }))
    .unwrap();
    let row = RowView::new(0, &station);
    assert_eq!(row.position, 1);
    assert_eq!(row.bikes_color, "red");
    assert_eq!(row.updated_at, "2024-05-01 12:34:56");
}
